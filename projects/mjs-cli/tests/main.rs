use mjs_cli::{CheckArgs, ParseArgs, TokensArgs};
use mjs_types::MjsError;
use tempfile::TempDir;

fn write_script(dir: &TempDir, name: &str, source: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, source).unwrap();
    path
}

#[tokio::test]
async fn test_check_rejects_non_js_extension() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "script.txt", "let x = 1;");

    let result = CheckArgs { file: path }.run().await;
    assert!(matches!(result, Err(MjsError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_check_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.js");

    let result = CheckArgs { file: path }.run().await;
    assert!(matches!(result, Err(MjsError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_check_accepts_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "script.js", "// header\nconst x = 1;\n");

    CheckArgs { file: path }.run().await.unwrap();
}

#[tokio::test]
async fn test_parse_renders_tree() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "script.js", "function f(a) { return a; }\n");

    ParseArgs { file: path, json: false, tokens: false }.run().await.unwrap();
}

#[tokio::test]
async fn test_parse_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "script.js", "let greeting = 'hi';\n");

    ParseArgs { file: path, json: true, tokens: true }.run().await.unwrap();
}

#[tokio::test]
async fn test_tokens_dump() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "script.js", "if (a >= 2) { return; }\n");

    TokensArgs { file: path }.run().await.unwrap();
}

#[tokio::test]
async fn test_malformed_source_still_checks() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "script.js", "function { @@@ let = \n");

    CheckArgs { file: path }.run().await.unwrap();
}
