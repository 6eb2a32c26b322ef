mod check;
mod parse;
mod tokens;

pub use check::CheckArgs;
pub use parse::ParseArgs;
pub use tokens::TokensArgs;

use mjs_types::{MjsError, Result};
use std::path::Path;
use tokio::fs;

/// Validate the path and read the file. Both validation failures surface
/// before the core pipeline runs.
pub(crate) async fn read_source(path: &Path) -> Result<String> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("js") {
        return Err(MjsError::invalid_input(format!(
            "{} must be a JavaScript file with a .js extension",
            path.display()
        )));
    }

    if !path.exists() {
        return Err(MjsError::invalid_input(format!(
            "file {} does not exist",
            path.display()
        )));
    }

    fs::read_to_string(path).await.map_err(|e| MjsError::io(e.to_string()))
}
