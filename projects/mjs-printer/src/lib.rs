//! Depth-first renderer for the syntax tree.
//!
//! A pure consumer of [`mjs_ast`]: walks the tree keyed on each node's
//! variant and produces an indented listing. Absent optional children
//! (a bare `return`, a missing binary operand) simply render no line.

use mjs_ast::*;

/// Render a whole program into an indented listing.
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    line(&mut out, 0, &format!("{}:", program.kind()));
    for stmt in &program.body {
        render_stmt(&mut out, stmt, 1);
    }
    out
}

/// Render and write to stdout.
pub fn print(program: &Program) {
    print!("{}", render(program));
}

fn pad(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    pad(out, depth);
    out.push_str(text);
    out.push('\n');
}

fn render_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    match stmt {
        Stmt::Function(func) => {
            line(out, depth, &format!("{}: {}", func.kind(), func.name));
            line(out, depth + 1, "Parameters:");
            for param in &func.params {
                match &param.default {
                    Some(default) => {
                        line(out, depth + 2, &format!("{} (default):", param.name));
                        render_expr(out, default, depth + 3);
                    }
                    None => line(out, depth + 2, &param.name),
                }
            }
            line(out, depth + 1, "Body:");
            for stmt in &func.body {
                render_stmt(out, stmt, depth + 2);
            }
        }
        Stmt::If(if_stmt) => {
            line(out, depth, &format!("{}:", if_stmt.kind()));
            line(out, depth + 1, "Condition:");
            if let Some(test) = &if_stmt.test {
                render_expr(out, test, depth + 2);
            }
            line(out, depth + 1, "Body:");
            for stmt in &if_stmt.consequent {
                render_stmt(out, stmt, depth + 2);
            }
        }
        Stmt::Return(ret) => {
            line(out, depth, &format!("{}:", ret.kind()));
            if let Some(argument) = &ret.argument {
                render_expr(out, argument, depth + 1);
            }
        }
        Stmt::Variable(var) => {
            line(out, depth, &format!("{}: {} {}", var.kind(), var.kind, var.name));
            if let Some(value) = &var.value {
                render_expr(out, value, depth + 1);
            }
        }
        Stmt::Comment(comment) => {
            line(out, depth, &format!("{}: {}", comment.kind(), comment.text));
        }
    }
}

fn render_expr(out: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::Binary(binary) => {
            line(out, depth, &format!("{}: {}", binary.kind(), binary.op));
            line(out, depth + 1, "Left:");
            if let Some(left) = &binary.left {
                render_expr(out, left, depth + 2);
            }
            line(out, depth + 1, "Right:");
            if let Some(right) = &binary.right {
                render_expr(out, right, depth + 2);
            }
        }
        Expr::Identifier(ident) => {
            line(out, depth, &format!("{}: {}", ident.kind(), ident.name));
        }
        Expr::String(string) => {
            line(out, depth, &format!("{}: {}", string.kind(), string.value));
        }
        Expr::Number(number) => {
            line(out, depth, &format!("{}: {}", number.kind(), number.value));
        }
    }
}
