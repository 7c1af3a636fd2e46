//! Indented tree dump of a parsed script, for trace logging.

use std::fmt::Write;

use crate::ast::{Expr, LiteralKind, Script, Stmt};

const INDENT: &str = "  ";

/// Render `script` as one node per line, children indented under parents.
pub fn dump_script(script: &Script<'_>) -> String {
    let mut out = String::from("program\n");
    for stmt in script.statements() {
        dump_stmt(&mut out, stmt, 1);
    }
    out
}

fn line(out: &mut String, depth: usize, text: std::fmt::Arguments<'_>) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    // Writing into a String cannot fail
    let _ = out.write_fmt(text);
    out.push('\n');
}

fn params(names: &[crate::ast::Ident<'_>]) -> String {
    names.iter().map(|p| p.name).collect::<Vec<_>>().join(", ")
}

fn dump_stmt(out: &mut String, stmt: &Stmt<'_>, depth: usize) {
    match stmt {
        Stmt::Class(class) => {
            line(out, depth, format_args!("class {}", class.name));
            for inner in class.body.stmts {
                dump_stmt(out, inner, depth + 1);
            }
        }
        Stmt::Function(func) => {
            line(out, depth, format_args!("fn {}({})", func.name, params(func.params)));
            for inner in func.body.stmts {
                dump_stmt(out, inner, depth + 1);
            }
        }
        Stmt::Constructor(ctor) => {
            line(out, depth, format_args!("constructor({})", params(ctor.params)));
            for inner in ctor.body.stmts {
                dump_stmt(out, inner, depth + 1);
            }
        }
        Stmt::FieldAssign(assign) => {
            line(out, depth, format_args!("let this.{}", assign.field));
            dump_expr(out, assign.value, depth + 1);
        }
        Stmt::Assign(assign) => {
            line(out, depth, format_args!("let {}", assign.target));
            dump_expr(out, assign.value, depth + 1);
        }
        Stmt::Return(ret) => {
            line(out, depth, format_args!("return"));
            dump_expr(out, ret.value, depth + 1);
        }
    }
}

fn dump_expr(out: &mut String, expr: &Expr<'_>, depth: usize) {
    match expr {
        Expr::Literal(literal) => match literal.kind {
            LiteralKind::Number(text) => line(out, depth, format_args!("number {}", text)),
            LiteralKind::String(text) => line(out, depth, format_args!("string {:?}", text)),
            LiteralKind::Bool(value) => line(out, depth, format_args!("bool {}", value)),
        },
        Expr::Variable(ident) => line(out, depth, format_args!("variable {}", ident)),
        Expr::New(new) => {
            line(out, depth, format_args!("new {}", new.class));
            for arg in new.args {
                dump_expr(out, arg, depth + 1);
            }
        }
        Expr::Call(call) => {
            line(out, depth, format_args!("call {}", call.callee));
            for arg in call.args {
                dump_expr(out, arg, depth + 1);
            }
        }
        Expr::FieldAccess(access) => line(out, depth, format_args!("field {}", access.field)),
        Expr::MethodCall(call) => {
            line(out, depth, format_args!("send {}", call.method));
            dump_expr(out, call.receiver, depth + 1);
            for arg in call.args {
                dump_expr(out, arg, depth + 1);
            }
        }
        Expr::Ternary(ternary) => {
            line(out, depth, format_args!("ternary"));
            dump_expr(out, ternary.condition, depth + 1);
            dump_expr(out, ternary.then_expr, depth + 1);
            dump_expr(out, ternary.else_expr, depth + 1);
        }
        Expr::Paren(paren) => {
            line(out, depth, format_args!("paren"));
            dump_expr(out, paren.expr, depth + 1);
        }
    }
}
