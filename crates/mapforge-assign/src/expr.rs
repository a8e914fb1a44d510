//! Expression and statement trees for generated code.
//!
//! Assignment nodes lower into these trees. Rendering to final source text
//! belongs to the template layer; the `Display` impls here produce a
//! Java-like form used for logging and tests.
//!
//! ```
//! use mapforge_assign::Expr;
//!
//! let call = Expr::call(Expr::var("target"), "setName", vec![Expr::var("name")]);
//! assert_eq!(call.to_string(), "target.setName(name)");
//! ```

use std::fmt::{self, Display, Formatter, Write};

use mapforge_core::TypeRef;

/// A value-producing expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Local variable or parameter reference.
    Var(String),
    /// The `null` literal.
    Null,
    /// Opaque text supplied by an upstream fragment builder.
    Raw(String),
    /// Method invocation, optionally on a receiver.
    Call {
        receiver: Option<Box<Expr>>,
        method: String,
        args: Vec<Expr>,
    },
    /// Constructor invocation.
    New { ty: TypeRef, args: Vec<Expr> },
    /// Explicit type cast.
    Cast { ty: TypeRef, expr: Box<Expr> },
    /// `expr != null`
    NotNull(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Expr::Raw(text.into())
    }

    pub fn call(receiver: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: Some(Box::new(receiver)),
            method: method.into(),
            args,
        }
    }

    /// Zero-argument call, the shape of every accessor read.
    pub fn getter(receiver: Expr, method: impl Into<String>) -> Self {
        Self::call(receiver, method, Vec::new())
    }

    pub fn new_instance(ty: TypeRef, args: Vec<Expr>) -> Self {
        Expr::New { ty, args }
    }

    pub fn cast(ty: TypeRef, expr: Expr) -> Self {
        Expr::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn not_null(expr: Expr) -> Self {
        Expr::NotNull(Box::new(expr))
    }

    /// Count calls to `method` anywhere in this expression.
    pub fn count_calls(&self, method: &str) -> usize {
        match self {
            Expr::Var(_) | Expr::Null | Expr::Raw(_) => 0,
            Expr::Call {
                receiver,
                method: m,
                args,
            } => {
                let own = usize::from(m == method);
                let recv = receiver.as_ref().map_or(0, |r| r.count_calls(method));
                own + recv + args.iter().map(|a| a.count_calls(method)).sum::<usize>()
            }
            Expr::New { args, .. } => args.iter().map(|a| a.count_calls(method)).sum(),
            Expr::Cast { expr, .. } | Expr::NotNull(expr) => expr.count_calls(method),
        }
    }
}

fn write_args(f: &mut Formatter<'_>, args: &[Expr]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{arg}")?;
    }
    Ok(())
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{name}"),
            Expr::Null => write!(f, "null"),
            Expr::Raw(text) => write!(f, "{text}"),
            Expr::Call {
                receiver,
                method,
                args,
            } => {
                if let Some(receiver) = receiver {
                    write!(f, "{receiver}.")?;
                }
                write!(f, "{method}(")?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Expr::New { ty, args } => {
                write!(f, "new {ty}(")?;
                write_args(f, args)?;
                write!(f, ")")
            }
            Expr::Cast { ty, expr } => write!(f, "({ty}) {expr}"),
            Expr::NotNull(expr) => write!(f, "{expr} != null"),
        }
    }
}

/// A statement in a generated method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Local variable declaration with initializer.
    Local {
        ty: TypeRef,
        name: String,
        init: Expr,
    },
    /// Conditional; `else_branch` may be empty.
    If {
        cond: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Vec<Stmt>,
    },
    /// Enhanced for loop over an iterable.
    ForEach {
        elem_ty: TypeRef,
        var: String,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    /// Expression statement.
    Expr(Expr),
}

impl Stmt {
    /// Count calls to `method` in this statement and everything nested in it.
    pub fn count_calls(&self, method: &str) -> usize {
        match self {
            Stmt::Local { init, .. } => init.count_calls(method),
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                cond.count_calls(method)
                    + count_calls(then_branch, method)
                    + count_calls(else_branch, method)
            }
            Stmt::ForEach { iterable, body, .. } => {
                iterable.count_calls(method) + count_calls(body, method)
            }
            Stmt::Expr(expr) => expr.count_calls(method),
        }
    }

    fn write_indented(&self, out: &mut String, indent: usize) -> fmt::Result {
        let pad = "    ".repeat(indent);
        match self {
            Stmt::Local { ty, name, init } => writeln!(out, "{pad}{ty} {name} = {init};"),
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                writeln!(out, "{pad}if ({cond}) {{")?;
                write_block(out, then_branch, indent + 1)?;
                if else_branch.is_empty() {
                    writeln!(out, "{pad}}}")
                } else {
                    writeln!(out, "{pad}}} else {{")?;
                    write_block(out, else_branch, indent + 1)?;
                    writeln!(out, "{pad}}}")
                }
            }
            Stmt::ForEach {
                elem_ty,
                var,
                iterable,
                body,
            } => {
                writeln!(out, "{pad}for ({elem_ty} {var} : {iterable}) {{")?;
                write_block(out, body, indent + 1)?;
                writeln!(out, "{pad}}}")
            }
            Stmt::Expr(expr) => writeln!(out, "{pad}{expr};"),
        }
    }
}

fn write_block(out: &mut String, stmts: &[Stmt], indent: usize) -> fmt::Result {
    for stmt in stmts {
        stmt.write_indented(out, indent)?;
    }
    Ok(())
}

/// Count calls to `method` across a statement list.
pub fn count_calls(stmts: &[Stmt], method: &str) -> usize {
    stmts.iter().map(|s| s.count_calls(method)).sum()
}

/// Render a statement list with four-space indentation.
pub fn render(stmts: &[Stmt]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_block(&mut out, stmts, 0);
    out
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_indented(&mut out, 0)?;
        f.write_str(out.trim_end())
    }
}
