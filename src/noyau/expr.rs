// src/noyau/expr.rs
//
// Arbre d’expression explicite (flottants).
// - Literal : nombre
// - Name    : constante résolue via l’Environment
// - Unary   : moins / plus unaire
// - Binary  : + - * / **
// - Call    : appel unaire d’une fonction de l’Environment
//
// L’arbre ne contient jamais de code : l’interprétation (eval.rs, `interpreter`) est une passe pure.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn symbole(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "**",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Pos,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(f64),
    Name(String),
    Unary(UnOp, Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
    Call(String, Box<Expr>),
}

impl Expr {
    pub fn binary(op: BinOp, a: Expr, b: Expr) -> Expr {
        Expr::Binary(op, Box::new(a), Box::new(b))
    }

    pub fn unary(op: UnOp, x: Expr) -> Expr {
        Expr::Unary(op, Box::new(x))
    }

    pub fn call(name: impl Into<String>, arg: Expr) -> Expr {
        Expr::Call(name.into(), Box::new(arg))
    }
}

/// Rendu entièrement parenthésé (journalisation, tests de précédence).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(v) => write!(f, "{v}"),
            Expr::Name(n) => f.write_str(n),
            Expr::Unary(UnOp::Neg, x) => write!(f, "(-{x})"),
            Expr::Unary(UnOp::Pos, x) => write!(f, "(+{x})"),
            Expr::Binary(op, a, b) => write!(f, "({a} {} {b})", op.symbole()),
            Expr::Call(name, x) => write!(f, "{name}({x})"),
        }
    }
}
