// src/noyau/analyse.rs
//
// Jetons -> Expr (precedence climbing)
//
// Règles:
// - + -  : précédence 1, gauche
// - * /  : précédence 2, gauche
// - **   : précédence 3, DROITE (2**3**2 = 2**9)
// - moins unaire : son opérande est lue au niveau puissance
//     "-2**2"  => -(2**2)
//     "2**-1"  => 2**(-1)
// - Ident suivi de '(' : appel unaire ; sinon : nom (constante)
//
// Toute forme invalide est une EvalError::Syntax, jamais un panic.

use super::erreur::{EvalError, EvalResult};
use super::expr::{BinOp, Expr, UnOp};
use super::jetons::Tok;

/// Garde-fou : profondeur d’imbrication maximale (anti débordement de pile).
const PROFONDEUR_MAX: usize = 256;

/// Nombre maximal d’opérateurs binaires : une chaîne "1+1+…" construite par la
/// boucle ne récursive pas, mais donne un arbre aussi profond qu’elle est longue.
const OPERATEURS_MAX: usize = 1000;

/// Précédence du moins unaire : son opérande capture seulement `**`.
const PREC_UNAIRE: u8 = 3;

fn precedence(t: &Tok) -> u8 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Pow => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Pow)
}

fn as_binop(t: &Tok) -> Option<BinOp> {
    match t {
        Tok::Plus => Some(BinOp::Add),
        Tok::Minus => Some(BinOp::Sub),
        Tok::Star => Some(BinOp::Mul),
        Tok::Slash => Some(BinOp::Div),
        Tok::Pow => Some(BinOp::Pow),
        _ => None,
    }
}

/// Construit l’arbre d’une suite de jetons complète.
///
/// Exemple:
///   tokens: [Num(1), Plus, Num(2), Star, Num(3)]
///   arbre:  (1 + (2 * 3))
pub fn parse(tokens: &[Tok]) -> EvalResult<Expr> {
    if tokens.is_empty() {
        return Err(EvalError::syntax("empty expression"));
    }

    let mut a = Analyseur {
        toks: tokens,
        pos: 0,
        profondeur: 0,
        operateurs: 0,
    };
    let e = a.expr(0)?;

    if let Some(t) = a.peek() {
        return Err(EvalError::syntax(format!("unexpected token '{t}'")));
    }
    Ok(e)
}

struct Analyseur<'a> {
    toks: &'a [Tok],
    pos: usize,
    profondeur: usize,
    operateurs: usize,
}

impl Analyseur<'_> {
    fn peek(&self) -> Option<&Tok> {
        self.toks.get(self.pos)
    }

    fn next(&mut self) -> Option<&Tok> {
        let t = self.toks.get(self.pos);
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn entrer(&mut self) -> EvalResult<()> {
        self.profondeur += 1;
        if self.profondeur > PROFONDEUR_MAX {
            return Err(EvalError::syntax("expression nested too deeply"));
        }
        Ok(())
    }

    /// Expression binaire dont tous les opérateurs ont une précédence >= `min_prec`.
    fn expr(&mut self, min_prec: u8) -> EvalResult<Expr> {
        self.entrer()?;

        let mut lhs = self.unaire()?;

        while let Some(tok) = self.peek() {
            let Some(op) = as_binop(tok) else { break };
            let p = precedence(tok);
            if p < min_prec {
                break;
            }
            let suivant = if is_right_associative(tok) { p } else { p + 1 };
            self.pos += 1;

            self.operateurs += 1;
            if self.operateurs > OPERATEURS_MAX {
                return Err(EvalError::syntax("expression too long"));
            }

            let rhs = self.expr(suivant)?;
            lhs = Expr::binary(op, lhs, rhs);
        }

        self.profondeur -= 1;
        Ok(lhs)
    }

    fn unaire(&mut self) -> EvalResult<Expr> {
        match self.peek().cloned() {
            Some(Tok::Minus) => {
                self.pos += 1;
                Ok(Expr::unary(UnOp::Neg, self.expr(PREC_UNAIRE)?))
            }
            Some(Tok::Plus) => {
                self.pos += 1;
                Ok(Expr::unary(UnOp::Pos, self.expr(PREC_UNAIRE)?))
            }
            _ => self.primaire(),
        }
    }

    fn primaire(&mut self) -> EvalResult<Expr> {
        let tok = self
            .next()
            .cloned()
            .ok_or_else(|| EvalError::syntax("unexpected end of expression"))?;

        match tok {
            Tok::Num(v) => Ok(Expr::Literal(v)),

            Tok::Ident(name) => {
                if self.peek() != Some(&Tok::LPar) {
                    return Ok(Expr::Name(name));
                }
                self.pos += 1;

                if self.peek() == Some(&Tok::RPar) {
                    return Err(EvalError::syntax(format!(
                        "function '{name}' expects one argument"
                    )));
                }
                let arg = self.expr(0)?;
                self.fermer()?;
                Ok(Expr::call(name, arg))
            }

            Tok::LPar => {
                if self.peek() == Some(&Tok::RPar) {
                    return Err(EvalError::syntax("empty parentheses"));
                }
                let e = self.expr(0)?;
                self.fermer()?;
                Ok(e)
            }

            Tok::RPar => Err(EvalError::syntax("unexpected ')'")),

            op => Err(EvalError::syntax(format!("unexpected operator '{op}'"))),
        }
    }

    /// Consomme la parenthèse fermante attendue.
    fn fermer(&mut self) -> EvalResult<()> {
        match self.next() {
            Some(Tok::RPar) => Ok(()),
            None => Err(EvalError::syntax("missing closing parenthesis")),
            Some(t) => Err(EvalError::syntax(format!("unexpected token '{t}'"))),
        }
    }
}
