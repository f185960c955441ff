// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{EvalError, EvalResult};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes : la résolution se fait à l’évaluation (Environment).
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Pow, // **

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Ident(name) => f.write_str(name),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::Pow => f.write_str("**"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Réécrit la notation puissance de l’utilisateur (`^`) vers la syntaxe du noyau (`**`).
pub fn reecrire_puissance(s: &str) -> String {
    s.replace('^', "**")
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 1e3, 2.5E-4)
/// - opérateurs + - * / **
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (sensibles à la casse)
/// - π (équivaut à ident("pi"))
///
/// `^` n’est PAS un jeton : il doit avoir été réécrit par `reecrire_puissance`.
pub fn tokenize(s: &str) -> EvalResult<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                // "**" = puissance, "*" = produit
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::Pow);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            'π' => {
                out.push(Tok::Ident("pi".to_string()));
                i += 1;
                continue;
            }
            _ => {}
        }

        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word));
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let (v, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(v));
            i = fin;
            continue;
        }

        return Err(EvalError::syntax(format!(
            "unexpected character '{c}' at position {i}"
        )));
    }

    Ok(out)
}

/// Lit un littéral décimal à partir de `start`.
/// Retourne (valeur, indice suivant).
fn lire_nombre(chars: &[char], start: usize) -> EvalResult<(f64, usize)> {
    let mut i = start;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    // exposant seulement s’il est suivi d’au moins un chiffre (sinon "2e" = 2 puis ident e)
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    let txt: String = chars[start..i].iter().collect();
    let v = txt
        .parse::<f64>()
        .map_err(|_| EvalError::syntax(format!("invalid number '{txt}'")))?;
    Ok((v, i))
}

/// Format utilitaire (journalisation) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
