// src/cli.rs
//
// Mode ligne de commande : `scicalc -e EXPR [-e EXPR]...`
// - une seule Session pour toutes les expressions (historique commun)
// - succès  : "EXPR = RESULT" sur la sortie standard
// - échec   : "EXPR: message" sur la sortie d’erreur
// - retour  : Ok(true) si tout a réussi

use std::io::{self, Write};

use tracing::debug;

use crate::noyau::{format_number, Session};

pub fn evaluer_lot<S: AsRef<str>>(
    session: &mut Session,
    exprs: &[S],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut tout_ok = true;

    for expr in exprs {
        let expr = expr.as_ref();
        match session.evaluate(expr) {
            Ok(v) => writeln!(out, "{} = {}", expr.trim(), format_number(v))?,
            Err(e) => {
                tout_ok = false;
                writeln!(err, "{}: {e}", expr.trim())?;
            }
        }
    }

    debug!(n = exprs.len(), tout_ok, "lot évalué");
    Ok(tout_ok)
}
