// src/noyau/format.rs
//
// Affichage des résultats (texte du display + historique).
// - entier (|x| < 1e16)       : "1024", "-3"
// - décimal                   : forme la plus courte qui se relit à l’identique ("0.30000000000000004")
// - très grand / très petit   : notation exposant ("1.5e20", "2e-7")
// - -0                        : "0"

/// Au-delà, un f64 n’a plus de partie fractionnaire significative.
const LIMITE_ENTIER: f64 = 1e16;

/// En dessous (hors zéro), on passe en notation exposant.
const LIMITE_PETIT: f64 = 1e-5;

pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a >= LIMITE_ENTIER || a < LIMITE_PETIT {
        return format!("{x:e}");
    }
    if x.fract() == 0.0 {
        // |x| < 1e16 : la conversion est exacte
        return format!("{}", x as i64);
    }
    format!("{x}")
}

/// Relit un texte d’affichage en nombre (opérations mémoire, appel direct).
pub fn parse_display(texte: &str) -> Option<f64> {
    let t = texte.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok()
}
