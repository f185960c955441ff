//! Fuzz borné du pipeline evaluate (réécriture, jetons, analyse, interprétation).
//!
//! - graine fixe, générateur maison
//! - expressions de profondeur 4 au plus
//! - chaque test a son budget de temps
//! - invariant clé : une expression BIEN FORMÉE n’échoue jamais en Syntax/Name/Function
//! - invariant clé : une soupe de jetons ne provoque jamais de panic

use std::time::{Duration, Instant};

use super::environnement::Environment;
use super::erreur::EvalError;
use super::eval::evaluate;

/* ------------------------ Générateur ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const FONCTIONS: [&str; 10] = [
    "sin",
    "cos",
    "tan",
    "asin",
    "acos",
    "atan",
    "log",
    "ln",
    "sqrt",
    "factorial",
];

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        _ => format!("{}e-{}", 1 + rng.pick(9), rng.pick(3)),
    }
}

/// Expression bien formée (grammaire), profondeur bornée.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("({a}*{})", gen_expr(rng, depth - 1)),
        4 => format!("({a}/{})", gen_expr(rng, depth - 1)),
        5 => format!("({a})^{}", rng.pick(4)),
        6 => format!("-{a}"),
        _ => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({a})")
        }
    }
}

const SOUPE: [&str; 20] = [
    "1", "2.5", "0", ".", "+", "-", "*", "/", "^", "**", "(", ")", "sin", "pi", "x", "foo",
    "sqrt", "e", " ", "$",
];

/// Suite de fragments arbitraires (souvent mal formée).
fn gen_soupe(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(12);
    (0..n)
        .map(|_| SOUPE[rng.pick(SOUPE.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let env = Environment::standard();
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        match evaluate(&expr, &env) {
            Ok(_) => seen_ok += 1,
            Err(EvalError::Division | EvalError::Domain(_)) => seen_err += 1,
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }

    // succès et échecs de domaine doivent apparaître tous les deux
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur de domaine/division vue");
}

#[test]
fn fuzz_safe_soupe_sans_panic() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let env = Environment::standard();
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_syntax = 0usize;

    for _ in 0..500 {
        budget(t0, max);

        let s = gen_soupe(&mut rng);
        if let Err(EvalError::Syntax(_)) = evaluate(&s, &env) {
            seen_syntax += 1;
        }
    }

    assert!(seen_syntax > 50, "trop peu d’erreurs de syntaxe: {seen_syntax}");
}

#[test]
fn fuzz_safe_determinisme() {
    let env = Environment::standard();
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);

    for _ in 0..50 {
        let a = gen_expr(&mut r1, 3);
        let b = gen_expr(&mut r2, 3);
        assert_eq!(a, b);

        let va = evaluate(&a, &env);
        let vb = evaluate(&b, &env);
        match (va, vb) {
            (Ok(x), Ok(y)) => assert!(x == y || (x.is_nan() && y.is_nan())),
            (x, y) => assert_eq!(x, y),
        }
    }
}

#[test]
fn fuzz_safe_moins_repetes() {
    // "-" en cascade : profondeur bornée => Syntax, jamais de débordement de pile
    let mut rng = Rng::new(7);
    for _ in 0..20 {
        let n = 1 + rng.pick(2000) as usize;
        let s = format!("{}1", "-".repeat(n));
        match evaluate(&s, &Environment::standard()) {
            Ok(v) => {
                let attendu = if n % 2 == 0 { 1.0 } else { -1.0 };
                assert_eq!(v, attendu, "n={n}");
            }
            Err(e) => assert!(matches!(e, EvalError::Syntax(_)), "n={n} err={e}"),
        }
    }
}
