//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés numériques sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//! - tolérance flottante explicite
//!
//! Notes :
//! - evaluate() travaille TOUJOURS en radians ; les degrés ne concernent que l’appel direct.
//! - Les identités sont vérifiées à 1e-9 près (pas d’égalité exacte en flottant).

use std::time::{Duration, Instant};

use super::dispatch::{apply_direct, DirectOutcome, FunctionKey};
use super::environnement::{Environment, MathFn};
use super::erreur::EvalError;
use super::eval::evaluate;
use super::trig::AngleMode;

const TOL: f64 = 1e-9;

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr, &Environment::standard()).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() < TOL,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

fn direct(f: MathFn, x: f64, mode: AngleMode) -> f64 {
    match apply_direct(FunctionKey::Apply(f), &x.to_string(), mode) {
        Ok(DirectOutcome::Value { value, .. }) => value,
        autre => panic!("{}({x}) inattendu: {autre:?}", f.name()),
    }
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Sémantique infixe ------------------------ */

#[test]
fn sci_infixe_contre_calcul_rust() {
    // Même expression écrite en Rust : la précédence doit coïncider.
    let cas: [(&str, f64); 8] = [
        ("1 + 2 * 3 - 4 / 2", 1.0 + 2.0 * 3.0 - 4.0 / 2.0),
        ("(1 + 2) * (3 - 4) / 2", (1.0 + 2.0) * (3.0 - 4.0) / 2.0),
        ("2 ^ 3 ^ 2", 2f64.powf(3f64.powf(2.0))),
        ("-3 ^ 2", -(3f64.powf(2.0))),
        ("100 / 10 / 5", 100.0 / 10.0 / 5.0),
        ("7 - 2 - 1", 7.0 - 2.0 - 1.0),
        ("2 * -3 + 1", 2.0 * -3.0 + 1.0),
        ("1.5e2 * 2 ^ -2", 150.0 * 0.25),
    ];
    for (expr, attendu) in cas {
        assert_proche(expr, attendu);
    }
}

#[test]
fn sci_puissance_droite_vs_gauche() {
    // a^b^c = a^(b^c) != (a^b)^c en général
    assert_proche("2^2^3", 256.0);
    assert_proche("(2^2)^3", 64.0);
    assert_proche("4^0.5", 2.0);
}

/* ------------------------ Identités (radians) ------------------------ */

#[test]
fn sci_identite_pythagore() {
    for k in -12..=12 {
        let x = f64::from(k) * 0.37;
        assert_proche(&format!("sin({x})^2 + cos({x})^2"), 1.0);
    }
}

#[test]
fn sci_symetries_trig() {
    assert_proche("sin(-pi/6) + sin(pi/6)", 0.0);
    assert_proche("cos(-pi/3) - cos(pi/3)", 0.0);
    assert_proche("tan(pi/4)", 1.0);
    assert_proche("atan(tan(0.5))", 0.5);
    assert_proche("asin(sin(0.3))", 0.3);
}

#[test]
fn sci_logarithmes() {
    assert_proche("log(10^7)", 7.0);
    assert_proche("ln(e^3)", 3.0);
    assert_proche("ln(100) / ln(10)", 2.0);
    assert_proche("log(2) + log(5)", 1.0);
}

#[test]
fn sci_factorielle_recurrence() {
    for n in 1..=20 {
        let a = eval_ok(&format!("factorial({n})"));
        let b = eval_ok(&format!("{n} * factorial({})", n - 1));
        assert_eq!(a, b, "n={n}");
    }
}

/* ------------------------ Appel direct : degrés ------------------------ */

#[test]
fn sci_degres_angles_remarquables() {
    let d = AngleMode::Degrees;
    assert!((direct(MathFn::Sin, 30.0, d) - 0.5).abs() < TOL);
    assert!((direct(MathFn::Cos, 60.0, d) - 0.5).abs() < TOL);
    assert!((direct(MathFn::Tan, 45.0, d) - 1.0).abs() < TOL);
    assert!((direct(MathFn::Acos, 0.5, d) - 60.0).abs() < TOL);
    assert!((direct(MathFn::Atan, 1.0, d) - 45.0).abs() < TOL);
}

#[test]
fn sci_degres_aller_retour() {
    for deg in [-80.0, -45.0, 0.0, 10.0, 33.0, 72.5] {
        let s = direct(MathFn::Sin, deg, AngleMode::Degrees);
        let back = direct(MathFn::Asin, s, AngleMode::Degrees);
        assert!((back - deg).abs() < 1e-7, "deg={deg} back={back}");
    }
}

/* ------------------------ Classification ------------------------ */

#[test]
fn sci_division_partout() {
    for expr in ["1/0", "sin(1/0)", "2 + 3/(1-1)", "(1/0)^2", "0^-2"] {
        assert_eq!(
            evaluate(expr, &Environment::standard()),
            Err(EvalError::Division),
            "expr={expr:?}"
        );
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..400 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    assert_proche(&expr, 200.0);
}

#[test]
fn sci_stress_profondeur_sqrt() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // sqrt(x)^2 = x : on alterne, profondeur modérée
    let mut expr = "9".to_string();
    for k in 0..60 {
        expr = if k % 2 == 0 {
            format!("sqrt({expr})")
        } else {
            format!("({expr})^2")
        };
        budget(t0, max);
    }

    assert_proche(&expr, 9.0);
}
