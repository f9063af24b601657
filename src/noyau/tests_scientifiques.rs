//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - Tout est en f64 : on compare les VALEURS à une tolérance près,
//!   et les AFFICHAGES seulement là où l’arrondi à 12 chiffres les rend stables.
//! - tan(90) en DEG reste fini (≈ 1.6e16) : pas de pôle exact en flottant.

use std::time::{Duration, Instant};

use super::fonctions::AngleMode;
use super::format::format_value;
use super::eval::ErreurCalc;
use super::evaluate;

use AngleMode::{Deg, Rad};

fn val(expr: &str, mode: AngleMode) -> f64 {
    evaluate(expr, mode)
        .valeur()
        .unwrap_or_else(|| panic!("expr={expr:?} mode={mode:?}: pas de valeur"))
}

fn aff(expr: &str, mode: AngleMode) -> String {
    evaluate(expr, mode)
        .affichage()
        .map(str::to_string)
        .unwrap_or_else(|| panic!("expr={expr:?} mode={mode:?}: pas d’affichage"))
}

fn assert_proche(a: f64, b: f64, tol: f64, ctx: &str) {
    assert!((a - b).abs() <= tol, "{ctx}: {a} != {b} (tol {tol})");
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants trig ------------------------ */

#[test]
fn sci_allers_retours_trig_degres() {
    for a in [-80, -45, -30, 0, 15, 30, 45, 60, 89] {
        assert_proche(val(&format!("asin(sin({a}))"), Deg), a as f64, 1e-9, "asin∘sin");
        assert_proche(val(&format!("atan(tan({a}))"), Deg), a as f64, 1e-9, "atan∘tan");
    }
    for a in [0, 10, 45, 90, 135, 179] {
        assert_proche(val(&format!("acos(cos({a}))"), Deg), a as f64, 1e-6, "acos∘cos");
    }
}

#[test]
fn sci_allers_retours_trig_radians() {
    for a in ["-1.2", "-0.5", "0", "0.3", "1", "1.5"] {
        let attendu: f64 = a.parse().unwrap();
        assert_proche(val(&format!("asin(sin({a}))"), Rad), attendu, 1e-12, "asin∘sin");
        assert_proche(val(&format!("atan(tan({a}))"), Rad), attendu, 1e-12, "atan∘tan");
    }
    for a in ["0.1", "1", "2", "3"] {
        let attendu: f64 = a.parse().unwrap();
        assert_proche(val(&format!("acos(cos({a}))"), Rad), attendu, 1e-9, "acos∘cos");
    }
}

#[test]
fn sci_identites_symetrie() {
    for a in [10, 30, 45, 60, 75] {
        // sin(-x) = -sin(x)
        assert_proche(
            val(&format!("sin(-{a})"), Deg),
            -val(&format!("sin({a})"), Deg),
            1e-15,
            "sin impaire",
        );
        // cos(-x) = cos(x)
        assert_proche(
            val(&format!("cos(-{a})"), Deg),
            val(&format!("cos({a})"), Deg),
            1e-15,
            "cos paire",
        );
        // tan(-x) = -tan(x)
        assert_proche(
            val(&format!("tan(-{a})"), Deg),
            -val(&format!("tan({a})"), Deg),
            1e-12,
            "tan impaire",
        );
    }
}

#[test]
fn sci_pythagore_affiche_un() {
    for a in [0, 17, 30, 45, 60, 123, 270, 359] {
        assert_eq!(aff(&format!("sin({a})^2+cos({a})^2"), Deg), "1", "a={a}");
    }
    for a in ["0.5", "1", "2.5", "pi/7"] {
        assert_eq!(aff(&format!("sin({a})^2+cos({a})^2"), Rad), "1", "a={a}");
    }
}

#[test]
fn sci_periodicite_angles() {
    // sin(x + 360) = sin(x) en DEG ; cos(x + 2π) = cos(x) en RAD
    assert_eq!(aff("sin(30+360)", Deg), aff("sin(30)", Deg));
    assert_eq!(aff("cos(1+2pi)", Rad), aff("cos(1)", Rad));
    // tan(x + 180) = tan(x)
    assert_proche(val("tan(45+180)", Deg), 1.0, 1e-12, "tan période");
}

#[test]
fn sci_valeurs_remarquables() {
    assert_eq!(aff("sin(30)", Deg), "0.5");
    assert_eq!(aff("cos(60)", Deg), "0.5");
    assert_eq!(aff("tan(45)", Deg), "1");
    assert_eq!(aff("sin(pi/6)", Rad), "0.5");
    assert_eq!(aff("asin(1)", Deg), "90");
    assert_eq!(aff("acos(0)", Deg), "90");
}

#[test]
fn sci_hyperboliques_independantes_du_mode() {
    for e in ["sinh(1)", "cosh(2)", "tanh(0.5)", "asinh(1)", "acosh(2)", "atanh(0.5)"] {
        assert_eq!(evaluate(e, Deg), evaluate(e, Rad), "{e}");
    }
    assert_eq!(aff("cosh(0)", Deg), "1");
}

#[test]
fn sci_hors_domaine_trig_inverse() {
    assert_eq!(evaluate("asin(2)", Deg).erreur(), Some(ErreurCalc::Syntaxe));
    assert_eq!(evaluate("acos(-1.5)", Rad).erreur(), Some(ErreurCalc::Syntaxe));
    assert_eq!(evaluate("atanh(1)", Rad).erreur(), Some(ErreurCalc::DivisionParZero));
}

/* ------------------------ Affichage canonique ------------------------ */

#[test]
fn sci_bruit_binaire_efface() {
    assert_eq!(aff("0.1+0.2", Deg), "0.3");
    assert_eq!(aff("0.7+0.1", Deg), "0.8");
    assert_eq!(aff("1.1*1.1", Deg), "1.21");
    assert_eq!(aff("3*1.1", Deg), "3.3");
}

#[test]
fn sci_affichage_est_format_de_la_valeur() {
    for e in ["1/3", "2/3", "pi", "e", "sqrt(2)", "10^15", "1/10^7", "7!"] {
        let r = evaluate(e, Deg);
        let v = r.valeur().unwrap_or_else(|| panic!("{e}"));
        assert_eq!(r.affichage(), Some(format_value(v).as_str()), "{e}");
    }
}

#[test]
fn sci_seuils_exponentiels() {
    assert_eq!(aff("10^11", Deg), "100000000000");
    assert_eq!(aff("10^12", Deg), "1e+12");
    assert_eq!(aff("10^-6", Deg), "0.000001");
    assert_eq!(aff("10^-7", Deg), "1e-7");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_profondeur_sqrt_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // sqrt((...)^2) alterné : profondeur 60, valeur stable
    let mut expr = "4".to_string();
    for k in 0..60 {
        expr = if k % 2 == 0 {
            format!("sqrt({expr})")
        } else {
            format!("({expr})^2")
        };
        budget(t0, max);
    }

    assert_eq!(aff(&expr, Deg), "4");
}

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..80 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("1/2");
        budget(t0, max);
    }

    // 80*(1/2)=40
    assert_eq!(aff(&expr, Deg), "40");
}

#[test]
fn sci_stress_grands_nombres_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 100 chiffres : reste fini (≈ 1.43e99), affichage exponentiel
    let big = "9".repeat(100);
    let expr = format!("{big}/7 + 1/7");
    let s = aff(&expr, Deg);
    budget(t0, max);

    assert!(s.contains("e+99"), "{s}");
}

#[test]
fn sci_factorielles_limites() {
    assert_eq!(aff("170!", Deg), format_value(val("170!", Deg)));
    assert!(val("170!", Deg).is_finite());
    assert_eq!(
        evaluate("171!", Deg).erreur(),
        Some(ErreurCalc::DivisionParZero)
    );
}
