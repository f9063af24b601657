//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * succès => valeur finie ET affichage == format_value(valeur)
//!   * erreur => un des quatre messages fixes
//!   * jamais de panique, quelle que soit l’entrée

use std::time::{Duration, Instant};

use super::fonctions::AngleMode;
use super::format::format_value;
use super::{evaluate, ExpressionResult};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const MESSAGES: [&str; 4] = [
    "Syntax Error",
    "Cannot divide by zero",
    "Factorial requires non-negative integer",
    "Cannot take sqrt of negative number",
];

/// Vérifie les invariants ; renvoie true si succès.
fn check_invariants(expr: &str, r: &ExpressionResult) -> bool {
    match r {
        ExpressionResult::Succes { valeur, affichage } => {
            assert!(valeur.is_finite(), "valeur non finie: expr={expr:?}");
            assert_eq!(affichage, &format_value(*valeur), "expr={expr:?}");
            true
        }
        ExpressionResult::Erreur(e) => {
            let msg = e.to_string();
            assert!(
                MESSAGES.contains(&msg.as_str()),
                "message hors taxonomie: expr={expr:?} msg={msg}"
            );
            false
        }
        ExpressionResult::Incomplet => {
            assert!(expr.trim().is_empty(), "incomplet sur {expr:?}");
            false
        }
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(10);
    match rng.pick(4) {
        0 => format!("{a}.{}", rng.pick(100)),
        1 => format!("{a}%"),
        _ => format!("{a}"),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        _ => format!("{}!", rng.pick(8)),
    }
}

const FONCTIONS: [&str; 8] = ["sin", "cos", "tan", "sqrt", "ln", "log", "abs", "atan"];

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let op = |rng: &mut Rng, o: &str| {
        format!(
            "({}{o}{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        )
    };

    match rng.pick(10) {
        0 | 1 => gen_atom(rng),
        2 => op(rng, "+"),
        3 => op(rng, "-"),
        4 => op(rng, "*"),
        5 => op(rng, "/"),
        6 => format!("{}^{}", gen_atom(rng), rng.pick(4)),
        7 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, depth - 1))
        }
        8 => format!("-{}", gen_expr(rng, depth - 1)),
        _ => {
            if rng.coin() {
                format!("({})!", gen_expr(rng, depth - 1))
            } else {
                format!("nthRoot({}, {})", gen_expr(rng, depth - 1), rng.pick(5))
            }
        }
    }
}

/// Chaîne quelconque sur un alphabet « calculatrice » (souvent invalide).
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: [&str; 20] = [
        "1", "2", "0", ".", "+", "-", "*", "/", "^", "!", "%", "(", ")", ",", "x", "pi", "sqrt",
        "sin", " ", "e",
    ];
    let n = 1 + rng.pick(12);
    (0..n)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng_a = Rng::new(0xC0FFEE_u64);
    let mut rng_b = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng_a, 4);
        assert_eq!(expr, gen_expr(&mut rng_b, 4), "générateur non déterministe");

        for mode in [AngleMode::Deg, AngleMode::Rad] {
            let r = evaluate(&expr, mode);
            // Même entrée => même sortie (aucun état caché)
            assert_eq!(r, evaluate(&expr, mode), "expr={expr:?}");
            if check_invariants(&expr, &r) {
                seen_ok += 1;
            }
        }
    }

    // Sinon le fuzz ne « balaye » rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
}

#[test]
fn fuzz_safe_bruit_ne_panique_jamais() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_bruit(&mut rng);
        let r = evaluate(&expr, AngleMode::Deg);
        if !check_invariants(&expr, &r) {
            seen_err += 1;
        }
    }

    assert!(seen_err > 0, "aucune erreur vue: bruit trop « sage »");
}

#[test]
fn fuzz_safe_variable_liee_x() {
    use std::collections::HashMap;

    use super::evaluate_with;

    let t0 = Instant::now();
    let max = Duration::from_millis(300);
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        budget(t0, max);

        let x = (rng.pick(2001) as f64 - 1000.0) / 100.0;
        let mut vars = HashMap::new();
        vars.insert("x".to_string(), x);

        let expr = "x^2 - 3x + sin(x)/x";
        let r = evaluate_with(expr, AngleMode::Rad, &vars);
        check_invariants(expr, &r);
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = somme_balancee("1/2", 800);
    let r = evaluate(&expr, AngleMode::Deg);
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(r.affichage(), Some("400"));
}
