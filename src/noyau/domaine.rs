// src/noyau/domaine.rs
//
// Pré-contrôles de domaine (avant tout parsing)
// ---------------------------------------------
// - Factorielle : "n!" ou "(n)!" avec n littéral => n entier >= 0
//                 (un '-' juste devant n est lu comme signe, même dans "5-3!")
// - Racine      : "sqrt(n)" avec n littéral     => n >= 0
//
// Seules les formes LITTÉRALES sont vues ici. "sqrt(2-5)" ou "(1-2)!" passent,
// et c’est l’évaluateur qui tranche (NaN / erreur => "Syntax Error").

use std::sync::OnceLock;

use regex::Regex;

use super::eval::ErreurCalc;

/// Nombre simple, signe optionnel : -12, 3.5, 0
const NOMBRE: &str = r"-?\d+(?:\.\d+)?";

fn re_factorielle_nue() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"({NOMBRE})!")).expect("regex factorielle"))
}

fn re_factorielle_parenthese() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"\(\s*({NOMBRE})\s*\)!")).expect("regex factorielle (n)")
    })
}

fn re_racine() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"sqrt\(\s*({NOMBRE})\s*\)")).expect("regex sqrt"))
}

/// Contrôle complet : première erreur trouvée, sinon None.
/// Ordre fixe : factorielle puis racine.
pub fn validate(expr: &str) -> Option<ErreurCalc> {
    if factorielle_invalide(expr) {
        return Some(ErreurCalc::Factorielle);
    }
    if racine_negative(expr) {
        return Some(ErreurCalc::RacineNegative);
    }
    None
}

fn factorielle_invalide(expr: &str) -> bool {
    // Le '-' capturé compte toujours comme signe : "5-3!" est refusé
    [re_factorielle_nue(), re_factorielle_parenthese()]
        .into_iter()
        .flat_map(|re| re.captures_iter(expr))
        .filter_map(|cap| cap.get(1))
        .any(|m| !entier_naturel(m.as_str()))
}

fn racine_negative(expr: &str) -> bool {
    re_racine()
        .captures_iter(expr)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .any(|v| v < 0.0)
}

fn entier_naturel(texte: &str) -> bool {
    match texte.parse::<f64>() {
        Ok(v) => v >= 0.0 && v.fract() == 0.0,
        Err(_) => false,
    }
}
