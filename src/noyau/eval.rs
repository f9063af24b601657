//! Noyau — évaluation (pipeline réel)
//!
//! vide ? -> √ => sqrt -> pré-contrôles de domaine -> réécriture n% -> jetons -> '*' implicites
//!        -> RPN -> Expr -> évaluation (table de fonctions du mode d’angle) -> finitude -> affichage
//!
//! Aucune erreur ne traverse `evaluate` : tout finit dans un `ExpressionResult`.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::domaine::validate;
use super::expr::Contexte;
use super::fonctions::{AngleMode, TableFonctions};
use super::format::format_value;
use super::jetons::{format_tokens, insere_mul_implicite, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// Taxonomie FIXE des erreurs visibles (messages affichés tels quels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalc {
    #[error("Syntax Error")]
    Syntaxe,
    #[error("Cannot divide by zero")]
    DivisionParZero,
    #[error("Factorial requires non-negative integer")]
    Factorielle,
    #[error("Cannot take sqrt of negative number")]
    RacineNegative,
}

/// Statut seul (sans charge utile).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statut {
    Succes,
    Erreur,
    Incomplet,
}

/// Résultat d’UNE évaluation. Construit à neuf, jamais conservé par le noyau.
#[derive(Clone, Debug, PartialEq)]
pub enum ExpressionResult {
    /// valeur finie + texte canonique
    Succes { valeur: f64, affichage: String },
    Erreur(ErreurCalc),
    /// entrée vide ou blanche
    Incomplet,
}

impl ExpressionResult {
    pub fn statut(&self) -> Statut {
        match self {
            ExpressionResult::Succes { .. } => Statut::Succes,
            ExpressionResult::Erreur(_) => Statut::Erreur,
            ExpressionResult::Incomplet => Statut::Incomplet,
        }
    }

    pub fn valeur(&self) -> Option<f64> {
        match self {
            ExpressionResult::Succes { valeur, .. } => Some(*valeur),
            _ => None,
        }
    }

    pub fn affichage(&self) -> Option<&str> {
        match self {
            ExpressionResult::Succes { affichage, .. } => Some(affichage.as_str()),
            _ => None,
        }
    }

    pub fn erreur(&self) -> Option<ErreurCalc> {
        match self {
            ExpressionResult::Erreur(e) => Some(*e),
            _ => None,
        }
    }
}

fn re_pourcentage() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("regex pourcentage"))
}

/// "50%" -> "(50/100)". Seul un littéral numérique juste avant '%' est concerné.
pub fn reecrit_pourcentages(expr: &str) -> String {
    re_pourcentage().replace_all(expr, "($1/100)").into_owned()
}

/// "√(…)" -> "sqrt(…)", avant les pré-contrôles : "√(-4)" et "sqrt(-4)" sont jugés pareil.
pub fn reecrit_racines(expr: &str) -> String {
    expr.replace('√', "sqrt")
}

/// API publique : évalue une expression sans variable liée.
pub fn evaluate(expr: &str, angle: AngleMode) -> ExpressionResult {
    evaluate_with(expr, angle, &HashMap::new())
}

/// API publique : évalue une expression avec des variables liées (ex: x pour le graphe).
pub fn evaluate_with(
    expr: &str,
    angle: AngleMode,
    variables: &HashMap<String, f64>,
) -> ExpressionResult {
    // 1) vide
    let s = expr.trim();
    if s.is_empty() {
        return ExpressionResult::Incomplet;
    }

    // 2) pré-contrôles de domaine (arrêt immédiat)
    let s = reecrit_racines(s);
    if let Some(e) = validate(&s) {
        return ExpressionResult::Erreur(e);
    }

    // 3) n% -> (n/100)
    let reecrit = reecrit_pourcentages(&s);

    // 4-5) parse + évaluation (table choisie une fois pour tout l’appel)
    let ctx = Contexte {
        fonctions: TableFonctions::pour(angle),
        variables,
    };
    let brut = match calcule(&reecrit, &ctx) {
        Ok(v) => v,
        Err(msg) => {
            // 6) toute erreur interne => message générique
            log::debug!("expression rejetée {s:?} : {msg}");
            return ExpressionResult::Erreur(ErreurCalc::Syntaxe);
        }
    };

    // 7) finitude
    if brut.is_nan() {
        return ExpressionResult::Erreur(ErreurCalc::Syntaxe);
    }
    if brut.is_infinite() {
        return ExpressionResult::Erreur(ErreurCalc::DivisionParZero);
    }

    // 8) succès
    ExpressionResult::Succes {
        valeur: brut,
        affichage: format_value(brut),
    }
}

fn calcule(s: &str, ctx: &Contexte<'_>) -> Result<f64, String> {
    let jetons = insere_mul_implicite(tokenize(s)?);
    log::trace!("jetons : {}", format_tokens(&jetons));
    let rpn = to_rpn(&jetons)?;
    let expr = from_rpn(&rpn)?;
    expr.eval(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str, angle: AngleMode) -> (f64, String) {
        match evaluate(s, angle) {
            ExpressionResult::Succes { valeur, affichage } => (valeur, affichage),
            autre => panic!("evaluate({s:?}) = {autre:?}"),
        }
    }

    fn val(s: &str) -> f64 {
        ok(s, AngleMode::Deg).0
    }

    fn aff(s: &str) -> String {
        ok(s, AngleMode::Deg).1
    }

    fn err(s: &str) -> ErreurCalc {
        evaluate(s, AngleMode::Deg)
            .erreur()
            .unwrap_or_else(|| panic!("attendu une erreur pour {s:?}"))
    }

    fn proche(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    // --- Vide ---

    #[test]
    fn vide_incomplet() {
        assert_eq!(evaluate("", AngleMode::Deg), ExpressionResult::Incomplet);
        assert_eq!(evaluate("   ", AngleMode::Rad), ExpressionResult::Incomplet);
        assert_eq!(evaluate("", AngleMode::Deg).statut(), Statut::Incomplet);
    }

    // --- Précédence ---

    #[test]
    fn precedence_operateurs() {
        assert_eq!(val("2+3*4"), 14.0);
        assert_eq!(val("(2+3)*4"), 20.0);
        assert_eq!(val("10-2*3"), 4.0);
        assert_eq!(val("6/2+1"), 4.0);
        assert_eq!(val("(1+2)*(3+4)"), 21.0);
        assert_eq!(val("(5)"), 5.0);
        assert_eq!(val("-5"), -5.0);
        assert_eq!(val("-2^2"), -4.0);
        assert_eq!(val("2^-1"), 0.5);
        assert_eq!(val("2^3^2"), 512.0);
    }

    #[test]
    fn multiplication_implicite() {
        assert_eq!(val("2(3)"), 6.0);
        assert_eq!(val("(2)(3)"), 6.0);
        assert_eq!(val("2(3+4)"), 14.0);
        proche(val("2pi"), 2.0 * std::f64::consts::PI);
        proche(val("3e"), 3.0 * std::f64::consts::E);
    }

    // --- Erreurs ---

    #[test]
    fn erreurs_de_syntaxe() {
        for s in ["2+3*", "2**3", ")", "/", "foo(2)", "sin", "2 3", "1..2", "y+1"] {
            assert_eq!(err(s), ErreurCalc::Syntaxe, "{s:?}");
        }
    }

    #[test]
    fn division_par_zero() {
        assert_eq!(err("1/0"), ErreurCalc::DivisionParZero);
        assert_eq!(err("5/0"), ErreurCalc::DivisionParZero);
        assert_eq!(err("10/(5-5)"), ErreurCalc::DivisionParZero);
        assert_eq!(err("log(0)"), ErreurCalc::DivisionParZero);
        // 0/0 = NaN : générique
        assert_eq!(err("0/0"), ErreurCalc::Syntaxe);
    }

    #[test]
    fn messages_exacts() {
        assert_eq!(ErreurCalc::Syntaxe.to_string(), "Syntax Error");
        assert_eq!(ErreurCalc::DivisionParZero.to_string(), "Cannot divide by zero");
        assert_eq!(
            ErreurCalc::Factorielle.to_string(),
            "Factorial requires non-negative integer"
        );
        assert_eq!(
            ErreurCalc::RacineNegative.to_string(),
            "Cannot take sqrt of negative number"
        );
    }

    // --- Factorielle / racines ---

    #[test]
    fn factorielles() {
        assert_eq!(val("5!"), 120.0);
        assert_eq!(val("0!"), 1.0);
        assert_eq!(val("10!"), 3628800.0);
        assert_eq!(val("3!"), 6.0);
        assert_eq!(val("(2+1)!"), 6.0);
        assert_eq!(err("3.5!"), ErreurCalc::Factorielle);
        assert_eq!(err("2.7!"), ErreurCalc::Factorielle);
        assert_eq!(err("(-1)!"), ErreurCalc::Factorielle);
        assert_eq!(err("(-5)!"), ErreurCalc::Factorielle);
        // sous-expression : l’évaluateur refuse, message générique
        assert_eq!(err("(1-2)!"), ErreurCalc::Syntaxe);
        // débordement
        assert_eq!(err("171!"), ErreurCalc::DivisionParZero);
    }

    #[test]
    fn racines() {
        assert_eq!(val("sqrt(16)"), 4.0);
        proche(val("sqrt(2)"), 1.41421356237);
        proche(val("cbrt(27)"), 3.0);
        proche(val("cbrt(8)"), 2.0);
        proche(val("nthRoot(16, 4)"), 2.0);
        assert_eq!(err("sqrt(-1)"), ErreurCalc::RacineNegative);
        assert_eq!(err("sqrt(-4)"), ErreurCalc::RacineNegative);
        // forme non littérale : NaN => générique
        assert_eq!(err("sqrt(2-6)"), ErreurCalc::Syntaxe);
    }

    #[test]
    fn symbole_racine_equivaut_a_sqrt() {
        assert_eq!(reecrit_racines("2√(9)"), "2sqrt(9)");
        assert_eq!(val("√(16)"), 4.0);
        assert_eq!(val("2√(9)"), 6.0);
        assert_eq!(err("√(-4)"), ErreurCalc::RacineNegative);
        assert_eq!(err("√( -1 )"), ErreurCalc::RacineNegative);
        // comme sqrt, parenthèses obligatoires
        assert_eq!(err("√4"), ErreurCalc::Syntaxe);
    }

    #[test]
    fn moins_devant_factorielle_litterale() {
        assert_eq!(err("5-3!"), ErreurCalc::Factorielle);
        assert_eq!(err("10-5!"), ErreurCalc::Factorielle);
        assert_eq!(val("5+3!"), 11.0);
        assert_eq!(val("5-(3!)"), -1.0);
    }

    // --- Trig ---

    #[test]
    fn trig_degres() {
        proche(val("sin(90)"), 1.0);
        proche(val("cos(0)"), 1.0);
        proche(val("tan(45)"), 1.0);
        proche(val("sin(30)"), 0.5);
        proche(val("cos(60)"), 0.5);
        proche(val("asin(1)"), 90.0);
        proche(val("acos(0)"), 90.0);
        proche(val("atan(1)"), 45.0);
        proche(val("asin(0.5)"), 30.0);
        assert_eq!(aff("sin(30)"), "0.5");
    }

    #[test]
    fn trig_radians() {
        use std::f64::consts::PI;
        let r = |s: &str| ok(s, AngleMode::Rad).0;
        proche(r("sin(pi/2)"), 1.0);
        proche(r("cos(pi)"), -1.0);
        proche(r("tan(pi/4)"), 1.0);
        proche(r("asin(1)"), PI / 2.0);
        proche(r("acos(0)"), PI / 2.0);
        proche(r("atan(1)"), PI / 4.0);
    }

    #[test]
    fn trig_hors_domaine_generique() {
        assert_eq!(err("asin(2)"), ErreurCalc::Syntaxe);
        assert_eq!(err("acos(-2)"), ErreurCalc::Syntaxe);
    }

    #[test]
    fn hyperboliques_et_logs() {
        assert_eq!(val("sinh(0)"), 0.0);
        assert_eq!(val("cosh(0)"), 1.0);
        assert_eq!(val("tanh(0)"), 0.0);
        assert_eq!(val("asinh(0)"), 0.0);
        assert_eq!(val("acosh(1)"), 0.0);
        assert_eq!(val("atanh(0)"), 0.0);
        // même valeur en DEG et en RAD
        assert_eq!(ok("sinh(1)", AngleMode::Deg).0, ok("sinh(1)", AngleMode::Rad).0);

        proche(val("log(100)"), 2.0);
        proche(val("log(1000)"), 3.0);
        proche(val("ln(e)"), 1.0);
        assert_eq!(val("ln(1)"), 0.0);
        assert!((val("ln(2.71828)") - 1.0).abs() < 1e-5);
    }

    #[test]
    fn puissances_et_abs() {
        assert_eq!(val("2^10"), 1024.0);
        assert_eq!(val("5^2"), 25.0);
        assert_eq!(val("abs(-7)"), 7.0);
        assert_eq!(val("abs(0)"), 0.0);
    }

    // --- Pourcentage ---

    #[test]
    fn pourcentages() {
        assert_eq!(reecrit_pourcentages("200*50%"), "200*(50/100)");
        assert_eq!(val("50%"), 0.5);
        assert_eq!(val("200*50%"), 100.0);
        assert_eq!(val("100%"), 1.0);
        assert_eq!(val("80*25%"), 20.0);
        // '%' sans littéral devant : non supporté
        assert_eq!(err("(2+3)%"), ErreurCalc::Syntaxe);
    }

    // --- Affichage ---

    #[test]
    fn affichages() {
        assert_eq!(aff("0.1+0.2"), "0.3");
        assert!(aff("1/3").starts_with("0.333"));
        assert_eq!(aff("999999999*2"), "1999999998");
        assert_eq!(aff("0.000001*2"), "0.000002");
        assert_eq!(aff("0"), "0");
        assert_eq!(aff("42"), "42");
        assert!(aff("10^15").ends_with("e+15"));
        assert_eq!(aff("0.0000001"), "1e-7");
        assert_eq!(aff("999999999999"), "999999999999");
        assert!(aff("1000000000000").ends_with("e+12"));
        let neg = aff("-10^15");
        assert!(neg.starts_with('-') && neg.ends_with("e+15"), "{neg}");
    }

    // --- Variables liées ---

    #[test]
    fn variable_x_liee() {
        let mut vars = HashMap::new();
        vars.insert("x".to_string(), 2.0);
        let r = evaluate_with("x^2 + 3x", AngleMode::Rad, &vars);
        assert_eq!(r.valeur(), Some(10.0));
        assert_eq!(r.affichage(), Some("10"));
    }
}
