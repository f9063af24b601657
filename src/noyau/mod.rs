//! Noyau d’évaluation (f64)
//!
//! Organisation interne :
//! - format.rs    : affichage canonique (12 chiffres significatifs, seuils exponentiels)
//! - domaine.rs   : pré-contrôles factorielle / sqrt sur formes littérales
//! - fonctions.rs : AngleMode + table des fonctions nommées (choisie par appel)
//! - jetons.rs    : tokenisation + '*' implicites
//! - rpn.rs       : shunting-yard + construction Expr
//! - expr.rs      : AST + évaluation
//! - eval.rs      : pipeline complet -> ExpressionResult

pub mod domaine;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::{evaluate, evaluate_with, ExpressionResult};
pub use fonctions::AngleMode;
pub use format::format_value;
