// src/noyau/expr.rs
//
// AST numérique (f64) + évaluation
// --------------------------------
// - Construit par rpn.rs (from_rpn)
// - Évalué avec un Contexte : table de fonctions (mode d’angle) + variables liées
// - Aucune mémoire entre deux appels

use std::collections::HashMap;

use super::fonctions::TableFonctions;

/// Au-delà, n! déborde un f64 (171! = +inf).
const FACTORIELLE_MAX: f64 = 170.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Var(String),

    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Fact(Box<Expr>),

    Appel1(String, Box<Expr>),
    Appel2(String, Box<Expr>, Box<Expr>),
}

/// Ce qu’il faut pour évaluer : fonctions (déjà choisies selon le mode) + variables.
pub struct Contexte<'a> {
    pub fonctions: TableFonctions,
    pub variables: &'a HashMap<String, f64>,
}

impl Expr {
    /// Évalue l’arbre. Les erreurs (variable inconnue, factorielle hors domaine…)
    /// sont des messages internes; NaN/inf sont laissés à l’appelant.
    pub fn eval(&self, ctx: &Contexte<'_>) -> Result<f64, String> {
        use Expr::*;

        let v = match self {
            Num(v) => *v,
            Var(nom) => *ctx
                .variables
                .get(nom)
                .ok_or_else(|| format!("symbole inconnu: {nom}"))?,

            Neg(a) => -a.eval(ctx)?,
            Add(a, b) => a.eval(ctx)? + b.eval(ctx)?,
            Sub(a, b) => a.eval(ctx)? - b.eval(ctx)?,
            Mul(a, b) => a.eval(ctx)? * b.eval(ctx)?,
            Div(a, b) => a.eval(ctx)? / b.eval(ctx)?,
            Pow(a, b) => a.eval(ctx)?.powf(b.eval(ctx)?),
            Fact(a) => factorielle(a.eval(ctx)?)?,

            Appel1(nom, a) => {
                let f = ctx
                    .fonctions
                    .unaire(nom)
                    .ok_or_else(|| format!("fonction inconnue: {nom}"))?;
                f(a.eval(ctx)?)
            }
            Appel2(nom, a, b) => {
                let f = ctx
                    .fonctions
                    .binaire(nom)
                    .ok_or_else(|| format!("fonction inconnue: {nom}"))?;
                f(a.eval(ctx)?, b.eval(ctx)?)
            }
        };
        Ok(v)
    }
}

/// n! pour n entier >= 0 ; +inf au-delà de 170!.
pub fn factorielle(n: f64) -> Result<f64, String> {
    if n.is_nan() || n < 0.0 || n.fract() != 0.0 {
        return Err(format!("factorielle hors domaine: {n}"));
    }
    if n > FACTORIELLE_MAX {
        return Ok(f64::INFINITY);
    }

    let mut acc = 1.0;
    let mut k = 2.0;
    while k <= n {
        acc *= k;
        k += 1.0;
    }
    Ok(acc)
}
