// src/graphe/echantillon.rs
//
// Échantillonnage d’une expression en x
// -------------------------------------
// - une évaluation INDÉPENDANTE par point (x lié comme variable)
// - échec / non fini => y absent (un trou dans la courbe, jamais une erreur visible)
// - x croissants, bornes incluses

use std::collections::HashMap;

use crate::noyau::{evaluate_with, AngleMode};

use super::config::GraphConfig;

/// Lignes de la table de valeurs.
pub const LIGNES_TABLE_DEFAUT: usize = 21;

/// Nom de la variable liée.
const VARIABLE: &str = "x";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: Option<f64>,
}

/// Un point par colonne de pixels : exactement `width` points.
pub fn sample_for_plot(expr: &str, c: &GraphConfig) -> Vec<SamplePoint> {
    echantillonne(expr, c, c.width as usize)
}

/// `lignes` points régulièrement espacés de x_min à x_max.
pub fn sample_for_table(expr: &str, c: &GraphConfig, lignes: usize) -> Vec<SamplePoint> {
    echantillonne(expr, c, lignes)
}

/// Variante ponctuelle (trace / inspection).
pub fn evaluate_at_point(expr: &str, x: f64, angle: AngleMode) -> Option<f64> {
    let mut vars = HashMap::with_capacity(1);
    evalue_en(expr, angle, &mut vars, x)
}

fn echantillonne(expr: &str, c: &GraphConfig, n: usize) -> Vec<SamplePoint> {
    let mut vars = HashMap::with_capacity(1);
    let points: Vec<SamplePoint> = (0..n)
        .map(|i| {
            let x = abscisse(c, i, n);
            SamplePoint {
                x,
                y: evalue_en(expr, c.angle, &mut vars, x),
            }
        })
        .collect();

    let absents = points.iter().filter(|p| p.y.is_none()).count();
    if absents > 0 {
        log::debug!("échantillonnage {expr:?} : {absents}/{n} points absents");
    }
    points
}

/// i-ème abscisse sur n, bornes incluses ; un seul point => x_min.
fn abscisse(c: &GraphConfig, i: usize, n: usize) -> f64 {
    if n <= 1 {
        return c.bornes.x_min;
    }
    c.bornes.x_min + (i as f64) / ((n - 1) as f64) * c.bornes.largeur()
}

fn evalue_en(
    expr: &str,
    angle: AngleMode,
    vars: &mut HashMap<String, f64>,
    x: f64,
) -> Option<f64> {
    vars.insert(VARIABLE.to_string(), x);
    evaluate_with(expr, angle, vars)
        .valeur()
        .filter(|v| v.is_finite())
}
