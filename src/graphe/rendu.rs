// src/graphe/rendu.rs
//
// Données prêtes à peindre (aucune dépendance egui)
// -------------------------------------------------
// - pas des graduations selon l’étendue visible
// - valeurs de graduation k·pas dans [min, max]
// - position pixel des axes (None hors canevas)
// - polylignes de la courbe : « lever le stylo » sur les trous

use super::config::GraphConfig;
use super::coords::{math_to_pixel_x, math_to_pixel_y};
use super::echantillon::SamplePoint;

/// Au-delà de cette marge (pixels) hors canevas, un point coupe la courbe.
pub const MARGE_HORS_CANEVAS: f64 = 100.0;

/// 10 si étendue > 100, 5 si > 20, sinon 1.
pub fn pas_graduation(etendue: f64) -> f64 {
    if etendue > 100.0 {
        10.0
    } else if etendue > 20.0 {
        5.0
    } else {
        1.0
    }
}

/// Graduations k·pas comprises dans [min, max] (croissantes).
pub fn graduations(min: f64, max: f64, pas: f64) -> Vec<f64> {
    if pas.is_nan() || pas <= 0.0 || !min.is_finite() || !max.is_finite() || min > max {
        return Vec::new();
    }
    let premier = (min / pas).ceil() as i64;
    let dernier = (max / pas).floor() as i64;
    (premier..=dernier).map(|k| k as f64 * pas).collect()
}

/// Pixel Y de l’axe des abscisses (y = 0), si visible.
pub fn axe_x_pixel(c: &GraphConfig) -> Option<f64> {
    let b = &c.bornes;
    (b.y_min <= 0.0 && 0.0 <= b.y_max).then(|| math_to_pixel_y(0.0, c))
}

/// Pixel X de l’axe des ordonnées (x = 0), si visible.
pub fn axe_y_pixel(c: &GraphConfig) -> Option<f64> {
    let b = &c.bornes;
    (b.x_min <= 0.0 && 0.0 <= b.x_max).then(|| math_to_pixel_x(0.0, c))
}

/// Ancre des étiquettes : sur l’axe s’il est visible, sinon collée au bord le plus proche.
pub fn ancre_etiquettes(axe: Option<f64>, valeur_brute: f64, taille: f64) -> f64 {
    axe.unwrap_or(valeur_brute).clamp(0.0, taille)
}

/// Ligne de la table de valeurs : x à 2 décimales, f(x) à 4 décimales ou "undefined".
pub fn ligne_table(p: &SamplePoint) -> (String, String) {
    let y = match p.y {
        Some(y) => format!("{y:.4}"),
        None => "undefined".to_string(),
    };
    (format!("{:.2}", p.x), y)
}

/// Points -> polylignes en pixels. Une polyligne s’arrête sur un y absent
/// ou un point trop loin hors du canevas ; seules celles de 2 points et plus sont gardées.
pub fn segments_courbe(points: &[SamplePoint], c: &GraphConfig) -> Vec<Vec<[f64; 2]>> {
    let haut = -MARGE_HORS_CANEVAS;
    let bas = c.hauteur_px() + MARGE_HORS_CANEVAS;

    let mut segments = Vec::new();
    let mut courant: Vec<[f64; 2]> = Vec::new();

    for p in points {
        let pixel = p.y.map(|y| [math_to_pixel_x(p.x, c), math_to_pixel_y(y, c)]);
        match pixel {
            Some(px) if px[1] >= haut && px[1] <= bas => courant.push(px),
            _ => {
                if courant.len() >= 2 {
                    segments.push(std::mem::take(&mut courant));
                } else {
                    courant.clear();
                }
            }
        }
    }
    if courant.len() >= 2 {
        segments.push(courant);
    }
    segments
}
