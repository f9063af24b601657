// src/graphe/viewport.rs
//
// Contrôle du viewport (fonctions pures : bornes in -> bornes out)
// ----------------------------------------------------------------
// - zoom  : facteur < 1 rapproche, > 1 éloigne ; le centre garde sa position relative
// - pan   : delta pixels -> delta math (glisser à droite = fenêtre vers la gauche)
// - clamp : 0.01 <= étendue <= 10000 sur chaque axe, recentré sur le milieu

use super::config::{GraphConfig, ViewportBounds};

/// Étendue minimale d’un axe.
pub const ETENDUE_MIN: f64 = 0.01;
/// Étendue maximale d’un axe.
pub const ETENDUE_MAX: f64 = 10000.0;

/// Pas de molette : un cran vers le haut rapproche (0.9), vers le bas éloigne (1/0.9).
pub const FACTEUR_ZOOM: f64 = 0.9;

pub fn zoom(c: &GraphConfig, facteur: f64, cx: f64, cy: f64) -> ViewportBounds {
    let b = &c.bornes;
    clamp(ViewportBounds {
        x_min: cx - (cx - b.x_min) * facteur,
        x_max: cx + (b.x_max - cx) * facteur,
        y_min: cy - (cy - b.y_min) * facteur,
        y_max: cy + (b.y_max - cy) * facteur,
    })
}

/// Non clampé : une translation ne change pas l’étendue.
pub fn pan(c: &GraphConfig, dx_pixels: f64, dy_pixels: f64) -> ViewportBounds {
    let b = &c.bornes;
    let dx = dx_pixels * b.largeur() / c.largeur_px();
    let dy = dy_pixels * b.hauteur() / c.hauteur_px();
    ViewportBounds {
        x_min: b.x_min - dx,
        x_max: b.x_max - dx,
        y_min: b.y_min + dy,
        y_max: b.y_max + dy,
    }
}

pub fn clamp(b: ViewportBounds) -> ViewportBounds {
    let (x_min, x_max) = clamp_axe(b.x_min, b.x_max);
    let (y_min, y_max) = clamp_axe(b.y_min, b.y_max);
    ViewportBounds {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

fn clamp_axe(min: f64, max: f64) -> (f64, f64) {
    let etendue = max - min;
    let cible = if etendue < ETENDUE_MIN {
        ETENDUE_MIN
    } else if etendue > ETENDUE_MAX {
        ETENDUE_MAX
    } else {
        return (min, max);
    };
    let milieu = (min + max) / 2.0;
    (milieu - cible / 2.0, milieu + cible / 2.0)
}
