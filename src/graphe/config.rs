// src/graphe/config.rs
//
// Bornes mathématiques + configuration de rendu
// ---------------------------------------------
// - ViewportBounds : l’état persisté / interactif (4 bornes seules)
// - GraphConfig    : bornes + taille du canevas (pixels) + mode d’angle

use serde::{Deserialize, Serialize};

use crate::noyau::AngleMode;

/// Région (x, y) visible. Invariant : x_min < x_max et y_min < y_max.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Cible du bouton « Reset ».
pub const DEFAULT_VIEWPORT: ViewportBounds = ViewportBounds {
    x_min: -10.0,
    x_max: 10.0,
    y_min: -10.0,
    y_max: 10.0,
};

impl Default for ViewportBounds {
    fn default() -> Self {
        DEFAULT_VIEWPORT
    }
}

impl ViewportBounds {
    pub fn largeur(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn hauteur(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Configuration d’UN rendu (reconstruite à chaque frame).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphConfig {
    pub width: u32,
    pub height: u32,
    pub bornes: ViewportBounds,
    pub angle: AngleMode,
}

impl GraphConfig {
    /// Taille nulle ramenée à 1 pixel (un canevas replié ne doit pas diviser par zéro).
    pub fn new(width: u32, height: u32, bornes: ViewportBounds, angle: AngleMode) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            bornes,
            angle,
        }
    }

    pub fn largeur_px(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn hauteur_px(&self) -> f64 {
        f64::from(self.height)
    }
}
