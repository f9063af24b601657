// src/graphe/coords.rs
//
// Pixel <-> math (affine, Y inversé : y math croissant = vers le haut)

use super::config::GraphConfig;

pub fn math_to_pixel_x(mx: f64, c: &GraphConfig) -> f64 {
    (mx - c.bornes.x_min) / c.bornes.largeur() * c.largeur_px()
}

pub fn math_to_pixel_y(my: f64, c: &GraphConfig) -> f64 {
    c.hauteur_px() - (my - c.bornes.y_min) / c.bornes.hauteur() * c.hauteur_px()
}

pub fn pixel_to_math_x(px: f64, c: &GraphConfig) -> f64 {
    c.bornes.x_min + px / c.largeur_px() * c.bornes.largeur()
}

pub fn pixel_to_math_y(py: f64, c: &GraphConfig) -> f64 {
    c.bornes.y_min + (c.hauteur_px() - py) / c.hauteur_px() * c.bornes.hauteur()
}
