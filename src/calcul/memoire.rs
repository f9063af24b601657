// src/calcul/memoire.rs
//
// Registre mémoire (M+ / M- / MR / MC)
// - un affichage "Error" (ou illisible) ne modifie jamais le registre
// - indicateur "M" tant que le registre est non nul

use crate::noyau::format_value;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memoire {
    valeur: f64,
}

impl Memoire {
    /// M+
    pub fn ajoute(&mut self, affichage: &str) {
        if let Some(v) = lit(affichage) {
            self.valeur += v;
        }
    }

    /// M-
    pub fn retranche(&mut self, affichage: &str) {
        if let Some(v) = lit(affichage) {
            self.valeur -= v;
        }
    }

    /// MR : texte à afficher.
    pub fn rappel(&self) -> String {
        format_value(self.valeur)
    }

    /// MC
    pub fn efface(&mut self) {
        self.valeur = 0.0;
    }

    /// Indicateur "M".
    pub fn active(&self) -> bool {
        self.valeur != 0.0
    }
}

fn lit(affichage: &str) -> Option<f64> {
    affichage
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
