// src/calcul/curseur.rs
//
// Édition d’expression au curseur
// -------------------------------
// - positions en CARACTÈRES (pas en octets : π, √, ÷ sont multi-octets)
// - curseur toujours dans [0, len]
// - '(' insère "()" avec le curseur entre les deux
// - autocomplétion : préfixe alphabétique juste avant le curseur -> noms de fonctions

use crate::noyau::fonctions::noms_fonctions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Gauche,
    Droite,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Edition {
    pub texte: String,
    pub curseur: usize,
}

/// Index d’octet du caractère n° `i` (ou fin de chaîne).
fn octet(texte: &str, i: usize) -> usize {
    texte.char_indices().nth(i).map_or(texte.len(), |(b, _)| b)
}

impl Edition {
    pub fn longueur(&self) -> usize {
        self.texte.chars().count()
    }

    pub fn vide(&mut self) {
        self.texte.clear();
        self.curseur = 0;
    }

    /// Remplace tout le texte, curseur en fin.
    pub fn remplace(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
        self.curseur = self.longueur();
    }

    pub fn insere(&mut self, s: &str) {
        let b = octet(&self.texte, self.curseur);
        self.texte.insert_str(b, s);
        self.curseur += s.chars().count();
    }

    /// Backspace : supprime le caractère avant le curseur.
    pub fn efface_avant(&mut self) {
        if self.curseur == 0 {
            return;
        }
        let b = octet(&self.texte, self.curseur - 1);
        self.texte.remove(b);
        self.curseur -= 1;
    }

    pub fn deplace(&mut self, d: Direction) {
        self.curseur = match d {
            Direction::Gauche => self.curseur.saturating_sub(1),
            Direction::Droite => (self.curseur + 1).min(self.longueur()),
        };
    }

    pub fn insere_parentheses(&mut self) {
        self.insere("()");
        self.curseur -= 1;
    }

    /// Clic à `decalage_x` (pixels depuis le début visible) : frontière de caractère la plus proche.
    pub fn positionne_clic(&mut self, decalage_x: f32, largeur_car: f32, defilement: f32) {
        self.curseur = position_depuis_clic(decalage_x, largeur_car, self.longueur(), defilement);
    }

    /// Préfixe alphabétique qui se termine au curseur ("sq" dans "2+sq|").
    pub fn prefixe(&self) -> Option<&str> {
        let fin = octet(&self.texte, self.curseur);
        let avant = &self.texte[..fin];
        let debut = avant
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_alphabetic())
            .last()
            .map(|(b, _)| b)?;
        Some(&avant[debut..])
    }

    /// Fonctions proposées pour le préfixe courant (vide si aucun préfixe).
    pub fn suggestions(&self) -> Vec<&'static str> {
        self.prefixe().map(suggestions).unwrap_or_default()
    }

    /// Remplace le préfixe par "nom(".
    pub fn complete(&mut self, nom: &str) {
        let n = self.prefixe().map_or(0, |p| p.chars().count());
        for _ in 0..n {
            self.efface_avant();
        }
        self.insere(nom);
        self.insere("(");
    }
}

pub fn position_depuis_clic(
    decalage_x: f32,
    largeur_car: f32,
    longueur: usize,
    defilement: f32,
) -> usize {
    if largeur_car.is_nan() || largeur_car <= 0.0 {
        return longueur;
    }
    let pos = ((decalage_x + defilement) / largeur_car).round();
    if pos <= 0.0 {
        0
    } else {
        (pos as usize).min(longueur)
    }
}

/// Noms de fonctions qui commencent par `prefixe` (sensible à la casse).
pub fn suggestions(prefixe: &str) -> Vec<&'static str> {
    if prefixe.is_empty() {
        return Vec::new();
    }
    noms_fonctions().filter(|n| n.starts_with(prefixe)).collect()
}
