// src/calcul/simple.rs
//
// Mode simple (séquentiel) : machine d’état
// -----------------------------------------
// État : { affichage, précédent, opérateur, attente_operande }
// - chiffres : pas de zéros de tête multiples, 16 caractères max, un seul '.'
// - opérateur répété : remplace l’opérateur en attente
// - opérateurs enchaînés : calcule le résultat intermédiaire
// - division par zéro : affichage "Error", qui bloque opérateurs et '=' jusqu’à C
//
// Chaque calcul terminé renvoie un `Calcul` (pour l’historique).

use crate::noyau::format::{arrondi_significatif, SENTINELLE_ERREUR};
use crate::noyau::format_value;

/// Longueur maximale d’une saisie.
pub const ENTREE_MAX: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operateur::Plus),
            "-" | "−" => Some(Operateur::Moins),
            "*" | "×" => Some(Operateur::Fois),
            "/" | "÷" => Some(Operateur::Divise),
            _ => None,
        }
    }

    /// Symbole montré dans l’historique : '*' => 'x', '/' => '÷'.
    pub fn libelle(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "x",
            Operateur::Divise => "÷",
        }
    }
}

/// a op b ; None pour une division par zéro. Résultat arrondi à 12 chiffres significatifs.
pub fn calculate(a: f64, b: f64, op: Operateur) -> Option<f64> {
    let r = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return None;
            }
            a / b
        }
    };
    Some(arrondi_significatif(r))
}

/// Un calcul terminé : "a op b" = resultat.
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatSimple {
    pub affichage: String,
    pub precedent: Option<String>,
    pub operateur: Option<Operateur>,
    pub attente_operande: bool,
}

impl Default for EtatSimple {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            precedent: None,
            operateur: None,
            attente_operande: false,
        }
    }
}

impl EtatSimple {
    pub fn en_erreur(&self) -> bool {
        self.affichage == SENTINELLE_ERREUR
    }

    /// Valeur affichée (None sur "Error").
    pub fn valeur(&self) -> Option<f64> {
        if self.en_erreur() {
            return None;
        }
        self.affichage.parse::<f64>().ok()
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn chiffre(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        // Nouvelle saisie après un opérateur, un '=' ou une erreur
        if self.attente_operande || self.en_erreur() {
            self.affichage = c.to_string();
            self.attente_operande = false;
            return;
        }

        if self.affichage == "0" {
            // "00" => "0" ; "05" => "5"
            self.affichage = c.to_string();
            return;
        }
        if self.affichage.chars().count() >= ENTREE_MAX {
            return;
        }
        self.affichage.push(c);
    }

    pub fn point(&mut self) {
        if self.attente_operande || self.en_erreur() {
            self.affichage = "0.".to_string();
            self.attente_operande = false;
            return;
        }
        if self.affichage.contains('.') {
            return;
        }
        self.affichage.push('.');
    }

    /// Backspace : retire le dernier caractère de la saisie en cours.
    pub fn retour_arriere(&mut self) {
        if self.attente_operande || self.en_erreur() {
            return;
        }
        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = "0".to_string();
        }
    }

    /// Remplace la saisie (MR, rappel d’historique).
    pub fn rappelle(&mut self, texte: impl Into<String>) {
        self.affichage = texte.into();
        self.attente_operande = false;
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn operateur(&mut self, op: Operateur) -> Option<Calcul> {
        if self.en_erreur() {
            return None;
        }

        // Deux opérateurs d’affilée : on remplace seulement
        if self.attente_operande && self.precedent.is_some() {
            self.operateur = Some(op);
            return None;
        }

        // Enchaînement : résultat intermédiaire
        if self.precedent.is_some() && self.operateur.is_some() && !self.attente_operande {
            let calcul = self.calcule()?;
            self.affichage = calcul.resultat.clone();
            self.precedent = Some(calcul.resultat.clone());
            self.operateur = Some(op);
            self.attente_operande = true;
            return Some(calcul);
        }

        // Nouvelle opération
        self.precedent = Some(self.affichage.clone());
        self.operateur = Some(op);
        self.attente_operande = true;
        None
    }

    pub fn egal(&mut self) -> Option<Calcul> {
        if self.precedent.is_none() || self.operateur.is_none() || self.en_erreur() {
            return None;
        }

        let calcul = self.calcule()?;
        self.affichage = calcul.resultat.clone();
        self.precedent = None;
        self.operateur = None;
        self.attente_operande = true;
        Some(calcul)
    }

    /// C : état initial.
    pub fn efface(&mut self) {
        *self = Self::default();
    }

    /// CE : efface la saisie en cours, garde l’opération en attente.
    pub fn efface_entree(&mut self) {
        if self.en_erreur() {
            self.efface();
            return;
        }
        self.affichage = "0".to_string();
    }

    /// precedent op affichage ; une division par zéro passe l’état en "Error".
    fn calcule(&mut self) -> Option<Calcul> {
        let op = self.operateur?;
        let texte_a = self.precedent.clone()?;
        let a = texte_a.parse::<f64>().ok()?;
        let b = self.valeur()?;

        match calculate(a, b, op) {
            Some(r) => Some(Calcul {
                expression: format!("{texte_a} {} {}", op.libelle(), self.affichage),
                resultat: format_value(r),
            }),
            None => {
                log::debug!("mode simple : division par zéro ({texte_a} / {})", self.affichage);
                self.affichage = SENTINELLE_ERREUR.to_string();
                self.precedent = None;
                self.operateur = None;
                self.attente_operande = false;
                None
            }
        }
    }
}
