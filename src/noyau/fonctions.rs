// src/noyau/fonctions.rs
//
// Table des fonctions nommées (choisie UNE fois par évaluation)
// -------------------------------------------------------------
// - log = log10, ln = logarithme naturel (jamais l’inverse)
// - DEG : sin/cos/tan convertissent l’argument en radians,
//         asin/acos/atan convertissent le résultat en degrés
// - RAD : définitions standard
// - Hyperboliques : toujours en radians, quel que soit le mode

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Mode d’angle des six fonctions trigonométriques (directes + inverses).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleMode {
    #[default]
    Deg,
    Rad,
}

impl AngleMode {
    pub fn libelle(self) -> &'static str {
        match self {
            AngleMode::Deg => "DEG",
            AngleMode::Rad => "RAD",
        }
    }

    pub fn bascule(self) -> Self {
        match self {
            AngleMode::Deg => AngleMode::Rad,
            AngleMode::Rad => AngleMode::Deg,
        }
    }
}

pub type Unaire = fn(f64) -> f64;
pub type Binaire = fn(f64, f64) -> f64;

/// Noms reconnus comme fonctions (unaires puis binaires).
pub const NOMS_UNAIRES: [&str; 17] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "asinh", "acosh",
    "atanh", "log", "ln", "sqrt", "cbrt", "abs",
];
pub const NOMS_BINAIRES: [&str; 1] = ["nthRoot"];

pub fn est_unaire(nom: &str) -> bool {
    NOMS_UNAIRES.iter().any(|n| *n == nom)
}

pub fn est_binaire(nom: &str) -> bool {
    NOMS_BINAIRES.iter().any(|n| *n == nom)
}

pub fn est_fonction(nom: &str) -> bool {
    est_unaire(nom) || est_binaire(nom)
}

/// Toutes les fonctions (pour l’autocomplétion).
pub fn noms_fonctions() -> impl Iterator<Item = &'static str> {
    NOMS_UNAIRES.iter().chain(NOMS_BINAIRES.iter()).copied()
}

/* ------------------------ Trig en degrés ------------------------ */

fn sin_deg(v: f64) -> f64 {
    (v * PI / 180.0).sin()
}
fn cos_deg(v: f64) -> f64 {
    (v * PI / 180.0).cos()
}
fn tan_deg(v: f64) -> f64 {
    (v * PI / 180.0).tan()
}
fn asin_deg(v: f64) -> f64 {
    v.asin() * 180.0 / PI
}
fn acos_deg(v: f64) -> f64 {
    v.acos() * 180.0 / PI
}
fn atan_deg(v: f64) -> f64 {
    v.atan() * 180.0 / PI
}

/// Racine n-ième réelle.
/// - x < 0 et n entier impair : racine négative
/// - x < 0 sinon, ou n == 0 : NaN (=> "Syntax Error")
fn nth_root(x: f64, n: f64) -> f64 {
    if n == 0.0 {
        return f64::NAN;
    }
    if x < 0.0 {
        let impair = n.fract() == 0.0 && (n % 2.0).abs() == 1.0;
        if !impair {
            return f64::NAN;
        }
        return -(-x).powf(1.0 / n);
    }
    x.powf(1.0 / n)
}

/// Table explicite nom -> implémentation, paramétrée par le mode d’angle.
#[derive(Clone, Copy, Debug)]
pub struct TableFonctions {
    angle: AngleMode,
}

impl TableFonctions {
    pub fn pour(angle: AngleMode) -> Self {
        Self { angle }
    }

    pub fn unaire(&self, nom: &str) -> Option<Unaire> {
        use AngleMode::*;

        let f: Unaire = match (nom, self.angle) {
            ("sin", Deg) => sin_deg,
            ("cos", Deg) => cos_deg,
            ("tan", Deg) => tan_deg,
            ("asin", Deg) => asin_deg,
            ("acos", Deg) => acos_deg,
            ("atan", Deg) => atan_deg,

            ("sin", Rad) => f64::sin,
            ("cos", Rad) => f64::cos,
            ("tan", Rad) => f64::tan,
            ("asin", Rad) => f64::asin,
            ("acos", Rad) => f64::acos,
            ("atan", Rad) => f64::atan,

            ("sinh", _) => f64::sinh,
            ("cosh", _) => f64::cosh,
            ("tanh", _) => f64::tanh,
            ("asinh", _) => f64::asinh,
            ("acosh", _) => f64::acosh,
            ("atanh", _) => f64::atanh,

            ("log", _) => f64::log10,
            ("ln", _) => f64::ln,
            ("sqrt", _) => f64::sqrt,
            ("cbrt", _) => f64::cbrt,
            ("abs", _) => f64::abs,

            _ => return None,
        };
        Some(f)
    }

    pub fn binaire(&self, nom: &str) -> Option<Binaire> {
        match nom {
            "nthRoot" => Some(nth_root),
            _ => None,
        }
    }
}
