// src/noyau/format.rs
//
// Affichage canonique d’un f64
// ----------------------------
// - Arrondi à 12 chiffres significatifs (efface le bruit binaire : 0.1+0.2 -> "0.3")
// - Re-lecture du texte arrondi -> plus courte représentation décimale
// - Notation exponentielle si |v| >= 1e12 ou 0 < |v| < 1e-6 ("1e+15", "1e-7")

/// Chiffres significatifs conservés à l’affichage.
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Seuil haut : à partir de là, on passe en exponentielle.
const SEUIL_EXP_HAUT: f64 = 1e12;

/// Seuil bas : strictement en dessous (et non nul), exponentielle.
const SEUIL_EXP_BAS: f64 = 1e-6;

/// Sentinelle pour une entrée non finie (contrat violé en amont).
pub const SENTINELLE_ERREUR: &str = "Error";

/// Arrondi à 12 chiffres significatifs, relu en f64.
///
/// `{:.11e}` donne exactement 12 chiffres (1 avant la virgule + 11 après).
pub fn arrondi_significatif(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{:.*e}", CHIFFRES_SIGNIFICATIFS - 1, v)
        .parse::<f64>()
        .unwrap_or(v)
}

/// Texte d’affichage canonique d’une valeur finie.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return SENTINELLE_ERREUR.to_string();
    }

    let r = arrondi_significatif(v);

    // -0 et 0 : toujours "0"
    if r == 0.0 {
        return "0".to_string();
    }

    let abs = r.abs();
    if abs >= SEUIL_EXP_HAUT || abs < SEUIL_EXP_BAS {
        format_exponentiel(r)
    } else {
        // Display f64 = plus courte forme qui relit la même valeur, jamais d’exposant
        format!("{r}")
    }
}

/// "1e15" (Rust) -> "1e+15" ; "1.5e-7" reste tel quel.
fn format_exponentiel(r: f64) -> String {
    let brut = format!("{r:e}");
    match brut.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => brut,
    }
}
