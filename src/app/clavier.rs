// src/app/clavier.rs
//
// Clavier -> appuis normalisés (mêmes textes que les boutons)
// -----------------------------------------------------------
// - touches répétées (maintien) ignorées
// - combinaisons Ctrl/Alt/Cmd ignorées, sauf copier/coller (événements Copy/Paste d’egui)
// - caractères : chiffres, lettres, + - * / ^ ! % ( ) . ,

use eframe::egui::{Event, Key, Modifiers};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entree {
    Bouton(String),
    Copie,
    Colle(String),
}

/// Touche spéciale -> appui.
pub fn touche(key: Key) -> Option<&'static str> {
    Some(match key {
        Key::Enter => "Enter",
        Key::Escape => "C",
        Key::Delete => "CE",
        Key::Backspace => "Backspace",
        Key::ArrowLeft => "ArrowLeft",
        Key::ArrowRight => "ArrowRight",
        Key::ArrowUp => "ArrowUp",
        Key::ArrowDown => "ArrowDown",
        _ => return None,
    })
}

pub fn caractere_accepte(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_alphabetic() || "+-*/^!%().,".contains(c)
}

fn avec_modificateur(m: &Modifiers) -> bool {
    m.ctrl || m.alt || m.command || m.mac_cmd
}

/// Événements d’une frame -> appuis, dans l’ordre.
pub fn traduit(evenements: &[Event]) -> Vec<Entree> {
    // Un maintien produit Key{repeat} + Text : on écarte aussi le texte de la frame.
    let repetition = evenements.iter().any(|e| {
        matches!(
            e,
            Event::Key {
                pressed: true,
                repeat: true,
                ..
            }
        )
    });

    let mut out = Vec::new();
    for e in evenements {
        match e {
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } if !avec_modificateur(modifiers) => {
                if let Some(t) = touche(*key) {
                    out.push(Entree::Bouton(t.to_string()));
                }
            }
            Event::Text(texte) if !repetition => {
                out.extend(
                    texte
                        .chars()
                        .filter(|c| caractere_accepte(*c))
                        .map(|c| Entree::Bouton(c.to_string())),
                );
            }
            Event::Copy => out.push(Entree::Copie),
            Event::Paste(texte) => out.push(Entree::Colle(texte.clone())),
            _ => {}
        }
    }
    out
}
