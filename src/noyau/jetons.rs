// src/noyau/jetons.rs

use super::fonctions::est_fonction;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions, constantes (pi, e) et variables liées (x)
    // NOTE: rpn.rs décide si c’est une fonction (table) ou un atome.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Bang,  // ! (factorielle postfixée)
    Comma, // séparateur d’arguments : nthRoot(x, n)

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (12, 3.5, .5) + exposant (1e5, 2.5e-3) ; "3e" => 3 puis ident(e)
/// - opérateurs + - * / ^ ! et la virgule
/// - parenthèses ( )
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (sensibles à la casse : nthRoot)
/// - alias unicode : π => pi, × => *, ÷ => / (√ est réécrit en amont, voir eval.rs)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' | '−' => Some(Tok::Minus),
            '*' | '×' => Some(Tok::Star),
            '/' | '÷' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '!' => Some(Tok::Bang),
            ',' => Some(Tok::Comma),
            'π' => Some(Tok::Ident("pi".to_string())),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants ASCII
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        // Nombres
        if c.is_ascii_digit() || c == '.' {
            let (n, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(n));
            i = fin;
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Lit un littéral numérique à partir de `debut`; renvoie (valeur, index de fin).
fn lire_nombre(chars: &[char], debut: usize) -> Result<(f64, usize), String> {
    let mut i = debut;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    // exposant seulement si suivi d’un chiffre (éventuellement signé)
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    let texte: String = chars[debut..i].iter().collect();
    if texte == "." {
        return Err("nombre invalide: '.'".into());
    }
    if i < chars.len() && chars[i] == '.' {
        return Err(format!("nombre invalide: '{texte}.'"));
    }
    let v = texte
        .parse::<f64>()
        .map_err(|_| format!("nombre invalide: '{texte}'"))?;
    Ok((v, i))
}

/* ------------------------ Multiplication implicite ------------------------ */

/// Fin de facteur : ce qui précède peut être multiplié implicitement.
fn termine_facteur(t: &Tok) -> bool {
    match t {
        Tok::Num(_) | Tok::RPar | Tok::Bang => true,
        Tok::Ident(nom) => !est_fonction(nom),
        _ => false,
    }
}

/// Début de facteur : ce qui suit peut recevoir un '*' implicite.
fn commence_facteur(t: &Tok) -> bool {
    matches!(t, Tok::LPar | Tok::Ident(_))
}

/// Insère les '*' implicites : 2(3) ; (2)(3) ; 2pi ; 3e ; 2sin(x) ; x(x+1).
/// "2 3" n’est PAS une multiplication (reste une erreur de syntaxe).
pub fn insere_mul_implicite(tokens: Vec<Tok>) -> Vec<Tok> {
    let mut out = Vec::with_capacity(tokens.len() + tokens.len() / 2);
    let mut it = tokens.into_iter().peekable();

    while let Some(cur) = it.next() {
        let mul = termine_facteur(&cur) && it.peek().is_some_and(commence_facteur);
        out.push(cur);
        if mul {
            out.push(Tok::Star);
        }
    }
    out
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Bang => "!".to_string(),
            Tok::Comma => ",".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
