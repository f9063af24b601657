// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - si name est dans la table des fonctions => fonction (postfixée en RPN, avec son arité)
//    - sinon => atome (pi, e, ou variable liée)
// - Moins unaire : opérateur préfixe Neg, entre * et ^ :  -2^2 = -(2^2) ; 2^-1 = 0.5
// - Plus unaire : ignoré
// - '!' postfixé : lie plus fort que tout (sortie immédiate) : 2^3! = 2^(3!)
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use std::f64::consts::{E, PI};

use super::expr::Expr;
use super::fonctions::{est_binaire, est_fonction, est_unaire};
use super::jetons::Tok;

/// Élément de la sortie postfixée.
#[derive(Clone, Debug, PartialEq)]
pub enum ItemRpn {
    Num(f64),
    Atome(String),
    Op(Tok), // binaire : + - * / ^
    Neg,
    Fact,
    Appel(String, usize),
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Debug)]
enum Pile {
    Op(Tok),
    Neg,
    Fonction(String),
    LPar,
}

fn precedence(p: &Pile) -> i32 {
    match p {
        Pile::Op(Tok::Plus | Tok::Minus) => 1,
        Pile::Op(Tok::Star | Tok::Slash) => 2,
        Pile::Neg => 3,
        Pile::Op(Tok::Caret) => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(30), Star, Num(2), RPar]
///   rpn:    [Num(30), Num(2), Op(Star), Appel("sin", 1)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<ItemRpn>, String> {
    let mut out: Vec<ItemRpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    // une entrée par '(' ouverte : nombre d’arguments vus (virgules + 1)
    let mut arites: Vec<usize> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter les opérateurs unaires et les suites invalides ("2**3", "2 3").
    let mut prev_was_value = false;

    // une fonction DOIT être suivie de '('
    let mut attend_parenthese = false;

    for tok in tokens.iter().cloned() {
        if attend_parenthese && tok != Tok::LPar {
            return Err("fonction sans parenthèse".into());
        }

        match tok {
            Tok::Num(v) => {
                if prev_was_value {
                    return Err("nombre inattendu".into());
                }
                out.push(ItemRpn::Num(v));
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if prev_was_value {
                    return Err(format!("identifiant inattendu: {name}"));
                }
                if est_fonction(&name) {
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    ops.push(Pile::Fonction(name));
                    attend_parenthese = true;
                    prev_was_value = false;
                } else {
                    // constante/variable : sortie directe
                    out.push(ItemRpn::Atome(name));
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err("parenthèse ouvrante inattendue".into());
                }
                ops.push(Pile::LPar);
                arites.push(1);
                attend_parenthese = false;
                prev_was_value = false;
            }

            Tok::Comma => {
                if !prev_was_value {
                    return Err("virgule inattendue".into());
                }
                depile_jusqu_a_parenthese(&mut ops, &mut out)?;
                match arites.last_mut() {
                    Some(n) => *n += 1,
                    None => return Err("virgule hors parenthèses".into()),
                }
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err("parenthèse fermante inattendue".into());
                }
                depile_jusqu_a_parenthese(&mut ops, &mut out)?;

                // retire '('
                ops.pop();
                let n = arites.pop().unwrap_or(1);

                // si une fonction est au sommet, on la sort aussi
                if let Some(Pile::Fonction(_)) = ops.last() {
                    if let Some(Pile::Fonction(name)) = ops.pop() {
                        out.push(ItemRpn::Appel(name, n));
                    }
                } else if n != 1 {
                    return Err("virgule hors appel de fonction".into());
                }

                prev_was_value = true;
            }

            Tok::Bang => {
                if !prev_was_value {
                    return Err("factorielle sans opérande".into());
                }
                out.push(ItemRpn::Fact);
            }

            Tok::Plus if !prev_was_value => {
                // plus unaire : rien à faire
            }

            Tok::Minus if !prev_was_value => {
                // moins unaire : préfixe, ne dépile rien
                ops.push(Pile::Neg);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    return Err(format!("opérateur inattendu: {tok:?}"));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                let p_tok = precedence(&Pile::Op(tok.clone()));
                while let Some(top) = ops.last() {
                    if matches!(top, Pile::LPar | Pile::Fonction(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(p) = ops.pop() {
                        sortie(p, &mut out)?;
                    }
                }

                ops.push(Pile::Op(tok));
                prev_was_value = false;
            }
        }
    }

    if attend_parenthese {
        return Err("fonction sans parenthèse".into());
    }
    if !prev_was_value {
        return Err("expression incomplète".into());
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Pile::LPar) {
            return Err("parenthèses non fermées".into());
        }
        sortie(op, &mut out)?;
    }

    Ok(out)
}

/// Dépile vers la sortie jusqu’à '(' (laissée sur la pile).
fn depile_jusqu_a_parenthese(ops: &mut Vec<Pile>, out: &mut Vec<ItemRpn>) -> Result<(), String> {
    loop {
        match ops.last() {
            None => return Err("parenthèse fermante sans ouvrante".into()),
            Some(Pile::LPar) => return Ok(()),
            Some(_) => {
                if let Some(p) = ops.pop() {
                    sortie(p, out)?;
                }
            }
        }
    }
}

fn sortie(p: Pile, out: &mut Vec<ItemRpn>) -> Result<(), String> {
    match p {
        Pile::Op(t) => out.push(ItemRpn::Op(t)),
        Pile::Neg => out.push(ItemRpn::Neg),
        Pile::Fonction(name) => return Err(format!("fonction sans argument: {name}")),
        Pile::LPar => return Err("parenthèses non fermées".into()),
    }
    Ok(())
}

/// Construit une Expr à partir d’une RPN.
///
/// - Atome "pi" / "e" => constante
/// - autre atome => variable : Expr::Var(name) (résolue à l’évaluation)
pub fn from_rpn(rpn: &[ItemRpn]) -> Result<Expr, String> {
    let mut st: Vec<Expr> = Vec::new();

    for item in rpn.iter().cloned() {
        match item {
            ItemRpn::Num(v) => st.push(Expr::Num(v)),

            ItemRpn::Atome(name) => st.push(match name.as_str() {
                "pi" => Expr::Num(PI),
                "e" => Expr::Num(E),
                _ => Expr::Var(name),
            }),

            ItemRpn::Op(tok) => {
                let b = Box::new(st.pop().ok_or("expression invalide")?);
                let a = Box::new(st.pop().ok_or("expression invalide")?);

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    Tok::Caret => Expr::Pow(a, b),
                    other => return Err(format!("opérateur inconnu en RPN: {other:?}")),
                };
                st.push(e);
            }

            ItemRpn::Neg => {
                let a = st.pop().ok_or("moins sans opérande")?;
                st.push(Expr::Neg(Box::new(a)));
            }

            ItemRpn::Fact => {
                let a = st.pop().ok_or("factorielle sans opérande")?;
                st.push(Expr::Fact(Box::new(a)));
            }

            ItemRpn::Appel(name, 1) if est_unaire(&name) => {
                let x = st.pop().ok_or("fonction sans argument")?;
                st.push(Expr::Appel1(name, Box::new(x)));
            }

            ItemRpn::Appel(name, 2) if est_binaire(&name) => {
                let y = st.pop().ok_or("fonction sans argument")?;
                let x = st.pop().ok_or("fonction sans argument")?;
                st.push(Expr::Appel2(name, Box::new(x), Box::new(y)));
            }

            ItemRpn::Appel(name, n) => {
                return Err(format!("{name} : nombre d’arguments invalide ({n})"));
            }
        }
    }

    if st.len() != 1 {
        return Err("expression invalide".into());
    }
    st.pop().ok_or_else(|| "expression vide".into())
}
