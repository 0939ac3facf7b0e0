//! Header scanner for `PairPotential.h`
//!
//! Finds the lines that open a class definition and keeps the ones declaring
//! a direct subclass of [`ROOT_CLASS`]. This is a line-based heuristic over
//! whitespace tokens, not a C++ parser: comments, multi-line declarations,
//! templates, and nested scopes are never matched, and a line that fails to
//! fit either known layout is skipped without a diagnostic.
//!
//! Known limitations, preserved deliberately:
//!
//! - A class deriving from a *subclass* of the root (`class WCA : public LJ`)
//!   is not detected, even though it may well need its own dispatch entry.
//! - A class deriving from the root purely to adapt the interface, without a
//!   new force kernel, is still included.

use tracing::debug;

/// The fixed interaction-potential base type. Only its direct subclasses
/// are discovered.
pub const ROOT_CLASS: &str = "PairPotential";

/// A class-opening line that qualified: `name` is a direct subclass of
/// [`ROOT_CLASS`], and `base` always equals [`ROOT_CLASS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    pub base: String,
}

/// Scan header text for direct subclasses of [`ROOT_CLASS`].
///
/// Yields one [`ClassDeclaration`] per qualifying class-opening line, in
/// first-appearance order. The iterator is lazy, finite, and single-pass;
/// non-matching lines are silently skipped.
pub fn scan(source: &str) -> impl Iterator<Item = ClassDeclaration> + '_ {
    source.lines().filter_map(|line| {
        let (name, base) = split_declaration(line)?;
        if base != ROOT_CLASS || name == ROOT_CLASS {
            return None;
        }
        debug!(name, "direct {ROOT_CLASS} subclass");
        Some(ClassDeclaration {
            name: name.to_string(),
            base: base.to_string(),
        })
    })
}

/// Extract the raw (name, base) pair from a candidate class-opening line.
///
/// A candidate has more than three whitespace tokens and starts with the
/// `class` keyword. Two layouts are recognized:
///
/// - `class Name : public Base {` — base sits in token slot 4
/// - `class Name: public Base {` — the name carries the colon; base sits
///   in slot 3
///
/// A trailing `{` is stripped from the base token. Anything else, including
/// a base slot past the end of the line, yields `None`.
fn split_declaration(line: &str) -> Option<(&str, &str)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() <= 3 || tokens[0] != "class" {
        return None;
    }

    let (name, base_slot) = match tokens[1].strip_suffix(':') {
        Some(stripped) => (stripped, 3),
        None => (tokens[1], 4),
    };

    let base = *tokens.get(base_slot)?;
    let base = base.strip_suffix('{').unwrap_or(base);
    Some((name, base))
}

// ============================================================================
// Tests
// ============================================================================
