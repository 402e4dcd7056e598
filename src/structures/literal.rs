//! Literals are atoms paired with a (boolean) polarity.
//!
//! Here, an atom is the name of a proposition, and a literal with polarity `false` is the negation of the atom.
//!
//! ```rust
//! # use otter_refute::structures::literal::Literal;
//! let literal = Literal::try_from_token("~rain").unwrap();
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), "rain");
//!
//! assert!(literal.negate().polarity());
//! assert_eq!(literal.negate().negate(), literal);
//! assert!(literal.is_complement_of(&Literal::try_from_token("rain").unwrap()));
//! ```
//!
//! Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true'.
//! This ordering fixes the canonical form of a [clause](crate::structures::clause).
//!
//! # Tokens
//!
//! A token is an optional single negation marker (any of [NEGATION_MARKERS]) followed by a name.
//! A name is non-empty and contains no negation marker, whitespace, or `,`.
//! These requirements are checked whenever a literal is built from a string, and so a literal never holds a negated name.

use std::rc::Rc;

use crate::types::err::{self};

/// The name of a proposition.
///
/// Names are shared, as clauses are cloned freely during resolution.
pub type Atom = Rc<str>;

/// Characters read as negation when leading a token.
pub const NEGATION_MARKERS: [char; 3] = ['~', '-', '¬'];

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Debug)]
pub struct Literal {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A literal from a name and a polarity, if the name is valid.
    pub fn try_new(name: &str, polarity: bool) -> Result<Self, err::LiteralError> {
        match valid_name(name) {
            true => Ok(Self::from_atom(Atom::from(name), polarity)),
            false => Err(err::LiteralError::InvalidName(name.to_string())),
        }
    }

    /// A literal from a token, e.g. `p` or `~p`.
    pub fn try_from_token(token: &str) -> Result<Self, err::LiteralError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(err::LiteralError::Empty);
        }

        let (polarity, name) = match token.strip_prefix(&NEGATION_MARKERS[..]) {
            Some(name) => (false, name),
            None => (true, token),
        };

        if name.starts_with(&NEGATION_MARKERS[..]) {
            return Err(err::LiteralError::DoubleNegation(token.to_string()));
        }

        match valid_name(name) {
            true => Ok(Self::from_atom(Atom::from(name), polarity)),
            false => Err(err::LiteralError::InvalidName(token.to_string())),
        }
    }

    /// A literal from an atom known to be valid.
    pub(crate) fn from_atom(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &str {
        &self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether the literal has the same atom as `other`, with opposite polarity.
    pub fn is_complement_of(&self, other: &Self) -> bool {
        self.polarity != other.polarity && self.atom == other.atom
    }
}

fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| NEGATION_MARKERS.contains(&c) || c.is_whitespace() || c == ',')
}

impl std::str::FromStr for Literal {
    type Err = err::LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Literal::try_from_token(s)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "~{}", self.atom),
        }
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.polarity.cmp(&other.polarity)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.polarity == other.polarity && self.atom == other.atom
    }
}

impl Eq for Literal {}

impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.polarity.hash(state);
    }
}
