//! The actuarial angle drawn around duration tokens, as in `a_{x:n⌉}`.

use super::symbol::{Mark, SymbolTree};

/// Duration letters which may be enclosed in an angle.
pub const DURATION_LETTERS: [char; 4] = ['n', 'm', 'k', 't'];

/// The divider character, shared by angles, deferral prefixes and reversionary statuses.
pub const DIVIDER: &str = "|";

/// How an eligible duration is enclosed.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum AngleVariant {
    /// The token followed by a divider, both under the angle. Used by annuities.
    WithDivider,

    /// The angle alone. Used by insurances.
    Plain,
}

impl AngleVariant {
    /// Reads a variant name. `None` means durations should not be enclosed at all, which is also
    /// the answer for unrecognised names.
    pub fn parse_lenient(text: &str) -> Option<AngleVariant> {
        match text.trim().to_ascii_lowercase().as_str() {
            "divider" | "with-divider" | "annuity" => Some(AngleVariant::WithDivider),
            "plain" | "insurance" => Some(AngleVariant::Plain),
            _ => None,
        }
    }
}

/// Returns true if `token` may be enclosed in an angle: either one of the [DURATION_LETTERS] on
/// its own, or a run of digits.
pub fn is_angle_eligible(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if DURATION_LETTERS.contains(&c) => true,
        (Some(_), _) => token.chars().all(|c| c.is_ascii_digit()),
        (None, _) => false,
    }
}

/// Encloses a duration token in an angle. Tokens which are not [eligible](is_angle_eligible)
/// come back as a plain leaf.
pub fn angle(token: &str, variant: AngleVariant) -> SymbolTree {
    if !is_angle_eligible(token) {
        return SymbolTree::leaf(token);
    }

    let inner = match variant {
        AngleVariant::WithDivider => SymbolTree::Row(vec![
            SymbolTree::leaf(token),
            SymbolTree::operator(DIVIDER),
        ]),
        AngleVariant::Plain => SymbolTree::leaf(token),
    };
    inner.decorated(Mark::Angle)
}
