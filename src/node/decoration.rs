//! Accent marks placed over a base symbol.

use super::symbol::{Mark, SymbolTree};

/// The accent drawn over a base symbol, such as the double dot of `ä`.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub enum Decoration {
    #[default]
    None,
    Macron,
    DoubleDot,
    Ring,
}

impl Decoration {
    /// Reads a decoration name. Anything unrecognised, including the empty string, is
    /// [Decoration::None].
    pub fn parse_lenient(text: &str) -> Decoration {
        match text.trim().to_ascii_lowercase().as_str() {
            "macron" | "bar" => Decoration::Macron,
            "double-dot" | "doubledot" | "ddot" => Decoration::DoubleDot,
            "ring" | "circle" => Decoration::Ring,
            _ => Decoration::None,
        }
    }

    /// The mark this decoration draws, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Decoration::None => None,
            Decoration::Macron => Some(Mark::Macron),
            Decoration::DoubleDot => Some(Mark::DoubleDot),
            Decoration::Ring => Some(Mark::Ring),
        }
    }
}

/// Builds a base symbol with its decoration. The symbol is always an identifier leaf, even when
/// it looks like a number or an operator.
pub fn decorate(symbol: &str, kind: Decoration) -> SymbolTree {
    let leaf = SymbolTree::identifier(symbol);
    match kind.mark() {
        Some(mark) => leaf.decorated(mark),
        None => leaf,
    }
}
