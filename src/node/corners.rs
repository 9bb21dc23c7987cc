//! Four-corner assembly: a base symbol with up to two prescripts, a subscript and a superscript.

use super::subscript::{compose_subscript, SubscriptOptions};
use super::symbol::SymbolTree;

/// Everything that can surround a base symbol. Corners hold their raw text; blank text counts as
/// absent.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct CornerSet {
    /// The base symbol, already decorated.
    pub base: SymbolTree,

    /// The main subscript, composed with [compose_subscript] using `subscript`.
    pub lower_right: Option<String>,
    pub upper_right: Option<String>,
    pub lower_left: Option<String>,
    pub upper_left: Option<String>,

    /// A function symbol written before the whole notation in parentheses, as the `P` of
    /// `P(Ā_x)`.
    pub wrapper: Option<String>,

    pub subscript: SubscriptOptions,
}

impl CornerSet {
    /// A corner set with only a base symbol.
    pub fn new(base: SymbolTree) -> Self {
        Self {
            base,
            lower_right: None,
            upper_right: None,
            lower_left: None,
            upper_left: None,
            wrapper: None,
            subscript: SubscriptOptions::default(),
        }
    }
}

fn present(corner: &Option<String>) -> Option<&str> {
    corner.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn token_slot(corner: &Option<String>) -> Option<Box<SymbolTree>> {
    present(corner).map(|text| Box::new(SymbolTree::from_tokens(text)))
}

/// Assembles a corner set into a single tree.
///
/// If either prescript is present the result is a [SymbolTree::PreSup] with every slot listed,
/// even the empty ones. Otherwise the result is a [SymbolTree::SubSup] with whichever of the
/// subscript and superscript exist, or the bare base when neither does. A wrapper is applied
/// last, around the finished tree.
pub fn assemble(corners: &CornerSet) -> SymbolTree {
    let lower_right = present(&corners.lower_right)
        .map(|text| Box::new(compose_subscript(text, &corners.subscript)));
    let upper_right = token_slot(&corners.upper_right);
    let lower_left = token_slot(&corners.lower_left);
    let upper_left = token_slot(&corners.upper_left);
    let base = Box::new(corners.base.clone());

    let tree = if lower_left.is_some() || upper_left.is_some() {
        SymbolTree::PreSup {
            base,
            pre_sub: lower_left,
            pre_sup: upper_left,
            post_sub: lower_right,
            post_sup: upper_right,
        }
    } else if lower_right.is_some() || upper_right.is_some() {
        SymbolTree::SubSup { base, sub: lower_right, sup: upper_right }
    } else {
        *base
    };

    match present(&corners.wrapper) {
        Some(wrapper) => SymbolTree::Row(vec![
            SymbolTree::identifier(wrapper),
            SymbolTree::operator("("),
            tree,
            SymbolTree::operator(")"),
        ]),
        None => tree,
    }
}
