//! Statuses: the lives a symbol refers to, such as `x`, `xy` or a last-survivor `\overline{xy}`.

use serde::Deserialize;

use crate::error::Result;
use super::symbol::{Mark, Side, SymbolTree};

/// An order-of-death number attached to the life at `position` in a joint status.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Deserialize)]
pub struct PrecedenceAnnotation {
    #[serde(alias = "index", alias = "pos")]
    pub position: usize,
    pub order: u32,
    #[serde(default)]
    pub side: Side,
}

impl PrecedenceAnnotation {
    pub fn new(position: usize, order: u32, side: Side) -> Self {
        Self { position, order, side }
    }
}

/// Decodes a precedence list from its JSON text, such as
/// `[{"position": 0, "order": 2}, {"position": 1, "order": 1, "side": "bottom"}]`.
///
/// Blank text is an empty list.
pub fn decode_precedence(text: &str) -> Result<Vec<PrecedenceAnnotation>> {
    if text.trim().is_empty() {
        return Ok(vec![]);
    }
    Ok(serde_json::from_str(text)?)
}

/// Like [decode_precedence], but logs and discards anything that does not decode.
pub fn decode_precedence_lenient(text: &str) -> Vec<PrecedenceAnnotation> {
    decode_precedence(text).unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring malformed precedence list");
        vec![]
    })
}

/// The lives of a status, in the order they appear. Only letters are lives; everything else is
/// dropped.
pub fn lives(text: &str) -> Vec<char> {
    text.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Returns the annotation for the life at `position`. When several target the same position, the
/// last one in the list is used.
fn annotation_at(precedence: &[PrecedenceAnnotation], position: usize) -> Option<&PrecedenceAnnotation> {
    precedence.iter().rev().find(|a| a.position == position)
}

/// Parses a status into a tree.
///
/// A single life is a lone leaf and several lives form a row in their written order. With
/// `last_survivor` set the row is drawn under one overline and `precedence` is not consulted at
/// all. Otherwise any life with an annotation carries its order number above or below it.
///
/// Text without any letters is returned verbatim as a single leaf.
pub fn parse_status(text: &str, precedence: &[PrecedenceAnnotation], last_survivor: bool) -> SymbolTree {
    let lives = lives(text);
    if lives.is_empty() {
        return SymbolTree::leaf(text);
    }

    let leaves = lives.iter().map(|c| SymbolTree::identifier(c.to_string()));

    if last_survivor {
        return SymbolTree::Row(leaves.collect()).decorated(Mark::Overline);
    }

    if precedence.is_empty() {
        let mut leaves = leaves.collect::<Vec<_>>();
        return if leaves.len() == 1 {
            leaves.remove(0)
        } else {
            SymbolTree::Row(leaves)
        };
    }

    SymbolTree::Row(
        leaves
            .enumerate()
            .map(|(i, leaf)| match annotation_at(precedence, i) {
                Some(a) => leaf.decorated(Mark::Order { order: a.order, side: a.side }),
                None => leaf,
            })
            .collect()
    )
}
