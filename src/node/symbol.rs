//! The definition of the symbol tree itself.

use serde::Deserialize;

/// The role a leaf plays in a notation. Emitters use this to choose the element a leaf is
/// written as; it has no effect on the shape of the tree.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum LeafKind {
    /// A symbol or life identifier, such as `a` or `x`.
    Identifier,

    /// A run of decimal digits, such as `60`.
    Number,

    /// A separator or grouping mark, such as `:`, `|` or `(`.
    Operator,
}

impl LeafKind {
    /// Picks the kind for a piece of leaf text. Pure digit runs are numbers, a single character
    /// which is neither a letter nor a digit is an operator, and everything else (including the
    /// empty string) is an identifier.
    pub fn classify(text: &str) -> LeafKind {
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            return LeafKind::Number;
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_alphanumeric() => LeafKind::Operator,
            _ => LeafKind::Identifier,
        }
    }
}

/// A piece of text with no further structure.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Leaf {
    pub text: String,
    pub kind: LeafKind,
}

/// Which side of a life an order-of-death number sits on.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Deserialize)]
#[serde(from = "String")]
pub enum Side {
    #[default]
    Top,
    Bottom,
}

impl From<String> for Side {
    /// Only the word `bottom`, in any case, selects the lower side.
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("bottom") {
            Side::Bottom
        } else {
            Side::Top
        }
    }
}

/// A mark drawn over, under or around a subtree.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Mark {
    /// A short accent bar, used for continuous functions.
    Macron,

    /// Two dots, used for annuities-due.
    DoubleDot,

    /// A small circle, used for complete expectations.
    Ring,

    /// A stretched bar over a whole group, used for last-survivor statuses.
    Overline,

    /// The actuarial angle enclosing a duration.
    Angle,

    /// An order-of-death number attached to a single life.
    Order { order: u32, side: Side },
}

/// A node in an assembled notation.
///
/// Every optional slot of [SymbolTree::SubSup] and [SymbolTree::PreSup] is kept as `None` rather
/// than dropped, so emitters can write an explicit empty marker in that position.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum SymbolTree {
    Leaf(Leaf),

    Decorated(Box<SymbolTree>, Mark),

    SubSup {
        base: Box<SymbolTree>,
        sub: Option<Box<SymbolTree>>,
        sup: Option<Box<SymbolTree>>,
    },

    PreSup {
        base: Box<SymbolTree>,
        pre_sub: Option<Box<SymbolTree>>,
        pre_sup: Option<Box<SymbolTree>>,
        post_sub: Option<Box<SymbolTree>>,
        post_sup: Option<Box<SymbolTree>>,
    },

    Row(Vec<SymbolTree>),
}

impl SymbolTree {
    /// Creates a leaf, classifying its text with [LeafKind::classify].
    pub fn leaf(text: impl Into<String>) -> SymbolTree {
        let text = text.into();
        let kind = LeafKind::classify(&text);
        SymbolTree::Leaf(Leaf { text, kind })
    }

    /// Creates a leaf which is always treated as an identifier, whatever its text.
    pub fn identifier(text: impl Into<String>) -> SymbolTree {
        SymbolTree::Leaf(Leaf { text: text.into(), kind: LeafKind::Identifier })
    }

    pub fn number(text: impl Into<String>) -> SymbolTree {
        SymbolTree::Leaf(Leaf { text: text.into(), kind: LeafKind::Number })
    }

    pub fn operator(text: impl Into<String>) -> SymbolTree {
        SymbolTree::Leaf(Leaf { text: text.into(), kind: LeafKind::Operator })
    }

    /// Returns this tree wrapped in the given mark.
    pub fn decorated(self, mark: Mark) -> SymbolTree {
        SymbolTree::Decorated(Box::new(self), mark)
    }

    /// Splits short corner text such as `n|`, `(12)` or `t|u` into leaves. Digit runs stay
    /// together, every letter becomes its own identifier and every other visible character
    /// becomes an operator. Whitespace is dropped.
    ///
    /// A single token is returned on its own rather than inside a row. Text with no visible
    /// characters is returned verbatim as one leaf.
    pub fn from_tokens(text: &str) -> SymbolTree {
        let mut items = vec![];
        let mut digits = String::new();

        for c in text.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            if !digits.is_empty() {
                items.push(SymbolTree::number(core::mem::take(&mut digits)));
            }

            if c.is_whitespace() {
                continue;
            } else if c.is_alphabetic() {
                items.push(SymbolTree::identifier(c.to_string()));
            } else {
                items.push(SymbolTree::operator(c.to_string()));
            }
        }
        if !digits.is_empty() {
            items.push(SymbolTree::number(digits));
        }

        match items.len() {
            0 => SymbolTree::identifier(text),
            1 => items.remove(0),
            _ => SymbolTree::Row(items),
        }
    }

    /// If this node is a leaf, returns its text.
    pub fn leaf_text(&self) -> Option<&str> {
        if let SymbolTree::Leaf(leaf) = self {
            Some(&leaf.text)
        } else {
            None
        }
    }

    /// Returns every leaf of the tree in reading order (prescripts before the base).
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = vec![];
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        match self {
            SymbolTree::Leaf(leaf) => out.push(leaf),
            SymbolTree::Decorated(inner, _) => inner.collect_leaves(out),
            SymbolTree::SubSup { base, sub, sup } => {
                base.collect_leaves(out);
                for slot in [sub, sup].into_iter().flatten() {
                    slot.collect_leaves(out);
                }
            }
            SymbolTree::PreSup { base, pre_sub, pre_sup, post_sub, post_sup } => {
                for slot in [pre_sub, pre_sup].into_iter().flatten() {
                    slot.collect_leaves(out);
                }
                base.collect_leaves(out);
                for slot in [post_sub, post_sup].into_iter().flatten() {
                    slot.collect_leaves(out);
                }
            }
            SymbolTree::Row(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}
