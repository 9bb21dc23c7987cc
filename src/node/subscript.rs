//! The lower-right expression of a symbol, such as `x:n`, `60|xy` or `x|y`.
//!
//! The divider `|` is overloaded. After digits it closes a deferral period (`60|x`), which
//! applies to everything that follows it. Anywhere else it separates the two statuses of a
//! reversionary annuity (`x|y`), in which case nothing else in the expression is interpreted.

use once_cell::sync::Lazy;
use regex::Regex;

use super::angle_marker::{angle, is_angle_eligible, AngleVariant, DIVIDER};
use super::status::{parse_status, PrecedenceAnnotation};
use super::symbol::SymbolTree;

const COLON: &str = ":";

/// Any digit directly before a divider marks a deferral period.
static DEFERRAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d\|").unwrap());

/// A deferral period at the start of the expression, and the remainder it applies to. The
/// divider must follow the digits directly, as in [DEFERRAL].
static DEFERRAL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\|(.*)$").unwrap());

/// A duration term which is itself a deferral period, such as the `10|` of `x:10|`.
static DEFERRED_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*\|$").unwrap());

/// Settings which control how a subscript is composed.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct SubscriptOptions {
    /// How to enclose eligible durations. `None` leaves them as plain leaves.
    pub angle: Option<AngleVariant>,

    pub precedence: Vec<PrecedenceAnnotation>,

    pub last_survivor: bool,
}

impl SubscriptOptions {
    pub fn with_angle(angle: AngleVariant) -> Self {
        Self { angle: Some(angle), ..Default::default() }
    }
}

/// The reading chosen for a subscript. Exposed so that callers can inspect how an ambiguous
/// expression was interpreted without walking the tree.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum SubscriptShape {
    Reversionary,
    Deferred,
    Durations,
    Status,
}

/// Decides how `text` will be read by [compose_subscript]. The checks are tried in this order.
pub fn classify_subscript(text: &str) -> SubscriptShape {
    if text.contains(DIVIDER) && !DEFERRAL.is_match(text) {
        SubscriptShape::Reversionary
    } else if DEFERRAL_PREFIX.is_match(text) {
        SubscriptShape::Deferred
    } else if text.contains(COLON) {
        SubscriptShape::Durations
    } else {
        SubscriptShape::Status
    }
}

/// Composes a full lower-right expression into one tree. This never fails; text that cannot be
/// read any other way ends up as a literal leaf.
pub fn compose_subscript(text: &str, options: &SubscriptOptions) -> SymbolTree {
    let shape = classify_subscript(text);
    tracing::debug!(text, ?shape, "composing subscript");

    match shape {
        SubscriptShape::Reversionary => compose_reversionary(text),
        SubscriptShape::Deferred => compose_deferred(text, options),
        SubscriptShape::Durations => compose_durations(text, options),
        SubscriptShape::Status => parse_status(text, &options.precedence, options.last_survivor),
    }
}

/// `x|y`: each side is its own plain status.
fn compose_reversionary(text: &str) -> SymbolTree {
    let mut items = vec![];
    for (i, side) in text.split(DIVIDER).enumerate() {
        if i > 0 {
            items.push(SymbolTree::operator(DIVIDER));
        }
        items.push(parse_status(side.trim(), &[], false));
    }
    SymbolTree::Row(items)
}

/// `60|x:n`: the period and a divider, then the rest composed as if the prefix were absent.
fn compose_deferred(text: &str, options: &SubscriptOptions) -> SymbolTree {
    let Some(captures) = DEFERRAL_PREFIX.captures(text) else {
        return parse_status(text, &options.precedence, options.last_survivor);
    };

    SymbolTree::Row(vec![
        SymbolTree::number(&captures[1]),
        SymbolTree::operator(DIVIDER),
        compose_subscript(captures[2].trim(), options),
    ])
}

/// `xy:n:10|`: a status followed by duration terms.
fn compose_durations(text: &str, options: &SubscriptOptions) -> SymbolTree {
    let mut parts = text.split(COLON);
    let status = parts.next().unwrap_or_default();

    let mut items = vec![parse_status(status.trim(), &options.precedence, options.last_survivor)];
    for part in parts {
        items.push(SymbolTree::operator(COLON));
        items.push(duration_term(part.trim(), options.angle));
    }
    SymbolTree::Row(items)
}

fn duration_term(token: &str, variant: Option<AngleVariant>) -> SymbolTree {
    if let Some(captures) = DEFERRED_TERM.captures(token) {
        return SymbolTree::Row(vec![
            SymbolTree::leaf(&captures[1]),
            SymbolTree::operator(DIVIDER),
        ]);
    }

    match variant {
        Some(variant) if is_angle_eligible(token) => angle(token, variant),
        _ => SymbolTree::leaf(token),
    }
}
