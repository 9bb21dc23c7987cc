//! Notation families, and how each one maps its attributes onto a [CornerSet].
//!
//! A family is a small data table: a base symbol, a few attributes with enumerated effects
//! (`type: due` gives a double dot, for instance) and a default for the main subscript. Turning
//! attributes into a tree is then a single call to [assemble].

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::NotationError;
use crate::node::{
    assemble, decode_precedence_lenient, decorate, AngleVariant, CornerSet, Decoration,
    PrecedenceAnnotation, Side, SubscriptOptions, SymbolTree,
};

pub mod attr {
    pub const STATUS: &str = "status";
    pub const SUBSCRIPT: &str = "subscript";
    pub const PRECEDENCE: &str = "precedence";
    pub const LAST_SURVIVOR: &str = "last-survivor";
    pub const LOWER_RIGHT: &str = "lower-right";
    pub const UPPER_RIGHT: &str = "upper-right";
    pub const LOWER_LEFT: &str = "lower-left";
    pub const UPPER_LEFT: &str = "upper-left";
    pub const TYPE: &str = "type";
    pub const DEFERRED: &str = "deferred";
    pub const FREQUENCY: &str = "frequency";
    pub const BENEFIT: &str = "benefit";
    pub const OF: &str = "of";
    pub const TIME: &str = "time";
    pub const KIND: &str = "kind";
    pub const SYMBOL: &str = "symbol";
    pub const DECORATION: &str = "decoration";
    pub const ANGLE: &str = "angle";
    pub const WRAPPER: &str = "wrapper";
}

/// The value of one attribute: text, or a bare presence flag.
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum AttrValue {
    Text(String),
    Flag,
}

/// The attributes set on one notation element.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Attributes {
    values: HashMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), AttrValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, name: &str) {
        self.values.insert(name.to_string(), AttrValue::Flag);
    }

    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_flag(mut self, name: &str) -> Self {
        self.set_flag(name);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    /// The trimmed text of an attribute. Flags and blank text count as missing.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(AttrValue::Text(text)) => Some(text.trim()).filter(|t| !t.is_empty()),
            _ => None,
        }
    }

    /// Whether a flag attribute is on. Presence alone turns it on, unless its text is `false`.
    pub fn flag(&self, name: &str) -> bool {
        match self.values.get(name) {
            Some(AttrValue::Flag) => true,
            Some(AttrValue::Text(text)) => !text.trim().eq_ignore_ascii_case("false"),
            None => false,
        }
    }
}

/// A family of actuarial symbols.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Family {
    Annuity,
    Insurance,
    Premium,
    Reserve,
    Probability,
    Commutation,
    Generic,
}

impl Family {
    pub const ALL: [Family; 7] = [
        Family::Annuity,
        Family::Insurance,
        Family::Premium,
        Family::Reserve,
        Family::Probability,
        Family::Commutation,
        Family::Generic,
    ];

    /// The name this family is known by, such as `annuity`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Annuity => "annuity",
            Self::Insurance => "insurance",
            Self::Premium => "premium",
            Self::Reserve => "reserve",
            Self::Probability => "probability",
            Self::Commutation => "commutation",
            Self::Generic => "generic",
        }
    }

    /// Builds the corner set for an element of this family.
    pub fn corner_set(&self, attrs: &Attributes) -> CornerSet {
        let mut corners = match self {
            Self::Annuity => annuity(attrs),
            Self::Insurance => insurance(attrs),
            Self::Premium => wrapped_or_plain("P", attrs),
            Self::Reserve => reserve(attrs),
            Self::Probability => probability(attrs),
            Self::Commutation => commutation(attrs),
            Self::Generic => generic(attrs),
        };

        // Explicit corners always win over whatever the family derived
        for (name, corner) in [
            (attr::UPPER_RIGHT, &mut corners.upper_right),
            (attr::UPPER_LEFT, &mut corners.upper_left),
            (attr::LOWER_LEFT, &mut corners.lower_left),
        ] {
            if let Some(text) = attrs.text(name) {
                *corner = Some(text.to_string());
            }
        }

        corners
    }

    /// Renders an element of this family.
    pub fn render(&self, attrs: &Attributes) -> SymbolTree {
        assemble(&self.corner_set(attrs))
    }
}

impl FromStr for Family {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Family::ALL
            .into_iter()
            .find(|f| f.tag() == name)
            .ok_or_else(|| NotationError::UnknownFamily(s.to_string()))
    }
}

const ANNUITY_TYPES: &[(&str, Decoration)] = &[
    ("due", Decoration::DoubleDot),
    ("continuous", Decoration::Macron),
    ("immediate", Decoration::None),
];

const INSURANCE_TYPES: &[(&str, Decoration)] = &[
    ("continuous", Decoration::Macron),
    ("discrete", Decoration::None),
];

const PROBABILITY_KINDS: &[(&str, &str)] = &[
    ("survival", "p"),
    ("death", "q"),
];

const COMMUTATION_SYMBOLS: &[&str] = &["D", "N", "C", "M", "S", "R"];

/// Looks `value` up in a table. Missing or unlisted values give `None`.
fn lookup<T: Copy>(table: &[(&str, T)], value: Option<&str>) -> Option<T> {
    let value = value?.to_ascii_lowercase();
    table.iter().find(|(name, _)| *name == value).map(|(_, effect)| *effect)
}

fn type_table(symbol: &str) -> &'static [(&'static str, Decoration)] {
    if symbol == "a" { ANNUITY_TYPES } else { INSURANCE_TYPES }
}

fn angle_for(symbol: &str) -> AngleVariant {
    if symbol == "a" { AngleVariant::WithDivider } else { AngleVariant::Plain }
}

fn status(attrs: &Attributes, default: &str) -> String {
    attrs.text(attr::STATUS)
        .or_else(|| attrs.text(attr::SUBSCRIPT))
        .unwrap_or(default)
        .to_string()
}

fn subscript_options(attrs: &Attributes, angle: Option<AngleVariant>) -> SubscriptOptions {
    SubscriptOptions {
        angle,
        precedence: attrs.text(attr::PRECEDENCE)
            .map(decode_precedence_lenient)
            .unwrap_or_default(),
        last_survivor: attrs.flag(attr::LAST_SURVIVOR),
    }
}

/// `n` becomes `n|`; text which already ends in a divider is kept.
fn deferral(attrs: &Attributes) -> Option<String> {
    attrs.text(attr::DEFERRED).map(|d| {
        if d.ends_with('|') { d.to_string() } else { format!("{}|", d) }
    })
}

/// The shared shape of annuities and insurances: a decorated symbol with a status subscript and
/// an optional deferral period.
fn benefit_symbol(symbol: &str, attrs: &Attributes) -> CornerSet {
    let decoration = lookup(type_table(symbol), attrs.text(attr::TYPE)).unwrap_or_default();
    let mut corners = CornerSet::new(decorate(symbol, decoration));
    corners.lower_right = Some(status(attrs, "x"));
    corners.lower_left = deferral(attrs);
    corners.subscript = subscript_options(attrs, Some(angle_for(symbol)));
    corners
}

fn annuity(attrs: &Attributes) -> CornerSet {
    let mut corners = benefit_symbol("a", attrs);
    corners.upper_right = attrs.text(attr::FREQUENCY).map(|m| format!("({})", m));
    corners
}

fn insurance(attrs: &Attributes) -> CornerSet {
    let mut corners = benefit_symbol("A", attrs);
    match attrs.text(attr::BENEFIT).map(str::to_ascii_lowercase).as_deref() {
        Some("term") if corners.subscript.precedence.is_empty() => {
            corners.subscript.precedence = vec![PrecedenceAnnotation::new(0, 1, Side::Top)];
        }
        Some("pure-endowment") => corners.upper_right = Some("1".to_string()),
        _ => (),
    }
    corners
}

/// `P_x`, or `P(Ā_x)` when `of` names the symbol being paid for.
fn wrapped_or_plain(symbol: &str, attrs: &Attributes) -> CornerSet {
    match attrs.text(attr::OF) {
        Some(inner) => {
            let mut corners = benefit_symbol(inner, attrs);
            corners.wrapper = Some(symbol.to_string());
            corners
        }
        None => {
            let decoration = lookup(INSURANCE_TYPES, attrs.text(attr::TYPE)).unwrap_or_default();
            let mut corners = CornerSet::new(decorate(symbol, decoration));
            corners.lower_right = Some(status(attrs, "x"));
            corners.subscript = subscript_options(attrs, Some(AngleVariant::Plain));
            corners
        }
    }
}

/// The time prescript shares the lower-left corner with a deferral period. An explicit `time`
/// wins; otherwise a deferral is kept, and only without either does the time default to `t`.
fn reserve(attrs: &Attributes) -> CornerSet {
    let mut corners = wrapped_or_plain("V", attrs);
    corners.lower_left = match attrs.text(attr::TIME) {
        Some(time) => Some(time.to_string()),
        None => corners.lower_left.take().or_else(|| Some("t".to_string())),
    };
    corners
}

fn probability(attrs: &Attributes) -> CornerSet {
    let symbol = lookup(PROBABILITY_KINDS, attrs.text(attr::KIND)).unwrap_or("p");
    let mut corners = CornerSet::new(decorate(symbol, Decoration::None));
    corners.lower_right = Some(status(attrs, "x"));
    corners.lower_left = attrs.text(attr::TIME).map(String::from);
    corners.subscript = subscript_options(attrs, None);
    corners
}

fn commutation(attrs: &Attributes) -> CornerSet {
    let symbol = attrs.text(attr::SYMBOL)
        .map(str::to_ascii_uppercase)
        .filter(|s| COMMUTATION_SYMBOLS.contains(&s.as_str()))
        .unwrap_or_else(|| COMMUTATION_SYMBOLS[0].to_string());
    let decoration = lookup(INSURANCE_TYPES, attrs.text(attr::TYPE)).unwrap_or_default();

    let mut corners = CornerSet::new(decorate(&symbol, decoration));
    corners.lower_right = Some(status(attrs, "x"));
    corners.subscript = subscript_options(attrs, None);
    corners
}

fn generic(attrs: &Attributes) -> CornerSet {
    let decoration = Decoration::parse_lenient(attrs.text(attr::DECORATION).unwrap_or_default());
    let angle = attrs.text(attr::ANGLE).and_then(AngleVariant::parse_lenient);

    let mut corners = CornerSet::new(decorate(attrs.text(attr::SYMBOL).unwrap_or("?"), decoration));
    corners.lower_right = attrs.text(attr::LOWER_RIGHT)
        .or_else(|| attrs.text(attr::STATUS))
        .map(String::from);
    corners.wrapper = attrs.text(attr::WRAPPER).map(String::from);
    corners.subscript = subscript_options(attrs, angle);
    corners
}
