//! Settings for how markup is written.

use serde::Deserialize;

use crate::error::{NotationError, Result};

/// Whether the notation sits inside running text or on its own line.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    #[default]
    Inline,
    Block,
}

impl Display {
    pub fn as_str(self) -> &'static str {
        match self {
            Display::Inline => "inline",
            Display::Block => "block",
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EmitterConfig {
    pub display: Display,

    /// Whether to write the enclosing root element (`<math>` for MathML, `$` for LaTeX).
    pub wrap_math: bool,

    /// Spaces per nesting level. `None` writes everything on one line.
    pub indent: Option<usize>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self { display: Display::Inline, wrap_math: true, indent: None }
    }
}

impl EmitterConfig {
    /// Reads a configuration such as `{"display": "block", "indent": 2}`. Missing keys keep their
    /// defaults.
    pub fn from_json(text: &str) -> Result<EmitterConfig> {
        serde_json::from_str(text).map_err(NotationError::InvalidConfig)
    }

    /// The configuration for markup meant to be embedded in another expression.
    pub fn fragment() -> Self {
        Self { wrap_math: false, ..Default::default() }
    }
}
