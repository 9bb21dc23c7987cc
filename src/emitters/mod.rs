//! Writing symbol trees out as presentation markup.
//!
//! An [Emitter] turns a finished [SymbolTree] into text. Two are provided, [MathMlEmitter] and
//! [LatexEmitter], and an [EmitterRegistry] looks them up by name.

use std::collections::HashMap;

use crate::config::EmitterConfig;
use crate::error::{NotationError, Result};
use crate::node::SymbolTree;

mod mathml_emitter;
pub use mathml_emitter::*;

mod latex_emitter;
pub use latex_emitter::*;

pub trait Emitter {
    /// The name this emitter is registered under, such as `mathml`.
    fn name(&self) -> &str;

    /// Appends the markup for `tree` to `out`.
    fn emit(&self, tree: &SymbolTree, out: &mut String) -> Result<()>;

    /// Returns the markup for `tree` as a new string.
    fn render(&self, tree: &SymbolTree) -> Result<String> {
        let mut out = String::new();
        self.emit(tree, &mut out)?;
        Ok(out)
    }
}

/// Emitters available by name.
pub struct EmitterRegistry {
    emitters: HashMap<String, Box<dyn Emitter>>,
}

impl EmitterRegistry {
    pub fn new() -> Self {
        Self { emitters: HashMap::new() }
    }

    /// A registry holding the MathML and LaTeX emitters, both using `config`.
    pub fn with_defaults(config: &EmitterConfig) -> Self {
        let mut registry = Self::new();
        registry.register(MathMlEmitter::new(config.clone()));
        registry.register(LatexEmitter::new(config.clone()));
        registry
    }

    /// Adds an emitter, replacing any other with the same name.
    pub fn register<E: Emitter + 'static>(&mut self, emitter: E) {
        self.emitters.insert(emitter.name().to_string(), Box::new(emitter));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Emitter> {
        self.emitters
            .get(name)
            .map(|e| e.as_ref())
            .ok_or_else(|| NotationError::UnknownEmitter(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.emitters.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn render(&self, name: &str, tree: &SymbolTree) -> Result<String> {
        self.get(name)?.render(tree)
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults(&EmitterConfig::default())
    }
}
