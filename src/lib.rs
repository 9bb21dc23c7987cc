//! Compiles compact actuarial notation, such as the `x:n` of `ä_{x:n⌉}` or the `60|xy` of a
//! deferred joint-life annuity, into symbol trees, and writes those trees out as MathML or
//! LaTeX.

pub mod error;
pub mod node;
pub mod family;
pub mod config;
pub mod emitters;
pub mod host;

#[cfg(test)]
pub mod tests;

pub use crate::{
    error::{NotationError, Result},
    node::{
        SymbolTree, Leaf, LeafKind, Mark, Side,
        Decoration, decorate,
        AngleVariant, angle,
        PrecedenceAnnotation, parse_status,
        SubscriptOptions, compose_subscript,
        CornerSet, assemble,
    },
    family::{Attributes, AttrValue, Family},
    config::EmitterConfig,
    emitters::{Emitter, EmitterRegistry, MathMlEmitter, LatexEmitter},
    host::{ElementHost, ElementId},
};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
