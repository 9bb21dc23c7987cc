use std::fmt::Write;

use crate::config::EmitterConfig;
use crate::emitters::Emitter;
use crate::error::Result;
use crate::node::{LeafKind, Mark, Side, SymbolTree};

pub const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

/// Writes presentation MathML.
///
/// Empty script slots become `<none/>`, so a four-corner notation always has exactly four script
/// positions around its base.
#[derive(Default, Clone, Debug)]
pub struct MathMlEmitter {
    pub config: EmitterConfig,
}

impl MathMlEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }
}

impl Emitter for MathMlEmitter {
    fn name(&self) -> &str {
        "mathml"
    }

    fn emit(&self, tree: &SymbolTree, out: &mut String) -> Result<()> {
        let mut writer = MarkupWriter { out, indent: self.config.indent, depth: 0, started: false };

        if self.config.wrap_math {
            let attributes = format!(
                " xmlns=\"{}\" display=\"{}\"",
                MATHML_NAMESPACE,
                self.config.display.as_str(),
            );
            writer.open("math", &attributes)?;
            writer.node(tree)?;
            writer.close("math")?;
        } else {
            writer.node(tree)?;
        }

        Ok(())
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

struct MarkupWriter<'a> {
    out: &'a mut String,
    indent: Option<usize>,
    depth: usize,
    started: bool,
}

impl<'a> MarkupWriter<'a> {
    /// Moves to a new, indented line when pretty-printing.
    fn line(&mut self) -> std::fmt::Result {
        if let Some(width) = self.indent {
            if self.started {
                self.out.push('\n');
            }
            write!(self.out, "{:1$}", "", width * self.depth)?;
        }
        self.started = true;
        Ok(())
    }

    fn open(&mut self, tag: &str, attributes: &str) -> std::fmt::Result {
        self.line()?;
        write!(self.out, "<{}{}>", tag, attributes)?;
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self, tag: &str) -> std::fmt::Result {
        self.depth -= 1;
        self.line()?;
        write!(self.out, "</{}>", tag)
    }

    fn empty(&mut self, tag: &str) -> std::fmt::Result {
        self.line()?;
        write!(self.out, "<{}/>", tag)
    }

    fn text(&mut self, tag: &str, attributes: &str, text: &str) -> std::fmt::Result {
        self.line()?;
        write!(self.out, "<{0}{1}>{2}</{0}>", tag, attributes, escape_xml(text))
    }

    fn slot(&mut self, slot: &Option<Box<SymbolTree>>) -> std::fmt::Result {
        match slot {
            Some(tree) => self.node(tree),
            None => self.empty("none"),
        }
    }

    fn node(&mut self, tree: &SymbolTree) -> std::fmt::Result {
        match tree {
            SymbolTree::Leaf(leaf) => {
                let tag = match leaf.kind {
                    LeafKind::Identifier => "mi",
                    LeafKind::Number => "mn",
                    LeafKind::Operator => "mo",
                };
                self.text(tag, "", &leaf.text)
            }

            SymbolTree::Row(children) => {
                self.open("mrow", "")?;
                for child in children {
                    self.node(child)?;
                }
                self.close("mrow")
            }

            SymbolTree::Decorated(inner, mark) => self.decorated(inner, *mark),

            SymbolTree::SubSup { base, sub, sup } => {
                let tag = match (sub, sup) {
                    (Some(_), Some(_)) => "msubsup",
                    (Some(_), None) => "msub",
                    (None, Some(_)) => "msup",
                    (None, None) => return self.node(base),
                };
                self.open(tag, "")?;
                self.node(base)?;
                for script in [sub, sup].into_iter().flatten() {
                    self.node(script)?;
                }
                self.close(tag)
            }

            SymbolTree::PreSup { base, pre_sub, pre_sup, post_sub, post_sup } => {
                self.open("mmultiscripts", "")?;
                self.node(base)?;
                self.slot(post_sub)?;
                self.slot(post_sup)?;
                self.empty("mprescripts")?;
                self.slot(pre_sub)?;
                self.slot(pre_sup)?;
                self.close("mmultiscripts")
            }
        }
    }

    fn decorated(&mut self, inner: &SymbolTree, mark: Mark) -> std::fmt::Result {
        let accent = |s: &mut Self, glyph: &str| -> std::fmt::Result {
            s.open("mover", " accent=\"true\"")?;
            s.node(inner)?;
            s.text("mo", "", glyph)?;
            s.close("mover")
        };

        match mark {
            Mark::Macron => accent(self, "\u{AF}"),
            Mark::DoubleDot => accent(self, "\u{A8}"),
            Mark::Ring => accent(self, "\u{2DA}"),

            Mark::Overline => {
                self.open("mover", "")?;
                self.node(inner)?;
                self.text("mo", " stretchy=\"true\"", "\u{203E}")?;
                self.close("mover")
            }

            Mark::Angle => {
                self.open("menclose", " notation=\"top\"")?;
                self.node(inner)?;
                self.close("menclose")
            }

            Mark::Order { order, side } => {
                let tag = match side {
                    Side::Top => "mover",
                    Side::Bottom => "munder",
                };
                self.open(tag, "")?;
                self.node(inner)?;
                self.text("mn", "", &order.to_string())?;
                self.close(tag)
            }
        }
    }
}
