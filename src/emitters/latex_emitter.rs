use crate::config::{Display, EmitterConfig};
use crate::emitters::Emitter;
use crate::error::Result;
use crate::node::{Mark, Side, SymbolTree};

/// Writes LaTeX math. Both overlines and angles become `\overline`, since the divider of an
/// annuity angle is already part of the enclosed row.
#[derive(Default, Clone, Debug)]
pub struct LatexEmitter {
    pub config: EmitterConfig,
}

impl LatexEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }
}

impl Emitter for LatexEmitter {
    fn name(&self) -> &str {
        "latex"
    }

    fn emit(&self, tree: &SymbolTree, out: &mut String) -> Result<()> {
        let delimiters = match (self.config.wrap_math, self.config.display) {
            (false, _) => ("", ""),
            (true, Display::Inline) => ("$", "$"),
            (true, Display::Block) => ("\\[", "\\]"),
        };

        out.push_str(delimiters.0);
        latex(tree, out);
        out.push_str(delimiters.1);
        Ok(())
    }
}

fn escape_latex(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '{' | '}' | '_' | '^' | '%' | '&' | '#' | '$' => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\backslash "),
            _ => out.push(c),
        }
    }
}

fn group(tree: &SymbolTree, out: &mut String) {
    out.push('{');
    latex(tree, out);
    out.push('}');
}

fn slot(slot: &Option<Box<SymbolTree>>, out: &mut String) {
    match slot {
        Some(tree) => group(tree, out),
        None => out.push_str("{}"),
    }
}

fn latex(tree: &SymbolTree, out: &mut String) {
    match tree {
        SymbolTree::Leaf(leaf) => escape_latex(&leaf.text, out),

        SymbolTree::Row(children) => {
            for child in children {
                latex(child, out);
            }
        }

        SymbolTree::Decorated(inner, mark) => {
            match mark {
                Mark::Macron => out.push_str("\\bar"),
                Mark::DoubleDot => out.push_str("\\ddot"),
                Mark::Ring => out.push_str("\\mathring"),
                Mark::Overline | Mark::Angle => out.push_str("\\overline"),
                Mark::Order { order, side } => {
                    out.push_str(match side {
                        Side::Top => "\\overset",
                        Side::Bottom => "\\underset",
                    });
                    out.push('{');
                    out.push_str(&order.to_string());
                    out.push('}');
                }
            }
            group(inner, out);
        }

        SymbolTree::SubSup { base, sub, sup } => {
            group(base, out);
            if let Some(sub) = sub {
                out.push('_');
                group(sub, out);
            }
            if let Some(sup) = sup {
                out.push('^');
                group(sup, out);
            }
        }

        // Prescripts hang off an empty group placed before the base
        SymbolTree::PreSup { base, pre_sub, pre_sup, post_sub, post_sup } => {
            out.push_str("{}_");
            slot(pre_sub, out);
            out.push('^');
            slot(pre_sup, out);
            group(base, out);
            out.push('_');
            slot(post_sub, out);
            out.push('^');
            slot(post_sup, out);
        }
    }
}
