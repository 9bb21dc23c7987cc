//! Integration with a host that owns notation elements.
//!
//! Elements are attached with their family and attributes, then rendered on the following
//! [tick](ElementHost::tick), so attributes set straight after attaching are seen by the
//! compiler. Each element renders at most once; later render requests for it are ignored.

use std::collections::VecDeque;

use crate::emitters::Emitter;
use crate::family::{Attributes, Family};

/// Identifies an element attached to an [ElementHost].
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub struct ElementId(usize);

/// One notation element and its render guard.
#[derive(Debug, Clone)]
pub struct Element {
    pub family: Family,
    pub attributes: Attributes,
    rendered: bool,
}

impl Element {
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HostStats {
    pub ticks: u64,
    pub rendered: u64,
    pub skipped: u64,
    pub failed: u64,
}

#[derive(Debug, Default)]
pub struct ElementHost {
    elements: Vec<Element>,
    pending: VecDeque<ElementId>,
    registered: bool,
    stats: HostStats,
}

impl ElementHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every family available, announcing them once.
    pub fn register(&mut self) {
        if self.registered {
            return;
        }
        self.registered = true;

        let families = Family::ALL.iter().map(Family::tag).collect::<Vec<_>>();
        tracing::info!(version = crate::VERSION, ?families, "actuarial notation families registered");
    }

    /// Attaches an element by family name. An unknown name falls back to the generic family.
    pub fn attach(&mut self, family: &str, attributes: Attributes) -> ElementId {
        let family = family.parse::<Family>().unwrap_or_else(|error| {
            tracing::warn!(%error, "rendering element with the generic family");
            Family::Generic
        });
        self.attach_family(family, attributes)
    }

    pub fn attach_family(&mut self, family: Family, attributes: Attributes) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element { family, attributes, rendered: false });
        self.pending.push_back(id);
        id
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Sets an attribute. Only has an effect on the output before the element is rendered.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.attributes.set(name, value);
        }
    }

    pub fn set_flag(&mut self, id: ElementId, name: &str) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.attributes.set_flag(name);
        }
    }

    /// Asks for an element to be rendered on the next tick.
    pub fn request_render(&mut self, id: ElementId) {
        if id.0 < self.elements.len() {
            self.pending.push_back(id);
        }
    }

    pub fn stats(&self) -> HostStats {
        self.stats
    }

    /// Renders every pending element which has not been rendered yet, returning its markup.
    ///
    /// An element whose markup cannot be written is counted in [HostStats::failed] and stays
    /// unrendered, so a later [request_render](Self::request_render) tries it again.
    pub fn tick(&mut self, emitter: &dyn Emitter) -> Vec<(ElementId, String)> {
        self.stats.ticks += 1;

        let mut output = vec![];
        for id in self.pending.drain(..).collect::<Vec<_>>() {
            let Some(element) = self.elements.get_mut(id.0) else {
                continue;
            };
            if element.rendered {
                self.stats.skipped += 1;
                continue;
            }

            let tree = element.family.render(&element.attributes);
            match emitter.render(&tree) {
                Ok(markup) => {
                    element.rendered = true;
                    self.stats.rendered += 1;
                    tracing::debug!(?id, family = element.family.tag(), "rendered element");
                    output.push((id, markup));
                }
                Err(error) => {
                    self.stats.failed += 1;
                    tracing::warn!(?id, %error, "failed to emit element");
                }
            }
        }

        output
    }
}
