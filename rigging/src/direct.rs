//! Direct binding: per-element handler registrations, re-built on every
//! navigation lifecycle event.
//!
//! Each initialization pass discards all prior registrations before
//! re-attaching, so repeated passes cannot stack handlers — without the
//! discard, one click would run a toggle once per accumulated pass and
//! corrupt visual state. Registrations for elements no longer in the tree
//! disappear with the discard.
//!
//! Clicks dispatch to the nearest registered element on the target's
//! self-and-ancestor chain, mirroring how a listener attached to the widget
//! element receives bubbled clicks from its descendants.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, trace};

use pagedom::{closest, descendants_matching, Document, ElementPath, Event, LifecycleEvent};

use crate::binding::{Binding, DispatchResult};
use crate::markup;
use crate::widgets::{accordion, callout, tabs};

/// Widget kind a registration dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    AccordionHeader,
    TabButton,
    CalloutClose,
}

/// Settle time allowed after a history navigation before handlers are
/// re-attached. A compatibility shim for hosts that emit no ready signal once
/// the restored fragment is back in the tree — not a correctness guarantee.
pub const DEFAULT_REINIT_DELAY: Duration = Duration::from_millis(100);

pub struct DirectBinding {
    /// Element id -> registered handler. At most one handler per element; an
    /// element carrying several widget classes keeps the highest-priority
    /// registration, matching the delegated route order.
    registry: HashMap<String, HandlerKind>,
    /// Deadlines of pending one-shot re-initializations from history
    /// navigation. Not cancellable and not coalesced; every pass is
    /// idempotent, so overlap is safe but not free.
    pending: Vec<Instant>,
    reinit_delay: Duration,
}

impl DirectBinding {
    pub fn new() -> Self {
        Self {
            registry: HashMap::new(),
            pending: Vec::new(),
            reinit_delay: DEFAULT_REINIT_DELAY,
        }
    }

    pub fn with_reinit_delay(mut self, delay: Duration) -> Self {
        self.reinit_delay = delay;
        self
    }

    /// (Re)attach handlers for every widget element in the document.
    /// Idempotent: prior registrations are discarded first.
    pub fn init(&mut self, doc: &Document) {
        self.registry.clear();

        let kinds = [
            (markup::ACCORDION_HEADER, HandlerKind::AccordionHeader),
            (markup::TAB_BUTTON, HandlerKind::TabButton),
            (markup::CALLOUT_CLOSE, HandlerKind::CalloutClose),
        ];
        for (class, kind) in kinds {
            let paths = descendants_matching(doc.root(), &ElementPath::root(), |e| {
                e.has_class(class)
            });
            for path in paths {
                if let Some(element) = doc.element_at(&path) {
                    self.registry.entry(element.id.clone()).or_insert(kind);
                }
            }
        }

        debug!("direct binding initialized, {} handlers", self.registry.len());
    }

    /// Run every deferred re-initialization whose deadline has passed. Hosts
    /// call this from their event loop.
    pub fn poll(&mut self, doc: &Document, now: Instant) {
        let due = self.pending.iter().filter(|deadline| **deadline <= now).count();
        if due == 0 {
            return;
        }
        self.pending.retain(|deadline| *deadline > now);
        trace!("running {due} deferred init pass(es)");
        for _ in 0..due {
            self.init(doc);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_bound(&self, id: &str) -> bool {
        self.registry.contains_key(id)
    }

    pub fn pending_inits(&self) -> usize {
        self.pending.len()
    }
}

impl Default for DirectBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl Binding for DirectBinding {
    fn on_event(&mut self, doc: &mut Document, event: &Event) -> DispatchResult {
        let Event::Click { target } = event;
        let Some(origin) = doc.path_by_id(target) else {
            trace!("click target {target:?} not in tree");
            return DispatchResult::NotHandled;
        };

        // Nearest registered element on the chain handles the click.
        let Some(bound) = closest(doc.root(), &origin, |e| self.registry.contains_key(&e.id))
        else {
            trace!("click on {target:?} reached no registered element");
            return DispatchResult::NotHandled;
        };
        let Some(id) = doc.element_at(&bound).map(|e| e.id.clone()) else {
            return DispatchResult::NotHandled;
        };
        let kind = self.registry[&id];
        debug!("click on {target:?} dispatched to {kind:?} ({id:?})");

        let result = match kind {
            HandlerKind::AccordionHeader => accordion::activate(doc, &id),
            HandlerKind::TabButton => tabs::select(doc, &id),
            HandlerKind::CalloutClose => callout::dismiss(doc, &id),
        };
        DispatchResult::Handled(result)
    }

    fn on_lifecycle(&mut self, doc: &mut Document, event: &LifecycleEvent) {
        match event {
            LifecycleEvent::Ready => self.init(doc),
            LifecycleEvent::SwapComplete => {
                self.init(doc);
                doc.scroll_to(0, 0);
            }
            LifecycleEvent::HistoryNav => {
                // Let the restored fragment settle before re-attaching.
                self.pending.push(Instant::now() + self.reinit_delay);
                trace!("history navigation, deferred init scheduled");
            }
            LifecycleEvent::Settle(_) => {}
        }
    }
}
