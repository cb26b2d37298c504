//! Delegated binding: one persistent route table for the whole document.
//!
//! Routes are consulted in fixed priority order — accordion header, tab
//! button, callout dismiss — and the first route whose predicate matches
//! anywhere on the click target's self-and-ancestor chain wins; remaining
//! routes are never consulted for that click. Route priority outranks
//! ancestor proximity: an element nested in both a tab button and an
//! accordion header is handled as an accordion click.
//!
//! Because the table lives outside the tree, it survives fragment swaps with
//! no re-initialization. The only lifecycle concern here is scroll
//! restoration on settle.

use log::{debug, trace};

use pagedom::{closest, Document, Element, Event, LifecycleEvent};

use crate::binding::{Binding, DispatchResult};
use crate::lifecycle;
use crate::markup;
use crate::widgets::{accordion, callout, tabs, WidgetResult};

type RoutePredicate = fn(&Element) -> bool;
type RouteHandler = fn(&mut Document, &str) -> WidgetResult;

/// One dispatch route: elements matching `matches` are handled by `handle`,
/// which receives the id of the matched element (not the raw click target).
struct Route {
    name: &'static str,
    matches: RoutePredicate,
    handle: RouteHandler,
}

pub struct DelegatedBinding {
    routes: Vec<Route>,
}

impl DelegatedBinding {
    /// The standard three-widget route table.
    pub fn new() -> Self {
        Self {
            routes: vec![
                Route {
                    name: "accordion-header",
                    matches: |e| e.has_class(markup::ACCORDION_HEADER),
                    handle: accordion::activate,
                },
                Route {
                    name: "tab-button",
                    matches: |e| e.has_class(markup::TAB_BUTTON),
                    handle: tabs::select,
                },
                Route {
                    name: "callout-close",
                    matches: |e| e.has_class(markup::CALLOUT_CLOSE),
                    handle: callout::dismiss,
                },
            ],
        }
    }
}

impl Default for DelegatedBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl Binding for DelegatedBinding {
    fn on_event(&mut self, doc: &mut Document, event: &Event) -> DispatchResult {
        let Event::Click { target } = event;
        let Some(origin) = doc.path_by_id(target) else {
            trace!("click target {target:?} not in tree");
            return DispatchResult::NotHandled;
        };

        for route in &self.routes {
            if let Some(matched) = closest(doc.root(), &origin, route.matches) {
                let Some(id) = doc.element_at(&matched).map(|e| e.id.clone()) else {
                    continue;
                };
                debug!("click on {target:?} routed to {} ({id:?})", route.name);
                return DispatchResult::Handled((route.handle)(doc, &id));
            }
        }

        trace!("click on {target:?} matched no route");
        DispatchResult::NotHandled
    }

    fn on_lifecycle(&mut self, doc: &mut Document, event: &LifecycleEvent) {
        // Swaps need no re-binding here; only the settle signal matters, for
        // scroll restoration on URL-pushing navigations.
        if let LifecycleEvent::Settle(descriptor) = event {
            lifecycle::settle_scroll(doc, descriptor.as_ref());
        }
    }
}
