//! The seam between widget semantics and event binding.
//!
//! Both binding strategies implement identical widget semantics; they differ
//! only in how clicks reach the controllers and in what they do on navigation
//! lifecycle events. Exactly one binding drives a page at a time.

use pagedom::{Document, Event, LifecycleEvent};

use crate::widgets::WidgetResult;

/// Result of offering an event to a binding.
///
/// `Handled` means a route or registration claimed the click, even when the
/// controller then found the widget structurally invalid and changed nothing
/// (`WidgetResult::Ignored`). A claimed click is never offered to lower
/// priority routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// No route or registration claimed the event.
    NotHandled,
    /// A widget controller ran; its outcome is attached.
    Handled(WidgetResult),
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, DispatchResult::Handled(_))
    }
}

/// A click-binding strategy.
///
/// All handling is synchronous: a binding is idle between calls and processes
/// one event to completion before returning. The only deferred work is the
/// direct binding's history-replay re-initialization, which is observable via
/// polling rather than a hidden timer.
pub trait Binding {
    /// Offer a user input event to the binding.
    fn on_event(&mut self, doc: &mut Document, event: &Event) -> DispatchResult;

    /// Offer a navigation lifecycle event to the binding.
    fn on_lifecycle(&mut self, doc: &mut Document, event: &LifecycleEvent);
}
