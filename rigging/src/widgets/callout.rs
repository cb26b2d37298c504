//! Callout dismiss controller.
//!
//! Dismissal is terminal within this system: the callout is hidden, not
//! removed, and nothing here shows it again.

use pagedom::{closest, Document, ElementPath};

use crate::markup;
use crate::widgets::WidgetResult;

/// Visible state of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalloutState {
    Visible,
    Dismissed,
}

/// Handle a click on a dismiss control. No enclosing callout: no-op.
pub fn dismiss(doc: &mut Document, control_id: &str) -> WidgetResult {
    let Some(control) = doc.path_by_id(control_id) else {
        return WidgetResult::Ignored;
    };
    let Some(callout) = closest(doc.root(), &control, |e| e.has_class(markup::CALLOUT)) else {
        return WidgetResult::Ignored;
    };
    apply_state(doc, &callout, CalloutState::Dismissed);
    WidgetResult::Dismissed
}

/// Project a callout state onto its visibility flag.
fn apply_state(doc: &mut Document, path: &ElementPath, state: CalloutState) {
    if let Some(callout) = doc.element_at_mut(path) {
        callout.set_hidden(state == CalloutState::Dismissed);
    }
}
