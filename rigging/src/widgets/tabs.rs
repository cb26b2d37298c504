//! Tab controller.
//!
//! Exactly one button in a group carries `aria-selected="true"` after a
//! switch. Deactivation is scoped to the enclosing container; the target
//! panel, however, is resolved document-wide by id, so a panel rendered
//! outside the container still activates.

use pagedom::{closest, descendants_matching, Document, ElementPath};

use crate::markup;
use crate::widgets::WidgetResult;

/// Visible state of a tab button or panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabState {
    Inactive,
    Active,
}

/// Handle a click on a tab button.
///
/// No enclosing container: no-op. An `aria-controls` id that resolves to
/// nothing leaves the clicked button active with no panel shown — an accepted
/// degenerate state, not an error.
pub fn select(doc: &mut Document, button_id: &str) -> WidgetResult {
    let Some(button) = doc.path_by_id(button_id) else {
        return WidgetResult::Ignored;
    };
    let panel_id = doc
        .element_at(&button)
        .and_then(|e| e.get_attr(markup::ARIA_CONTROLS))
        .map(str::to_owned);
    let Some(container) = closest(doc.root(), &button, |e| {
        e.has_class(markup::TABS_CONTAINER)
    }) else {
        return WidgetResult::Ignored;
    };

    let buttons = descendants_matching(doc.root(), &container, |e| {
        e.has_class(markup::TAB_BUTTON)
    });
    for path in buttons {
        apply_button(doc, &path, TabState::Inactive);
    }
    let panels = descendants_matching(doc.root(), &container, |e| {
        e.has_class(markup::TAB_PANEL)
    });
    for path in panels {
        apply_panel(doc, &path, TabState::Inactive);
    }

    apply_button(doc, &button, TabState::Active);

    if let Some(panel_id) = panel_id {
        if let Some(panel) = doc.path_by_id(&panel_id) {
            apply_panel(doc, &panel, TabState::Active);
        }
    }

    WidgetResult::Selected
}

/// Project a tab state onto a button: active class and `aria-selected`
/// together.
fn apply_button(doc: &mut Document, path: &ElementPath, state: TabState) {
    let active = state == TabState::Active;
    if let Some(button) = doc.element_at_mut(path) {
        if active {
            button.add_class(markup::ACTIVE);
        } else {
            button.remove_class(markup::ACTIVE);
        }
        button.set_attr(markup::ARIA_SELECTED, if active { "true" } else { "false" });
    }
}

/// Project a tab state onto a panel.
fn apply_panel(doc: &mut Document, path: &ElementPath, state: TabState) {
    if let Some(panel) = doc.element_at_mut(path) {
        if state == TabState::Active {
            panel.add_class(markup::ACTIVE);
        } else {
            panel.remove_class(markup::ACTIVE);
        }
    }
}
