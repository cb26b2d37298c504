//! Accordion controller.
//!
//! A header's active class, its pane's expanded class and the header's
//! `aria-expanded` attribute always move in lockstep: every write goes through
//! [`apply_state`].

use pagedom::{closest, descendants_matching, next_sibling, Document, ElementPath};

use crate::markup;
use crate::widgets::WidgetResult;

/// Visible state of one header/pane pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Collapsed,
    Expanded,
}

impl ItemState {
    pub fn toggled(self) -> Self {
        match self {
            ItemState::Collapsed => ItemState::Expanded,
            ItemState::Expanded => ItemState::Collapsed,
        }
    }
}

/// Handle a click on an accordion header.
///
/// The content pane is the header's immediate next sibling and must carry the
/// content class; anything else leaves the document untouched. In a
/// single-expand group, opening a closed item first collapses every other
/// item in the group; closing an open item collapses nothing else.
pub fn activate(doc: &mut Document, header_id: &str) -> WidgetResult {
    let Some(header) = doc.path_by_id(header_id) else {
        return WidgetResult::Ignored;
    };
    let Some(pane) = next_sibling(doc.root(), &header) else {
        return WidgetResult::Ignored;
    };
    if !doc
        .element_at(&pane)
        .is_some_and(|e| e.has_class(markup::ACCORDION_CONTENT))
    {
        return WidgetResult::Ignored;
    }

    let group = closest(doc.root(), &header, |e| e.has_class(markup::ACCORDION));
    let state = read_state(doc, &header);

    // Opening an item in a single-expand group closes its siblings first.
    // Exclusion is enforced only at the moment of opening, never
    // retroactively.
    if let Some(group) = &group {
        if single_expand(doc, group) && state == ItemState::Collapsed {
            collapse_group(doc, group);
        }
    }

    let next = state.toggled();
    apply_state(doc, &header, &pane, next);
    match next {
        ItemState::Expanded => WidgetResult::Expanded,
        ItemState::Collapsed => WidgetResult::Collapsed,
    }
}

/// Read a header's current state from its active class.
fn read_state(doc: &Document, header: &ElementPath) -> ItemState {
    if doc
        .element_at(header)
        .is_some_and(|e| e.has_class(markup::ACTIVE))
    {
        ItemState::Expanded
    } else {
        ItemState::Collapsed
    }
}

/// Project an item state onto a header/pane pair.
fn apply_state(doc: &mut Document, header: &ElementPath, pane: &ElementPath, state: ItemState) {
    let expanded = state == ItemState::Expanded;
    if let Some(header) = doc.element_at_mut(header) {
        if expanded {
            header.add_class(markup::ACTIVE);
        } else {
            header.remove_class(markup::ACTIVE);
        }
        header.set_attr(markup::ARIA_EXPANDED, if expanded { "true" } else { "false" });
    }
    if let Some(pane) = doc.element_at_mut(pane) {
        if expanded {
            pane.add_class(markup::EXPANDED);
        } else {
            pane.remove_class(markup::EXPANDED);
        }
    }
}

/// Only the exact attribute value `"true"` selects single-expand mode.
fn single_expand(doc: &Document, group: &ElementPath) -> bool {
    doc.element_at(group)
        .and_then(|e| e.get_attr(markup::ATTR_SINGLE_EXPAND))
        .is_some_and(|v| v == "true")
}

/// Collapse every header and pane in the group subtree.
fn collapse_group(doc: &mut Document, group: &ElementPath) {
    let headers = descendants_matching(doc.root(), group, |e| {
        e.has_class(markup::ACCORDION_HEADER)
    });
    for path in headers {
        if let Some(header) = doc.element_at_mut(&path) {
            header.remove_class(markup::ACTIVE);
            header.set_attr(markup::ARIA_EXPANDED, "false");
        }
    }

    let panes = descendants_matching(doc.root(), group, |e| {
        e.has_class(markup::ACCORDION_CONTENT)
    });
    for path in panes {
        if let Some(pane) = doc.element_at_mut(&path) {
            pane.remove_class(markup::EXPANDED);
        }
    }
}
