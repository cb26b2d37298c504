//! Widget controllers for the three supported widget kinds.
//!
//! Each controller runs one click synchronously to completion: there is no
//! pending state, and a structurally invalid widget is a silent no-op
//! ([`WidgetResult::Ignored`]) rather than an error. Visible state is read
//! into an explicit enum and written back through a single projection, so
//! classes and ARIA attributes cannot drift apart.

pub mod accordion;
pub mod callout;
pub mod tabs;

/// Outcome of running a widget controller against a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetResult {
    /// Structure was missing or malformed; nothing changed.
    Ignored,
    /// An accordion item expanded.
    Expanded,
    /// An accordion item collapsed.
    Collapsed,
    /// A tab was selected.
    Selected,
    /// A callout was dismissed.
    Dismissed,
}

impl WidgetResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, WidgetResult::Ignored)
    }
}
