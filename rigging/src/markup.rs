//! Class and attribute names of the rendered markup contract.
//!
//! Server-side rendering and this crate must agree on these; hosts should
//! render against the constants rather than repeating the strings.

/// Accordion group container.
pub const ACCORDION: &str = "accordion";
/// One header/pane pair inside an accordion.
pub const ACCORDION_ITEM: &str = "accordion-item";
/// Clickable accordion header. Its content pane is its immediate next sibling.
pub const ACCORDION_HEADER: &str = "accordion-header";
/// Accordion content pane.
pub const ACCORDION_CONTENT: &str = "accordion-content";

/// Tab group container.
pub const TABS_CONTAINER: &str = "tabs-container";
/// Clickable tab button; references its panel via [`ARIA_CONTROLS`].
pub const TAB_BUTTON: &str = "tab-button";
/// Tab panel.
pub const TAB_PANEL: &str = "tab-panel";

/// Dismissible notice container.
pub const CALLOUT: &str = "callout";
/// Dismiss control inside a callout.
pub const CALLOUT_CLOSE: &str = "callout-close";

/// Active state class shared by accordion headers and tab buttons/panels.
pub const ACTIVE: &str = "active";
/// Expanded state class on accordion content panes.
pub const EXPANDED: &str = "expanded";

/// Accordion container attribute: `"true"` selects single-expand mode.
pub const ATTR_SINGLE_EXPAND: &str = "data-single-expand";
/// Source-element opt-in marker for URL-history pushes.
pub const ATTR_PUSH_URL: &str = "data-push-url";
/// Tab button attribute naming its panel's id.
pub const ARIA_CONTROLS: &str = "aria-controls";
/// Accordion header expansion state, mirrored from the pane.
pub const ARIA_EXPANDED: &str = "aria-expanded";
/// Tab button selection state.
pub const ARIA_SELECTED: &str = "aria-selected";
