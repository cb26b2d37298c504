use pagedom::{Document, Element};
use rigging::markup;
use rigging::widgets::{tabs, WidgetResult};

fn tab_button(name: &str, active: bool) -> Element {
    let mut button = Element::button()
        .id(format!("tab-{name}"))
        .class(markup::TAB_BUTTON)
        .attr(markup::ARIA_CONTROLS, format!("panel-{name}"))
        .attr(markup::ARIA_SELECTED, if active { "true" } else { "false" });
    if active {
        button = button.class(markup::ACTIVE);
    }
    button
}

fn tab_panel(name: &str, active: bool) -> Element {
    let mut panel = Element::div()
        .id(format!("panel-{name}"))
        .class(markup::TAB_PANEL);
    if active {
        panel = panel.class(markup::ACTIVE);
    }
    panel
}

/// Two tabs, tab1 initially active.
fn tabs_page() -> Document {
    Document::new(
        Element::div().id("root").child(
            Element::div()
                .id("container")
                .class(markup::TABS_CONTAINER)
                .child(tab_button("1", true))
                .child(tab_button("2", false))
                .child(tab_panel("1", true))
                .child(tab_panel("2", false)),
        ),
    )
}

fn assert_selected(doc: &Document, name: &str, selected: bool) {
    let button = doc.element_by_id(&format!("tab-{name}")).unwrap();
    assert_eq!(button.has_class(markup::ACTIVE), selected, "tab-{name} active class");
    assert_eq!(
        button.get_attr(markup::ARIA_SELECTED),
        Some(if selected { "true" } else { "false" }),
        "tab-{name} aria-selected",
    );
}

#[test]
fn test_switch_activates_exactly_one_pair() {
    let mut doc = tabs_page();

    assert_eq!(tabs::select(&mut doc, "tab-2"), WidgetResult::Selected);

    assert_selected(&doc, "1", false);
    assert_selected(&doc, "2", true);
    assert!(!doc.element_by_id("panel-1").unwrap().has_class(markup::ACTIVE));
    assert!(doc.element_by_id("panel-2").unwrap().has_class(markup::ACTIVE));
}

#[test]
fn test_reselecting_active_tab_keeps_it_active() {
    let mut doc = tabs_page();

    tabs::select(&mut doc, "tab-1");
    assert_selected(&doc, "1", true);
    assert_selected(&doc, "2", false);
    assert!(doc.element_by_id("panel-1").unwrap().has_class(markup::ACTIVE));
}

#[test]
fn test_missing_container_is_ignored() {
    let mut doc = Document::new(
        Element::div()
            .id("root")
            .child(tab_button("stray", false)),
    );

    assert_eq!(tabs::select(&mut doc, "tab-stray"), WidgetResult::Ignored);
    assert!(!doc.element_by_id("tab-stray").unwrap().has_class(markup::ACTIVE));
}

#[test]
fn test_unresolvable_panel_id_leaves_button_active_without_panel() {
    let mut doc = Document::new(
        Element::div().id("root").child(
            Element::div()
                .id("container")
                .class(markup::TABS_CONTAINER)
                .child(tab_button("1", true))
                .child(
                    Element::button()
                        .id("tab-ghost")
                        .class(markup::TAB_BUTTON)
                        .attr(markup::ARIA_CONTROLS, "panel-nowhere")
                        .attr(markup::ARIA_SELECTED, "false"),
                )
                .child(tab_panel("1", true)),
        ),
    );

    // Accepted degenerate state: button selected, no panel shown
    assert_eq!(tabs::select(&mut doc, "tab-ghost"), WidgetResult::Selected);
    assert_selected(&doc, "1", false);
    assert!(doc.element_by_id("tab-ghost").unwrap().has_class(markup::ACTIVE));
    assert!(!doc.element_by_id("panel-1").unwrap().has_class(markup::ACTIVE));
}

#[test]
fn test_button_without_aria_controls_still_selects() {
    let mut doc = Document::new(
        Element::div().id("root").child(
            Element::div()
                .id("container")
                .class(markup::TABS_CONTAINER)
                .child(tab_button("1", true))
                .child(
                    Element::button()
                        .id("tab-bare")
                        .class(markup::TAB_BUTTON),
                ),
        ),
    );

    assert_eq!(tabs::select(&mut doc, "tab-bare"), WidgetResult::Selected);
    assert!(doc.element_by_id("tab-bare").unwrap().has_class(markup::ACTIVE));
    assert_eq!(
        doc.element_by_id("tab-bare").unwrap().get_attr(markup::ARIA_SELECTED),
        Some("true"),
    );
}

#[test]
fn test_target_panel_resolves_document_wide() {
    // Panel rendered outside the container still activates; deactivation
    // stays container-scoped
    let mut doc = Document::new(
        Element::div()
            .id("root")
            .child(
                Element::div()
                    .id("container")
                    .class(markup::TABS_CONTAINER)
                    .child(tab_button("far", false)),
            )
            .child(tab_panel("far", false)),
    );

    assert_eq!(tabs::select(&mut doc, "tab-far"), WidgetResult::Selected);
    assert!(doc.element_by_id("panel-far").unwrap().has_class(markup::ACTIVE));
}

#[test]
fn test_unknown_button_id_is_ignored() {
    let mut doc = tabs_page();
    assert_eq!(tabs::select(&mut doc, "missing"), WidgetResult::Ignored);
}
