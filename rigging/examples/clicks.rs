use std::fs::File;

use rigging::markup;
use rigging::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("clicks.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new(sample_page());
    let mut binding = DelegatedBinding::new();

    // Expand an accordion item, switch tabs, dismiss the notice.
    for target in ["header-intro", "tab-details", "notice-close"] {
        let result = binding.on_event(&mut doc, &Event::click(target));
        println!("click {target}: {result:?}");
    }

    let header = doc.element_by_id("header-intro").unwrap();
    println!(
        "intro expanded: {} (aria-expanded={:?})",
        header.has_class(markup::ACTIVE),
        header.get_attr(markup::ARIA_EXPANDED),
    );
    let details = doc.element_by_id("panel-details").unwrap();
    println!("details panel active: {}", details.has_class(markup::ACTIVE));
    let notice = doc.element_by_id("notice").unwrap();
    println!("notice hidden: {}", notice.hidden);

    Ok(())
}

fn sample_page() -> Element {
    Element::div()
        .id("root")
        .child(
            Element::div()
                .id("faq")
                .class(markup::ACCORDION)
                .attr(markup::ATTR_SINGLE_EXPAND, "true")
                .child(
                    Element::div()
                        .class(markup::ACCORDION_ITEM)
                        .child(
                            Element::button()
                                .id("header-intro")
                                .class(markup::ACCORDION_HEADER)
                                .child(Element::text("Introduction")),
                        )
                        .child(
                            Element::div()
                                .id("content-intro")
                                .class(markup::ACCORDION_CONTENT)
                                .child(Element::text("Welcome!")),
                        ),
                ),
        )
        .child(
            Element::div()
                .id("tabs")
                .class(markup::TABS_CONTAINER)
                .child(
                    Element::button()
                        .id("tab-overview")
                        .class(markup::TAB_BUTTON)
                        .class(markup::ACTIVE)
                        .attr(markup::ARIA_SELECTED, "true")
                        .attr(markup::ARIA_CONTROLS, "panel-overview"),
                )
                .child(
                    Element::button()
                        .id("tab-details")
                        .class(markup::TAB_BUTTON)
                        .attr(markup::ARIA_SELECTED, "false")
                        .attr(markup::ARIA_CONTROLS, "panel-details"),
                )
                .child(
                    Element::div()
                        .id("panel-overview")
                        .class(markup::TAB_PANEL)
                        .class(markup::ACTIVE),
                )
                .child(Element::div().id("panel-details").class(markup::TAB_PANEL)),
        )
        .child(
            Element::div().id("notice").class(markup::CALLOUT).child(
                Element::button().id("notice-close").class(markup::CALLOUT_CLOSE),
            ),
        )
}
