use pagedom::{Document, Element, LifecycleEvent, PushUrl, RequestDescriptor};
use rigging::lifecycle::settle_scroll;
use rigging::markup;
use rigging::prelude::*;

/// A page scrolled away from the origin, with one nav link carrying the given
/// push-url marker (or none).
fn scrolled_page(marker: Option<&str>) -> Document {
    let mut link = Element::new("a").id("nav-link");
    if let Some(value) = marker {
        link = link.attr(markup::ATTR_PUSH_URL, value);
    }
    let mut doc = Document::new(Element::div().id("root").child(link));
    doc.scroll_to(5, 120);
    doc
}

fn descriptor(source: Option<&str>, push_url: Option<PushUrl>) -> RequestDescriptor {
    RequestDescriptor {
        source: source.map(str::to_owned),
        push_url,
    }
}

fn assert_scroll_reset(doc: &Document) {
    assert_eq!((doc.scroll().x, doc.scroll().y), (0, 0));
}

fn assert_scroll_untouched(doc: &Document) {
    assert_eq!((doc.scroll().x, doc.scroll().y), (5, 120));
}

// ============================================================================
// Rule table: request push flag
// ============================================================================

#[test]
fn test_missing_descriptor_leaves_scroll() {
    let mut doc = scrolled_page(None);
    settle_scroll(&mut doc, None);
    assert_scroll_untouched(&doc);
}

#[test]
fn test_empty_descriptor_leaves_scroll() {
    let mut doc = scrolled_page(None);
    settle_scroll(&mut doc, Some(&descriptor(None, None)));
    assert_scroll_untouched(&doc);
}

#[test]
fn test_flag_true_resets_scroll() {
    let mut doc = scrolled_page(None);
    settle_scroll(&mut doc, Some(&descriptor(None, Some(PushUrl::Flag(true)))));
    assert_scroll_reset(&doc);
}

#[test]
fn test_flag_false_leaves_scroll() {
    let mut doc = scrolled_page(None);
    settle_scroll(&mut doc, Some(&descriptor(None, Some(PushUrl::Flag(false)))));
    assert_scroll_untouched(&doc);
}

#[test]
fn test_url_string_resets_scroll() {
    let mut doc = scrolled_page(None);
    settle_scroll(
        &mut doc,
        Some(&descriptor(None, Some(PushUrl::Url("/docs".to_string())))),
    );
    assert_scroll_reset(&doc);
}

#[test]
fn test_blank_or_false_url_string_leaves_scroll() {
    for value in ["", "   ", "false", " False "] {
        let mut doc = scrolled_page(None);
        settle_scroll(
            &mut doc,
            Some(&descriptor(None, Some(PushUrl::Url(value.to_string())))),
        );
        assert_scroll_untouched(&doc);
    }
}

// ============================================================================
// Rule table: source element marker
// ============================================================================

#[test]
fn test_source_without_marker_leaves_scroll() {
    let mut doc = scrolled_page(None);
    settle_scroll(&mut doc, Some(&descriptor(Some("nav-link"), None)));
    assert_scroll_untouched(&doc);
}

#[test]
fn test_empty_string_marker_counts_as_opt_in() {
    let mut doc = scrolled_page(Some(""));
    settle_scroll(&mut doc, Some(&descriptor(Some("nav-link"), None)));
    assert_scroll_reset(&doc);
}

#[test]
fn test_false_marker_counts_as_opt_out() {
    for value in ["false", "FALSE", " false "] {
        let mut doc = scrolled_page(Some(value));
        settle_scroll(&mut doc, Some(&descriptor(Some("nav-link"), None)));
        assert_scroll_untouched(&doc);
    }
}

#[test]
fn test_any_other_marker_counts_as_opt_in() {
    for value in ["true", "/somewhere", "1"] {
        let mut doc = scrolled_page(Some(value));
        settle_scroll(&mut doc, Some(&descriptor(Some("nav-link"), None)));
        assert_scroll_reset(&doc);
    }
}

#[test]
fn test_unknown_source_id_falls_back_to_request_flag() {
    let mut doc = scrolled_page(Some(""));
    settle_scroll(&mut doc, Some(&descriptor(Some("gone"), None)));
    assert_scroll_untouched(&doc);

    settle_scroll(
        &mut doc,
        Some(&descriptor(Some("gone"), Some(PushUrl::Flag(true)))),
    );
    assert_scroll_reset(&doc);
}

// ============================================================================
// Through the delegated binding
// ============================================================================

#[test]
fn test_delegated_settle_resets_on_pushing_request() {
    let mut doc = scrolled_page(Some("/docs"));
    let mut binding = DelegatedBinding::new();

    binding.on_lifecycle(
        &mut doc,
        &LifecycleEvent::Settle(Some(descriptor(Some("nav-link"), None))),
    );
    assert_scroll_reset(&doc);
}

#[test]
fn test_delegated_settle_ignores_non_navigational_update() {
    let mut doc = scrolled_page(None);
    let mut binding = DelegatedBinding::new();

    binding.on_lifecycle(&mut doc, &LifecycleEvent::Settle(None));
    binding.on_lifecycle(
        &mut doc,
        &LifecycleEvent::Settle(Some(descriptor(None, Some(PushUrl::Flag(false))))),
    );
    assert_scroll_untouched(&doc);
}

#[test]
fn test_delegated_ignores_other_lifecycle_events() {
    let mut doc = scrolled_page(None);
    let mut binding = DelegatedBinding::new();

    binding.on_lifecycle(&mut doc, &LifecycleEvent::Ready);
    binding.on_lifecycle(&mut doc, &LifecycleEvent::SwapComplete);
    binding.on_lifecycle(&mut doc, &LifecycleEvent::HistoryNav);
    assert_scroll_untouched(&doc);
}
