//! Scroll restoration on fragment-swap settle.
//!
//! History-pushing navigations jump the viewport back to the origin so
//! page-to-page navigation stays predictable; fragment updates that do not
//! touch the URL leave the scroll position alone.

use log::debug;

use pagedom::{Document, PushUrl, RequestDescriptor};

use crate::markup;

/// Apply the settle-event scroll policy. A missing descriptor changes
/// nothing.
pub fn settle_scroll(doc: &mut Document, descriptor: Option<&RequestDescriptor>) {
    let Some(descriptor) = descriptor else {
        return;
    };
    if pushes_url_via_attr(doc, descriptor) || pushes_url_via_request(descriptor) {
        debug!("settle requested a URL push, resetting scroll");
        doc.scroll_to(0, 0);
    }
}

/// Whether the source element opted into URL pushing via its marker
/// attribute.
///
/// Absent attribute: no. Otherwise the value is trimmed and lowercased; the
/// empty string and every value other than `"false"` count as opted in.
fn pushes_url_via_attr(doc: &Document, descriptor: &RequestDescriptor) -> bool {
    let Some(source) = descriptor.source.as_deref() else {
        return false;
    };
    let Some(element) = doc.element_by_id(source) else {
        return false;
    };
    match element.get_attr(markup::ATTR_PUSH_URL) {
        None => false,
        Some(value) => value.trim().to_lowercase() != "false",
    }
}

/// Whether the request itself carried a push flag: boolean `true` counts, a
/// string counts iff trimmed non-empty and not `"false"` case-insensitively.
fn pushes_url_via_request(descriptor: &RequestDescriptor) -> bool {
    match &descriptor.push_url {
        Some(PushUrl::Flag(flag)) => *flag,
        Some(PushUrl::Url(url)) => {
            let trimmed = url.trim();
            !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("false")
        }
        None => false,
    }
}
