use serde::{Deserialize, Serialize};

/// User input events targeted at elements in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on the element with the given id.
    Click { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }
}

/// Navigation lifecycle signals emitted by the host and the fragment-swap
/// engine. The engine itself is a black box; these are its only outputs the
/// widget layer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Initial document-ready signal.
    Ready,
    /// New content has been inserted and stabilized. Carries the originating
    /// request descriptor when the engine supplied one.
    Settle(Option<RequestDescriptor>),
    /// A swap operation has fully finished.
    SwapComplete,
    /// Browser history navigation (back/forward) restored a fragment.
    HistoryNav,
}

/// Describes the request that produced a settled swap. Delivered by the swap
/// engine as a JSON payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Id of the element that issued the request, when known.
    #[serde(default)]
    pub source: Option<String>,
    /// Whether the request asked for a URL-history push.
    #[serde(default)]
    pub push_url: Option<PushUrl>,
}

/// Push-url flag as delivered by the swap engine: either a boolean or the raw
/// attribute string (which may name the URL to push).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PushUrl {
    Flag(bool),
    Url(String),
}
