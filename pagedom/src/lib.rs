pub mod document;
pub mod element;
pub mod event;
pub mod query;

pub use document::{Document, ScrollPosition};
pub use element::{Content, Element};
pub use event::{Event, LifecycleEvent, PushUrl, RequestDescriptor};
pub use query::{
    closest, descendants_matching, find_path_by_id, next_sibling, resolve, resolve_mut,
    ElementPath,
};
