pub mod binding;
pub mod delegated;
pub mod direct;
pub mod lifecycle;
pub mod markup;
pub mod widgets;

pub use binding::{Binding, DispatchResult};
pub use delegated::DelegatedBinding;
pub use direct::{DirectBinding, HandlerKind, DEFAULT_REINIT_DELAY};
pub use widgets::WidgetResult;

pub mod prelude {
    pub use crate::binding::{Binding, DispatchResult};
    pub use crate::delegated::DelegatedBinding;
    pub use crate::direct::{DirectBinding, HandlerKind};
    pub use crate::widgets::WidgetResult;

    pub use pagedom::{Document, Element, Event, LifecycleEvent, PushUrl, RequestDescriptor};
}
