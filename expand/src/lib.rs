pub mod binder;
pub mod config;
pub mod element;
pub mod event;
pub mod style;
pub mod target;
#[cfg(feature = "web")]
pub mod web;

pub use binder::{sync_max_height, Activation, BinderState, ExpandBinder, Subscription};
pub use config::ExpandConfig;
pub use element::{Element, Node};
pub use event::{Event, EventKind, ResizeDetail, DYNAMIC_RESIZE_EVENT, RESIZE_EVENT};
pub use style::{ParsePxError, Px, Style};
pub use target::{dispatch_dynamic_resize, EventTarget, Listener, ListenerId, Window};
#[cfg(feature = "web")]
pub use web::WebWindow;
