/// Name of the native viewport resize event.
pub const RESIZE_EVENT: &str = "resize";

/// Name of the application-level signal asking panels to remeasure.
pub const DYNAMIC_RESIZE_EVENT: &str = "collapsibleDynamicResize";

/// Events delivered by an [`EventTarget`](crate::EventTarget).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Viewport resized
    Resize { width: u32, height: u32 },
    /// Application-defined event, identified by name
    Custom {
        name: String,
        detail: Option<ResizeDetail>,
    },
}

impl Event {
    /// A `collapsibleDynamicResize` signal.
    ///
    /// `Some(id)` addresses the panels bound to `id`, `None` omits the detail
    /// payload entirely, which every panel treats as addressed to it.
    pub fn dynamic_resize(content_id: Option<&str>) -> Self {
        Self::Custom {
            name: DYNAMIC_RESIZE_EVENT.to_string(),
            detail: content_id.map(ResizeDetail::new),
        }
    }

    /// The channel this event is delivered on.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Resize { .. } => EventKind::Resize,
            Self::Custom { name, .. } => EventKind::from(name.as_str()),
        }
    }

    /// Detail payload of a custom event.
    pub fn detail(&self) -> Option<&ResizeDetail> {
        match self {
            Self::Resize { .. } => None,
            Self::Custom { detail, .. } => detail.as_ref(),
        }
    }
}

/// Listener channel on an event target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Resize,
    Custom(String),
}

impl EventKind {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// DOM event type name.
    pub fn name(&self) -> &str {
        match self {
            Self::Resize => RESIZE_EVENT,
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        if name == RESIZE_EVENT {
            Self::Resize
        } else {
            Self::Custom(name.to_string())
        }
    }
}

/// Payload of a dynamic resize signal.
///
/// `content_id` is optional because a sender may attach a detail object
/// without naming a panel; such a detail only matches binders that have no
/// content id either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeDetail {
    pub content_id: Option<String>,
}

impl ResizeDetail {
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: Some(content_id.into()),
        }
    }

    /// Detail object carrying no `contentId` field.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
