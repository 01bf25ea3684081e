//! Window-like event targets.
//!
//! [`EventTarget`] is the seam between the binder and whatever owns the
//! global event bus. [`Window`] is the in-memory implementation: the default
//! global target outside a browser, and the target tests dispatch on.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::event::{Event, EventKind};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Handle returned by [`EventTarget::add_listener`], used to remove the
/// registration again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Callback invoked with each event dispatched on its channel.
pub type Listener = Rc<dyn Fn(&Event)>;

/// A global event-dispatch target (`window` in a browser).
pub trait EventTarget {
    /// Register `listener` on the `kind` channel.
    fn add_listener(&self, kind: EventKind, listener: Listener) -> ListenerId;

    /// Remove a registration. Unknown ids are ignored.
    fn remove_listener(&self, kind: &EventKind, id: ListenerId);

    /// Deliver `event` to every listener on its channel.
    fn dispatch(&self, event: &Event);
}

/// Ask the panels bound to `content_id` to remeasure, or every panel when
/// `content_id` is `None`.
pub fn dispatch_dynamic_resize<T: EventTarget + ?Sized>(target: &T, content_id: Option<&str>) {
    target.dispatch(&Event::dynamic_resize(content_id));
}

struct Registration {
    id: ListenerId,
    kind: EventKind,
    listener: Listener,
}

/// In-memory event target.
///
/// Clones share one listener table. Listeners on a channel run in
/// registration order.
#[derive(Clone, Default)]
pub struct Window {
    listeners: Rc<RefCell<Vec<Registration>>>,
}

thread_local! {
    static GLOBAL_WINDOW: Window = Window::new();
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    /// The thread's shared window, the default target for binders.
    pub fn global() -> Self {
        GLOBAL_WINDOW.with(Window::clone)
    }

    /// Dispatch a viewport resize.
    pub fn resize(&self, width: u32, height: u32) {
        self.dispatch(&Event::Resize { width, height });
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|r| r.id == id)
    }

    pub fn listener_count_for(&self, kind: &EventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|r| &r.kind == kind)
            .count()
    }
}

impl EventTarget for Window {
    fn add_listener(&self, kind: EventKind, listener: Listener) -> ListenerId {
        let id = ListenerId::next();
        log::trace!("[window] add {:?} listener {:?}", kind, id);
        self.listeners.borrow_mut().push(Registration { id, kind, listener });
        id
    }

    fn remove_listener(&self, kind: &EventKind, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|r| !(r.id == id && &r.kind == kind));
        if listeners.len() == before {
            log::trace!("[window] no {:?} listener {:?} to remove", kind, id);
        }
    }

    fn dispatch(&self, event: &Event) {
        let kind = event.kind();
        // Snapshot first: listeners may add or remove registrations while running.
        let matching: Vec<(ListenerId, Listener)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| (r.id, Rc::clone(&r.listener)))
            .collect();

        log::trace!(
            "[window] dispatch {} to {} listener(s)",
            kind.name(),
            matching.len()
        );

        for (id, listener) in matching {
            // Registrations removed by an earlier listener no longer fire.
            if !self.is_registered(id) {
                continue;
            }
            listener(event);
        }
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
