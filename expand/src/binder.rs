//! Keeps an expanded panel's `max-height` in step with its content.
//!
//! An [`ExpandBinder`] owns a pair of listener registrations on an event
//! target: the viewport `resize` channel and the `collapsibleDynamicResize`
//! signal. Whenever either fires, the bound element is remeasured and its
//! `max-height` set to the full content height, so a CSS transition on
//! `max-height` can animate the panel open and closed.
//!
//! Registrations live as long as the binder's dependencies stay the same.
//! Calling [`ExpandBinder::bind`] with a different element, content id, or
//! trigger list tears the old pair down before registering a new one.

use std::rc::Rc;

use crate::config::ExpandConfig;
use crate::element::Element;
use crate::event::{Event, EventKind};
use crate::style::Px;
use crate::target::{EventTarget, Listener, ListenerId, Window};

/// Whether a binder currently holds its listener registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderState {
    Inactive,
    Active,
}

/// Outcome of [`ExpandBinder::bind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Dependencies unchanged; existing registrations kept.
    Unchanged,
    /// Registered from the inactive state.
    Activated,
    /// Previous registrations removed and new ones installed.
    Rebound,
}

/// Listener registrations on one target, removed together on drop.
pub struct Subscription<T: EventTarget> {
    target: T,
    registrations: Vec<(EventKind, ListenerId)>,
}

impl<T: EventTarget + Clone> Subscription<T> {
    /// Register `listener` on every channel in `kinds`.
    pub fn acquire(
        target: &T,
        kinds: impl IntoIterator<Item = EventKind>,
        listener: Listener,
    ) -> Self {
        let registrations = kinds
            .into_iter()
            .map(|kind| {
                let id = target.add_listener(kind.clone(), Rc::clone(&listener));
                (kind, id)
            })
            .collect();
        Self {
            target: target.clone(),
            registrations,
        }
    }
}

impl<T: EventTarget> Subscription<T> {
    pub fn kinds(&self) -> impl Iterator<Item = &EventKind> {
        self.registrations.iter().map(|(kind, _)| kind)
    }
}

impl<T: EventTarget> Drop for Subscription<T> {
    fn drop(&mut self) {
        for (kind, id) in &self.registrations {
            self.target.remove_listener(kind, *id);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Deps<E, D> {
    element: Option<E>,
    content_id: Option<String>,
    triggers: Vec<D>,
}

/// Remeasure `element` and write its content height as `max-height`.
///
/// Collapsed elements (`offset_height() == 0`) are left untouched so that a
/// background resize never forces a closed panel open. Returns the value
/// written, if any.
pub fn sync_max_height<E: Element + ?Sized>(element: &E) -> Option<Px> {
    if element.offset_height() == 0 {
        return None;
    }
    let height = Px(element.scroll_height());
    element.set_max_height(height);
    Some(height)
}

/// Binds an element's `max-height` to resize events on a target.
///
/// `D` is the type of the extra reactivity triggers; any change in the
/// trigger list between two [`bind`](Self::bind) calls re-registers.
pub struct ExpandBinder<T: EventTarget, E, D = ()> {
    target: T,
    config: ExpandConfig,
    deps: Option<Deps<E, D>>,
    subscription: Option<Subscription<T>>,
}

impl<T: EventTarget, E, D> ExpandBinder<T, E, D> {
    pub fn new(target: T) -> Self {
        Self::with_config(target, ExpandConfig::default())
    }

    pub fn with_config(target: T, config: ExpandConfig) -> Self {
        Self {
            target,
            config,
            deps: None,
            subscription: None,
        }
    }

    pub fn state(&self) -> BinderState {
        if self.subscription.is_some() {
            BinderState::Active
        } else {
            BinderState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == BinderState::Active
    }

    /// Remove both listeners and forget the current dependencies.
    pub fn unbind(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("[{}] unbound", self.config.label);
        }
        self.deps = None;
    }
}

impl<T, E, D> ExpandBinder<T, E, D>
where
    T: EventTarget + Clone,
    E: Element + PartialEq + Clone + 'static,
    D: PartialEq + Clone,
{
    /// Register (or re-register) the resize listeners for `element`.
    ///
    /// A no-op when the binder is active and `element`, `content_id`, and
    /// `triggers` all equal the previous call's.
    pub fn bind(
        &mut self,
        element: Option<E>,
        content_id: Option<&str>,
        triggers: &[D],
    ) -> Activation {
        let deps = Deps {
            element,
            content_id: content_id.map(str::to_string),
            triggers: triggers.to_vec(),
        };

        if self.subscription.is_some() && self.deps.as_ref() == Some(&deps) {
            return Activation::Unchanged;
        }

        let activation = match self.subscription.take() {
            Some(previous) => {
                drop(previous);
                Activation::Rebound
            }
            None => Activation::Activated,
        };

        let mut kinds = vec![EventKind::Resize];
        let dynamic_kind = self.config.dynamic_resize_kind();
        if dynamic_kind != EventKind::Resize {
            kinds.push(dynamic_kind);
        }
        let listener = resize_listener(
            deps.element.clone(),
            deps.content_id.clone(),
            self.config.clone(),
        );
        self.subscription = Some(Subscription::acquire(
            &self.target,
            kinds,
            listener,
        ));

        log::debug!(
            "[{}] {:?} (content id {:?}, element {})",
            self.config.label,
            activation,
            deps.content_id,
            if deps.element.is_some() { "present" } else { "absent" }
        );
        self.deps = Some(deps);
        activation
    }
}

impl<E, D> Default for ExpandBinder<Window, E, D> {
    fn default() -> Self {
        Self::new(Window::global())
    }
}

fn resize_listener<E>(
    element: Option<E>,
    content_id: Option<String>,
    config: ExpandConfig,
) -> Listener
where
    E: Element + 'static,
{
    Rc::new(move |event: &Event| {
        if let Event::Custom { name, detail } = event {
            if *name != config.dynamic_resize_event {
                return;
            }
            if let Some(detail) = detail {
                if detail.content_id != content_id {
                    log::trace!(
                        "[{}] ignoring signal for {:?}",
                        config.label,
                        detail.content_id
                    );
                    return;
                }
            }
        }

        let Some(element) = element.as_ref() else {
            return;
        };
        match sync_max_height(element) {
            Some(height) => log::trace!("[{}] max-height set to {}", config.label, height),
            None => log::trace!("[{}] collapsed, max-height left alone", config.label),
        }
    })
}
