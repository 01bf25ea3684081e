//! Browser backend: the real `window` and `HTMLElement`s.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::element::Element;
use crate::event::{Event, EventKind, ResizeDetail, RESIZE_EVENT};
use crate::style::{ParsePxError, Px};
use crate::target::{EventTarget, Listener, ListenerId};

type DomCallback = Closure<dyn FnMut(web_sys::Event)>;

/// The browser `window` as an [`EventTarget`].
///
/// `addEventListener` needs the JS callback to outlive the call, so the
/// closures are kept here until their listener is removed.
#[derive(Clone)]
pub struct WebWindow {
    window: web_sys::Window,
    callbacks: Rc<RefCell<HashMap<ListenerId, DomCallback>>>,
}

impl WebWindow {
    pub fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            callbacks: Rc::default(),
        }
    }

    /// The page's global `window`, if running in a browser context.
    pub fn global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    pub fn window(&self) -> &web_sys::Window {
        &self.window
    }
}

impl EventTarget for WebWindow {
    fn add_listener(&self, kind: EventKind, listener: Listener) -> ListenerId {
        let window = self.window.clone();
        let callback = DomCallback::new(move |raw: web_sys::Event| {
            listener(&from_dom_event(&window, &raw));
        });

        if let Err(err) = self
            .window
            .add_event_listener_with_callback(kind.name(), callback.as_ref().unchecked_ref())
        {
            log::warn!("[web] addEventListener({}) failed: {:?}", kind.name(), err);
        }

        let id = ListenerId::next();
        self.callbacks.borrow_mut().insert(id, callback);
        id
    }

    fn remove_listener(&self, kind: &EventKind, id: ListenerId) {
        let Some(callback) = self.callbacks.borrow_mut().remove(&id) else {
            return;
        };
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(kind.name(), callback.as_ref().unchecked_ref())
        {
            log::warn!("[web] removeEventListener({}) failed: {:?}", kind.name(), err);
        }
    }

    fn dispatch(&self, event: &Event) {
        let dom_event = match to_dom_event(event) {
            Ok(dom_event) => dom_event,
            Err(err) => {
                log::warn!("[web] could not build {:?}: {:?}", event.kind(), err);
                return;
            }
        };
        if let Err(err) = self.window.dispatch_event(&dom_event) {
            log::warn!("[web] dispatchEvent failed: {:?}", err);
        }
    }
}

impl fmt::Debug for WebWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebWindow")
            .field("listeners", &self.callbacks.borrow().len())
            .finish()
    }
}

fn dimension(value: Result<JsValue, JsValue>) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v.max(0.0) as u32)
        .unwrap_or(0)
}

fn from_dom_event(window: &web_sys::Window, raw: &web_sys::Event) -> Event {
    let name = raw.type_();
    let Some(custom) = raw.dyn_ref::<web_sys::CustomEvent>() else {
        if name == RESIZE_EVENT {
            return Event::Resize {
                width: dimension(window.inner_width()),
                height: dimension(window.inner_height()),
            };
        }
        return Event::Custom { name, detail: None };
    };

    // A falsy detail (null, undefined, 0, "") counts as no detail at all.
    let detail = Some(custom.detail())
        .filter(JsValue::is_truthy)
        .map(|detail| ResizeDetail {
            content_id: js_sys::Reflect::get(&detail, &JsValue::from_str("contentId"))
                .ok()
                .and_then(|v| v.as_string()),
        });

    Event::Custom { name, detail }
}

fn to_dom_event(event: &Event) -> Result<web_sys::Event, JsValue> {
    match event {
        Event::Resize { .. } => web_sys::Event::new(RESIZE_EVENT),
        Event::Custom { name, detail } => {
            let init = web_sys::CustomEventInit::new();
            if let Some(detail) = detail {
                let object = js_sys::Object::new();
                if let Some(content_id) = &detail.content_id {
                    js_sys::Reflect::set(
                        &object,
                        &JsValue::from_str("contentId"),
                        &JsValue::from_str(content_id),
                    )?;
                }
                init.set_detail(&object);
            }
            let custom = web_sys::CustomEvent::new_with_event_init_dict(name, &init)?;
            Ok(custom.into())
        }
    }
}

impl Element for web_sys::HtmlElement {
    fn offset_height(&self) -> u32 {
        web_sys::HtmlElement::offset_height(self).max(0) as u32
    }

    fn scroll_height(&self) -> u32 {
        web_sys::Element::scroll_height(self).max(0) as u32
    }

    fn set_max_height(&self, value: Px) {
        if let Err(err) = self.style().set_property("max-height", &value.to_string()) {
            log::warn!("[web] could not set max-height: {:?}", err);
        }
    }
}

/// Read back the inline `max-height` of `element`; `None` when unset.
pub fn max_height(element: &web_sys::HtmlElement) -> Result<Option<Px>, ParsePxError> {
    let css = element
        .style()
        .get_property_value("max-height")
        .unwrap_or_default();
    if css.is_empty() {
        return Ok(None);
    }
    css.parse().map(Some)
}
