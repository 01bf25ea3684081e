#![cfg(all(feature = "web", target_arch = "wasm32"))]

use expand::web::max_height;
use expand::{ExpandBinder, EventTarget, Event, Px, WebWindow, DYNAMIC_RESIZE_EVENT};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// A 50px tall clipped panel whose content is `content_height` tall.
fn panel(content_height: u32) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let panel = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    panel.style().set_property("height", "50px").unwrap();
    panel.style().set_property("overflow", "hidden").unwrap();

    let content = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    content
        .style()
        .set_property("height", &format!("{content_height}px"))
        .unwrap();
    panel.append_child(&content).unwrap();
    document.body().unwrap().append_child(&panel).unwrap();
    panel
}

fn bound(element: &HtmlElement, content_id: &str) -> ExpandBinder<WebWindow, HtmlElement> {
    let mut binder = ExpandBinder::new(WebWindow::global().unwrap());
    binder.bind(Some(element.clone()), Some(content_id), &[]);
    binder
}

/// Dispatch the remeasure signal with a raw JS `detail` value.
fn signal(detail: &JsValue) {
    let init = CustomEventInit::new();
    init.set_detail(detail);
    let event = CustomEvent::new_with_event_init_dict(DYNAMIC_RESIZE_EVENT, &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn detail_with(content_id: &JsValue) -> JsValue {
    let object = js_sys::Object::new();
    js_sys::Reflect::set(&object, &JsValue::from_str("contentId"), content_id).unwrap();
    object.into()
}

// ============================================================================
// Detail payloads
// ============================================================================

#[wasm_bindgen_test]
fn null_detail_reaches_every_panel() {
    let element = panel(200);
    let _binder = bound(&element, "a");

    signal(&JsValue::NULL);

    assert_eq!(max_height(&element), Ok(Some(Px(200))));
}

#[wasm_bindgen_test]
fn zero_detail_reaches_every_panel() {
    let element = panel(180);
    let _binder = bound(&element, "a");

    signal(&JsValue::from_f64(0.0));

    assert_eq!(max_height(&element), Ok(Some(Px(180))));
}

#[wasm_bindgen_test]
fn detail_content_id_filters_panels() {
    let a = panel(120);
    let b = panel(240);
    let _binder_a = bound(&a, "a");
    let _binder_b = bound(&b, "b");

    signal(&detail_with(&JsValue::from_str("a")));

    assert_eq!(max_height(&a), Ok(Some(Px(120))));
    assert_eq!(max_height(&b), Ok(None));
}

#[wasm_bindgen_test]
fn non_string_content_id_matches_nothing_named() {
    let element = panel(90);
    let _binder = bound(&element, "7");

    signal(&detail_with(&JsValue::from_f64(7.0)));

    assert_eq!(max_height(&element), Ok(None));
}

// ============================================================================
// WebWindow
// ============================================================================

#[wasm_bindgen_test]
fn dispatched_signal_round_trips_through_dom() {
    let a = panel(130);
    let b = panel(260);
    let _binder_a = bound(&a, "a");
    let _binder_b = bound(&b, "b");

    WebWindow::global()
        .unwrap()
        .dispatch(&Event::dynamic_resize(Some("b")));

    assert_eq!(max_height(&a), Ok(None));
    assert_eq!(max_height(&b), Ok(Some(Px(260))));
}

#[wasm_bindgen_test]
fn resize_writes_style_max_height() {
    let element = panel(300);
    let _binder = bound(&element, "panel");

    WebWindow::global().unwrap().dispatch(&Event::Resize {
        width: 0,
        height: 0,
    });

    assert_eq!(
        element.style().get_property_value("max-height").unwrap(),
        "300px"
    );
}

#[wasm_bindgen_test]
fn hidden_panel_is_left_alone() {
    let element = panel(300);
    element.style().set_property("display", "none").unwrap();
    let _binder = bound(&element, "panel");

    signal(&JsValue::UNDEFINED);

    assert_eq!(max_height(&element), Ok(None));
}

#[wasm_bindgen_test]
fn unbound_panel_is_left_alone() {
    let element = panel(300);
    let mut binder = bound(&element, "panel");
    binder.unbind();

    signal(&JsValue::NULL);

    assert_eq!(max_height(&element), Ok(None));
}
