use js_sys::Promise;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Event listener registration that is removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Like [`Listener::new`] for mouse events; other event types are ignored.
pub fn listen_mouse(
    target: &web::EventTarget,
    kind: &'static str,
    mut handler: impl FnMut(&web::MouseEvent) + 'static,
) -> Listener {
    Listener::new(target, kind, move |ev| {
        if let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() {
            handler(mouse);
        }
    })
}

/// Run `task` once after `delay_ms`. There is no handle to cancel it; tasks
/// must tolerate their target being gone by the time they run.
pub fn defer(delay_ms: u32, task: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(task);
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay,
    );
}

/// Resolves once `DOMContentLoaded` has fired, or immediately when the
/// document is already past the loading stage.
pub async fn document_ready(document: &web::Document) {
    if document.ready_state() != "loading" {
        return;
    }
    let promise = Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    _ = JsFuture::from(promise).await;
}

/// Flatten a `querySelectorAll` result into elements, treating a bad
/// selector as an empty match.
pub fn elements(list: Result<web::NodeList, JsValue>) -> Vec<web::Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Remove `el` from the tree if it is still attached.
#[inline]
pub fn detach(el: &web::Element) {
    if el.parent_node().is_some() {
        el.remove();
    }
}
