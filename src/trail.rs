use crate::constants::TRAIL_MARKER_CLASS;
use crate::core::{MarkerId, Trail};
use crate::dom::{self, Listener};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Default)]
struct TrailState {
    trail: Trail,
    markers: FnvHashMap<MarkerId, web::Element>,
}

/// Drop a fading marker at the cursor on every mouse move.
pub fn wire(document: &web::Document, body: &web::HtmlElement) -> Listener {
    let state = Rc::new(RefCell::new(TrailState::default()));
    let doc = document.clone();
    let body = body.clone();

    dom::listen_mouse(document, "mousemove", move |ev| {
        let Ok(marker) = doc.create_element("div") else {
            return;
        };
        marker.set_class_name(TRAIL_MARKER_CLASS);
        _ = marker.set_attribute(
            "style",
            &format!("left: {}px; top: {}px", ev.client_x(), ev.client_y()),
        );
        _ = body.append_child(&marker);

        let expiry = {
            let mut s = state.borrow_mut();
            let spawned = s.trail.spawn();
            s.markers.insert(spawned.id, marker);
            if let Some(old) = spawned.evicted {
                if let Some(el) = s.markers.remove(&old) {
                    dom::detach(&el);
                }
                log::trace!("[trail] evicted marker {}", old.0);
            }
            spawned.expiry
        };

        let state = state.clone();
        dom::defer(expiry.delay_ms, move || expire(&state, expiry.task));
    })
}

// May run after the marker was already evicted; both lookups then miss.
fn expire(state: &Rc<RefCell<TrailState>>, id: MarkerId) {
    let mut s = state.borrow_mut();
    s.trail.expire(id);
    if let Some(el) = s.markers.remove(&id) {
        dom::detach(&el);
    }
}
