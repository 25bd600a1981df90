use crate::constants::{CARD_SHINE_SELECTOR, TILT_CARD_SELECTOR};
use crate::core::constants::{SHINE_OPACITY_ACTIVE, SHINE_OPACITY_IDLE};
use crate::core::tilt::{self, CardRect, Tilt, REST_TRANSFORM};
use crate::dom::{self, Listener};
use glam::Vec2;
use web_sys as web;

fn card_rect(card: &web::Element) -> CardRect {
    let r = card.get_bounding_client_rect();
    CardRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

fn set_shine_opacity(shine: Option<&web::Element>, opacity: f32) {
    if let Some(shine) = shine {
        dom::set_style(shine, "opacity", &opacity.to_string());
    }
}

/// Hook move/enter/leave on every skill and project card. Returns the
/// listeners and the number of cards wired.
pub fn wire(document: &web::Document) -> (Vec<Listener>, usize) {
    let cards = dom::elements(document.query_selector_all(TILT_CARD_SELECTOR));
    let count = cards.len();
    let mut listeners = Vec::with_capacity(count * 3);
    for card in cards {
        let shine = card.query_selector(CARD_SHINE_SELECTOR).ok().flatten();

        let (c, s) = (card.clone(), shine.clone());
        listeners.push(dom::listen_mouse(&card, "mousemove", move |ev| {
            let rect = card_rect(&c);
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            if let Some(shine) = &s {
                let origin = tilt::shine_origin(&rect, pointer);
                dom::set_style(shine, "background", &tilt::shine_css(origin));
            }
            set_shine_opacity(s.as_ref(), SHINE_OPACITY_ACTIVE);
            dom::set_style(&c, "transform", &Tilt::toward(&rect, pointer).css());
        }));

        let (c, s) = (card.clone(), shine.clone());
        listeners.push(dom::listen_mouse(&card, "mouseenter", move |_| {
            set_shine_opacity(s.as_ref(), SHINE_OPACITY_ACTIVE);
            dom::set_style(&c, "transform", &tilt::hover_css());
        }));

        let (c, s) = (card.clone(), shine);
        listeners.push(dom::listen_mouse(&card, "mouseleave", move |_| {
            dom::set_style(&c, "transform", REST_TRANSFORM);
            set_shine_opacity(s.as_ref(), SHINE_OPACITY_IDLE);
        }));
    }
    (listeners, count)
}
