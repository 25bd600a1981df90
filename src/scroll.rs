use crate::constants::{BACK_TO_TOP_ID, HEADER_SCROLLED_CLASS, HEADER_SELECTOR};
use crate::core::ScrollFrame;
use crate::dom::{self, Listener};
use crate::reveal::Reveal;
use std::rc::Rc;
use web_sys as web;

/// Single scroll listener: back-to-top control, header flag, backdrop
/// gradient, then section reveals. Runs on every scroll event, unthrottled.
pub fn wire(
    window: &web::Window,
    document: &web::Document,
    body: &web::HtmlElement,
    reveal: Rc<Reveal>,
) -> Listener {
    let win = window.clone();
    let doc = document.clone();
    let body = body.clone();
    Listener::new(window, "scroll", move |_| {
        let frame = ScrollFrame::at(dom::scroll_offset(&win));
        apply(&doc, &body, &frame);
        reveal.check(&win);
    })
}

fn apply(document: &web::Document, body: &web::HtmlElement, frame: &ScrollFrame) {
    if let Some(button) = document.get_element_by_id(BACK_TO_TOP_ID) {
        dom::set_style(&button, "display", frame.back_to_top_display());
    }

    if let Ok(Some(header)) = document.query_selector(HEADER_SELECTOR) {
        let cl = header.class_list();
        if frame.header_scrolled {
            _ = cl.add_1(HEADER_SCROLLED_CLASS);
        } else {
            _ = cl.remove_1(HEADER_SCROLLED_CLASS);
        }
    }

    let style = body.style();
    _ = style.set_property("background", &frame.backdrop.css());
    _ = style.set_property("background-attachment", "fixed");
}
