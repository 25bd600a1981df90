use crate::constants::IN_PAGE_LINK_SELECTOR;
use crate::core::anchor;
use crate::dom::{self, Listener};
use web_sys as web;

fn scroll_to(document: &web::Document, href: &str) {
    let Some(target) = anchor::fragment_id(href).and_then(|id| document.get_element_by_id(id))
    else {
        return;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Smooth-scroll every `#fragment` link. Clicks are always swallowed, even
/// when the fragment matches nothing.
pub fn wire(document: &web::Document) -> Vec<Listener> {
    dom::elements(document.query_selector_all(IN_PAGE_LINK_SELECTOR))
        .into_iter()
        .map(|link| {
            let doc = document.clone();
            let el = link.clone();
            Listener::new(&link, "click", move |ev| {
                ev.prevent_default();
                match el.get_attribute("href") {
                    Some(href) if anchor::is_in_page(&href) => scroll_to(&doc, &href),
                    _ => {}
                }
            })
        })
        .collect()
}
