use crate::constants::{
    NOTICE_CLOSE_CLASS, NOTICE_CLOSE_GLYPH, NOTICE_CONTENT_CLASS, NOTICE_SELECTOR,
};
use crate::core::{Notice, NoticeId, NoticeSlot};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Banner {
    el: web::Element,
    // Dropped only on replacement or auto-dismiss, never from inside its own
    // click handler.
    _close: Listener,
}

/// Presents at most one notification banner at a time.
#[derive(Clone)]
pub struct Notifier {
    document: web::Document,
    body: web::HtmlElement,
    slot: Rc<RefCell<NoticeSlot<Banner>>>,
}

impl Notifier {
    pub fn new(document: &web::Document, body: &web::HtmlElement) -> Self {
        Self {
            document: document.clone(),
            body: body.clone(),
            slot: Rc::new(RefCell::new(NoticeSlot::new())),
        }
    }

    pub fn show(&self, notice: &Notice) {
        let Some((el, close_button)) = self.build(notice) else {
            return;
        };

        let shown = self.slot.borrow_mut().show_with(|id| {
            let this = self.clone();
            Banner {
                el: el.clone(),
                _close: Listener::new(&close_button, "click", move |_| this.close(id)),
            }
        });
        if let Some(previous) = shown.replaced {
            dom::detach(&previous.el);
        }
        // Banners the page shipped with or that were added behind our back.
        for stray in dom::elements(self.document.query_selector_all(NOTICE_SELECTOR)) {
            stray.remove();
        }
        _ = self.body.append_child(&el);

        let this = self.clone();
        let dismiss = shown.dismiss;
        dom::defer(dismiss.delay_ms, move || this.dismiss(dismiss.task));
        log::debug!("[notice] {} shown ({})", shown.id.0, notice.kind.as_str());
    }

    fn build(&self, notice: &Notice) -> Option<(web::Element, web::Element)> {
        let doc = &self.document;
        let root = doc.create_element("div").ok()?;
        root.set_class_name(&notice.kind.class_name());

        let content = doc.create_element("div").ok()?;
        content.set_class_name(NOTICE_CONTENT_CLASS);

        let text = doc.create_element("span").ok()?;
        text.set_text_content(Some(notice.message.as_str()));

        let close = doc.create_element("button").ok()?;
        close.set_class_name(NOTICE_CLOSE_CLASS);
        _ = close.set_attribute("type", "button");
        close.set_text_content(Some(NOTICE_CLOSE_GLYPH));

        content.append_child(&text).ok()?;
        content.append_child(&close).ok()?;
        root.append_child(&content).ok()?;
        Some((root, close))
    }

    fn close(&self, id: NoticeId) {
        if let Some(banner) = self.slot.borrow_mut().close(id) {
            dom::detach(&banner.el);
        }
    }

    // Late timers (after a close click or a newer banner) find nothing to do.
    fn dismiss(&self, id: NoticeId) {
        let released = self.slot.borrow_mut().dismiss(id);
        if let Some(banner) = released {
            dom::detach(&banner.el);
        }
    }
}
