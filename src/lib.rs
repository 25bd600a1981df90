#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
pub mod core;
mod dom;
mod nav;
mod notice;
mod particles;
mod reveal;
mod scroll;
mod tilt;
mod trail;

/// Every listener registered by [`install`]. Dropping it unhooks them all;
/// timers already scheduled still fire and find nothing to do.
pub struct Installed {
    listeners: Vec<dom::Listener>,
}

impl Installed {
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

thread_local! {
    static INSTALLED: RefCell<Option<Installed>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("portfolio-effects starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Unhook all page effects. Safe to call more than once.
#[wasm_bindgen]
pub fn teardown() {
    let installed = INSTALLED.with(|slot| slot.borrow_mut().take());
    if let Some(installed) = installed {
        log::info!("removed {} listeners", installed.listener_count());
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::document_ready(&document).await;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let installed = install(&window, &document)?;
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(installed));
    Ok(())
}

/// Attach every effect to the page. Only the body is required; each other
/// hook is skipped when its elements are missing.
pub fn install(window: &web::Window, document: &web::Document) -> anyhow::Result<Installed> {
    let started = Instant::now();
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("missing <body>"))?;

    let particle_count = particles::spawn_field(document, &body);

    let mut listeners = vec![trail::wire(document, &body)];

    let notifier = notice::Notifier::new(document, &body);
    let has_form = match contact::wire(document, notifier) {
        Some(l) => {
            listeners.push(l);
            true
        }
        None => false,
    };

    let links = nav::wire(document);
    let link_count = links.len();
    listeners.extend(links);

    let reveal = reveal::Reveal::collect(document);
    listeners.push(scroll::wire(window, document, &body, reveal.clone()));
    reveal.check(window);

    let (tilt_listeners, card_count) = tilt::wire(document);
    listeners.extend(tilt_listeners);

    log::info!(
        "effects installed in {:?}: particles={} sections={} cards={} links={} contact_form={}",
        started.elapsed(),
        particle_count,
        reveal.len(),
        card_count,
        link_count,
        has_form
    );
    Ok(Installed { listeners })
}
