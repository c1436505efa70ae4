//! Browser shell: binds the page's markup to the core and subscribes to events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. The wasm start function loads
//! configuration, installs logging, binds elements, applies the startup
//! patches, and then hands control to the browser's event loop. From then on
//! every listener, observer, timeout, and animation frame funnels into the
//! single shared [`Page`].

mod dom;
mod events;
mod observe;
mod store;
mod timers;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::error::{ConfigError, DomError};
use crate::page::Page;
use dom::Dom;
use store::BrowserStore;

/// Id of the optional JSON config element.
const CONFIG_ELEMENT_ID: &str = "folio-config";

pub(crate) type SharedPage = Rc<RefCell<Page<BrowserStore>>>;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = boot() {
        log::warn!("folio: startup aborted: {err}");
    }
}

fn boot() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let loaded = load_config(&document);
    let level = loaded.as_ref().map_or(log::Level::Info, |config| config.level().unwrap_or(log::Level::Info));
    if console_log::init_with_level(level).is_err() {
        // Another logger was installed first; keep using it.
        log::debug!("console logger already installed");
    }
    let config = loaded.unwrap_or_else(|err| {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        SiteConfig::default()
    });

    let dom = Rc::new(Dom::bind(window, &document)?);
    let store = BrowserStore::new(dom.window(), &config.storage_key);
    let page: SharedPage = Rc::new(RefCell::new(Page::new(config, store, dom.inventory())));

    let patches = page.borrow_mut().boot(&dom.scroll_metrics(), &dom.regions());
    dom.apply(&patches);

    if let Err(err) = events::wire(&page, &dom) {
        log::warn!("event wiring incomplete: {err}");
    }
    observe::wire(&page, &dom);
    timers::start_typewriter(&page, &dom);

    log::info!(
        "folio ready: theme={}, {} startup patch(es)",
        page.borrow().theme().mode().as_str(),
        patches.len()
    );
    Ok(())
}

fn load_config(document: &Document) -> Result<SiteConfig, ConfigError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(el) => SiteConfig::from_json(&el.text_content().unwrap_or_default()),
        None => Ok(SiteConfig::default()),
    }
}
