//! Click and scroll subscriptions.
//!
//! Each listener borrows the page only long enough to compute patches, then
//! applies them after the borrow ends. Listeners live as long as the page.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use super::SharedPage;
use super::dom::Dom;
use super::store::BrowserStore;
use crate::error::DomError;
use crate::page::Page;
use crate::patch::{Patch, Target};

pub fn wire(page: &SharedPage, dom: &Rc<Dom>) -> Result<(), DomError> {
    if let Some(toggle) = dom.element(Target::ThemeToggle) {
        listen(toggle, "click", dispatch(page, dom, Page::on_theme_toggle))?;
    }
    if let Some(hamburger) = dom.element(Target::Hamburger) {
        listen(hamburger, "click", dispatch(page, dom, Page::on_hamburger))?;
    }
    for link in dom.menu_links() {
        listen(link, "click", dispatch(page, dom, Page::on_nav_link))?;
    }
    if let Some(button) = dom.element(Target::ScrollTop) {
        listen(button, "click", dispatch(page, dom, Page::on_scroll_top))?;
    }
    for (index, tab) in dom.pub_tabs().iter().enumerate() {
        listen(tab, "click", dispatch(page, dom, move |page| page.on_pub_tab(index)))?;
    }

    let page = Rc::clone(page);
    let scroll_dom = Rc::clone(dom);
    listen_passive(dom.window(), "scroll", move || {
        let metrics = scroll_dom.scroll_metrics();
        let regions = scroll_dom.regions();
        let patches = page.borrow_mut().on_scroll(&metrics, &regions);
        scroll_dom.apply(&patches);
    })?;
    Ok(())
}

/// Route an event to a page handler and apply what it returns.
fn dispatch(
    page: &SharedPage,
    dom: &Rc<Dom>,
    handler: impl Fn(&mut Page<BrowserStore>) -> Vec<Patch> + 'static,
) -> impl FnMut() + 'static {
    let page = Rc::clone(page);
    let dom = Rc::clone(dom);
    move || {
        let patches = handler(&mut *page.borrow_mut());
        dom.apply(&patches);
    }
}

fn listen(target: &EventTarget, event: &str, mut handler: impl FnMut() + 'static) -> Result<(), DomError> {
    let callback = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn listen_passive(target: &EventTarget, event: &str, mut handler: impl FnMut() + 'static) -> Result<(), DomError> {
    let callback = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}
