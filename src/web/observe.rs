//! Viewport-intersection subscriptions for reveals and counters.
//!
//! Every observer is one-shot per element: the first intersecting entry is
//! handed to the page and the element is unobserved.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::SharedPage;
use super::dom::{Dom, position};
use super::timers;
use crate::config::RevealConfig;
use crate::error::DomError;
use crate::reveal::RevealKind;

/// Subscribe every group. A group whose observer cannot be created is
/// logged and left static; the others are still wired.
pub fn wire(page: &SharedPage, dom: &Rc<Dom>) {
    let config = page.borrow().config().clone();
    for (kind, group) in [(RevealKind::FadeIn, &config.fade_in), (RevealKind::Timeline, &config.timeline)] {
        if let Err(err) = observe_reveal(page, dom, kind, group) {
            log::warn!("{kind:?} reveal disabled: {err}");
        }
    }
    if let Err(err) = observe_stats(page, dom, config.counter.threshold) {
        log::warn!("stat counters disabled: {err}");
    }
}

fn observe_reveal(page: &SharedPage, dom: &Rc<Dom>, kind: RevealKind, config: &RevealConfig) -> Result<(), DomError> {
    let elements = dom.reveal_elements(kind);
    if elements.is_empty() {
        return Ok(());
    }

    let page = Rc::clone(page);
    let cb_dom = Rc::clone(dom);
    let observer = one_shot_observer(config.threshold, Some(config.root_margin.as_str()), move |target| {
        let Some(index) = position(cb_dom.reveal_elements(kind), target) else {
            return;
        };
        let patches = page.borrow_mut().on_reveal(kind, index);
        cb_dom.apply(&patches);
    })?;
    for el in elements {
        observer.observe(el);
    }
    log::debug!("observing {} {kind:?} element(s)", elements.len());
    Ok(())
}

fn observe_stats(page: &SharedPage, dom: &Rc<Dom>, threshold: f64) -> Result<(), DomError> {
    if dom.stats().is_empty() {
        return Ok(());
    }

    let page = Rc::clone(page);
    let cb_dom = Rc::clone(dom);
    let observer = one_shot_observer(threshold, None, move |target| {
        let Some(index) = position(cb_dom.stats(), target) else {
            return;
        };
        let started = page.borrow_mut().on_stat_visible(index, cb_dom.now());
        if started {
            timers::animate_counter(&page, &cb_dom, index);
        }
    })?;
    for el in dom.stats() {
        observer.observe(el);
    }
    Ok(())
}

fn one_shot_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: impl FnMut(&Element) + 'static,
) -> Result<IntersectionObserver, DomError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            on_enter(&target);
            observer.unobserve(&target);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}
