//! Timer and animation-frame drivers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;

use super::SharedPage;
use super::dom::Dom;

/// Kick off the typewriter loop after its configured start delay.
pub fn start_typewriter(page: &SharedPage, dom: &Rc<Dom>) {
    let start_ms = {
        let page = page.borrow();
        if !page.has_typewriter() {
            return;
        }
        page.config().typewriter.start_ms
    };
    schedule_typewriter(Rc::clone(page), Rc::clone(dom), start_ms);
}

/// Each tick schedules the next one; the chain runs for the page's lifetime.
fn schedule_typewriter(page: SharedPage, dom: Rc<Dom>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let step = page.borrow_mut().on_typewriter_tick();
        if let Some(step) = step {
            dom.apply(std::slice::from_ref(&step.patch));
            schedule_typewriter(page, dom, step.delay_ms);
        }
    })
    .forget();
}

/// Drive counter `index` frame by frame until its animation finishes.
pub fn animate_counter(page: &SharedPage, dom: &Rc<Dom>, index: usize) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let page = Rc::clone(page);
    let cb_dom = Rc::clone(dom);

    let cb = Closure::wrap(Box::new(move |now: f64| {
        let patches = page.borrow_mut().on_counter_frame(index, now);
        cb_dom.apply(&patches);

        if !page.borrow().counter_running(index) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let requested = holder_for_cb.borrow().as_ref().map(|cb| cb_dom.request_frame(cb));
        if let Some(Err(err)) = requested {
            log::warn!("counter {index}: animation frame request failed: {err}");
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    match dom.request_frame(&cb) {
        Ok(()) => *holder.borrow_mut() = Some(cb),
        Err(err) => log::warn!("counter {index}: animation frame request failed: {err}"),
    }
}
