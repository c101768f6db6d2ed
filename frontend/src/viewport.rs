//! Access to the browser viewport's vertical scroll position.
//!
//! Components never talk to `web_sys::window()` directly for scrolling; they
//! go through [`Viewport`] so the listener lifecycle can be exercised without
//! a browser.

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub type ScrollCallback = Rc<dyn Fn(f64)>;

pub trait Viewport {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Registers `on_scroll` for scroll notifications until the returned
    /// subscription is dropped or cancelled.
    fn subscribe(&self, on_scroll: ScrollCallback) -> ScrollSubscription;
}

/// Handle for a registered scroll listener. Dropping it detaches the listener.
#[must_use = "dropping the subscription detaches the listener"]
pub struct ScrollSubscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to detach.
    pub fn inert() -> Self {
        Self { teardown: None }
    }

    pub fn cancel(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Reports the current offset to `on_change` right away, then keeps
/// reporting every scroll event until the subscription goes away.
pub fn watch_scroll(viewport: &impl Viewport, on_change: ScrollCallback) -> ScrollSubscription {
    on_change(viewport.scroll_offset());
    viewport.subscribe(on_change)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn subscribe(&self, on_scroll: ScrollCallback) -> ScrollSubscription {
        let Some(window) = web_sys::window() else {
            warn!("No window available, scroll tracking disabled");
            return ScrollSubscription::inert();
        };

        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            on_scroll(reader.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        if let Err(err) =
            window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        {
            warn!("Failed to attach scroll listener: {:?}", err);
            return ScrollSubscription::inert();
        }
        debug!("Scroll listener attached");

        ScrollSubscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                warn!("Failed to detach scroll listener: {:?}", err);
            } else {
                debug!("Scroll listener detached");
            }
        })
    }
}

#[cfg(test)]
pub mod mock {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{ScrollCallback, ScrollSubscription, Viewport};

    /// In-memory viewport that counts live listeners.
    #[derive(Clone, Default)]
    pub struct MockViewport {
        offset: Rc<Cell<f64>>,
        listeners: Rc<RefCell<Vec<(usize, ScrollCallback)>>>,
        next_id: Rc<Cell<usize>>,
    }

    impl MockViewport {
        pub fn at(offset: f64) -> Self {
            let viewport = Self::default();
            viewport.offset.set(offset);
            viewport
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }

        pub fn scroll_to(&self, offset: f64) {
            self.offset.set(offset);
            let listeners: Vec<ScrollCallback> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, cb)| cb.clone())
                .collect();
            for cb in listeners {
                cb(offset);
            }
        }
    }

    impl Viewport for MockViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn subscribe(&self, on_scroll: ScrollCallback) -> ScrollSubscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, on_scroll));

            let listeners = self.listeners.clone();
            ScrollSubscription::new(move || {
                listeners.borrow_mut().retain(|(other, _)| *other != id);
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::mock::MockViewport;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, ScrollCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Rc::new(move |offset| sink.borrow_mut().push(offset)))
    }

    #[test]
    fn reports_current_offset_before_any_event() {
        let viewport = MockViewport::at(120.0);
        let (seen, cb) = recorder();

        let _sub = watch_scroll(&viewport, cb);

        assert_eq!(*seen.borrow(), vec![120.0]);
    }

    #[test]
    fn delivers_events_in_order() {
        let viewport = MockViewport::at(0.0);
        let (seen, cb) = recorder();
        let _sub = watch_scroll(&viewport, cb);

        viewport.scroll_to(10.0);
        viewport.scroll_to(80.0);
        viewport.scroll_to(30.0);

        assert_eq!(*seen.borrow(), vec![0.0, 10.0, 80.0, 30.0]);
    }

    #[test]
    fn unmount_leaves_no_listeners() {
        let viewport = MockViewport::at(0.0);
        let (_, cb) = recorder();

        let sub = watch_scroll(&viewport, cb);
        assert_eq!(viewport.listener_count(), 1);

        drop(sub);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn remount_does_not_duplicate_listeners() {
        let viewport = MockViewport::at(0.0);
        for _ in 0..3 {
            let (_, cb) = recorder();
            let _sub = watch_scroll(&viewport, cb);
            assert_eq!(viewport.listener_count(), 1);
        }
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn cancel_is_idempotent() {
        let viewport = MockViewport::at(0.0);
        let (seen, cb) = recorder();

        let mut sub = watch_scroll(&viewport, cb);
        sub.cancel();
        sub.cancel();
        drop(sub);

        viewport.scroll_to(99.0);
        assert_eq!(viewport.listener_count(), 0);
        assert_eq!(*seen.borrow(), vec![0.0]);
    }
}
