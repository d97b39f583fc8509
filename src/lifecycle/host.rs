use std::{cell::RefCell, rc::Rc};

use crate::foundation::core::Canvas;

/// Callback invoked with the new canvas extent.
pub type ResizeListener = Box<dyn FnMut(Canvas)>;

/// Handle to an event subscription; the disposer runs exactly once, on
/// [`Subscription::dispose`] or on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    disposer: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Subscription released by `disposer`.
    pub fn new(disposer: impl FnOnce() + 'static) -> Self {
        Self {
            disposer: Some(Box::new(disposer)),
        }
    }

    /// Release the subscription now.
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(d) = self.disposer.take() {
            d();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.disposer.is_some())
            .finish()
    }
}

/// Host-provided event source.
pub trait EventSource {
    /// Register `listener` for resize notifications.
    fn on_resize(&mut self, listener: ResizeListener) -> Subscription;
}

/// What the host hands over at initialization.
pub struct HostContext<'a> {
    /// Initial drawing surface extent.
    pub canvas: Canvas,
    /// Event source for resize notifications.
    pub events: &'a mut dyn EventSource,
}

type SharedListener = Rc<RefCell<ResizeListener>>;
type ListenerList = Rc<RefCell<Vec<(u64, SharedListener)>>>;

/// Single-threaded [`EventSource`] that hosts drive by calling [`LocalEventBus::emit_resize`].
#[derive(Clone, Default)]
pub struct LocalEventBus {
    listeners: ListenerList,
    next_id: Rc<RefCell<u64>>,
}

impl LocalEventBus {
    /// Empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a resize to every live listener, in subscription order.
    ///
    /// Listeners may subscribe or dispose during delivery. A listener disposed earlier in
    /// the same delivery is skipped; one added during delivery first hears the next resize.
    pub fn emit_resize(&self, canvas: Canvas) {
        let snapshot: Vec<(u64, SharedListener)> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();
        for (id, listener) in snapshot {
            if !self.is_live(id) {
                continue;
            }
            // A listener re-emitting a resize does not hear its own nested delivery.
            if let Ok(mut listener) = listener.try_borrow_mut() {
                (*listener)(canvas);
            }
        }
    }

    fn is_live(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(lid, _)| *lid == id)
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl EventSource for LocalEventBus {
    fn on_resize(&mut self, listener: ResizeListener) -> Subscription {
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next
        };
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));

        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            let Some(list) = listeners.upgrade() else {
                return;
            };
            let removed = {
                let mut list = list.borrow_mut();
                list.iter()
                    .position(|(lid, _)| *lid == id)
                    .map(|i| list.remove(i))
            };
            // Dropped after the borrow: the listener may own further subscriptions.
            drop(removed);
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/lifecycle/host.rs"]
mod tests;
