//! core/broker.rs
//! Fan-out hub for player events.
//!
//! Exactly one upstream connection (the engine's event receiver) feeds an
//! arbitrary number of UI-side subscribers. The broker never synthesizes,
//! reorders or replays events: a new subscriber only sees events dispatched
//! after it joined.
//!
//! Confined to the GUI thread, hence Rc/RefCell
//! instead of Arc/Mutex.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};

use super::player::PlayerEvent;

/// Opaque token returned by `subscribe`. Ids are handed out in increasing
/// order, so iterating the subscriber map by key is registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<RefCell<Box<dyn FnMut(&PlayerEvent)>>>;

struct Inner {
    next_id: u64,
    subscribers: BTreeMap<SubscriptionId, Subscriber>,
    upstream: Option<Receiver<PlayerEvent>>,
}

/// Cheap-to-clone handle; all clones share one subscriber set. Dropping the
/// last handle drops the upstream receiver, which is what releases the
/// engine-side resources on remount.
#[derive(Clone)]
pub struct EventBroker {
    inner: Rc<RefCell<Inner>>,
}

impl EventBroker {
    /// Connect to the engine's event stream. Call once per broker lifetime.
    pub fn new(upstream: Receiver<PlayerEvent>) -> Self {
        Self::build(Some(upstream))
    }

    /// Broker without an upstream; `dispatch` still works. Used in tests and
    /// while the engine link is not up yet.
    pub fn detached() -> Self {
        Self::build(None)
    }

    fn build(upstream: Option<Receiver<PlayerEvent>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                subscribers: BTreeMap::new(),
                upstream,
            })),
        }
    }

    /// Register a listener. Safe to call at any point, including from inside
    /// another subscriber's callback; the new listener starts receiving with
    /// the *next* dispatched event.
    pub fn subscribe(&self, callback: impl FnMut(&PlayerEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner
            .subscribers
            .insert(id, Rc::new(RefCell::new(Box::new(callback))));
        log::debug!("broker: subscribed {id:?}");
        id
    }

    /// Remove a listener. Idempotent: unknown or already-removed ids are a
    /// no-op, because component teardown order is not guaranteed.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let removed = self.inner.borrow_mut().subscribers.remove(&id).is_some();
        if removed {
            log::debug!("broker: unsubscribed {id:?}");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Deliver one event to every currently-registered subscriber, in
    /// registration order, exactly once each.
    ///
    /// Dispatches over a snapshot: callbacks may subscribe/unsubscribe freely
    /// without skipping or double-invoking anyone else. A panicking callback
    /// is contained and logged; delivery to the rest continues.
    pub fn dispatch(&self, event: &PlayerEvent) {
        let snapshot: Vec<(SubscriptionId, Subscriber)> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();

        for (id, callback) in snapshot {
            let result = catch_unwind(AssertUnwindSafe(|| {
                (callback.borrow_mut())(event);
            }));
            if result.is_err() {
                log::error!("broker: subscriber {id:?} panicked while handling {event:?}");
            }
        }
    }

    /// Drain the upstream receiver and dispatch everything that arrived.
    /// Returns the number of events delivered. Non-blocking; the GUI calls
    /// this from its periodic tick.
    pub fn pump(&self) -> usize {
        let mut delivered = 0;

        loop {
            let next = {
                let inner = self.inner.borrow();
                let Some(upstream) = &inner.upstream else {
                    return delivered;
                };
                upstream.try_recv()
            };

            match next {
                Ok(event) => {
                    self.dispatch(&event);
                    delivered += 1;
                }
                Err(TryRecvError::Empty) => return delivered,
                Err(TryRecvError::Disconnected) => {
                    // Engine is gone; drop our end so this is not re-reported
                    // every tick.
                    if self.inner.borrow_mut().upstream.take().is_some() {
                        log::warn!("broker: upstream event stream disconnected");
                    }
                    return delivered;
                }
            }
        }
    }
}
