//! A single-writer state container driven by a [`Reducer`].
//!
//! A [`Store`] owns the current state. Every [`Store::send`] runs one
//! complete transition and then synchronously notifies subscribers, in
//! registration order, with the new state. Transitions never interleave:
//! a `send` issued from inside a reducer or a subscriber is rejected with
//! [`StoreError::Reentrant`] instead of running half-way through another.
//!
//! The store is single-threaded (`!Send`, `!Sync`). Callers that need to
//! drive it from several threads wrap it in their own single-writer
//! executor.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use optica::reducer::Reducer;
//! use optica::store::Store;
//!
//! let store = Store::new(0, Reducer::new(|count: &mut i32, amount: &i32| *count += amount));
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! store.subscribe(move |count| sink.borrow_mut().push(*count));
//!
//! store.send(2).unwrap();
//! store.send(3).unwrap();
//!
//! assert_eq!(*store.state(), 5);
//! assert_eq!(*seen.borrow(), vec![2, 5]);
//! ```

mod binding;
mod error;
mod scope;

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use crate::optics::{Lens, Prism};
use crate::reducer::Reducer;

pub use binding::bind;
pub use error::StoreError;
pub use scope::ScopedStore;

/// Identifies one subscription on a [`Store`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Rc<dyn Fn(&S)>;

/// A state container that applies actions through a reducer and notifies
/// subscribers after every transition.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
pub struct Store<S, A>
where
    S: 'static,
    A: 'static,
{
    state: RefCell<S>,
    reducer: Reducer<S, A>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<S>)>>,
    next_subscription: Cell<u64>,
    dispatching: Cell<bool>,
}

impl<S, A> Store<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a store holding `initial` and driven by `reducer`.
    pub fn new(initial: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state: RefCell::new(initial),
            reducer,
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            dispatching: Cell::new(false),
        }
    }

    /// Borrows the current state.
    ///
    /// Drop the borrow before calling [`Store::send`]; a `send` while it is
    /// held fails with [`StoreError::StateBorrowed`].
    ///
    /// # Panics
    ///
    /// Panics if called from inside a reducer of this store, while the state
    /// is mutably borrowed. Subscribers may call it freely.
    pub fn state(&self) -> Ref<'_, S> {
        self.state.borrow()
    }

    /// Reads the current state through a lens.
    pub fn value<P, L>(&self, lens: &L) -> P
    where
        L: Lens<S, P>,
    {
        lens.get(&self.state.borrow())
    }

    /// Runs one transition and notifies every subscriber.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Reentrant`] if called from inside a reducer or a
    ///   subscriber of this store. The state is left untouched.
    /// - [`StoreError::StateBorrowed`] if a [`Store::state`] borrow is still
    ///   alive. The state is left untouched.
    pub fn send(&self, action: A) -> Result<(), StoreError> {
        if self.dispatching.get() {
            tracing::warn!("rejected send issued during another transition");
            return Err(StoreError::Reentrant);
        }
        let _guard = DispatchGuard::enter(&self.dispatching);

        {
            let mut state = self
                .state
                .try_borrow_mut()
                .map_err(|_| StoreError::StateBorrowed)?;
            self.reducer.run(&mut state, &action);
        }
        tracing::debug!("transition applied");

        self.notify();
        Ok(())
    }

    /// Registers a callback invoked with the new state after every send.
    ///
    /// A subscription registered from inside another subscriber first fires
    /// on the next send.
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&S) + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(subscriber)));
        tracing::trace!(subscription = id.0, "subscribed");
        id
    }

    /// Removes a subscription.
    ///
    /// Returns `false` if `id` was not (or is no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(subscription, _)| *subscription != id);
        before != subscribers.len()
    }

    /// Returns the number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    /// Creates a view of this store focused on a local state and a local
    /// action.
    ///
    /// Local state is read through `lens`; local actions are embedded
    /// through `prism` and sent to this store.
    pub fn scope<LS, LA, L, P>(&self, lens: L, prism: P) -> ScopedStore<'_, S, A, LS, LA, L, P>
    where
        L: Lens<S, LS>,
        P: Prism<A, LA>,
    {
        ScopedStore::new(self, lens, prism)
    }

    /// Consumes the store, returning its final state.
    pub fn into_state(self) -> S {
        self.state.into_inner()
    }

    fn notify(&self) {
        // Snapshot so callbacks may subscribe or unsubscribe while running.
        let subscribers: Vec<Subscriber<S>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();
        tracing::trace!(subscribers = subscribers.len(), "notifying subscribers");

        let state = self.state.borrow();
        for subscriber in subscribers {
            subscriber(&state);
        }
    }
}

impl<S, A> std::fmt::Debug for Store<S, A>
where
    S: std::fmt::Debug + 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Clears the dispatching flag even if a reducer or subscriber panics.
struct DispatchGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

static_assertions::assert_not_impl_any!(Store<i32, ()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> Store<i32, i32> {
        Store::new(0, Reducer::new(|count: &mut i32, amount: &i32| *count += amount))
    }

    #[test]
    fn test_send_applies_reducer() {
        let store = counter();
        store.send(3).unwrap();
        store.send(4).unwrap();
        assert_eq!(*store.state(), 7);
    }

    #[test]
    fn test_subscribers_fire_in_order() {
        let store = counter();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        store.subscribe(move |count| first.borrow_mut().push(("first", *count)));
        let second = Rc::clone(&log);
        store.subscribe(move |count| second.borrow_mut().push(("second", *count)));

        store.send(1).unwrap();
        assert_eq!(*log.borrow(), vec![("first", 1), ("second", 1)]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = counter();
        let calls = Rc::new(Cell::new(0));
        let sink = Rc::clone(&calls);
        let id = store.subscribe(move |_| sink.set(sink.get() + 1));

        store.send(1).unwrap();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.send(1).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_send_while_state_borrowed_fails() {
        let store = counter();
        let held = store.state();
        assert_eq!(store.send(1), Err(StoreError::StateBorrowed));
        drop(held);
        assert_eq!(*store.state(), 0);
    }

    #[test]
    fn test_value_reads_through_lens() {
        let store = Store::new((1, "one".to_string()), Reducer::<_, ()>::identity());
        let second = crate::optics::FunctionLens::new(
            |pair: &(i32, String)| pair.1.clone(),
            |pair: &mut (i32, String), value| pair.1 = value,
        );
        assert_eq!(store.value(&second), "one");
    }
}
