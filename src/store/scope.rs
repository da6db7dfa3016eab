//! Scoped views of a store.

use std::marker::PhantomData;
use std::rc::Rc;

use super::{Store, StoreError, SubscriptionId};
use crate::optics::{Lens, Prism};

/// A view of a [`Store`] focused on a local state and a local action.
///
/// The view holds no state of its own. Reads go through the lens into the
/// parent's state; sends are embedded through the prism and forwarded to the
/// parent, so the parent's root reducer (typically built with
/// [`Reducer::pullback_state_and_action`](crate::reducer::Reducer::pullback_state_and_action)
/// using the same optics) handles them.
///
/// # Examples
///
/// ```rust
/// use optica::reducer::Reducer;
/// use optica::store::Store;
/// use optica::{lens, prism};
///
/// #[derive(Clone, PartialEq, Debug, Default)]
/// struct AppState { count: i32, name: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum AppAction { Counter(i32), Rename(String) }
///
/// let counter: Reducer<i32, i32> = Reducer::new(|count: &mut i32, amount: &i32| *count += amount);
/// let root = counter.pullback_state_and_action(lens!(AppState, count), prism!(AppAction, Counter));
///
/// let store = Store::new(AppState::default(), root);
/// let counter_view = store.scope(lens!(AppState, count), prism!(AppAction, Counter));
///
/// counter_view.send(5).unwrap();
/// assert_eq!(counter_view.state(), 5);
/// assert_eq!(store.state().count, 5);
/// ```
pub struct ScopedStore<'s, S, A, LS, LA, L, P>
where
    S: 'static,
    A: 'static,
{
    parent: &'s Store<S, A>,
    lens: Rc<L>,
    prism: P,
    _marker: PhantomData<fn(LA) -> LS>,
}

impl<'s, S, A, LS, LA, L, P> ScopedStore<'s, S, A, LS, LA, L, P>
where
    S: 'static,
    A: 'static,
    L: Lens<S, LS>,
    P: Prism<A, LA>,
{
    pub(super) fn new(parent: &'s Store<S, A>, lens: L, prism: P) -> Self {
        Self {
            parent,
            lens: Rc::new(lens),
            prism,
            _marker: PhantomData,
        }
    }

    /// Reads the local state.
    pub fn state(&self) -> LS {
        self.parent.value(&*self.lens)
    }

    /// Embeds a local action and sends it to the parent store.
    ///
    /// # Errors
    ///
    /// Propagates the parent's [`StoreError`].
    pub fn send(&self, action: LA) -> Result<(), StoreError> {
        self.parent.send(self.prism.embed(action))
    }

    /// Subscribes to the local state.
    ///
    /// The callback runs after every send to the parent, with the local
    /// state read through the lens.
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&LS) + 'static,
        L: 'static,
    {
        let lens = Rc::clone(&self.lens);
        self.parent
            .subscribe(move |state: &S| subscriber(&lens.get(state)))
    }

    /// Returns the parent store.
    pub const fn parent(&self) -> &'s Store<S, A> {
        self.parent
    }
}

impl<S, A, LS, LA, L, P> std::fmt::Debug for ScopedStore<'_, S, A, LS, LA, L, P>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("ScopedStore").finish_non_exhaustive()
    }
}
