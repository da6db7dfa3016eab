//! Reducers and pullback.
//!
//! A [`Reducer<S, A>`] is one atomic state transition: given exclusive access
//! to a state and a reference to an action, it mutates the state in place.
//! Reducers do no I/O and hold no internal state.
//!
//! Small reducers written against a local state and a local action are
//! lifted into a larger system with *pullback*:
//!
//! - along the **state** axis with a [`Lens`] from the global state to the
//!   local state;
//! - along the **action** axis with a [`Prism`] from the global action to
//!   the local action. A global action the prism cannot extract is a
//!   silent no-op.
//!
//! [`combine`] then runs independent reducers over the same state and
//! action, none of them knowing about its siblings.
//!
//! # Examples
//!
//! ```rust
//! use optica::reducer::{Reducer, combine};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug, Default)]
//! struct AppState { count: i32, favorites: Vec<i32> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum CounterAction { Increment, Decrement }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum FavoritesAction { Add(i32) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum AppAction { Counter(CounterAction), Favorites(FavoritesAction) }
//!
//! let counter = Reducer::new(|count: &mut i32, action: &CounterAction| match action {
//!     CounterAction::Increment => *count += 1,
//!     CounterAction::Decrement => *count -= 1,
//! });
//!
//! let favorites = Reducer::new(|favorites: &mut Vec<i32>, action: &FavoritesAction| match action {
//!     FavoritesAction::Add(prime) => favorites.push(*prime),
//! });
//!
//! let app = combine([
//!     counter.pullback_state_and_action(lens!(AppState, count), prism!(AppAction, Counter)),
//!     favorites.pullback_state_and_action(lens!(AppState, favorites), prism!(AppAction, Favorites)),
//! ]);
//!
//! let state = app.fold(
//!     AppState::default(),
//!     &[
//!         AppAction::Counter(CounterAction::Increment),
//!         AppAction::Favorites(FavoritesAction::Add(2)),
//!         AppAction::Counter(CounterAction::Increment),
//!     ],
//! );
//! assert_eq!(state, AppState { count: 2, favorites: vec![2] });
//! ```

use std::fmt::Debug;
use std::rc::Rc;

use crate::optics::{Lens, Prism};

/// A state transition `(&mut S, &A)`.
///
/// `Reducer<S, A>` wraps the transition function in an `Rc`, so cloning a
/// reducer is cheap and clones share the same function.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
pub struct Reducer<S, A>
where
    S: 'static,
    A: 'static,
{
    /// The wrapped transition function.
    run_function: Rc<dyn Fn(&mut S, &A)>,
}

impl<S, A> Reducer<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Creates a new reducer from a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::reducer::Reducer;
    ///
    /// let increment: Reducer<i32, ()> = Reducer::new(|count: &mut i32, _: &()| *count += 1);
    ///
    /// let mut count = 0;
    /// increment.run(&mut count, &());
    /// assert_eq!(count, 1);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&mut S, &A) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Creates a reducer that never changes the state.
    ///
    /// This is the neutral element of [`combine`].
    #[must_use]
    pub fn identity() -> Self {
        Self::new(|_, _| {})
    }

    /// Applies this reducer to `state` in place.
    pub fn run(&self, state: &mut S, action: &A) {
        (self.run_function)(state, action);
    }

    /// Applies this reducer to an owned state, returning the next state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::reducer::Reducer;
    ///
    /// let add: Reducer<i32, i32> = Reducer::new(|total: &mut i32, amount: &i32| *total += amount);
    /// assert_eq!(add.reduce(40, &2), 42);
    /// ```
    #[must_use]
    pub fn reduce(&self, mut state: S, action: &A) -> S {
        self.run(&mut state, action);
        state
    }

    /// Applies this reducer to every action in order, starting from `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::reducer::Reducer;
    ///
    /// let add: Reducer<i32, i32> = Reducer::new(|total: &mut i32, amount: &i32| *total += amount);
    /// assert_eq!(add.fold(0, &[1, 2, 3]), 6);
    /// ```
    #[must_use]
    pub fn fold<'a, I>(&self, initial: S, actions: I) -> S
    where
        I: IntoIterator<Item = &'a A>,
    {
        actions.into_iter().fold(initial, |state, action| self.reduce(state, action))
    }

    /// Lifts this reducer to a global state through a lens.
    ///
    /// The returned reducer reads the local state with `lens.get`, runs this
    /// reducer on it, and writes it back with `lens.set`. Only the focused
    /// region of the global state changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::reducer::Reducer;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { id: i64, name: String }
    ///
    /// let increment: Reducer<i64, ()> = Reducer::new(|count: &mut i64, _: &()| *count += 1);
    /// let user_reducer = increment.pullback(lens!(User, id));
    ///
    /// let user = user_reducer.reduce(User { id: 41, name: "Blob".to_string() }, &());
    /// assert_eq!(user, User { id: 42, name: "Blob".to_string() });
    /// ```
    #[must_use]
    pub fn pullback<G, L>(self, lens: L) -> Reducer<G, A>
    where
        G: 'static,
        L: Lens<G, S> + 'static,
    {
        Reducer::new(move |global: &mut G, action: &A| {
            let mut local = lens.get(global);
            self.run(&mut local, action);
            lens.set(global, local);
        })
    }

    /// Lifts this reducer to a global state through separate get and set
    /// functions.
    ///
    /// Behaves exactly like [`Reducer::pullback`] with a lens built from the
    /// same two functions.
    #[must_use]
    pub fn pullback_with<G, Get, Set>(self, get: Get, set: Set) -> Reducer<G, A>
    where
        G: 'static,
        Get: Fn(&G) -> S + 'static,
        Set: Fn(&mut G, S) + 'static,
    {
        Reducer::new(move |global: &mut G, action: &A| {
            let mut local = get(global);
            self.run(&mut local, action);
            set(global, local);
        })
    }

    /// Lifts this reducer to a global action through a prism.
    ///
    /// The returned reducer runs this reducer only when the prism extracts a
    /// local action; for every other action it leaves the state untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::reducer::Reducer;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum AppAction { Counter(i32), Reset }
    ///
    /// let add: Reducer<i32, i32> = Reducer::new(|count: &mut i32, amount: &i32| *count += amount);
    /// let app = add.pullback_action(prism!(AppAction, Counter));
    ///
    /// assert_eq!(app.reduce(1, &AppAction::Counter(2)), 3);
    /// assert_eq!(app.reduce(1, &AppAction::Reset), 1);
    /// ```
    #[must_use]
    pub fn pullback_action<GA, P>(self, prism: P) -> Reducer<S, GA>
    where
        GA: 'static,
        P: Prism<GA, A> + 'static,
    {
        Reducer::new(move |state: &mut S, global_action: &GA| {
            if let Some(local_action) = prism.extract(global_action) {
                self.run(state, &local_action);
            }
        })
    }

    /// Lifts this reducer along both axes at once.
    ///
    /// Equivalent to `self.pullback_action(prism).pullback(lens)`, except the
    /// local state is never read or written back for a non-matching action.
    #[must_use]
    pub fn pullback_state_and_action<G, GA, L, P>(self, lens: L, prism: P) -> Reducer<G, GA>
    where
        G: 'static,
        GA: 'static,
        L: Lens<G, S> + 'static,
        P: Prism<GA, A> + 'static,
    {
        Reducer::new(move |global: &mut G, global_action: &GA| {
            let Some(local_action) = prism.extract(global_action) else {
                return;
            };
            let mut local = lens.get(global);
            self.run(&mut local, &local_action);
            lens.set(global, local);
        })
    }

    /// Runs this reducer and then `other` on the same state and action.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::new(move |state: &mut S, action: &A| {
            self.run(state, action);
            other.run(state, action);
        })
    }

    /// Wraps this reducer so every transition is reported through `tracing`.
    ///
    /// Emits a `debug` event with the action before the transition and one
    /// with the resulting state after it, both tagged with `label`.
    #[must_use]
    pub fn logging(self, label: &'static str) -> Self
    where
        S: Debug,
        A: Debug,
    {
        Self::new(move |state: &mut S, action: &A| {
            tracing::debug!(reducer = label, ?action, "received action");
            self.run(state, action);
            tracing::debug!(reducer = label, ?state, "state updated");
        })
    }
}

impl<S, A> Clone for Reducer<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S, A> Default for Reducer<S, A>
where
    S: 'static,
    A: 'static,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<S, A> std::fmt::Debug for Reducer<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Reducer").finish_non_exhaustive()
    }
}

/// Lifts `reducer` to a global state through `lens`.
///
/// Free-function form of [`Reducer::pullback`].
#[must_use]
pub fn pullback<G, S, A, L>(reducer: Reducer<S, A>, lens: L) -> Reducer<G, A>
where
    G: 'static,
    S: 'static,
    A: 'static,
    L: Lens<G, S> + 'static,
{
    reducer.pullback(lens)
}

/// Combines reducers into one that runs each of them, in order, on the same
/// state and action.
///
/// Combining no reducers yields [`Reducer::identity`].
#[must_use]
pub fn combine<S, A, I>(reducers: I) -> Reducer<S, A>
where
    S: 'static,
    A: 'static,
    I: IntoIterator<Item = Reducer<S, A>>,
{
    let reducers: Vec<Reducer<S, A>> = reducers.into_iter().collect();
    Reducer::new(move |state: &mut S, action: &A| {
        for reducer in &reducers {
            reducer.run(state, action);
        }
    })
}
