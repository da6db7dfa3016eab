//! One-way bindings from store state into external targets.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Store, SubscriptionId};
use crate::optics::Lens;

/// Keeps a part of some external value in sync with a part of the store.
///
/// The value read through `source` is written into `target` through
/// `target_lens` immediately, and again after every send. The binding lasts
/// until the returned subscription is removed with
/// [`Store::unsubscribe`].
///
/// If `target` is already borrowed when an update arrives, that update is
/// skipped with a warning and the next send writes the current value.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use optica::reducer::Reducer;
/// use optica::store::{bind, Store};
/// use optica::lens;
///
/// #[derive(Clone, Debug, Default)]
/// struct Label { text: String, hidden: bool }
///
/// let store = Store::new(String::new(), Reducer::new(|name: &mut String, next: &String| {
///     name.clone_from(next);
/// }));
/// let label = Rc::new(RefCell::new(Label::default()));
///
/// bind(&store, optica::optics::identity_lens(), Rc::clone(&label), lens!(Label, text));
/// store.send("Blob".to_string()).unwrap();
///
/// assert_eq!(label.borrow().text, "Blob");
/// assert!(!label.borrow().hidden);
/// ```
pub fn bind<S, A, V, T, SL, TL>(
    store: &Store<S, A>,
    source: SL,
    target: Rc<RefCell<T>>,
    target_lens: TL,
) -> SubscriptionId
where
    S: 'static,
    A: 'static,
    T: 'static,
    SL: Lens<S, V> + 'static,
    TL: Lens<T, V> + 'static,
{
    write_target(&target, &target_lens, store.value(&source));
    store.subscribe(move |state: &S| {
        write_target(&target, &target_lens, source.get(state));
    })
}

fn write_target<T, V, TL>(target: &RefCell<T>, target_lens: &TL, value: V)
where
    TL: Lens<T, V>,
{
    match target.try_borrow_mut() {
        Ok(mut borrowed) => target_lens.set(&mut borrowed, value),
        Err(_) => tracing::warn!("binding target is borrowed; skipped update"),
    }
}
