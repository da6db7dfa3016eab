//! Identity optics, the neutral element of composition.
//!
//! When the whole and the part are the same type, the identity lens reads
//! and replaces the whole value, and the identity prism always matches.
//! Composing any optic with an identity optic, on either side, yields an
//! optic with the same behavior as the original.

use std::marker::PhantomData;

use super::{Lens, Prism};

/// The lens that focuses on the whole value itself.
///
/// `get` is the identity (a clone) and `set` replaces the whole.
///
/// Being zero-sized and `const`-constructible, it can live in a `const`:
///
/// ```
/// use optica::optics::{IdentityLens, Lens};
///
/// const WHOLE: IdentityLens<String> = IdentityLens::new();
///
/// let mut name = "Blob".to_string();
/// WHOLE.set(&mut name, "Blob Jr.".to_string());
/// assert_eq!(WHOLE.get(&name), "Blob Jr.");
/// ```
pub struct IdentityLens<S> {
    _marker: PhantomData<fn(S) -> S>,
}

impl<S> IdentityLens<S> {
    /// Creates the identity lens for `S`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> Default for IdentityLens<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for IdentityLens<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for IdentityLens<S> {}

impl<S> std::fmt::Debug for IdentityLens<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("IdentityLens")
    }
}

impl<S: Clone> Lens<S, S> for IdentityLens<S> {
    fn get(&self, source: &S) -> S {
        source.clone()
    }

    fn set(&self, source: &mut S, value: S) {
        *source = value;
    }
}

/// The prism whose single "variant" is every value of `S`.
///
/// `extract` always succeeds and `embed` is the identity.
pub struct IdentityPrism<S> {
    _marker: PhantomData<fn(S) -> S>,
}

impl<S> IdentityPrism<S> {
    /// Creates the identity prism for `S`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> Default for IdentityPrism<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for IdentityPrism<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for IdentityPrism<S> {}

impl<S> std::fmt::Debug for IdentityPrism<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("IdentityPrism")
    }
}

impl<S: Clone> Prism<S, S> for IdentityPrism<S> {
    fn extract(&self, source: &S) -> Option<S> {
        Some(source.clone())
    }

    fn embed(&self, value: S) -> S {
        value
    }
}

/// Creates the identity lens for `T`.
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, identity_lens};
///
/// let whole = identity_lens::<i32>();
///
/// assert_eq!(whole.get(&42), 42);
/// assert_eq!(whole.set_owned(42, 57), 57);
/// ```
#[must_use]
pub const fn identity_lens<T>() -> IdentityLens<T> {
    IdentityLens::new()
}

/// Creates the identity prism for `T`.
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, identity_prism};
///
/// let whole = identity_prism::<String>();
///
/// assert_eq!(whole.extract(&"Blob".to_string()), Some("Blob".to_string()));
/// assert_eq!(whole.embed("Blob".to_string()), "Blob");
/// ```
#[must_use]
pub const fn identity_prism<T>() -> IdentityPrism<T> {
    IdentityPrism::new()
}

// Send + Sync for every S, including !Send ones.
static_assertions::assert_impl_all!(IdentityLens<std::rc::Rc<i32>>: Send, Sync, Copy);
static_assertions::assert_impl_all!(IdentityPrism<std::cell::Cell<i32>>: Send, Sync, Copy);
static_assertions::assert_eq_size!(IdentityLens<String>, ());
