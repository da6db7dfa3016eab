//! Optional optics for focusing on parts that may or may not exist.
//!
//! An Optional is what you get when a Lens and a Prism are composed in
//! either order: reading may come back empty, and writing may have nowhere
//! to go.
//!
//! # Laws
//!
//! Every Optional must satisfy two laws (when the element is present):
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if optional.get_option(&source) == Some(value) then
//!        setting value into source leaves source unchanged
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.is_present(&source) then
//!        after optional.set(&mut source, value), optional.get_option(&source) == Some(value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Lens, Optional};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct AccessToken { token: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Authentication { Authenticated(AccessToken), Unauthenticated }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Session { user_id: i64, authentication: Authentication }
//!
//! let token = lens!(Session, authentication)
//!     .compose_prism(prism!(Authentication, Authenticated));
//!
//! let mut session = Session { user_id: 1, authentication: Authentication::Unauthenticated };
//! assert_eq!(token.get_option(&session), None);
//!
//! token.set(&mut session, AccessToken { token: "deadbeef".to_string() });
//! assert_eq!(
//!     session.authentication,
//!     Authentication::Authenticated(AccessToken { token: "deadbeef".to_string() })
//! );
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// An Optional focuses on a part that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The whole type
/// - `A`: The part type (if present)
pub trait Optional<S, A> {
    /// Reads the focused part if it is present.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Writes the focused part.
    ///
    /// Whether a write into an absent focus creates it or is ignored
    /// depends on the composition order; see [`LensPrismComposition`] and
    /// [`PrismLensComposition`].
    fn set(&self, source: &mut S, value: A);

    /// Modifies the focused part if present; absent parts are left alone.
    ///
    /// Returns `true` if a value was present and rewritten.
    fn modify<F>(&self, source: &mut S, function: F) -> bool
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(source) {
            Some(value) => {
                self.set(source, function(value));
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the focused part is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }
}

/// A Lens followed by a Prism.
///
/// Reading succeeds when the lensed part is in the prism's variant.
/// Writing always succeeds: the value is embedded into the variant and the
/// result replaces the lensed part, whatever variant it held before.
pub struct LensPrismComposition<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<fn() -> A>,
}

impl<L, P, A> LensPrismComposition<L, P, A> {
    /// Creates a new `LensPrismComposition`.
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism.extract(&self.lens.get(source))
    }

    fn set(&self, source: &mut S, value: B) {
        self.lens.set(source, self.prism.embed(value));
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, P: std::fmt::Debug, A> std::fmt::Debug for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// A Prism followed by a Lens.
///
/// Reading succeeds when the whole is in the prism's variant. Writing only
/// happens in that case; otherwise the whole is left untouched, because
/// there is no payload to place the value into.
pub struct PrismLensComposition<P, L, A> {
    prism: P,
    lens: L,
    _marker: PhantomData<fn() -> A>,
}

impl<P, L, A> PrismLensComposition<P, L, A> {
    /// Creates a new `PrismLensComposition`.
    #[must_use]
    pub const fn new(prism: P, lens: L) -> Self {
        Self {
            prism,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, L> Optional<S, B> for PrismLensComposition<P, L, A>
where
    P: Prism<S, A>,
    L: Lens<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism
            .extract(source)
            .map(|payload| self.lens.get(&payload))
    }

    fn set(&self, source: &mut S, value: B) {
        if let Some(mut payload) = self.prism.extract(source) {
            self.lens.set(&mut payload, value);
            *source = self.prism.embed(payload);
        }
    }
}

impl<P: Clone, L: Clone, A> Clone for PrismLensComposition<P, L, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: std::fmt::Debug, L: std::fmt::Debug, A> std::fmt::Debug for PrismLensComposition<P, L, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismLensComposition")
            .field("prism", &self.prism)
            .field("lens", &self.lens)
            .finish()
    }
}
