//! Lens optics (writable key paths) for focusing on struct fields.
//!
//! A Lens is an optic that provides get/set access to a part that always
//! exists within a larger whole. Lenses are composable, allowing access to
//! deeply nested fields.
//!
//! `get` returns an owned copy of the part, so a lens may also focus on a
//! *computed* view (for example a sub-state assembled from several fields)
//! as long as its `set` writes every piece back.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **SetGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set_owned(source, value)) == value
//!    ```
//!
//! 2. **GetSet Law**: Setting what is already there changes nothing.
//!    ```text
//!    lens.set_owned(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 3. **SetSet Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set_owned(lens.set_owned(source, v1), v2) == lens.set_owned(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let mut point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! x_lens.set(&mut point, 100);
//! assert_eq!(point, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use super::optional::LensPrismComposition;
use super::prism::Prism;

/// A Lens focuses on a single part within a larger whole.
///
/// # Type Parameters
///
/// - `S`: The whole (root) type
/// - `A`: The part (value) type
///
/// # Laws
///
/// 1. **SetGet Law**: `lens.get(&lens.set_owned(source, value)) == value`
/// 2. **GetSet Law**: `lens.set_owned(source.clone(), lens.get(&source)) == source`
/// 3. **SetSet Law**: `lens.set_owned(lens.set_owned(source, v1), v2) == lens.set_owned(source, v2)`
pub trait Lens<S, A> {
    /// Reads the focused part.
    ///
    /// # Arguments
    ///
    /// * `source` - The whole to read from; it is never mutated
    ///
    /// # Returns
    ///
    /// The focused part
    fn get(&self, source: &S) -> A;

    /// Replaces the focused part in place, leaving everything else untouched.
    ///
    /// # Arguments
    ///
    /// * `source` - The whole to update
    /// * `value` - The new value for the focused part
    fn set(&self, source: &mut S, value: A);

    /// Replaces the focused part, returning the updated whole.
    ///
    /// This is the copy-and-return form of [`Lens::set`].
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let updated = lens!(Point, y).set_owned(Point { x: 1, y: 2 }, 3);
    /// assert_eq!(updated, Point { x: 1, y: 3 });
    /// ```
    fn set_owned(&self, mut source: S, value: A) -> S {
        self.set(&mut source, value);
        source
    }

    /// Modifies the focused part in place by applying a function.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let mut point = Point { x: 10, y: 20 };
    /// lens!(Point, x).modify(&mut point, |x| x * 2);
    /// assert_eq!(point.x, 20);
    /// ```
    fn modify<F>(&self, source: &mut S, function: F)
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(source);
        self.set(source, function(current));
    }

    /// Modifies the focused part by applying a function, returning the updated whole.
    fn modify_owned<F>(&self, mut source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.modify(&mut source, function);
        source
    }

    /// Composes this lens with another lens to focus on a nested part.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The part type of the inner lens
    /// - `L`: The type of the inner lens
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Location { city: String, country: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { name: String, location: Location }
    ///
    /// let user_city = lens!(User, location).compose(lens!(Location, city));
    ///
    /// let user = User {
    ///     name: "Blob".to_string(),
    ///     location: Location { city: "Brooklyn".to_string(), country: "USA".to_string() },
    /// };
    ///
    /// assert_eq!(user_city.get(&user), "Brooklyn");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with a prism, producing an [`Optional`](super::Optional).
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, Optional};
    /// use optica::{lens, prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Authentication { Authenticated(String), Unauthenticated }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Session { authentication: Authentication }
    ///
    /// let token = lens!(Session, authentication).compose_prism(prism!(Authentication, Authenticated));
    ///
    /// let session = Session { authentication: Authentication::Unauthenticated };
    /// assert_eq!(token.get_option(&session), None);
    /// ```
    fn compose_prism<B, P>(self, other: P) -> LensPrismComposition<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        LensPrismComposition::new(self, other)
    }

    /// Borrows this lens as a plain getter function.
    ///
    /// This is the lens-as-function adapter used by `map` and `filter`
    /// style pipelines.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { id: i64, name: String }
    ///
    /// let users = vec![
    ///     User { id: 1, name: "Blob".to_string() },
    ///     User { id: 2, name: "Blob Jr.".to_string() },
    /// ];
    ///
    /// let id = lens!(User, id);
    /// let ids: Vec<i64> = users.iter().map(id.as_fn()).collect();
    /// assert_eq!(ids, vec![1, 2]);
    /// ```
    fn as_fn(&self) -> impl Fn(&S) -> A + '_ {
        move |source: &S| self.get(source)
    }
}

impl<S, A, L> Lens<S, A> for &L
where
    L: Lens<S, A> + ?Sized,
{
    fn get(&self, source: &S) -> A {
        (**self).get(source)
    }

    fn set(&self, source: &mut S, value: A) {
        (**self).set(source, value);
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the most common way to create a lens. The `lens!` macro
/// generates a `FunctionLens` internally.
///
/// # Type Parameters
///
/// - `S`: The whole type
/// - `A`: The part type
/// - `G`: The getter function type
/// - `St`: The in-place setter function type
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: &mut Point, x: i32| point.x = x,
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    /// Creates a new `FunctionLens` from a getter and an in-place setter.
    ///
    /// The pair is trusted to satisfy the lens laws; checking them is a
    /// testing concern (see [`laws`](super::laws)).
    ///
    /// # Arguments
    ///
    /// * `getter` - A function that reads the focused part from the whole
    /// * `setter` - A function that overwrites the focused part in the whole
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: &mut S, value: A) {
        (self.setter)(source, value);
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(&mut S, A) + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Copy for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Copy,
    St: Fn(&mut S, A) + Copy,
{
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(&mut S, A),
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// `get` reads through the outer lens and then the inner one. `set` reads
/// the intermediate part, writes the new value into it through the inner
/// lens, and writes the intermediate back through the outer lens.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (part of L1, whole of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (focuses on the intermediate part)
    /// * `second` - The inner lens (focuses on the final part)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: &mut S, value: B) {
        let mut intermediate = self.first.get(source);
        self.second.set(&mut intermediate, value);
        self.first.set(source, intermediate);
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a struct field, or for a dotted path of nested fields.
///
/// This macro generates a `FunctionLens` whose getter clones the focused
/// field and whose setter assigns it in place.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType, outer_field.inner_field)
/// ```
///
/// # Requirements
///
/// The focused field must implement `Clone`.
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Location { city: String, country: String }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct User { id: i64, location: Location }
///
/// let id = lens!(User, id);
/// let city = lens!(User, location.city);
///
/// let user = User {
///     id: 42,
///     location: Location { city: "Brooklyn".to_string(), country: "USA".to_string() },
/// };
///
/// assert_eq!(id.get(&user), 42);
/// assert_eq!(city.get(&user), "Brooklyn");
///
/// let updated = id.set_owned(user, 57);
/// assert_eq!(updated.id, 57);
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ty, $($field:ident).+) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::core::clone::Clone::clone(&source.$($field).+),
            |source: &mut $struct_type, value| {
                source.$($field).+ = value;
            },
        )
    };
}
