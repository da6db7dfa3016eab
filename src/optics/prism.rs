//! Prism optics (case paths) for focusing on enum variants.
//!
//! A Prism is an optic that provides extract/embed access to the payload of
//! one variant of a sum type. Unlike a Lens which always succeeds, a Prism
//! returns `None` when the whole is in a different variant. That absence is
//! ordinary control flow ("this item isn't the case I care about"), never
//! an error.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **EmbedExtract Law**: Embedding then extracting yields the original value.
//!    ```text
//!    prism.extract(&prism.embed(value)) == Some(value)
//!    ```
//!
//! 2. **ExtractEmbed Law**: If extraction succeeds, embedding the result yields the original.
//!    ```text
//!    if prism.extract(&source) == Some(value) then
//!        prism.embed(value) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::Prism;
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! let circle_prism = prism!(Shape, Circle);
//!
//! assert_eq!(circle_prism.extract(&Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle_prism.extract(&Shape::Rectangle(3.0, 4.0)), None);
//! assert_eq!(circle_prism.embed(10.0), Shape::Circle(10.0));
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::optional::PrismLensComposition;

/// A Prism focuses on a single variant of an enum.
///
/// # Type Parameters
///
/// - `S`: The whole type (the enum)
/// - `A`: The part type (the payload of the variant)
///
/// # Laws
///
/// 1. **EmbedExtract Law**: `prism.extract(&prism.embed(value)) == Some(value)`
/// 2. **ExtractEmbed Law**: If `prism.extract(&source) == Some(value)`, then `prism.embed(value) == source`
pub trait Prism<S, A> {
    /// Attempts to extract the payload from the whole.
    ///
    /// # Returns
    ///
    /// The payload if the whole is in the matching variant, `None` otherwise
    fn extract(&self, source: &S) -> Option<A>;

    /// Builds a whole in the matching variant carrying `value`.
    ///
    /// This always succeeds, and the result is always recognized by
    /// [`Prism::extract`].
    fn embed(&self, value: A) -> S;

    /// Returns `true` if the whole is in the matching variant.
    fn matches(&self, source: &S) -> bool {
        self.extract(source).is_some()
    }

    /// Modifies the payload in place if the whole is in the matching variant.
    ///
    /// Returns `true` if the variant matched and the whole was rewritten.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let mut shape = Shape::Circle(5.0);
    /// assert!(circle_prism.modify(&mut shape, |r| r * 2.0));
    /// assert_eq!(shape, Shape::Circle(10.0));
    ///
    /// let mut square = Shape::Square(3.0);
    /// assert!(!circle_prism.modify(&mut square, |r| r * 2.0));
    /// assert_eq!(square, Shape::Square(3.0));
    /// ```
    fn modify<F>(&self, source: &mut S, function: F) -> bool
    where
        F: FnOnce(A) -> A,
    {
        match self.extract(source) {
            Some(value) => {
                *source = self.embed(function(value));
                true
            }
            None => false,
        }
    }

    /// Composes this prism with another prism to focus on a nested variant.
    ///
    /// Extraction short-circuits to `None` as soon as either stage fails to
    /// match; embedding builds the innermost value first.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct AccessToken { token: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Authentication { Authenticated(AccessToken), Unauthenticated }
    ///
    /// let token = prism!(Result<Authentication, String>, Ok)
    ///     .compose(prism!(Authentication, Authenticated));
    ///
    /// let response: Result<Authentication, String> = Ok(Authentication::Unauthenticated);
    /// assert_eq!(token.extract(&response), None);
    ///
    /// let built = token.embed(AccessToken { token: "x".to_string() });
    /// assert_eq!(built, Ok(Authentication::Authenticated(AccessToken { token: "x".to_string() })));
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with a lens, producing an [`Optional`](super::Optional).
    fn compose_lens<B, L>(self, other: L) -> PrismLensComposition<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        PrismLensComposition::new(self, other)
    }

    /// Borrows this prism as a plain extraction function.
    ///
    /// Suitable for `filter_map`/compact-map style pipelines.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Authentication { Authenticated(String), Unauthenticated }
    ///
    /// let sessions = vec![
    ///     Authentication::Authenticated("deadbeef".to_string()),
    ///     Authentication::Unauthenticated,
    /// ];
    ///
    /// let authenticated = prism!(Authentication, Authenticated);
    /// let tokens: Vec<String> = sessions.iter().filter_map(authenticated.as_fn()).collect();
    /// assert_eq!(tokens, vec!["deadbeef".to_string()]);
    /// ```
    fn as_fn(&self) -> impl Fn(&S) -> Option<A> + '_ {
        move |source: &S| self.extract(source)
    }
}

impl<S, A, P> Prism<S, A> for &P
where
    P: Prism<S, A> + ?Sized,
{
    fn extract(&self, source: &S) -> Option<A> {
        (**self).extract(source)
    }

    fn embed(&self, value: A) -> S {
        (**self).embed(value)
    }
}

/// A prism implemented using extract and embed functions.
///
/// This is the most common way to create a prism. The `prism!` macro
/// generates a `FunctionPrism` internally.
///
/// # Type Parameters
///
/// - `S`: The whole type
/// - `A`: The part type
/// - `Ex`: The extract function type
/// - `Em`: The embed function type
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, FunctionPrism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
/// }
///
/// let rectangle_prism = FunctionPrism::new(
///     |shape: &Shape| match shape {
///         Shape::Rectangle(width, height) => Some((*width, *height)),
///         _ => None,
///     },
///     |(width, height): (f64, f64)| Shape::Rectangle(width, height),
/// );
///
/// assert_eq!(rectangle_prism.extract(&Shape::Rectangle(3.0, 4.0)), Some((3.0, 4.0)));
/// assert_eq!(rectangle_prism.extract(&Shape::Circle(1.0)), None);
/// ```
pub struct FunctionPrism<S, A, Ex, Em>
where
    Ex: Fn(&S) -> Option<A>,
    Em: Fn(A) -> S,
{
    extract_function: Ex,
    embed_function: Em,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, Ex, Em> FunctionPrism<S, A, Ex, Em>
where
    Ex: Fn(&S) -> Option<A>,
    Em: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` from extract and embed functions.
    ///
    /// # Arguments
    ///
    /// * `extract_function` - Returns the payload when the whole is in the matching variant
    /// * `embed_function` - Constructs the matching variant from a payload
    #[must_use]
    pub const fn new(extract_function: Ex, embed_function: Em) -> Self {
        Self {
            extract_function,
            embed_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Ex, Em> Prism<S, A> for FunctionPrism<S, A, Ex, Em>
where
    Ex: Fn(&S) -> Option<A>,
    Em: Fn(A) -> S,
{
    fn extract(&self, source: &S) -> Option<A> {
        (self.extract_function)(source)
    }

    fn embed(&self, value: A) -> S {
        (self.embed_function)(value)
    }
}

impl<S, A, Ex, Em> Clone for FunctionPrism<S, A, Ex, Em>
where
    Ex: Fn(&S) -> Option<A> + Clone,
    Em: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            extract_function: self.extract_function.clone(),
            embed_function: self.embed_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Ex, Em> Copy for FunctionPrism<S, A, Ex, Em>
where
    Ex: Fn(&S) -> Option<A> + Copy,
    Em: Fn(A) -> S + Copy,
{
}

impl<S, A, Ex, Em> std::fmt::Debug for FunctionPrism<S, A, Ex, Em>
where
    Ex: Fn(&S) -> Option<A>,
    Em: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `A`: The intermediate type (part of P1, whole of P2)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer prism (focuses on the intermediate enum)
    /// * `second` - The inner prism (focuses on the final payload)
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn extract(&self, source: &S) -> Option<B> {
        self.first
            .extract(source)
            .and_then(|intermediate| self.second.extract(&intermediate))
    }

    fn embed(&self, value: B) -> S {
        self.first.embed(self.second.embed(value))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a prism for a single-payload tuple variant of an enum.
///
/// This macro generates a `FunctionPrism` whose extract clones the payload
/// when the variant matches and whose embed is the variant constructor.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// prism!(module::EnumType<Nested<T>, ...>, VariantName)
/// ```
///
/// The last form cannot name generic parameters of the enclosing function.
///
/// # Limitations
///
/// This macro only works with tuple variants that have a single value.
/// For unit, multi-field or struct variants use `#[derive(Prisms)]` or
/// `FunctionPrism::new` directly.
///
/// # Example
///
/// ```
/// use optica::optics::Prism;
/// use optica::prism;
///
/// let success = prism!(Result<i32, String>, Ok);
/// let failure = prism!(Result<i32, String>, Err);
///
/// assert_eq!(success.extract(&Ok(42)), Some(42));
/// assert_eq!(success.extract(&Err("boom".to_string())), None);
/// assert_eq!(failure.embed("boom".to_string()), Err("boom".to_string()));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match source {
                $enum_type::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ty, $variant:ident) => {{
        // Variants are reachable through a type alias; qualified-path
        // patterns are not.
        type __PrismWhole = $enum_type;
        $crate::optics::FunctionPrism::new(
            |source: &__PrismWhole| match source {
                __PrismWhole::$variant(value) => Some(::core::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| __PrismWhole::$variant(value),
        )
    }};
}
