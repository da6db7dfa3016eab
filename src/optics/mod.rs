//! Optics for focusing into structured data.
//!
//! This module provides optics - composable accessors that describe *where*
//! a value lives inside a larger value. Optics never own the data they focus
//! on; they are pure descriptions of an access pattern and can be stored in
//! statics, cloned, and shared freely.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens   (key path)  : part always exists in the whole
//! Prism  (case path) : part exists only under one variant of the whole
//! Lens + Prism = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Prism`]: Focus on a variant of an enum (extract/embed access)
//! - [`Optional`]: Focus on a value that may or may not exist (mixed composition)
//! - [`IdentityLens`] / [`IdentityPrism`]: The neutral element of composition
//!
//! # Example with Lens
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Location { city: String, country: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { id: i64, is_admin: bool, location: Location, name: String }
//!
//! let user = User {
//!     id: 42,
//!     is_admin: true,
//!     location: Location { city: "Brooklyn".to_string(), country: "USA".to_string() },
//!     name: "Blob".to_string(),
//! };
//!
//! // A dotted path builds one lens straight through nested fields
//! let city = lens!(User, location.city);
//! assert_eq!(city.get(&user), "Brooklyn");
//!
//! let moved = city.set_owned(user, "Queens".to_string());
//! assert_eq!(moved.location.city, "Queens");
//! assert_eq!(moved.location.country, "USA");
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use optica::optics::Prism;
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct AccessToken { token: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Authentication {
//!     Authenticated(AccessToken),
//!     Unauthenticated,
//! }
//!
//! let authenticated = prism!(Authentication, Authenticated);
//!
//! let signed_in = Authentication::Authenticated(AccessToken { token: "deadbeef".to_string() });
//! assert_eq!(
//!     authenticated.extract(&signed_in),
//!     Some(AccessToken { token: "deadbeef".to_string() })
//! );
//! assert_eq!(authenticated.extract(&Authentication::Unauthenticated), None);
//! ```
//!
//! # Example with right-associative composition
//!
//! ```
//! use optica::optics::Prism;
//! use optica::{compose_path, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Authentication { Authenticated(String), Unauthenticated }
//!
//! let token = compose_path!(
//!     prism!(Result<Authentication, String>, Ok),
//!     prism!(Authentication, Authenticated),
//! );
//!
//! let response: Result<Authentication, String> =
//!     Ok(Authentication::Authenticated("cafed00d".to_string()));
//! assert_eq!(token.extract(&response), Some("cafed00d".to_string()));
//! assert_eq!(token.embed("x".to_string()), Ok(Authentication::Authenticated("x".to_string())));
//! ```
//!
//! # Lens Laws
//!
//! 1. **SetGet Law**: `lens.get(&lens.set_owned(source, value)) == value`
//! 2. **GetSet Law**: `lens.set_owned(source.clone(), lens.get(&source)) == source`
//! 3. **SetSet Law**: `lens.set_owned(lens.set_owned(source, v1), v2) == lens.set_owned(source, v2)`
//!
//! # Prism Laws
//!
//! 1. **EmbedExtract Law**: `prism.extract(&prism.embed(value)) == Some(value)`
//! 2. **ExtractEmbed Law**: if `prism.extract(&source) == Some(value)` then `prism.embed(value) == source`
//!
//! [`laws`] provides checkers for both sets of laws.

mod identity;
pub mod laws;
mod lens;
mod optional;
mod prism;

pub use identity::identity_lens;
pub use identity::identity_prism;
pub use identity::IdentityLens;
pub use identity::IdentityPrism;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;

pub use optional::LensPrismComposition;
pub use optional::Optional;
pub use optional::PrismLensComposition;

/// Composes optics from the outside in, grouping to the right.
///
/// `compose_path!(a, b, c)` expands to `a.compose(b.compose(c))`, so a
/// dotted path `a.b.c` reads left to right while composition associates the
/// way the identity laws expect. Works for any chain of lenses or any chain
/// of prisms.
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, identity_lens};
/// use optica::{compose_path, lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Inner { value: i32 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Outer { inner: Inner }
///
/// let value = compose_path!(lens!(Outer, inner), lens!(Inner, value), identity_lens::<i32>());
/// let data = Outer { inner: Inner { value: 7 } };
/// assert_eq!(value.get(&data), 7);
/// ```
#[macro_export]
macro_rules! compose_path {
    ($single:expr $(,)?) => {
        $single
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {
        $head.compose($crate::compose_path!($($tail),+))
    };
}
