//! # optica
//!
//! Composable, type-safe accessors into structured data, and the state
//! transition machinery built on top of them.
//!
//! ## Overview
//!
//! - **Key paths (lenses)**: focus on a field that always exists inside a product type
//! - **Case paths (prisms)**: focus on the payload of one variant of a sum type
//! - **Composition**: chain optics into deeper optics, including lens/prism mixes
//! - **Reducers**: pull a local state transition back into a global one through an optic
//! - **Store**: a single-writer state container with synchronous subscriptions
//!
//! ## Feature Flags
//!
//! - `optics`: Lens, Prism, Optional, identity optics and collection helpers
//! - `reducer`: `Reducer` and pullback
//! - `store`: `Store`, scoped stores and bindings
//! - `derive`: `#[derive(Lenses)]` and `#[derive(Prisms)]`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Location { city: String, country: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { id: i64, location: Location }
//!
//! let city = lens!(User, location).compose(lens!(Location, city));
//!
//! let mut user = User {
//!     id: 42,
//!     location: Location { city: "Brooklyn".to_string(), country: "USA".to_string() },
//! };
//! assert_eq!(city.get(&user), "Brooklyn");
//!
//! city.set(&mut user, "Queens".to_string());
//! assert_eq!(user.location.city, "Queens");
//! assert_eq!(user.location.country, "USA");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "optics")]
    pub use crate::collection::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "reducer")]
    pub use crate::reducer::*;

    #[cfg(feature = "store")]
    pub use crate::store::*;

    #[cfg(feature = "derive")]
    pub use optica_derive::{Lenses, Prisms};
}

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "optics")]
pub mod collection;

#[cfg(feature = "reducer")]
pub mod reducer;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "derive")]
pub use optica_derive::{Lenses, Prisms};
