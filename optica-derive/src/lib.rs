//! Derive macros for optica key paths and case paths.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates a lens constructor for every named struct field
//! - [`Prisms`]: Generates a prism constructor for every enum variant
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use optica::Lenses;
//! use optica::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//! // - Point::y_lens() -> impl Lens<Point, i32>
//!
//! let mut point = Point { x: 10, y: 20 };
//! Point::x_lens().set(&mut point, 11);
//! assert_eq!(Point::x_lens().get(&point), 11);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optica::Prisms;
//! use optica::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> impl Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> impl Prism<Shape, (f64, f64)>
//!
//! let rectangle = Shape::Rectangle(3.0, 4.0);
//! assert_eq!(Shape::rectangle_prism().extract(&rectangle), Some((3.0, 4.0)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derives a lens constructor for every field of a struct.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// `get` clones the field out; `set` replaces it in place.
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
/// - Only fields whose type implements `Clone` yield a usable lens. The bound
///   sits on each generated method, so a non-`Clone` field does not stop the
///   derive; calling its lens constructor is a compile error at the call site
///
/// # Generics
///
/// Generic structs are supported. Call the constructor on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// assert_eq!(Container::<i32>::value_lens().get(&container), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derives a prism constructor for every variant of an enum.
///
/// The method name is `{variant_name_snake_case}_prism()`. The focus type
/// depends on the variant's shape:
///
/// - **Unit variants** (e.g., `Unauthenticated`): `()`
/// - **Single-field tuple variants** (e.g., `Authenticated(AccessToken)`): the field type
/// - **Multi-field tuple variants** (e.g., `Moved(i32, i32)`): a tuple of the field types
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): a tuple of the field types, in
///   declaration order
///
/// `extract` clones the payload out of a matching value; `embed` builds the
/// variant. A variant whose payload is not `Clone` still derives, but its
/// prism constructor cannot be called.
///
/// # Example
///
/// ```rust,ignore
/// use optica::Prisms;
/// use optica::optics::Prism;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     Click { x: i32, y: i32 },
///     KeyPress(char),
///     Close,
/// }
///
/// assert_eq!(Event::click_prism().extract(&Event::Click { x: 1, y: 2 }), Some((1, 2)));
/// assert_eq!(Event::key_press_prism().embed('q'), Event::KeyPress('q'));
/// assert!(Event::close_prism().matches(&Event::Close));
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
