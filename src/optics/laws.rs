//! Checkers for the lens and prism laws.
//!
//! Optics are trusted at construction time; a malformed getter/setter pair
//! is a programmer error. These functions let tests (property-based or
//! example-based) confirm that a given optic behaves lawfully on concrete
//! inputs.
//!
//! # Example
//!
//! ```
//! use optica::optics::laws::{check_lens_laws, LawViolation};
//! use optica::optics::FunctionLens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let point = Point { x: 1, y: 2 };
//! assert_eq!(check_lens_laws(&lens!(Point, x), &point, 10, 20), Ok(()));
//!
//! // A setter that also clobbers `y` is caught.
//! let sloppy = FunctionLens::new(
//!     |point: &Point| point.x,
//!     |point: &mut Point, x: i32| *point = Point { x, y: 0 },
//! );
//! assert_eq!(check_lens_laws(&sloppy, &point, 10, 20), Err(LawViolation::GetSet));
//! ```

use thiserror::Error;

use super::{Lens, Prism};

/// The law an optic failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LawViolation {
    /// `get` after `set` did not return the value that was set.
    #[error("lens SetGet law violated: get after set did not return the value that was set")]
    SetGet,

    /// Setting the value already present changed the whole.
    #[error("lens GetSet law violated: setting the current value changed the whole")]
    GetSet,

    /// Two consecutive sets differed from the last set alone.
    #[error("lens SetSet law violated: two consecutive sets differ from the last set alone")]
    SetSet,

    /// `extract` after `embed` did not recover the embedded value.
    #[error("prism EmbedExtract law violated: extract after embed did not recover the value")]
    EmbedExtract,

    /// Embedding an extracted payload did not rebuild the original whole.
    #[error("prism ExtractEmbed law violated: embedding the extracted payload did not rebuild the whole")]
    ExtractEmbed,
}

/// Checks the three lens laws for `lens` at `source`, using `first` and
/// `second` as values to write.
///
/// # Errors
///
/// Returns the first [`LawViolation`] found, checked in the order
/// `SetGet`, `GetSet`, `SetSet`.
pub fn check_lens_laws<S, A, L>(lens: &L, source: &S, first: A, second: A) -> Result<(), LawViolation>
where
    L: Lens<S, A>,
    S: Clone + PartialEq,
    A: Clone + PartialEq,
{
    if lens.get(&lens.set_owned(source.clone(), first.clone())) != first {
        return Err(LawViolation::SetGet);
    }

    if lens.set_owned(source.clone(), lens.get(source)) != *source {
        return Err(LawViolation::GetSet);
    }

    let twice = lens.set_owned(lens.set_owned(source.clone(), first), second.clone());
    if twice != lens.set_owned(source.clone(), second) {
        return Err(LawViolation::SetSet);
    }

    Ok(())
}

/// Checks the two prism laws for `prism`, using `value` as a payload and
/// `source` as an arbitrary whole.
///
/// The `ExtractEmbed` law is only checked when `source` is in the matching
/// variant; for any other whole it holds vacuously.
///
/// # Errors
///
/// Returns the first [`LawViolation`] found, checked in the order
/// `EmbedExtract`, `ExtractEmbed`.
pub fn check_prism_laws<S, A, P>(prism: &P, source: &S, value: A) -> Result<(), LawViolation>
where
    P: Prism<S, A>,
    S: PartialEq,
    A: Clone + PartialEq,
{
    if prism.extract(&prism.embed(value.clone())) != Some(value) {
        return Err(LawViolation::EmbedExtract);
    }

    match prism.extract(source) {
        Some(payload) => {
            if prism.embed(payload) == *source {
                Ok(())
            } else {
                Err(LawViolation::ExtractEmbed)
            }
        }
        None => Ok(()),
    }
}
