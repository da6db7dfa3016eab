//! Applying optics across sequences.
//!
//! These are the lens-as-function and prism-as-function conveniences: map a
//! sequence through a lens's `get`, filter it by a `bool`-valued lens, or
//! keep only the items a prism can extract from. Each helper makes a single
//! pass over its input and preserves the original order.
//!
//! # Example
//!
//! ```
//! use optica::collection::{compact_map, filter, map};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { id: i64, is_admin: bool, name: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Authentication { Authenticated(String), Unauthenticated }
//!
//! let users = vec![
//!     User { id: 1, is_admin: true, name: "Blob".to_string() },
//!     User { id: 2, is_admin: false, name: "Blob Jr.".to_string() },
//! ];
//!
//! assert_eq!(map(&users, &lens!(User, id)), vec![1, 2]);
//! assert_eq!(filter(&users, &lens!(User, is_admin)), vec![&users[0]]);
//!
//! let sessions = vec![
//!     Authentication::Unauthenticated,
//!     Authentication::Authenticated("cafed00d".to_string()),
//! ];
//! assert_eq!(
//!     compact_map(&sessions, &prism!(Authentication, Authenticated)),
//!     vec!["cafed00d".to_string()]
//! );
//! ```

use crate::optics::{Lens, Prism};

/// Reads the focused part of every item.
///
/// # Arguments
///
/// * `items` - The items to read from
/// * `lens` - The lens used as the transform
///
/// # Returns
///
/// The focused parts, in input order
pub fn map<'a, S, A, I, L>(items: I, lens: &L) -> Vec<A>
where
    S: 'a,
    I: IntoIterator<Item = &'a S>,
    L: Lens<S, A>,
{
    items.into_iter().map(|item| lens.get(item)).collect()
}

/// Keeps the items whose `bool`-valued lens reads `true`.
///
/// # Arguments
///
/// * `items` - The items to filter
/// * `lens` - The lens used as the predicate
///
/// # Returns
///
/// References to the kept items, in input order
pub fn filter<'a, S, I, L>(items: I, lens: &L) -> Vec<&'a S>
where
    S: 'a,
    I: IntoIterator<Item = &'a S>,
    L: Lens<S, bool>,
{
    items.into_iter().filter(|item| lens.get(item)).collect()
}

/// Keeps the payload of every item the prism matches, dropping the rest.
///
/// # Arguments
///
/// * `items` - The items to extract from
/// * `prism` - The prism used as the extraction
///
/// # Returns
///
/// The extracted payloads, in input order
pub fn compact_map<'a, S, A, I, P>(items: I, prism: &P) -> Vec<A>
where
    S: 'a,
    I: IntoIterator<Item = &'a S>,
    P: Prism<S, A>,
{
    items
        .into_iter()
        .filter_map(|item| prism.extract(item))
        .collect()
}
