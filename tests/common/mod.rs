//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use proptest::prelude::*;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Location {
    pub city: String,
    pub country: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct User {
    pub id: i64,
    pub is_admin: bool,
    pub location: Location,
    pub name: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AccessToken {
    pub token: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Authentication {
    Authenticated(AccessToken),
    Unauthenticated,
}

pub fn brooklyn() -> Location {
    Location {
        city: "Brooklyn".to_string(),
        country: "USA".to_string(),
    }
}

pub fn blob() -> User {
    User {
        id: 42,
        is_admin: true,
        location: brooklyn(),
        name: "Blob".to_string(),
    }
}

pub fn token(value: &str) -> AccessToken {
    AccessToken {
        token: value.to_string(),
    }
}

pub fn arb_location() -> impl Strategy<Value = Location> {
    ("[A-Za-z ]{0,12}", "[A-Za-z ]{0,12}").prop_map(|(city, country)| Location { city, country })
}

pub fn arb_user() -> impl Strategy<Value = User> {
    (any::<i64>(), any::<bool>(), arb_location(), "[A-Za-z. ]{0,16}").prop_map(
        |(id, is_admin, location, name)| User {
            id,
            is_admin,
            location,
            name,
        },
    )
}

pub fn arb_token() -> impl Strategy<Value = AccessToken> {
    "[0-9a-f]{0,16}".prop_map(|token| AccessToken { token })
}

pub fn arb_authentication() -> impl Strategy<Value = Authentication> {
    prop_oneof![
        arb_token().prop_map(Authentication::Authenticated),
        Just(Authentication::Unauthenticated),
    ]
}
