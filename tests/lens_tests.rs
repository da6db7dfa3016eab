//! Example-based tests for lenses.
//!
//! Tests cover:
//! - get / set / set_owned / modify on field and dotted-path lenses
//! - Lens as a function
//! - Lens-then-prism and prism-then-lens compositions

mod common;

use common::{AccessToken, Authentication, Location, User, blob, token};
use optica::optics::{FunctionLens, Lens, Optional, Prism};
use optica::{lens, prism};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Session {
    user: User,
    authentication: Authentication,
}

fn session(authentication: Authentication) -> Session {
    Session {
        user: blob(),
        authentication,
    }
}

#[rstest]
#[case(0)]
#[case(57)]
#[case(-1)]
#[case(i64::MAX)]
fn test_set_id_changes_only_id(#[case] id: i64) {
    let user = lens!(User, id).set_owned(blob(), id);

    assert_eq!(user.id, id);
    assert_eq!(
        User {
            id: blob().id,
            ..user
        },
        blob()
    );
}

#[rstest]
#[case("Queens")]
#[case("")]
#[case("Brooklyn")]
fn test_dotted_path_set_in_place(#[case] city: &str) {
    let mut user = blob();
    lens!(User, location.city).set(&mut user, city.to_string());

    assert_eq!(user.location.city, city);
    assert_eq!(user.location.country, "USA");
    assert_eq!(user.name, "Blob");
}

#[test]
fn test_modify_appends_to_name() {
    let mut user = blob();
    lens!(User, name).modify(&mut user, |name| format!("{name} Jr."));
    assert_eq!(user.name, "Blob Jr.");
}

#[test]
fn test_as_fn_maps_over_users() {
    let users = vec![blob(), User { id: 2, ..blob() }];
    let id = lens!(User, id);
    let ids: Vec<i64> = users.iter().map(id.as_fn()).collect();
    assert_eq!(ids, vec![42, 2]);
}

#[test]
fn test_lens_from_get_and_set_functions() {
    let country = FunctionLens::new(
        |location: &Location| location.country.clone(),
        |location: &mut Location, country: String| location.country = country,
    );
    let moved = country.set_owned(blob().location, "Canada".to_string());
    assert_eq!(moved.city, "Brooklyn");
    assert_eq!(country.get(&moved), "Canada");
}

#[test]
fn test_lens_then_prism_reads_optional_token() {
    let session_token = lens!(Session, authentication).compose_prism(prism!(Authentication, Authenticated));

    assert_eq!(
        session_token.get_option(&session(Authentication::Authenticated(token("deadbeef")))),
        Some(token("deadbeef"))
    );
    assert_eq!(session_token.get_option(&session(Authentication::Unauthenticated)), None);
}

#[test]
fn test_lens_then_prism_set_always_writes() {
    let session_token = lens!(Session, authentication).compose_prism(prism!(Authentication, Authenticated));

    let mut signed_out = session(Authentication::Unauthenticated);
    session_token.set(&mut signed_out, token("cafed00d"));

    assert_eq!(
        signed_out.authentication,
        Authentication::Authenticated(token("cafed00d"))
    );
}

#[rstest]
#[case(Authentication::Authenticated(token("deadbeef")), true)]
#[case(Authentication::Unauthenticated, false)]
fn test_prism_then_lens_modifies_only_matching(#[case] authentication: Authentication, #[case] present: bool) {
    let token_text = prism!(Authentication, Authenticated).compose_lens(lens!(AccessToken, token));

    let mut value = authentication.clone();
    let modified = token_text.modify(&mut value, |text| text.to_uppercase());

    assert_eq!(modified, present);
    assert_eq!(token_text.is_present(&value), present);
    if present {
        assert_eq!(token_text.get_option(&value), Some("DEADBEEF".to_string()));
    } else {
        assert_eq!(value, authentication);
    }
}

#[test]
fn test_prism_then_lens_set_on_other_variant_is_noop() {
    let token_text = prism!(Authentication, Authenticated).compose_lens(lens!(AccessToken, token));
    let mut value = Authentication::Unauthenticated;
    token_text.set(&mut value, "deadbeef".to_string());
    assert_eq!(value, Authentication::Unauthenticated);
    assert!(!prism!(Authentication, Authenticated).matches(&value));
}
