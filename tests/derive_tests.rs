//! Tests for `#[derive(Lenses)]` and `#[derive(Prisms)]`.

use optica::optics::laws::{check_lens_laws, check_prism_laws};
use optica::optics::{Lens, Optional, Prism};
use optica::{Lenses, Prisms};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Location {
    city: String,
    country: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct User {
    id: i64,
    is_admin: bool,
    location: Location,
    name: String,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct AccessToken {
    token: String,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Authentication {
    Authenticated(AccessToken),
    Unauthenticated,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Event {
    Click { x: i32, y: i32 },
    Moved(i32, i32),
    KeyPress(char),
    Scroll { delta: i32 },
    Close,
}

#[derive(Clone, PartialEq, Debug, Lenses)]
struct Labeled<T> {
    value: T,
    label: String,
}

#[derive(Clone, PartialEq, Debug, Prisms)]
enum Maybe<T> {
    Just(T),
    Nothing,
}

// Neither `Clone` nor `Debug`: only the optics over the other fields and
// variants are usable.
struct Handle(u32);

#[derive(Lenses)]
struct Holder {
    id: u32,
    handle: Handle,
}

#[derive(Prisms)]
enum Resource {
    Loaded(u32),
    Locked(Handle),
}

fn blob() -> User {
    User {
        id: 42,
        is_admin: true,
        location: Location {
            city: "Brooklyn".to_string(),
            country: "USA".to_string(),
        },
        name: "Blob".to_string(),
    }
}

#[test]
fn test_derived_lens_get_and_set() {
    let mut user = blob();
    assert_eq!(User::id_lens().get(&user), 42);

    User::id_lens().set(&mut user, 57);
    assert_eq!(user, User { id: 57, ..blob() });
}

#[test]
fn test_derived_lenses_compose() {
    let city = User::location_lens().compose(Location::city_lens());
    let user = city.set_owned(blob(), "Queens".to_string());

    assert_eq!(city.get(&user), "Queens");
    assert_eq!(user.location.country, "USA");
    assert_eq!(user.name, "Blob");
}

#[test]
fn test_derived_lens_on_generic_struct() {
    let labeled = Labeled {
        value: 3_u8,
        label: "three".to_string(),
    };
    assert_eq!(Labeled::<u8>::value_lens().get(&labeled), 3);
    assert_eq!(
        Labeled::<u8>::label_lens().set_owned(labeled, "drei".to_string()).label,
        "drei"
    );
}

#[test]
fn test_derived_lens_beside_non_clone_field() {
    let mut holder = Holder {
        id: 7,
        handle: Handle(99),
    };
    assert_eq!(Holder::id_lens().get(&holder), 7);

    Holder::id_lens().set(&mut holder, 8);
    assert_eq!(holder.id, 8);
    assert_eq!(holder.handle.0, 99);
}

#[test]
fn test_derived_prism_beside_non_clone_variant() {
    let loaded = Resource::loaded_prism();
    assert_eq!(loaded.extract(&Resource::Loaded(3)), Some(3));
    assert_eq!(loaded.extract(&Resource::Locked(Handle(1))), None);
    assert!(matches!(loaded.embed(4), Resource::Loaded(4)));
}

#[rstest]
#[case(Authentication::Authenticated(AccessToken { token: "deadbeef".to_string() }), true)]
#[case(Authentication::Unauthenticated, false)]
fn test_derived_prism_matches(#[case] source: Authentication, #[case] authenticated: bool) {
    assert_eq!(Authentication::authenticated_prism().matches(&source), authenticated);
    assert_eq!(Authentication::unauthenticated_prism().matches(&source), !authenticated);
}

#[test]
fn test_derived_prism_on_unit_variant() {
    let unauthenticated = Authentication::unauthenticated_prism();
    assert_eq!(unauthenticated.extract(&Authentication::Unauthenticated), Some(()));
    assert_eq!(unauthenticated.embed(()), Authentication::Unauthenticated);
}

#[test]
fn test_derived_prism_on_multi_field_variants() {
    assert_eq!(Event::click_prism().extract(&Event::Click { x: 1, y: 2 }), Some((1, 2)));
    assert_eq!(Event::moved_prism().extract(&Event::Moved(3, 4)), Some((3, 4)));
    assert_eq!(Event::moved_prism().extract(&Event::Close), None);
    assert_eq!(Event::click_prism().embed((5, 6)), Event::Click { x: 5, y: 6 });
    assert_eq!(Event::moved_prism().embed((7, 8)), Event::Moved(7, 8));
}

#[test]
fn test_derived_prism_on_single_field_variants() {
    assert_eq!(Event::key_press_prism().extract(&Event::KeyPress('q')), Some('q'));
    assert_eq!(Event::scroll_prism().extract(&Event::Scroll { delta: -3 }), Some((-3,)));
    assert_eq!(Event::scroll_prism().embed((9,)), Event::Scroll { delta: 9 });
    assert!(Event::close_prism().matches(&Event::Close));
}

#[test]
fn test_derived_prism_on_generic_enum() {
    let just = Maybe::<String>::just_prism();
    assert_eq!(just.extract(&Maybe::Just("x".to_string())), Some("x".to_string()));
    assert_eq!(just.extract(&Maybe::Nothing), None);
    assert_eq!(just.embed("y".to_string()), Maybe::Just("y".to_string()));
}

#[test]
fn test_derived_prism_then_derived_lens() {
    let token = Authentication::authenticated_prism().compose_lens(AccessToken::token_lens());
    let signed_in = Authentication::Authenticated(AccessToken {
        token: "deadbeef".to_string(),
    });
    assert_eq!(token.get_option(&signed_in), Some("deadbeef".to_string()));
    assert_eq!(token.get_option(&Authentication::Unauthenticated), None);
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Event::Click { x, y }),
        (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Event::Moved(x, y)),
        any::<char>().prop_map(Event::KeyPress),
        any::<i32>().prop_map(|delta| Event::Scroll { delta }),
        Just(Event::Close),
    ]
}

proptest! {
    #[test]
    fn prop_derived_lenses_are_lawful(id in any::<i64>(), other in any::<i64>(), name in ".{0,8}") {
        prop_assert_eq!(check_lens_laws(&User::id_lens(), &blob(), id, other), Ok(()));
        prop_assert_eq!(
            check_lens_laws(&User::name_lens(), &blob(), name.clone(), name),
            Ok(())
        );
    }

    #[test]
    fn prop_derived_prisms_are_lawful(event in arb_event(), x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(check_prism_laws(&Event::click_prism(), &event, (x, y)), Ok(()));
        prop_assert_eq!(check_prism_laws(&Event::moved_prism(), &event, (x, y)), Ok(()));
        prop_assert_eq!(check_prism_laws(&Event::scroll_prism(), &event, (x,)), Ok(()));
        prop_assert_eq!(check_prism_laws(&Event::close_prism(), &event, ()), Ok(()));
    }
}
