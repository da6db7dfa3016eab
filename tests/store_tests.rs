//! Tests for the store: transitions, subscriptions, scoping and bindings.

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::{Location, User, blob};
use optica::optics::identity_lens;
use optica::reducer::{Reducer, combine};
use optica::store::{Store, StoreError, bind};
use optica::{lens, prism};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct AppState {
    user: User,
    visits: u32,
}

#[derive(Clone, PartialEq, Debug)]
enum ProfileAction {
    Rename(String),
    Relocate(Location),
}

#[derive(Clone, PartialEq, Debug)]
enum AppAction {
    Profile(ProfileAction),
    Visit,
}

fn profile_reducer() -> Reducer<User, ProfileAction> {
    Reducer::new(|user: &mut User, action: &ProfileAction| match action {
        ProfileAction::Rename(name) => user.name.clone_from(name),
        ProfileAction::Relocate(location) => user.location = location.clone(),
    })
}

fn app_store() -> Store<AppState, AppAction> {
    let visits: Reducer<AppState, AppAction> = Reducer::new(|state: &mut AppState, action: &AppAction| {
        if matches!(action, AppAction::Visit) {
            state.visits += 1;
        }
    });
    Store::new(
        AppState {
            user: blob(),
            visits: 0,
        },
        combine([
            profile_reducer().pullback_state_and_action(lens!(AppState, user), prism!(AppAction, Profile)),
            visits,
        ]),
    )
}

#[rstest]
#[case(vec![AppAction::Visit], 1, "Blob")]
#[case(vec![AppAction::Visit, AppAction::Visit], 2, "Blob")]
#[case(vec![AppAction::Profile(ProfileAction::Rename("Blob Sr.".to_string()))], 0, "Blob Sr.")]
fn test_send_sequence(#[case] actions: Vec<AppAction>, #[case] visits: u32, #[case] name: &str) {
    let store = app_store();
    for action in actions {
        store.send(action).unwrap();
    }
    assert_eq!(store.state().visits, visits);
    assert_eq!(store.value(&lens!(AppState, user.name)), name);
}

#[test]
fn test_subscriber_fires_once_per_send() {
    let store = app_store();
    let calls = Rc::new(Cell::new(0));
    let sink = Rc::clone(&calls);
    store.subscribe(move |_| sink.set(sink.get() + 1));

    store.send(AppAction::Visit).unwrap();
    store.send(AppAction::Profile(ProfileAction::Rename("Blob".to_string()))).unwrap();

    assert_eq!(calls.get(), 2);
}

#[test]
fn test_reentrant_send_from_subscriber_is_rejected() {
    let store = Rc::new(app_store());
    let outcome = Rc::new(RefCell::new(None));

    let inner_store = Rc::downgrade(&store);
    let sink = Rc::clone(&outcome);
    store.subscribe(move |_| {
        if let Some(store) = inner_store.upgrade() {
            *sink.borrow_mut() = Some(store.send(AppAction::Visit));
        }
    });

    store.send(AppAction::Visit).unwrap();

    assert_eq!(*outcome.borrow(), Some(Err(StoreError::Reentrant)));
    assert_eq!(store.state().visits, 1);
}

#[test]
fn test_unsubscribe_during_notification() {
    let store = Rc::new(app_store());
    let calls = Rc::new(Cell::new(0));
    let own_id = Rc::new(Cell::new(None));

    let weak_store = Rc::downgrade(&store);
    let sink = Rc::clone(&calls);
    let id_slot = Rc::clone(&own_id);
    let id = store.subscribe(move |_| {
        sink.set(sink.get() + 1);
        if let (Some(store), Some(id)) = (weak_store.upgrade(), id_slot.get()) {
            store.unsubscribe(id);
        }
    });
    own_id.set(Some(id));

    store.send(AppAction::Visit).unwrap();
    store.send(AppAction::Visit).unwrap();

    assert_eq!(calls.get(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn test_scoped_store_round_trip() {
    let store = app_store();
    let profile = store.scope(lens!(AppState, user), prism!(AppAction, Profile));

    profile.send(ProfileAction::Rename("Blob Jr.".to_string())).unwrap();
    profile
        .send(ProfileAction::Relocate(Location {
            city: "Queens".to_string(),
            country: "USA".to_string(),
        }))
        .unwrap();

    let user = profile.state();
    assert_eq!(user.name, "Blob Jr.");
    assert_eq!(user.location.city, "Queens");
    assert_eq!(user.id, 42);
    assert_eq!(store.state().visits, 0);
}

#[test]
fn test_scoped_subscription_sees_local_projection() {
    let store = app_store();
    let profile = store.scope(lens!(AppState, user), prism!(AppAction, Profile));
    let names = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&names);
    profile.subscribe(move |user: &User| sink.borrow_mut().push(user.name.clone()));

    profile.send(ProfileAction::Rename("Blob Jr.".to_string())).unwrap();
    store.send(AppAction::Visit).unwrap();

    assert_eq!(*names.borrow(), vec!["Blob Jr.".to_string(), "Blob Jr.".to_string()]);
}

#[test]
fn test_bind_keeps_target_in_sync() {
    #[derive(Default)]
    struct Header {
        title: String,
    }

    let store = app_store();
    let header = Rc::new(RefCell::new(Header::default()));
    bind(&store, lens!(AppState, user.name), Rc::clone(&header), lens!(Header, title));
    assert_eq!(header.borrow().title, "Blob");

    for name in ["Blob Jr.", "Blob Sr."] {
        store.send(AppAction::Profile(ProfileAction::Rename(name.to_string()))).unwrap();
        assert_eq!(header.borrow().title, store.value(&lens!(AppState, user.name)));
    }
}

#[test]
fn test_into_state_returns_final_state() {
    let store = Store::new(0_u32, Reducer::new(|count: &mut u32, step: &u32| *count += step));
    let mirror = Rc::new(RefCell::new(0_u32));
    bind(&store, identity_lens(), Rc::clone(&mirror), identity_lens());

    store.send(4).unwrap();
    store.send(5).unwrap();

    assert_eq!(*mirror.borrow(), 9);
    assert_eq!(store.into_state(), 9);
}
