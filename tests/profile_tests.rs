// tests/profile_tests.rs

use trivia_quiz::{
    AppError,
    profile::{LAST_USER_KEY, PROFILES_KEY, ProfileStore, Theme, guest_profile},
    storage::{KeyValueStore, MemoryStore},
};

#[test]
fn test_profile_complex_flow() {
    let mut store = MemoryStore::new();
    let mut profiles = ProfileStore::new(&mut store);

    // 1. First login creates the profile
    let created = profiles.login("Ann", "1234", Some("🦉")).unwrap();
    assert_eq!(created.name, "Ann");
    assert_eq!(created.avatar, "🦉");
    assert!(!created.is_guest);
    // PIN is never stored in the clear
    assert_ne!(created.pin_hash, "1234");

    // 2. Same name, any case, same PIN: same profile, no avatar needed
    let again = profiles.login("ann", "1234", None).unwrap();
    assert_eq!(again, created);

    // 3. Wrong PIN is refused
    let err = profiles.login("Ann", "9999", None).unwrap_err();
    assert!(matches!(err, AppError::AuthError(_)));

    // 4. Still exactly one profile
    assert_eq!(profiles.profiles().unwrap().len(), 1);
}

#[test]
fn login_validates_input_before_touching_the_store() {
    let mut store = MemoryStore::new();
    let mut profiles = ProfileStore::new(&mut store);

    let err = profiles.login("   ", "1234", Some("🦉")).unwrap_err();
    assert_eq!(err, AppError::InvalidInput("Please enter your name.".to_string()));

    let err = profiles.login("Bob", "123", Some("🦉")).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(err.message().contains("PIN"));

    // Empty name is reported ahead of a short PIN
    let err = profiles.login("", "1", None).unwrap_err();
    assert_eq!(err.message(), "Please enter your name.");

    drop(profiles);
    assert!(store.is_empty());
}

#[test]
fn new_profile_requires_avatar() {
    let mut store = MemoryStore::new();
    let mut profiles = ProfileStore::new(&mut store);

    let err = profiles.login("Cleo", "4321", None).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(profiles.find("Cleo").unwrap().is_none());

    let err = profiles.login("Cleo", "4321", Some("  ")).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn name_and_pin_are_trimmed() {
    let mut store = MemoryStore::new();
    let mut profiles = ProfileStore::new(&mut store);

    profiles.login("  Dana ", " 5555 ", Some("🦊")).unwrap();
    let profile = profiles.login("dana", "5555", None).unwrap();
    assert_eq!(profile.name, "Dana");
}

#[test]
fn markup_is_stripped_from_names() {
    let mut store = MemoryStore::new();
    let mut profiles = ProfileStore::new(&mut store);

    let profile = profiles.login("<b>Eve</b>", "1111", Some("🐼")).unwrap();
    assert_eq!(profile.name, "Eve");

    let err = profiles
        .login("<script>x</script>", "1111", Some("🐼"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn last_used_name_is_remembered_but_pin_is_not() {
    let mut store = MemoryStore::new();
    {
        let mut profiles = ProfileStore::new(&mut store);
        assert_eq!(profiles.last_used_name().unwrap(), None);
        profiles.login("Finn", "2468", Some("🚀")).unwrap();
        assert_eq!(profiles.last_used_name().unwrap().as_deref(), Some("Finn"));

        // A failed login does not change it
        profiles.login("Gus", "2", Some("🚀")).unwrap_err();
        assert_eq!(profiles.last_used_name().unwrap().as_deref(), Some("Finn"));
    }

    assert_eq!(store.get(LAST_USER_KEY).unwrap().as_deref(), Some("Finn"));
    let stored = store.get(PROFILES_KEY).unwrap().unwrap();
    assert!(!stored.contains("2468"));
}

#[test]
fn profiles_survive_a_new_store_view() {
    let mut store = MemoryStore::new();
    ProfileStore::new(&mut store)
        .login("Hana", "0000", Some("🐙"))
        .unwrap();

    let mut profiles = ProfileStore::new(&mut store);
    assert!(profiles.find("HANA").unwrap().is_some());
    assert!(profiles.login("hana", "0000", None).is_ok());
}

#[test]
fn guest_is_fixed_and_never_stored() {
    let guest = guest_profile();
    assert_eq!(guest.name, "Guest");
    assert_eq!(guest.avatar, "🧠");
    assert!(guest.is_guest);

    let mut store = MemoryStore::new();
    let profiles = ProfileStore::new(&mut store);
    assert!(profiles.find("Guest").unwrap().is_none());
}

#[test]
fn theme_defaults_to_dark_and_toggles() {
    let mut store = MemoryStore::new();
    let mut profiles = ProfileStore::new(&mut store);

    assert_eq!(profiles.theme().unwrap(), Theme::Dark);
    assert_eq!(profiles.toggle_theme().unwrap(), Theme::Light);
    assert_eq!(profiles.theme().unwrap(), Theme::Light);
    assert_eq!(profiles.toggle_theme().unwrap(), Theme::Dark);
    drop(profiles);

    assert_eq!(store.get("quizTheme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn unreadable_profile_list_is_reported_and_left_alone() {
    let mut store = MemoryStore::new();
    ProfileStore::new(&mut store)
        .login("Ann", "1234", Some("🦉"))
        .unwrap();

    let mut raw = store.get(PROFILES_KEY).unwrap().unwrap();
    raw.push('x');
    store.set(PROFILES_KEY, &raw).unwrap();

    {
        let mut profiles = ProfileStore::new(&mut store);
        // Lookups stay lenient
        assert!(profiles.profiles().unwrap().is_empty());

        // But nothing may be written over the damaged list
        let err = profiles.login("Ann", "9999", Some("🦊")).unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));
        let err = profiles.login("Bob", "5678", Some("🐼")).unwrap_err();
        assert!(matches!(err, AppError::StorageError(_)));
    }

    assert_eq!(store.get(PROFILES_KEY).unwrap().unwrap(), raw);
}

#[test]
fn names_are_stored_as_typed() {
    let mut store = MemoryStore::new();
    let mut profiles = ProfileStore::new(&mut store);

    let profile = profiles.login("Tom & Jerry", "1111", Some("🐱")).unwrap();
    assert_eq!(profile.name, "Tom & Jerry");

    let profile = profiles.login("x<3", "2222", Some("🐶")).unwrap();
    assert_eq!(profile.name, "x<3");

    assert!(profiles.find("tom & jerry").unwrap().is_some());
    assert!(profiles.login("Tom & Jerry", "1111", None).is_ok());
}

#[test]
fn long_pin_is_accepted() {
    let mut store = MemoryStore::new();
    let mut profiles = ProfileStore::new(&mut store);

    let pin = "7".repeat(65);
    profiles.login("Ivy", &pin, Some("🦄")).unwrap();
    assert!(profiles.login("ivy", &pin, None).is_ok());

    let name = "N".repeat(60);
    let profile = profiles.login(&name, "1234", Some("🦄")).unwrap();
    assert_eq!(profile.name, name);
}
