use std::fs;

use selam_config::Config;

use crate::profile::{Profile, init_profiles_in, load_profile_from};

#[test]
fn init_creates_the_main_profile() {
    let dir = tempfile::tempdir().unwrap();

    init_profiles_in(dir.path()).unwrap();
    assert!(dir.path().join("main.json").exists());

    // Second init keeps the existing profile.
    init_profiles_in(dir.path()).unwrap();
}

#[test]
fn named_profile_wins_over_main() {
    let dir = tempfile::tempdir().unwrap();
    init_profiles_in(dir.path()).unwrap();

    let mut config = Config::default();
    config.ai.model = "test-model".to_string();
    let profile = Profile {
        name: "staging".into(),
        value: config,
    };
    fs::write(
        dir.path().join("staging.json"),
        serde_json::to_string_pretty(&profile).unwrap(),
    )
    .unwrap();

    let loaded = load_profile_from(dir.path(), "staging").unwrap();
    assert_eq!(loaded.ai.model, "test-model");
}

#[test]
fn missing_profile_falls_back_to_main() {
    let dir = tempfile::tempdir().unwrap();

    let mut config = Config::default();
    config.generator.practice_size = 25;
    let profile = Profile {
        name: "main".into(),
        value: config,
    };
    fs::write(
        dir.path().join("main.json"),
        serde_json::to_string_pretty(&profile).unwrap(),
    )
    .unwrap();

    let loaded = load_profile_from(dir.path(), "does-not-exist").unwrap();
    assert_eq!(loaded.generator.practice_size, 25);
}

#[test]
fn empty_dir_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let loaded = load_profile_from(dir.path(), "anything").unwrap();
    assert_eq!(loaded.generator.practice_size, 10);
    assert!(!loaded.ai.enabled);
}
