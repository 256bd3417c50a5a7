// Mutates process environment; kept to a single test in its own binary.
use std::fs;

use pv_card::settings::{settings_path, SETTINGS_ENV};
use pv_card::CardSettings;

#[test]
fn settings_resolution_order() {
    let dir = tempfile::tempdir().unwrap();

    // PV_CARD_SETTINGS wins.
    let explicit = dir.path().join("explicit.yaml");
    fs::write(&explicit, "hrefPrefix: \"/env\"\n").unwrap();
    std::env::set_var(SETTINGS_ENV, &explicit);
    assert_eq!(settings_path(), Some(explicit.clone()));
    assert_eq!(CardSettings::load().unwrap().href_prefix, "/env");

    // Surrounding whitespace is ignored.
    std::env::set_var(SETTINGS_ENV, format!("  {}  ", explicit.display()));
    assert_eq!(settings_path(), Some(explicit));

    // A blank value falls through to <config dir>/kubedash/pvcard.yaml.
    std::env::set_var(SETTINGS_ENV, "   ");
    let config_home = dir.path().join("config");
    fs::create_dir_all(config_home.join("kubedash")).unwrap();
    fs::write(
        config_home.join("kubedash").join("pvcard.yaml"),
        "hrefPrefix: \"/xdg\"\n",
    )
    .unwrap();

    // dirs honours XDG_CONFIG_HOME on Linux only.
    if cfg!(target_os = "linux") {
        std::env::set_var("XDG_CONFIG_HOME", &config_home);
        assert_eq!(
            settings_path(),
            Some(config_home.join("kubedash").join("pvcard.yaml"))
        );
        assert_eq!(CardSettings::load().unwrap().href_prefix, "/xdg");

        // No file in the config dir: defaults.
        fs::remove_file(config_home.join("kubedash").join("pvcard.yaml")).unwrap();
        assert_eq!(CardSettings::load().unwrap(), CardSettings::default());
    } else {
        assert!(settings_path().map_or(true, |p| p.ends_with("kubedash/pvcard.yaml")));
    }

    std::env::remove_var(SETTINGS_ENV);
}
