use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 6] = [
    "TASTEPOINTS_STORE_PATH",
    "TASTEPOINTS_API_BASE_URL",
    "TASTEPOINTS_REVIEWS_URL",
    "TASTEPOINTS_STARTING_POINTS",
    "TASTEPOINTS_REQUEST_TIMEOUT_SECS",
    "TASTEPOINTS_CATALOG_PATH",
];

/// # Safety
/// Callers hold `ENV_LOCK` so no other test touches the environment.
unsafe fn clear_env() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe { clear_env() };

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.starting_points, 120);
    assert_eq!(cfg.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    assert_eq!(cfg.request_timeout, Duration::from_secs(10));
    assert!(cfg.catalog_path.is_none());
}

#[test]
fn from_env_parses_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("TASTEPOINTS_STORE_PATH", "/tmp/tp/store.json");
        std::env::set_var("TASTEPOINTS_API_BASE_URL", "https://api.example.test/v2/");
        std::env::set_var("TASTEPOINTS_REVIEWS_URL", "http://127.0.0.1:4000/reviews//");
        std::env::set_var("TASTEPOINTS_STARTING_POINTS", " 300 ");
        std::env::set_var("TASTEPOINTS_REQUEST_TIMEOUT_SECS", "3");
        std::env::set_var("TASTEPOINTS_CATALOG_PATH", "rewards.json");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/tp/store.json"));
    assert_eq!(cfg.api_base_url, "https://api.example.test/v2");
    assert_eq!(cfg.reviews_url, "http://127.0.0.1:4000/reviews");
    assert_eq!(cfg.starting_points, 300);
    assert_eq!(cfg.request_timeout, Duration::from_secs(3));
    assert_eq!(cfg.catalog_path, Some(PathBuf::from("rewards.json")));

    unsafe { clear_env() };
}

#[test]
fn from_env_rejects_negative_starting_points() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("TASTEPOINTS_STARTING_POINTS", "-10");
    }

    let err = Config::from_env().unwrap_err();
    assert!(err.to_string().contains("TASTEPOINTS_STARTING_POINTS"));

    unsafe { clear_env() };
}

#[test]
fn from_env_rejects_bad_timeout() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("TASTEPOINTS_REQUEST_TIMEOUT_SECS", "soon");
    }

    let err = Config::from_env().unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            var: "TASTEPOINTS_REQUEST_TIMEOUT_SECS",
            value: "soon".to_owned(),
            expected: "number of seconds",
        }
    );

    unsafe { clear_env() };
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    unsafe {
        clear_env();
        std::env::set_var("TASTEPOINTS_API_BASE_URL", "   ");
        std::env::set_var("TASTEPOINTS_STARTING_POINTS", "");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.starting_points, DEFAULT_STARTING_POINTS);

    unsafe { clear_env() };
}

#[test]
fn trim_url_strips_trailing_slashes() {
    assert_eq!(trim_url(" https://x.test/api/// "), "https://x.test/api");
    assert_eq!(trim_url("https://x.test"), "https://x.test");
}
