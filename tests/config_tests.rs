use cubalink23::config;
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

// Tests touching process env must not interleave.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(Mutex::default);

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://cubalink23.com/"),
        "https://cubalink23.com"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://cubalink23.com"),
        "https://cubalink23.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://cubalink23.com///"),
        "https://cubalink23.com"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://cubalink23.com/  "),
        "https://cubalink23.com"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:3000");
}

#[test]
fn test_get_api_base_url_with_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("API_BASE_URL", "https://api.cubalink23.com/api/");

    let result = config::get_api_base_url();

    assert_eq!(result, "https://api.cubalink23.com/api");

    env::remove_var("API_BASE_URL");
}

#[test]
fn test_get_api_base_url_defaults_to_empty() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("API_BASE_URL");

    // Empty means "no remote backend configured"; local mode.
    assert_eq!(config::get_api_base_url(), "");
}

#[test]
fn test_get_port_parses_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("PORT", "8123");
    assert_eq!(config::get_port(), 8123);
    env::set_var("PORT", "not-a-port");
    assert_eq!(config::get_port(), config::DEFAULT_PORT);
    env::remove_var("PORT");
}
