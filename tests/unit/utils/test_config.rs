use std::env;
use tdu_client::application::config::Config;
use tdu_client::constants::{API_BASE_URL, DEFAULT_RATE_LIMIT_MAX_REQUESTS};
use tdu_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("TDU_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("TDU_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("TDU_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("TDU_MISSING_VAR");
        let result: String = get_env_or_default("TDU_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("TDU_TEST_VAR_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("TDU_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("TDU_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_treats_blank_as_missing() {
    unsafe {
        env::set_var("TDU_TEST_VAR_BLANK", "   ");
        env::set_var("TDU_TEST_VAR_PADDED", " 42 ");
        let blank: String = get_env_or_default("TDU_TEST_VAR_BLANK", "default".to_string());
        let padded: u32 = get_env_or_default("TDU_TEST_VAR_PADDED", 7);
        assert_eq!(blank, "default");
        assert_eq!(padded, 42);
        env::remove_var("TDU_TEST_VAR_BLANK");
        env::remove_var("TDU_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("TDU_TEST_VAR_OPTION", " 123 ");
        env::set_var("TDU_TEST_VAR_EMPTY", "");
        env::set_var("TDU_TEST_VAR_BAD", "abc");
        assert_eq!(get_env_or_none::<u64>("TDU_TEST_VAR_OPTION"), Some(123));
        assert_eq!(get_env_or_none::<u64>("TDU_TEST_VAR_EMPTY"), None);
        assert_eq!(get_env_or_none::<u64>("TDU_TEST_VAR_BAD"), None);
        assert_eq!(get_env_or_none::<u64>("TDU_TEST_VAR_NEVER_SET"), None);
        env::remove_var("TDU_TEST_VAR_OPTION");
        env::remove_var("TDU_TEST_VAR_EMPTY");
        env::remove_var("TDU_TEST_VAR_BAD");
    }
}

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("TDU_REST_BASE_URL", "http://localhost:4000/api");
        env::set_var("TDU_REST_TIMEOUT", "15");
        env::set_var("TDU_PAGE_SIZE", "25");
        env::set_var("TDU_RATE_LIMIT_BURST_SIZE", "3");
    }

    let config = Config::new();
    assert_eq!(config.rest_api.base_url, "http://localhost:4000/api");
    assert_eq!(config.rest_api.timeout, Some(15));
    assert_eq!(config.page_size, 25);
    let limiter = config.rate_limiter.expect("rate limiting configured");
    assert_eq!(limiter.burst_size, 3);
    assert_eq!(limiter.max_requests, DEFAULT_RATE_LIMIT_MAX_REQUESTS);

    unsafe {
        env::set_var("TDU_REST_BASE_URL", "  ");
        env::remove_var("TDU_REST_TIMEOUT");
        env::remove_var("TDU_PAGE_SIZE");
        env::remove_var("TDU_RATE_LIMIT_BURST_SIZE");
    }

    let config = Config::new();
    assert_eq!(config.rest_api.base_url, API_BASE_URL);
    assert!(config.rate_limiter.is_none());

    unsafe {
        env::remove_var("TDU_REST_BASE_URL");
    }
}

#[test]
fn test_config_with_base_url_ignores_environment() {
    let config = Config::with_base_url(API_BASE_URL);
    assert_eq!(config.rest_api.base_url, API_BASE_URL);
    assert!(config.credentials.api_key.is_empty());
    assert!(config.credentials.user_id.is_none());
    assert!(config.rate_limiter.is_none());
}
