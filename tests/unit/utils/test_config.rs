use facelog_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("FACELOG_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("FACELOG_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("FACELOG_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("FACELOG_TEST_MISSING_VAR");
        let result: String = get_env_or_default("FACELOG_TEST_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("FACELOG_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("FACELOG_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("FACELOG_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_trims_value() {
    unsafe {
        env::set_var("FACELOG_TEST_VAR_PADDED", " 42 ");
        let result: i32 = get_env_or_default("FACELOG_TEST_VAR_PADDED", 0);
        assert_eq!(result, 42);
        env::remove_var("FACELOG_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("FACELOG_TEST_VAR_SOME", "15");
        env::set_var("FACELOG_TEST_VAR_BLANK", "  ");
        let some: Option<u64> = get_env_or_none("FACELOG_TEST_VAR_SOME");
        let blank: Option<String> = get_env_or_none("FACELOG_TEST_VAR_BLANK");
        let missing: Option<String> = get_env_or_none("FACELOG_TEST_VAR_ABSENT");
        assert_eq!(some, Some(15));
        assert_eq!(blank, None);
        assert_eq!(missing, None);
        env::remove_var("FACELOG_TEST_VAR_SOME");
        env::remove_var("FACELOG_TEST_VAR_BLANK");
    }
}
