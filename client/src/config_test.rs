use super::*;

#[test]
fn normalize_base_strips_trailing_slashes() {
    assert_eq!(normalize_base("https://api.example.com/"), "https://api.example.com");
    assert_eq!(normalize_base("https://api.example.com//"), "https://api.example.com");
}

#[test]
fn normalize_base_falls_back_when_blank() {
    assert_eq!(normalize_base("   "), DEFAULT_API_BASE);
    assert_eq!(normalize_base(""), DEFAULT_API_BASE);
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn token_key_matches_session_default() {
    assert_eq!(TOKEN_STORAGE_KEY, "token");
}
