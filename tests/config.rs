//! Construction-time configuration behavior.

use drinks_net::{ConfigError, NetworkClient};

// Single test because it mutates process-wide environment state.
#[test]
fn api_key_resolution_is_a_construction_concern() {
    std::env::remove_var("DRINKS_API_KEY");

    // No key anywhere: the builder refuses, the error class is ConfigError,
    // and no request-path error is involved.
    let err = NetworkClient::builder().build().unwrap_err();
    assert!(matches!(err, ConfigError::MissingApiKey));

    // Environment fallback.
    std::env::set_var("DRINKS_API_KEY", "1");
    assert!(NetworkClient::builder().build().is_ok());
    std::env::remove_var("DRINKS_API_KEY");

    // Explicit key wins regardless of environment.
    assert!(NetworkClient::builder().api_key("9973").build().is_ok());
}
