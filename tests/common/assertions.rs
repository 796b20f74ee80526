//! Assertion macros for API responses
//!
//! Failures print the whole response body, which is usually the quickest way
//! to see why a request went wrong.

/// Assert the status of a `TestResponse`
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "unexpected status, body: {}",
            $response.body
        );
    };
}

/// Assert an error response: status plus the `message` field
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $message:expr) => {
        $crate::assert_status!($response, $status);
        assert_eq!($response.body["message"], $message);
    };
}

/// Assert a validation failure on a specific field
#[macro_export]
macro_rules! assert_validation_error {
    ($response:expr, $field:expr) => {
        $crate::assert_status!($response, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            $response.body["validation"]["field"], $field,
            "unexpected validation details: {}",
            $response.body
        );
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
