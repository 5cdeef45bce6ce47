//! Custom assertion macros
//!
//! Assertions over `TestResponse` with the response body in the failure
//! message.

/// Assert the response status, printing the body on failure
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "unexpected status; body: {}",
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

/// Assert the `{"error": ..}` message of a failed response
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $message:expr) => {
        $crate::assert_status!($response, $status);
        assert_eq!($response.body["error"], $message);
    };
}
