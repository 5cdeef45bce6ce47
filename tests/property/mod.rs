//! Property-based tests
//!
//! Uses proptest to generate random inputs and verify properties

mod rate_limit_proptest;
mod slug_proptest;
