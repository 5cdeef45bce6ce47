//! Property-based tests for slug generation

use proptest::prelude::*;
use so_quotable::shared::slug::{slugify, with_suffix};

proptest! {
    #[test]
    fn test_slug_charset(name in ".{0,64}") {
        let slug = slugify(&name);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn test_slug_is_idempotent(name in "[A-Za-z0-9 ,.'-]{0,40}") {
        let once = slugify(&name);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn test_suffix_keeps_base(base in "[a-z]{1,12}", attempt in 2u32..100) {
        let suffixed = with_suffix(&base, attempt);
        prop_assert_eq!(suffixed, format!("{}-{}", base, attempt));
    }
}
