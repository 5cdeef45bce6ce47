//! URL slugs for users and people.

/// Lowercase, ASCII-alphanumeric words joined by single hyphens.
///
/// Returns an empty string when the input contains no usable characters;
/// callers supply their own fallback.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Append a numeric suffix for the `attempt`-th collision (`base`, `base-2`, `base-3`, ...).
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}
