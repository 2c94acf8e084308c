//! Text helpers: slugs, truncation, email checks, short ids.

use rand::Rng;

/// Default character budget for [`truncate_text`].
pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;

/// Default length for [`generate_id`].
pub const DEFAULT_ID_LENGTH: usize = 8;

const ELLIPSIS: &str = "...";
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Convert arbitrary text into a URL-safe slug.
///
/// Lowercases, turns whitespace runs into single hyphens, drops anything
/// other than ASCII letters, digits, `_` and `-`, collapses repeated hyphens
/// and trims hyphens from both ends.
///
/// ```
/// use shop_commerce::text::slugify;
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.to_lowercase().chars() {
        let ch = if ch.is_whitespace() { '-' } else { ch };
        if ch == '-' {
            pending_hyphen = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        }
    }

    slug
}

/// Truncate to `length` characters, appending an ellipsis when cut.
pub fn truncate_text(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    }
}

/// Permissive email shape check: `local@domain.tld` with no whitespace
/// and exactly one `@`. Not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len())
}

/// Generate a pseudo-random lowercase base-36 id of `length` characters.
///
/// Not cryptographically secure and not guaranteed unique.
pub fn generate_id(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect()
}
