//! Utility functions for procedural macros

/// Convert a `CamelCase` identifier to `SCREAMING_SNAKE_CASE`
///
/// A separator is inserted before an upper-case letter that follows a
/// lower-case letter or a digit, so `AllSeason` becomes `ALL_SEASON` and
/// `Suv` stays `SUV`.
pub fn screaming_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut previous: Option<char> = None;

    for c in ident.chars() {
        if c.is_uppercase() {
            if let Some(p) = previous {
                if p.is_lowercase() || p.is_ascii_digit() {
                    out.push('_');
                }
            }
        }
        out.extend(c.to_uppercase());
        previous = Some(c);
    }

    out
}

/// Fold `-` and whitespace to `_` and upper-case the rest, the form every
/// spelling is compared in
pub fn normalize_name(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '-' => '_',
            c if c.is_whitespace() => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
