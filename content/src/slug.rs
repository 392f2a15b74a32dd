//! URL slug derivation for article titles.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Derive a URL-safe slug from a title.
///
/// Lowercases, trims, turns whitespace runs into `-`, drops everything that
/// is not an ASCII letter, digit or `-`, then collapses repeated `-`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_space = false;
    for ch in lowered.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
        }
    }
    collapse_hyphens(&out)
}

fn collapse_hyphens(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '-' && out.ends_with('-') {
            continue;
        }
        out.push(ch);
    }
    out
}
