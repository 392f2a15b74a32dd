//! Ordered fallback resolution for optional display values.
//!
//! Several screens resolve one value from a fixed list of optional sources,
//! e.g. a profile image is "the pick made in this session, else the stored
//! URL, else the URL of the nested server object". The order is policy and
//! lives in the caller; this module only picks the first usable candidate.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

/// Non-blank text, or `None`.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// First candidate that is present and non-blank.
pub fn first_present<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().find_map(present)
}
