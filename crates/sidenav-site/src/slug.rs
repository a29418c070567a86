//! Display labels derived from file and directory names.
//!
//! Track directories and pages are named in kebab-case, usually with a
//! numeric ordering prefix (`03-deep-dives`, `1-how-js-executes.md`).
//! Labels drop that prefix and title-case the remaining words.

/// Strip a leading run of ASCII digits followed by `-`.
///
/// Names that are only a prefix (e.g. `"1-"`) are returned unchanged so the
/// label never ends up empty.
///
/// ```ignore
/// assert_eq!(strip_numeric_prefix("1-how-js-executes"), "how-js-executes");
/// assert_eq!(strip_numeric_prefix("week-1"), "week-1");
/// ```
pub(crate) fn strip_numeric_prefix(name: &str) -> &str {
    let digits = name.len() - name.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return name;
    }
    match name[digits..].strip_prefix('-') {
        Some(rest) if !rest.is_empty() => rest,
        _ => name,
    }
}

/// Convert a kebab-case slug to title case.
///
/// Splits on `-`, drops empty words, and capitalizes the first character of
/// each word. The rest of each word is kept as written.
pub(crate) fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split('-').filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        capitalize_first_into(word, &mut result);
    }
    result
}

/// Capitalize the first character of a word, appending to `buf`.
fn capitalize_first_into(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
}

/// Label for a page, from its filename without the `.md` extension.
pub(crate) fn item_label(stem: &str) -> String {
    titlecase_from_slug(strip_numeric_prefix(stem))
}

/// Label for a track, from its directory name.
///
/// The first dash-delimited token is always dropped, on the assumption that it
/// is an ordering prefix. A name without a dash yields an empty label.
pub(crate) fn group_label(dir_name: &str) -> String {
    let rest = dir_name.split_once('-').map_or("", |(_, rest)| rest);
    titlecase_from_slug(rest)
}
