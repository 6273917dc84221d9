/// Separator between tags in the joined form. Commas inside a tag are not escaped.
pub const TAG_SEPARATOR: char = ',';

/// Join tags into a comma-separated string with no trailing comma
pub fn tags_to_string<S: AsRef<str>>(tags: &[S]) -> String {
    let mut joined = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            joined.push(TAG_SEPARATOR);
        }
        joined.push_str(tag.as_ref());
    }
    joined
}

/// Split a comma-separated string into tags.
/// `None` and `""` yield no tags; every other substring is kept verbatim,
/// including whitespace and empty entries.
pub fn string_to_tags(tags: Option<&str>) -> Vec<String> {
    match tags {
        Some(s) if !s.is_empty() => s.split(TAG_SEPARATOR).map(str::to_string).collect(),
        _ => Vec::new(),
    }
}
