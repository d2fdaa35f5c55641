/// Effective display name: the given name when non-empty, otherwise the
/// id. `id_length` of 0 keeps the whole id; a non-zero value truncates
/// the substitute to that many characters.
pub fn id_as_name(name: &str, id: &str, id_length: usize) -> String {
    if !name.is_empty() {
        return name.to_string();
    }
    if id_length == 0 {
        id.to_string()
    } else {
        id.chars().take(id_length).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_wins_over_id() {
        assert_eq!(id_as_name("public", "abcd-1234", 8), "public");
    }

    #[test]
    fn empty_name_uses_id() {
        assert_eq!(id_as_name("", "abcd-1234", 0), "abcd-1234");
    }

    #[test]
    fn truncation_applies_to_substitute_only() {
        assert_eq!(id_as_name("", "abcd-1234", 4), "abcd");
    }

    #[test]
    fn short_id_is_untouched_by_truncation() {
        assert_eq!(id_as_name("", "ab", 8), "ab");
    }
}
