//! Helpers Module
//!
//! Small text utilities that don't clearly belong in another module.

/// Returns the text with its first letter in uppercase.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins display names into a comma-separated list ("a, b, c").
pub fn comma_list(names: &[String]) -> String {
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("mop"), "Mop");
        assert_eq!(capitalize("James"), "James");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn comma_list_joins_names() {
        assert_eq!(comma_list(&["mop".into(), "hair".into()]), "mop, hair");
        assert_eq!(comma_list(&[]), "");
    }
}
