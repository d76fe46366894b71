/// Canonical form for recipe slugs: trimmed, lower-case, whitespace runs become a single `-`.
pub fn normalize_slug(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join("-");
    collapsed.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_slug;

    #[test]
    fn collapses_whitespace_and_case() {
        assert_eq!(normalize_slug("  Turkey   Recipe "), "turkey-recipe");
        assert_eq!(normalize_slug("\u{feff}BEEF"), "beef");
    }
}
