//! QR link templating for numbered standees.

/// Placeholder replaced by the standee number.
pub const NUMBER_PLACEHOLDER: &str = "{n}";

/// Replace the first `{n}` in `template` with `number`.
pub fn expand_link_template(template: &str, number: u32) -> String {
    template.replacen(NUMBER_PLACEHOLDER, &number.to_string(), 1)
}

/// Link for standee `number`: the expanded template if it carries a
/// placeholder, otherwise `fallback`.
pub fn resolve_batch_link(template: Option<&str>, fallback: &str, number: u32) -> String {
    match template {
        Some(t) if t.contains(NUMBER_PLACEHOLDER) => expand_link_template(t, number),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_first_placeholder_only() {
        assert_eq!(
            expand_link_template("https://menu.example/t/{n}?n={n}", 7),
            "https://menu.example/t/7?n={n}"
        );
    }

    #[test]
    fn template_without_placeholder_falls_back() {
        assert_eq!(
            resolve_batch_link(Some("https://menu.example"), "https://fallback.example", 3),
            "https://fallback.example"
        );
        assert_eq!(
            resolve_batch_link(None, "https://fallback.example", 3),
            "https://fallback.example"
        );
    }

    #[test]
    fn template_with_placeholder_is_numbered() {
        assert_eq!(
            resolve_batch_link(Some("https://menu.example/table/{n}"), "x", 12),
            "https://menu.example/table/12"
        );
    }
}
