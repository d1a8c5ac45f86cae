/// Санитизация заголовков материалов.
///
/// Inline formatting survives, scripts and event attributes do not.
pub fn sanitize_inline(html: &str) -> String {
    ammonia::Builder::new()
        .tags(maplit::hashset![
            "em", "strong", "b", "i", "small", "sup", "sub", "span", "code",
        ])
        .generic_attributes(maplit::hashset!["class"])
        .clean(html)
        .to_string()
}

/// Renders configuration text (category names, slugs) as plain text.
pub fn plain_text(text: &str) -> String {
    ammonia::Builder::empty().clean(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_inline_keeps_plain_titles() {
        assert_eq!(sanitize_inline("Win"), "Win");
        assert_eq!(sanitize_inline("Cup <em>final</em>"), "Cup <em>final</em>");
    }

    #[test]
    fn test_sanitize_inline_drops_scripts() {
        let cleaned = sanitize_inline("<script>alert(1)</script>Win<img src=x onerror=alert(1)>");
        assert_eq!(cleaned, "Win");
    }

    #[test]
    fn test_plain_text_escapes_markup() {
        assert_eq!(plain_text("World and News"), "World and News");
        assert_eq!(plain_text("Fish & Chips"), "Fish &amp; Chips");
        assert!(!plain_text("<b>Sports</b>").contains("<b>"));
    }
}
