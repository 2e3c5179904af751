// SPDX-License-Identifier: Apache-2.0

/// Slugifies a title: trim, lowercase, spaces become hyphens.
///
/// Punctuation is deliberately left alone, so a title like `"50% Off!"`
/// yields `"50%-off!"`. Seed-derived slugs have always worked this way and
/// existing seed identifiers depend on it.
#[must_use]
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .map(|ch| if ch == ' ' { '-' } else { ch })
        .collect()
}

/// Returns the trailing non-empty path segment of a URL, if any.
#[must_use]
pub fn slug_from_url(url: &str) -> Option<&str> {
    url.split('/').filter(|segment| !segment.is_empty()).last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("  Garden Planner  "), "garden-planner");
    }

    #[test]
    fn slugify_keeps_punctuation() {
        assert_eq!(slugify("50% Off!"), "50%-off!");
    }

    #[test]
    fn url_trailing_segment() {
        assert_eq!(
            slug_from_url("https://shop.example.com/products/garden-planner/"),
            Some("garden-planner")
        );
        assert_eq!(slug_from_url(""), None);
        assert_eq!(slug_from_url("///"), None);
    }
}
