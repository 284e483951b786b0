//! Positional placeholder templates
//!
//! A template is fixed text containing `[Name]` tokens plus the ordered list
//! of names those tokens use. Rendering binds the n-th comma-separated input
//! value to the n-th name, regardless of what the value says.

use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

/// Separator between raw input values
pub const VALUE_SEPARATOR: char = ',';

/// Split a raw input string into trimmed values
///
/// An empty input yields a single empty value, the same as any other input
/// without a separator.
pub fn split_values(raw_input: &str) -> Vec<&str> {
    raw_input.split(VALUE_SEPARATOR).map(str::trim).collect()
}

/// Bracketed token for a placeholder name, e.g. `[Client Name]`
pub fn token(name: &str) -> String {
    format!("[{}]", name)
}

/// Immutable template text with its ordered placeholder names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    text: Cow<'static, str>,
    placeholders: Vec<Cow<'static, str>>,
}

impl Template {
    /// Create a template from text and an ordered list of placeholder names
    pub fn new<T, I, S>(text: T, placeholders: I) -> Self
    where
        T: Into<Cow<'static, str>>,
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            text: text.into(),
            placeholders: placeholders.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in real estate follow-up template
    pub fn real_estate_followup() -> Self {
        Self::new(
            crate::embedded::REAL_ESTATE_FOLLOWUP,
            crate::embedded::REAL_ESTATE_PLACEHOLDERS.iter().copied(),
        )
    }

    /// Raw template text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Placeholder names in binding order
    pub fn placeholders(&self) -> Vec<&str> {
        self.placeholders.iter().map(AsRef::as_ref).collect()
    }

    /// Input format hint, e.g. `Client Name, Neighborhood, Agent Name`
    pub fn format_hint(&self) -> String {
        self.placeholders().join(", ")
    }

    /// Render the template from one comma-separated input string
    ///
    /// Never fails: missing values leave their `[Name]` token in place and
    /// surplus values are dropped.
    pub fn render(&self, raw_input: &str) -> String {
        debug!(raw_input_len = raw_input.len(), "Template::render: called");
        self.render_values(&split_values(raw_input))
    }

    /// Render the template from values that are already split
    ///
    /// Each value replaces only the first occurrence of its token in the text
    /// produced so far. Replacement is literal.
    pub fn render_values(&self, values: &[&str]) -> String {
        debug!(
            values = values.len(),
            placeholders = self.placeholders.len(),
            "Template::render_values: called"
        );
        let mut result = self.text.to_string();
        for (name, value) in self.placeholders.iter().zip(values) {
            let token = token(name);
            if result.contains(&token) {
                result = result.replacen(&token, value, 1);
            } else {
                debug!(%token, "Template::render_values: token not present, skipping");
            }
        }
        result
    }

    /// Placeholder names whose token is still present in `rendered`
    pub fn unfilled<'a>(&'a self, rendered: &str) -> Vec<&'a str> {
        self.placeholders
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| rendered.contains(&token(name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FULL_INPUT: &str = "John Doe, Downtown, Condo, $300-400k, Jane Smith";
    const REAL_ESTATE_NAMES: [&str; 5] = ["Client Name", "Neighborhood", "Property Type", "Price Range", "Agent Name"];

    fn followup() -> Template {
        Template::real_estate_followup()
    }

    #[test]
    fn test_split_values_trims() {
        assert_eq!(split_values(" John Doe ,  Downtown "), vec!["John Doe", "Downtown"]);
    }

    #[test]
    fn test_split_values_empty_input() {
        assert_eq!(split_values(""), vec![""]);
    }

    #[test]
    fn test_render_all_five() {
        let out = followup().render(FULL_INPUT);
        assert!(out.starts_with("Hello John Doe,"));
        assert!(out.contains("properties in Downtown."));
        assert!(out.contains("for Condo homes in the $300-400k range."));
        assert!(out.ends_with("Best regards,\nJane Smith"));
        for name in REAL_ESTATE_NAMES {
            assert!(!out.contains(&token(name)), "{} should be filled", name);
        }
    }

    #[test]
    fn test_render_single_value() {
        let out = followup().render("Jane");
        assert!(out.starts_with("Hello Jane,"));
        assert!(out.contains("[Neighborhood]"));
        assert!(out.contains("[Property Type]"));
        assert!(out.contains("[Price Range]"));
        assert!(out.contains("[Agent Name]"));
    }

    #[test]
    fn test_render_extra_values_ignored() {
        let t = followup();
        assert_eq!(t.render(&format!("{}, extra, more", FULL_INPUT)), t.render(FULL_INPUT));
    }

    #[test]
    fn test_render_whitespace_equivalence() {
        let t = followup();
        assert_eq!(t.render(" John Doe ,  Downtown "), t.render("John Doe,Downtown"));
    }

    #[test]
    fn test_render_empty_input_clears_first_slot() {
        let out = followup().render("");
        assert!(out.starts_with("Hello ,"));
        assert!(out.contains("[Neighborhood]"));
    }

    #[test]
    fn test_render_replaces_first_occurrence_only() {
        let t = Template::new("[A] and [A] then [B]", ["A", "B"]);
        assert_eq!(t.render("x, y"), "x and [A] then y");
    }

    #[test]
    fn test_render_is_positional_not_by_name() {
        let t = Template::new("[First] [Second]", ["Second", "First"]);
        assert_eq!(t.render("one, two"), "two one");
    }

    #[test]
    fn test_render_missing_token_is_skipped() {
        let t = Template::new("Hi [Name]", ["Missing", "Name"]);
        assert_eq!(t.render("a, b"), "Hi b");
    }

    #[test]
    fn test_render_value_containing_later_token() {
        // Substitution runs over the text produced so far
        let t = Template::new("[A] [B]", ["A", "B"]);
        assert_eq!(t.render("[B], z"), "z [B]");
    }

    #[test]
    fn test_render_does_not_mutate_template() {
        let t = followup();
        let _ = t.render(FULL_INPUT);
        assert!(t.text().contains("[Client Name]"));
        assert_eq!(t, followup());
    }

    #[test]
    fn test_unfilled() {
        let t = followup();
        let out = t.render("Jane, Midtown");
        assert_eq!(t.unfilled(&out), vec!["Property Type", "Price Range", "Agent Name"]);
        assert!(t.unfilled(&t.render(FULL_INPUT)).is_empty());
    }

    #[test]
    fn test_format_hint() {
        assert_eq!(
            followup().format_hint(),
            "Client Name, Neighborhood, Property Type, Price Range, Agent Name"
        );
    }

    #[test]
    fn test_template_without_placeholders() {
        let t = Template::new("static text", Vec::<&'static str>::new());
        assert_eq!(t.render("a, b, c"), "static text");
    }

    proptest! {
        #[test]
        fn prop_render_is_deterministic(input in ".*") {
            let t = followup();
            prop_assert_eq!(t.render(&input), t.render(&input));
        }

        #[test]
        fn prop_unbound_placeholders_survive(input in "[^,\\[\\]]*") {
            // No separator means only the first slot is bound
            let out = followup().render(&input);
            for name in &REAL_ESTATE_NAMES[1..] {
                prop_assert!(out.contains(&token(name)));
            }
        }
    }
}
