//! Customer selection assembled by the storefront embed.

use serde::{Deserialize, Serialize};

use super::font::Font;

/// One selected add-on option (size, usage type, acrylic shape, backboard
/// color, hanging option). Opaque to the pricing core apart from its flat
/// price modifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddOn {
    /// Display name, non-functional to pricing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Flat amount added to the total; missing means 0, negatives subtract.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_modifier: Option<f64>,
}

impl AddOn {
    /// Create an add-on with a flat price modifier.
    pub fn new(price_modifier: f64) -> Self {
        Self {
            name: None,
            price_modifier: Some(price_modifier),
        }
    }

    /// Effective modifier amount.
    pub fn modifier(&self) -> f64 {
        self.price_modifier.unwrap_or(0.0)
    }
}

/// Everything the shopper has chosen so far. Built fresh per customer
/// session; never persisted by the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerSelection {
    /// Raw multi-line sign text.
    pub text: String,
    /// Selected font, if the shopper has picked one yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Selected add-on options.
    pub add_ons: Vec<AddOn>,
}

impl CustomerSelection {
    /// Create a selection with no add-ons.
    pub fn new(text: impl Into<String>, font: Option<Font>) -> Self {
        Self {
            text: text.into(),
            font,
            add_ons: Vec::new(),
        }
    }

    /// Literal character count of the sign text, spaces included.
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Sum of all add-on modifiers.
    pub fn modifier_total(&self) -> f64 {
        self.add_ons.iter().map(AddOn::modifier).sum()
    }

    /// Whether enough is selected to compute a price.
    pub fn is_complete(&self) -> bool {
        self.font.is_some() && !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_count_includes_spaces() {
        let selection = CustomerSelection::new("open late", None);
        assert_eq!(selection.character_count(), 9);
    }

    #[test]
    fn test_modifier_total_defaults_and_negatives() {
        let mut selection = CustomerSelection::new("Hi", None);
        selection.add_ons = vec![
            AddOn::new(2.5),
            AddOn::new(-1.0),
            AddOn {
                name: Some("backboard".to_string()),
                price_modifier: None,
            },
        ];
        assert!((selection.modifier_total() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_completeness() {
        let font = Font::default();
        assert!(!CustomerSelection::new("Hi", None).is_complete());
        assert!(!CustomerSelection::new("   \n", Some(font.clone())).is_complete());
        assert!(CustomerSelection::new("Hi", Some(font)).is_complete());
    }
}
