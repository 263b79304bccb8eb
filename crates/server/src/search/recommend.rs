//! Conversational product recommendation.
//!
//! Wraps the search service in a natural-language reply for the chat
//! endpoint. The chat surface uses the standard scoring variant (the
//! haystack excludes the derived features).

use serde::Serialize;

use stylefront_core::Product;

use super::{QueryTerms, ScoreVariant, distinct_categories, search};

/// How many matched product names are returned as conversation context.
const CONTEXT_PRODUCTS: usize = 5;

/// Reply when nothing in the catalog matched.
const FALLBACK_TEXT: &str = "I couldn't find any products matching your criteria. \
    Could you try describing what you're looking for differently? \
    For example, you can specify a color, category, or style.";

/// A composed recommendation reply.
#[derive(Debug, Serialize)]
pub struct Recommendation {
    /// The natural-language reply text.
    pub text: String,
    /// Names of the top matches (at most five).
    pub product_names: Vec<String>,
    /// Categories detected in the message.
    pub categories: Vec<String>,
    /// Colors detected in the message.
    pub colors: Vec<String>,
}

impl Recommendation {
    fn fallback() -> Self {
        Self {
            text: FALLBACK_TEXT.to_owned(),
            product_names: Vec::new(),
            categories: Vec::new(),
            colors: Vec::new(),
        }
    }
}

/// Recommend products for a chat message.
///
/// An empty message short-circuits to the fallback reply without scoring.
#[must_use]
pub fn recommend(catalog: &[Product], message: &str) -> Recommendation {
    if message.trim().is_empty() {
        return Recommendation::fallback();
    }

    let categories = distinct_categories(catalog);
    let terms = QueryTerms::parse(message, &categories);
    let outcome = search(catalog, &terms, &[], ScoreVariant::Standard);

    Recommendation {
        text: compose_text(&outcome.products, &terms),
        product_names: outcome
            .products
            .iter()
            .take(CONTEXT_PRODUCTS)
            .map(|p| p.name.clone())
            .collect(),
        categories: terms.categories,
        colors: terms.colors,
    }
}

/// Build the reply text by the template precedence rules.
///
/// Prices are always rendered with exactly two decimal places.
fn compose_text(products: &[Product], terms: &QueryTerms) -> String {
    let Some(top) = products.first() else {
        return FALLBACK_TEXT.to_owned();
    };

    let n = products.len();
    let mut text = if !terms.colors.is_empty() && !terms.categories.is_empty() {
        format!(
            "I found {n} {} items in the {} category. ",
            terms.colors.join(", "),
            terms.categories.join(", ")
        )
    } else if !terms.colors.is_empty() {
        format!("I found {n} {} items. ", terms.colors.join(", "))
    } else if !terms.categories.is_empty() {
        format!(
            "I found {n} items in the {} category. ",
            terms.categories.join(", ")
        )
    } else {
        format!("I found {n} items that match your search. ")
    };

    text.push_str(&format!(
        "For example, '{}' priced at ${:.2}. ",
        top.name,
        top.price.round_dp(2)
    ));
    text.push_str("Would you like to see more details about any of these items?");
    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use stylefront_core::ProductId;

    use super::*;

    fn product(id: &str, name: &str, price: Decimal, description: &str, category: &str) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_owned(),
            price,
            image: String::new(),
            description: description.to_owned(),
            category: category.to_owned(),
            features: vec![category.to_owned()],
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Red Hat", Decimal::new(1999, 2), "a red hat", "Clothing"),
            product("2", "Red Scarf", Decimal::new(20, 0), "a red scarf", "Clothing"),
            product("3", "Desk Lamp", Decimal::new(3450, 2), "a plain desk lamp", "Home"),
        ]
    }

    #[test]
    fn test_colors_and_categories_template() {
        let rec = recommend(&catalog(), "red clothing");
        assert!(
            rec.text
                .starts_with("I found 2 red items in the Clothing category. "),
            "unexpected text: {}",
            rec.text
        );
        assert_eq!(rec.colors, vec!["red"]);
        assert_eq!(rec.categories, vec!["Clothing"]);
        assert_eq!(rec.product_names, vec!["Red Hat", "Red Scarf"]);
    }

    #[test]
    fn test_colors_only_template() {
        let rec = recommend(&catalog(), "something red");
        assert!(rec.text.starts_with("I found 2 red items. "));
    }

    #[test]
    fn test_categories_only_template() {
        let rec = recommend(&catalog(), "home");
        assert!(rec.text.starts_with("I found 1 items in the Home category. "));
    }

    #[test]
    fn test_generic_template() {
        let rec = recommend(&catalog(), "lamp");
        assert!(rec.text.starts_with("I found 1 items that match your search. "));
    }

    #[test]
    fn test_example_sentence_and_price_policy() {
        let rec = recommend(&catalog(), "red clothing");
        assert!(rec.text.contains("For example, 'Red Hat' priced at $19.99. "));
        assert!(rec.text.ends_with("Would you like to see more details about any of these items?"));

        // Whole-number prices still render with two decimals.
        let rec = recommend(&catalog(), "scarf");
        assert!(rec.text.contains("priced at $20.00"));
    }

    #[test]
    fn test_no_match_falls_back() {
        let rec = recommend(&catalog(), "quantum flux");
        assert!(rec.text.starts_with("I couldn't find any products"));
        assert!(rec.product_names.is_empty());
    }

    #[test]
    fn test_empty_message_falls_back_without_scoring() {
        let rec = recommend(&catalog(), "   ");
        assert!(rec.text.starts_with("I couldn't find any products"));
        assert!(rec.colors.is_empty());
    }

    #[test]
    fn test_context_capped_at_five_names() {
        let catalog: Vec<Product> = (0..8)
            .map(|i| {
                product(
                    &i.to_string(),
                    &format!("Blue Item {i}"),
                    Decimal::new(100, 2),
                    "a blue thing",
                    "Misc",
                )
            })
            .collect();
        let rec = recommend(&catalog, "blue");
        assert_eq!(rec.product_names.len(), 5);
    }
}
