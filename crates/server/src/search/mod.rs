//! Relevance scoring and product search.
//!
//! One parameterized scorer backs all three search surfaces (plain search,
//! filtered product search, chat recommendation) so their behavior cannot
//! drift. Matching is case-insensitive, unanchored substring containment
//! over a lowercase haystack of each product's text fields: "pinkish"
//! matches "pink".

mod recommend;

use serde::Serialize;
use tracing::debug;

use stylefront_core::Product;

pub use recommend::{Recommendation, recommend};

/// The closed color vocabulary recognized in queries.
pub const COLOR_TERMS: [&str; 10] = [
    "pink", "red", "blue", "green", "black", "white", "yellow", "purple", "orange", "brown",
];

/// Points awarded when any detected color term appears in the haystack.
const COLOR_SCORE: u32 = 2;
/// Points awarded when the product's category is among the detected ones.
const CATEGORY_SCORE: u32 = 2;

/// Terms extracted from a raw query.
#[derive(Debug, Clone, Default)]
pub struct QueryTerms {
    /// The whole query, lowercased.
    pub raw: String,
    /// Whitespace-split tokens of the lowercased query.
    pub tokens: Vec<String>,
    /// Colors from [`COLOR_TERMS`] appearing in the query.
    pub colors: Vec<String>,
    /// Catalog categories appearing (lowercased) in the query.
    pub categories: Vec<String>,
}

impl QueryTerms {
    /// Extract color, category, and token terms from a raw query.
    ///
    /// The category vocabulary is dynamic: the distinct categories of the
    /// current catalog, detected by lowercase substring containment.
    #[must_use]
    pub fn parse(raw_query: &str, known_categories: &[String]) -> Self {
        let raw = raw_query.to_lowercase();
        let tokens = raw.split_whitespace().map(ToOwned::to_owned).collect();
        let colors = COLOR_TERMS
            .iter()
            .filter(|color| raw.contains(**color))
            .map(|color| (*color).to_owned())
            .collect();
        let categories = known_categories
            .iter()
            .filter(|category| raw.contains(&category.to_lowercase()))
            .cloned()
            .collect();

        Self {
            raw,
            tokens,
            colors,
            categories,
        }
    }
}

/// Which scoring variant a search surface uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreVariant {
    /// Plain search and chat: haystack is name + description + category;
    /// term score is 1 if any query token appears.
    Standard,
    /// Filtered product search: the haystack also includes the derived
    /// features, and term score is 2 per matching query token plus 1 per
    /// matching filter string.
    Weighted,
}

/// Compute the relevance score of one product for one query.
///
/// Components (summed): 2 if any detected color appears in the haystack,
/// 2 if the product's category is among the detected categories, plus the
/// variant's term score. A product scoring 0 is excluded from results.
#[must_use]
pub fn score(
    product: &Product,
    terms: &QueryTerms,
    filters: &[String],
    variant: ScoreVariant,
) -> u32 {
    let haystack = product.search_text(variant == ScoreVariant::Weighted);
    let mut total = 0;

    if !terms.colors.is_empty() && terms.colors.iter().any(|color| haystack.contains(color)) {
        total += COLOR_SCORE;
    }

    if !terms.categories.is_empty()
        && terms
            .categories
            .iter()
            .any(|category| category.eq_ignore_ascii_case(&product.category))
    {
        total += CATEGORY_SCORE;
    }

    total += match variant {
        ScoreVariant::Standard => {
            u32::from(terms.tokens.iter().any(|token| haystack.contains(token)))
        }
        ScoreVariant::Weighted => {
            let term_matches = terms
                .tokens
                .iter()
                .filter(|token| haystack.contains(*token))
                .count() as u32;
            let filter_matches = filters
                .iter()
                .filter(|filter| haystack.contains(&filter.to_lowercase()))
                .count() as u32;
            term_matches * 2 + filter_matches
        }
    };

    total
}

/// The outcome of a catalog search.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub products: Vec<Product>,
    pub colors: Vec<String>,
    pub categories: Vec<String>,
    pub message: String,
}

/// Score every product in the catalog, keep the matches, and order them.
///
/// Products with score 0 are dropped. The sort is a stable descending sort
/// on score, so equal-score products keep their catalog order. Scores are
/// transient and never leave this function.
#[must_use]
pub fn search(
    catalog: &[Product],
    terms: &QueryTerms,
    filters: &[String],
    variant: ScoreVariant,
) -> SearchOutcome {
    let mut scored: Vec<(u32, &Product)> = catalog
        .iter()
        .map(|product| (score(product, terms, filters, variant), product))
        .filter(|(s, _)| *s > 0)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let products: Vec<Product> = scored.into_iter().map(|(_, p)| p.clone()).collect();
    debug!(
        query = %terms.raw,
        matches = products.len(),
        "Search completed"
    );

    let message = format!("Found {} products matching your search.", products.len());

    SearchOutcome {
        products,
        colors: terms.colors.clone(),
        categories: terms.categories.clone(),
        message,
    }
}

/// The distinct categories present in a catalog, in first-seen order.
#[must_use]
pub fn distinct_categories(catalog: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in catalog {
        if !categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&product.category))
        {
            categories.push(product.category.clone());
        }
    }
    categories
}
