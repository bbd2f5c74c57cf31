//! Field filters over products.
//!
//! The set of filterable fields is closed: `title`, `category` and `price`.
//! Any other field name produces [`ProductFilter::Unmatched`], which matches
//! nothing.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::catalog::Product;

/// A predicate over a single product field.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// Case-insensitive exact title match. Holds the lowercased needle.
    Title(String),
    /// Case-insensitive exact category match. Holds the lowercased needle.
    Category(String),
    /// Inclusive price range.
    PriceRange { min: f64, max: f64 },
    /// Exact price.
    PriceExact(f64),
    /// Unknown field.
    Unmatched,
}

/// A filter value that could not be interpreted.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid price '{value}': {source}")]
    InvalidPrice {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

impl ProductFilter {
    /// Build a filter from the `field`/`value` query pair.
    ///
    /// A price value with exactly one `-` is read as `min-max`.
    pub fn parse(field: &str, value: &str) -> Result<Self, FilterError> {
        let filter = match field.to_lowercase().as_str() {
            "title" => Self::Title(value.to_lowercase()),
            "category" => Self::Category(value.to_lowercase()),
            "price" => match value.split_once('-') {
                Some((min, max)) if !max.contains('-') => Self::PriceRange {
                    min: parse_price(min)?,
                    max: parse_price(max)?,
                },
                _ => Self::PriceExact(parse_price(value)?),
            },
            _ => Self::Unmatched,
        };
        Ok(filter)
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::Title(title) => product.title.to_lowercase() == *title,
            Self::Category(category) => product.category.to_lowercase() == *category,
            Self::PriceRange { min, max } => product.price >= *min && product.price <= *max,
            Self::PriceExact(price) => product.price == *price,
            Self::Unmatched => false,
        }
    }
}

fn parse_price(raw: &str) -> Result<f64, FilterError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| FilterError::InvalidPrice {
            value: raw.to_string(),
            source,
        })
}
