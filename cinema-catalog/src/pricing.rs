use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::{CatalogError, CatalogResult, STANDARD, VIP};

/// Multiplier applied to a showtime's base price for unknown categories
pub const FALLBACK_MULTIPLIER: f64 = 1.0;

/// Price multiplier per seat category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceMultipliers {
    multipliers: HashMap<String, f64>,
}

impl Default for PriceMultipliers {
    fn default() -> Self {
        Self {
            multipliers: {
                let mut m = HashMap::new();
                m.insert(STANDARD.to_string(), 1.0);
                m.insert(VIP.to_string(), 1.5);
                m
            },
        }
    }
}

impl PriceMultipliers {
    /// Build a table from raw values, e.g. as loaded from configuration
    pub fn from_map(multipliers: HashMap<String, f64>) -> CatalogResult<Self> {
        multipliers
            .into_iter()
            .try_fold(Self { multipliers: HashMap::new() }, |table, (category, multiplier)| {
                table.with(category, multiplier)
            })
    }

    pub fn with(mut self, category: impl Into<String>, multiplier: f64) -> CatalogResult<Self> {
        let category = category.into();

        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(CatalogError::InvalidMultiplier { category, multiplier });
        }

        self.multipliers.insert(category, multiplier);
        Ok(self)
    }

    /// Unknown categories are priced as standard
    pub fn multiplier_for(&self, category: &str) -> f64 {
        self.multipliers.get(category).copied().unwrap_or(FALLBACK_MULTIPLIER)
    }

    pub fn price_for(&self, base_price: f64, category: &str) -> f64 {
        base_price * self.multiplier_for(category)
    }
}
