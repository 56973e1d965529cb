use cinema_catalog::{CatalogError, CatalogResult, PriceMultipliers, STANDARD, VIP};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub seat_map: SeatMapSettings,
    #[serde(default)]
    pub demo: DemoSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryMultiplier>,
}

// Category labels are case-sensitive, so they are values rather than map keys
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryMultiplier {
    pub category: String,
    pub multiplier: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeatMapSettings {
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoSettings {
    #[serde(default = "default_movie_title")]
    pub movie_title: String,
    #[serde(default = "default_base_price")]
    pub base_price: f64,
    #[serde(default = "default_extra_seats")]
    pub extra_standard_seats: u32,
    #[serde(default = "default_first_customer")]
    pub first_customer: String,
    #[serde(default = "default_second_customer")]
    pub second_customer: String,
}

fn default_categories() -> Vec<CategoryMultiplier> {
    vec![
        CategoryMultiplier { category: STANDARD.to_string(), multiplier: 1.0 },
        CategoryMultiplier { category: VIP.to_string(), multiplier: 1.5 },
    ]
}

fn default_wrap_width() -> usize { 5 }
fn default_movie_title() -> String { "Inception".to_string() }
fn default_base_price() -> f64 { 50.0 }
fn default_extra_seats() -> u32 { 3 }
fn default_first_customer() -> String { "Alice".to_string() }
fn default_second_customer() -> String { "Bob".to_string() }

impl Default for PricingSettings {
    fn default() -> Self {
        Self { categories: default_categories() }
    }
}

impl Default for SeatMapSettings {
    fn default() -> Self {
        Self { wrap_width: default_wrap_width() }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            movie_title: default_movie_title(),
            base_price: default_base_price(),
            extra_standard_seats: default_extra_seats(),
            first_customer: default_first_customer(),
            second_customer: default_second_customer(),
        }
    }
}

impl PricingSettings {
    pub fn to_multipliers(&self) -> CatalogResult<PriceMultipliers> {
        let mut table: HashMap<String, f64> = HashMap::with_capacity(self.categories.len());
        for entry in &self.categories {
            if table.insert(entry.category.clone(), entry.multiplier).is_some() {
                return Err(CatalogError::DuplicateCategory(entry.category.clone()));
            }
        }
        PriceMultipliers::from_map(table)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/test.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

// Eg. `CINEMA__SEAT_MAP__WRAP_WIDTH=8`; the prefix takes the same `__` separator
fn environment() -> config::Environment {
    config::Environment::with_prefix("CINEMA").separator("__")
}
