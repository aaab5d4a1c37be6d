use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lightbnb_db::{Database, NewProperty, PropertyFilters, DEFAULT_LIMIT};

use super::print_json;

/// Arguments for the properties command
#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    /// City name or part of it (case-insensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Minimum price per night, in currency units (e.g. 99.50)
    #[arg(long = "min-price", value_name = "AMOUNT")]
    pub minimum_price_per_night: Option<f64>,

    /// Maximum price per night, in currency units (e.g. 99.50)
    #[arg(long = "max-price", value_name = "AMOUNT")]
    pub maximum_price_per_night: Option<f64>,

    /// Minimum average review rating
    #[arg(long = "min-rating", value_name = "RATING")]
    pub minimum_rating: Option<f64>,

    /// Only properties owned by this user id
    #[arg(long = "owner", value_name = "USER_ID")]
    pub owner_id: Option<i32>,

    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

impl From<PropertiesArgs> for PropertyFilters {
    fn from(args: PropertiesArgs) -> Self {
        Self {
            city: args.city,
            owner_id: args.owner_id,
            minimum_price_per_night: args.minimum_price_per_night,
            maximum_price_per_night: args.maximum_price_per_night,
            minimum_rating: args.minimum_rating,
        }
    }
}

/// Arguments for the list-property command
#[derive(Parser, Debug)]
pub struct ListPropertyArgs {
    /// JSON file with every property field (cost_per_night in cents)
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,
}

/// Arguments for the reviews command
#[derive(Parser, Debug)]
pub struct ReviewsArgs {
    /// Property id
    pub property_id: i32,
}

pub async fn run_properties(args: PropertiesArgs, db: &Database) -> Result<()> {
    let limit = args.limit;
    let filters = PropertyFilters::from(args);

    let listings = db
        .properties()
        .list(&filters, Some(limit))
        .await
        .context("Property search failed")?;

    print_json(&listings)
}

pub async fn run_list_property(args: ListPropertyArgs, db: &Database) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let property: NewProperty = serde_json::from_str(&content)
        .with_context(|| format!("Invalid property JSON in {}", args.file.display()))?;

    let created = db
        .properties()
        .create(&property)
        .await
        .context("Failed to list property")?;

    print_json(&created)
}

pub async fn run_reviews(args: ReviewsArgs, db: &Database) -> Result<()> {
    let reviews = db.properties().reviews(args.property_id).await?;
    print_json(&reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_prices_reach_the_filters() {
        let args = PropertiesArgs::try_parse_from([
            "properties",
            "--min-price",
            "49.99",
            "--max-price",
            "99.5",
        ])
        .unwrap();

        let filters = PropertyFilters::from(args);
        assert_eq!(filters.minimum_price_per_night, Some(49.99));
        assert_eq!(filters.maximum_price_per_night, Some(99.5));
    }
}
