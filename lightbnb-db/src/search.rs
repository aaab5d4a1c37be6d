//! Property search query construction
//!
//! Filters become an ordered list of [`Predicate`]s, rendered once into a
//! `QueryBuilder`. The first predicate gets `WHERE`, every later one `AND`,
//! and all values are bound parameters.

use serde::{Deserialize, Serialize};
use sqlx::{Postgres, QueryBuilder};

use crate::models::to_cents;

const BASE_SELECT: &str = "SELECT properties.*, avg(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     LEFT JOIN property_reviews ON property_reviews.property_id = properties.id";

/// Optional search filters, as submitted by the search form.
///
/// Prices are in major currency units; they are converted to cents when
/// the query is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyFilters {
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

/// A row filter applied before aggregation
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring match; holds the escaped `ILIKE` pattern
    CityContains(String),
    /// Minimum cost in cents, inclusive
    MinCost(i64),
    /// Maximum cost in cents, inclusive
    MaxCost(i64),
    Owner(i32),
}

impl Predicate {
    fn push_onto(self, builder: &mut QueryBuilder<'static, Postgres>) {
        match self {
            Self::CityContains(pattern) => {
                builder.push("properties.city ILIKE ");
                builder.push_bind(pattern);
            }
            Self::MinCost(cents) => {
                builder.push("properties.cost_per_night >= ");
                builder.push_bind(cents);
            }
            Self::MaxCost(cents) => {
                builder.push("properties.cost_per_night <= ");
                builder.push_bind(cents);
            }
            Self::Owner(owner_id) => {
                builder.push("properties.owner_id = ");
                builder.push_bind(owner_id);
            }
        }
    }
}

/// A fully resolved property search
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySearch {
    predicates: Vec<Predicate>,
    minimum_rating: Option<f64>,
    limit: i64,
}

impl PropertySearch {
    pub fn new(filters: &PropertyFilters, limit: u32) -> Self {
        let mut predicates = Vec::new();

        if let Some(city) = filters.city.as_deref().filter(|c| !c.is_empty()) {
            predicates.push(Predicate::CityContains(contains_pattern(city)));
        }
        if let Some(min) = filters.minimum_price_per_night {
            predicates.push(Predicate::MinCost(to_cents(min)));
        }
        if let Some(max) = filters.maximum_price_per_night {
            predicates.push(Predicate::MaxCost(to_cents(max)));
        }
        if let Some(owner_id) = filters.owner_id {
            predicates.push(Predicate::Owner(owner_id));
        }

        Self {
            predicates,
            minimum_rating: filters.minimum_rating,
            limit: i64::from(limit),
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Number of bound parameters the rendered query carries
    pub fn bind_count(&self) -> usize {
        self.predicates.len() + usize::from(self.minimum_rating.is_some()) + 1
    }

    /// Render into a query builder ready for `build_query_as`.
    pub fn into_builder(self) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(BASE_SELECT);

        for (i, predicate) in self.predicates.into_iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_onto(&mut builder);
        }

        builder.push(" GROUP BY properties.id");

        if let Some(rating) = self.minimum_rating {
            builder.push(" HAVING avg(property_reviews.rating)::float8 >= ");
            builder.push_bind(rating);
        }

        builder.push(" ORDER BY properties.cost_per_night ASC, properties.id ASC LIMIT ");
        builder.push_bind(self.limit);

        builder
    }
}

/// `%needle%` with LIKE metacharacters in the needle escaped.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(filters: &PropertyFilters, limit: u32) -> String {
        PropertySearch::new(filters, limit)
            .into_builder()
            .sql()
            .to_string()
    }

    #[test]
    fn no_filters_has_no_where() {
        let sql = render(&PropertyFilters::default(), 10);
        assert_eq!(
            sql,
            format!(
                "{BASE_SELECT} GROUP BY properties.id \
                 ORDER BY properties.cost_per_night ASC, properties.id ASC LIMIT $1"
            )
        );
    }

    #[test]
    fn all_filters_in_order() {
        let filters = PropertyFilters {
            city: Some("van".to_string()),
            owner_id: Some(3),
            minimum_price_per_night: Some(50.0),
            maximum_price_per_night: Some(150.0),
            minimum_rating: Some(4.0),
        };
        let sql = render(&filters, 5);
        assert_eq!(
            sql,
            format!(
                "{BASE_SELECT} WHERE properties.city ILIKE $1 \
                 AND properties.cost_per_night >= $2 \
                 AND properties.cost_per_night <= $3 \
                 AND properties.owner_id = $4 \
                 GROUP BY properties.id \
                 HAVING avg(property_reviews.rating)::float8 >= $5 \
                 ORDER BY properties.cost_per_night ASC, properties.id ASC LIMIT $6"
            )
        );
    }

    #[test]
    fn single_later_filter_still_gets_where() {
        let filters = PropertyFilters {
            maximum_price_per_night: Some(90.0),
            ..Default::default()
        };
        let sql = render(&filters, 10);
        assert!(sql.contains(" WHERE properties.cost_per_night <= $1 GROUP BY"));
        assert!(!sql.contains(" AND "));
    }

    #[test]
    fn rating_only_uses_having_without_where() {
        let filters = PropertyFilters {
            minimum_rating: Some(4.0),
            ..Default::default()
        };
        let sql = render(&filters, 10);
        assert!(!sql.contains(" WHERE "));
        assert!(sql.contains("HAVING avg(property_reviews.rating)::float8 >= $1"));
        assert!(sql.ends_with("LIMIT $2"));
    }

    #[test]
    fn prices_are_converted_to_cents() {
        let filters = PropertyFilters {
            minimum_price_per_night: Some(50.0),
            maximum_price_per_night: Some(200.0),
            ..Default::default()
        };
        let search = PropertySearch::new(&filters, 10);
        assert_eq!(
            search.predicates(),
            &[Predicate::MinCost(5_000), Predicate::MaxCost(20_000)]
        );
    }

    #[test]
    fn empty_city_is_ignored() {
        let filters = PropertyFilters {
            city: Some(String::new()),
            ..Default::default()
        };
        assert!(PropertySearch::new(&filters, 10).predicates().is_empty());
    }

    #[test]
    fn city_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("van"), "%van%");
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn filters_deserialize_from_partial_json() {
        let filters: PropertyFilters =
            serde_json::from_str(r#"{"city": "Vancouver", "minimum_rating": 4}"#).unwrap();
        assert_eq!(filters.city.as_deref(), Some("Vancouver"));
        assert_eq!(filters.minimum_rating, Some(4.0));
        assert_eq!(filters.minimum_price_per_night, None);
    }

    #[test]
    fn fractional_price_filters_are_accepted() {
        let filters: PropertyFilters =
            serde_json::from_str(r#"{"maximum_price_per_night": 99.5}"#).unwrap();
        assert_eq!(filters.maximum_price_per_night, Some(99.5));
        assert_eq!(
            PropertySearch::new(&filters, 10).predicates(),
            &[Predicate::MaxCost(9_950)]
        );
    }
}
