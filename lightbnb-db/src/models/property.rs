use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Property record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub active: bool,
}

/// Payload for listing a new property.
///
/// Field order is the column order of the insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly price in cents
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
}

/// Property with its average review rating, as returned by searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    /// `None` when the property has no reviews yet
    pub average_rating: Option<f64>,
}

impl Property {
    /// True when this row holds exactly the fields of `new` (ignoring the
    /// generated id and store defaults).
    pub fn matches(&self, new: &NewProperty) -> bool {
        self.owner_id == new.owner_id
            && self.title == new.title
            && self.description == new.description
            && self.thumbnail_photo_url == new.thumbnail_photo_url
            && self.cover_photo_url == new.cover_photo_url
            && self.cost_per_night == new.cost_per_night
            && self.street == new.street
            && self.city == new.city
            && self.province == new.province
            && self.post_code == new.post_code
            && self.country == new.country
            && self.parking_spaces == new.parking_spaces
            && self.number_of_bathrooms == new.number_of_bathrooms
            && self.number_of_bedrooms == new.number_of_bedrooms
    }
}
