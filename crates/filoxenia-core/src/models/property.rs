//! Property model.

use serde::{Deserialize, Serialize};

use crate::filter::FieldAccessor;

/// A rentable property managed through the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The unique identifier for the property.
    pub id: String,

    /// Display name of the property.
    pub name: String,

    /// Neighbourhood or area.
    pub area: String,

    /// City the property is in.
    pub city: String,

    /// Kind of property.
    pub property_type: PropertyType,

    /// Whether the property currently accepts bookings.
    pub status: PropertyStatus,

    /// Number of bedrooms.
    #[serde(default)]
    pub bedrooms: i64,

    /// Nightly base rate.
    pub price_per_night: f64,

    /// Marketing description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the property was registered (ISO 8601).
    pub created_at: String,
}

impl Property {
    /// The fields the properties screen searches over.
    pub fn search_fields() -> Vec<FieldAccessor<Property>> {
        vec![
            |p: &Property| Some(p.name.clone()),
            |p: &Property| Some(p.area.clone()),
            |p: &Property| Some(p.city.clone()),
            |p: &Property| p.description.clone(),
            |p: &Property| Some(p.id.clone()),
        ]
    }
}

/// Kind of property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Studio,
}

impl PropertyType {
    /// The wire token for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Studio => "studio",
        }
    }

    /// The Greek display label shown in the console.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Διαμέρισμα",
            PropertyType::House => "Μονοκατοικία",
            PropertyType::Villa => "Βίλα",
            PropertyType::Studio => "Στούντιο",
        }
    }
}

/// Availability status of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    /// Listed and bookable.
    Active,
    /// Temporarily delisted.
    Inactive,
    /// Closed for maintenance.
    Maintenance,
}

impl PropertyStatus {
    /// The wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "active",
            PropertyStatus::Inactive => "inactive",
            PropertyStatus::Maintenance => "maintenance",
        }
    }

    /// The Greek display label shown in the console.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "Ενεργό",
            PropertyStatus::Inactive => "Ανενεργό",
            PropertyStatus::Maintenance => "Σε συντήρηση",
        }
    }
}
