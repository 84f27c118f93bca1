use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A listing flattened out of the upstream API object (see `raw.rs`
/// for the source shape).
/// Every field the source leaves null or missing is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Option<String>,
    pub listing_type: Option<String>,
    pub url: Option<String>,

    // Address
    pub suburb: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub short_address: Option<String>,
    pub full_address: Option<String>,

    pub property_type: Option<String>,
    pub prices: Prices,

    // Features
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub parking_spaces: Option<i64>,

    // Sizes are kept as display text, e.g. "450" with unit "m²"
    pub building_size: Option<String>,
    pub building_size_unit: Option<String>,
    pub land_size: Option<String>,
    pub land_size_unit: Option<String>,

    // Agency
    pub listing_company_id: Option<String>,
    pub listing_company_name: Option<String>,
    pub listing_company_phone: Option<String>,

    pub auction_date: Option<String>,
    pub sold_date: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    pub listers: Vec<Lister>,

    /// The source object with null entries removed.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub raw: Value,
}

impl Listing {
    pub fn price(&self, category: PriceCategory) -> &PriceInfo {
        self.prices.get(category)
    }

    /// Parses `auction_date` when the source gave an RFC 3339 timestamp.
    pub fn auction_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.auction_date
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

/// An agent attached to a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lister {
    pub id: Option<String>,
    pub name: Option<String>,
    pub agent_id: Option<String>,
    pub job_title: Option<String>,
    pub url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceCategory {
    BuyPrice,
    SoldPrice,
}

impl PriceCategory {
    /// Matches the `price.__typename` tag used by the API.
    pub fn from_typename(typename: &str) -> Option<Self> {
        match typename {
            "BuyPrice" => Some(PriceCategory::BuyPrice),
            "SoldPrice" => Some(PriceCategory::SoldPrice),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInfo {
    /// Price as displayed by the source, e.g. "$650k" or "Contact Agent".
    pub text: String,
    pub value: Option<i64>,
}

/// Both price categories are always present; the one named by the
/// source is filled in, the other stays at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(rename = "BuyPrice", default)]
    pub buy: PriceInfo,
    #[serde(rename = "SoldPrice", default)]
    pub sold: PriceInfo,
}

impl Prices {
    pub fn get(&self, category: PriceCategory) -> &PriceInfo {
        match category {
            PriceCategory::BuyPrice => &self.buy,
            PriceCategory::SoldPrice => &self.sold,
        }
    }

    pub fn set(&mut self, category: PriceCategory, info: PriceInfo) {
        match category {
            PriceCategory::BuyPrice => self.buy = info,
            PriceCategory::SoldPrice => self.sold = info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_serialize_with_both_category_keys() {
        let mut prices = Prices::default();
        prices.set(
            PriceCategory::BuyPrice,
            PriceInfo {
                text: "$500,000".to_string(),
                value: Some(500000),
            },
        );

        let json = serde_json::to_value(&prices).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "BuyPrice": { "text": "$500,000", "value": 500000 },
                "SoldPrice": { "text": "", "value": null },
            })
        );
    }

    #[test]
    fn test_price_category_from_typename() {
        assert_eq!(
            PriceCategory::from_typename("SoldPrice"),
            Some(PriceCategory::SoldPrice)
        );
        assert_eq!(PriceCategory::from_typename("RentPrice"), None);
    }
}
