use crate::listing::json_type_name;
use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::debug;

// listing
//  ├── id
//  ├── raw
//  │    └── __typename
//  ├── _links
//  │    └── canonical
//  │         └── href
//  ├── address
//  │    ├── suburb
//  │    ├── state
//  │    ├── postcode
//  │    └── display
//  │         ├── shortAddress
//  │         └── fullAddress
//  ├── propertyType
//  │    └── id
//  ├── listingCompany
//  │    ├── id
//  │    ├── name
//  │    └── businessPhone
//  ├── generalFeatures
//  │    ├── bedrooms.value
//  │    ├── bathrooms.value
//  │    └── parkingSpaces.value
//  ├── propertySizes
//  │    ├── building
//  │    │    ├── displayValue
//  │    │    └── sizeUnit.displayValue
//  │    └── land
//  │         ├── displayValue
//  │         └── sizeUnit.displayValue
//  ├── price
//  │    ├── display
//  │    └── __typename
//  ├── dateSold.display
//  ├── auction.dateTime.value
//  ├── description
//  └── listers[]
//       ├── id
//       ├── name
//       ├── agentId
//       ├── jobTitle
//       ├── _links.canonical.href
//       ├── preferredPhoneNumber
//       └── email

#[derive(Debug, Default, Deserialize)]
pub struct RawListing {
    pub id: Option<Scalar>,
    pub raw: Option<TypeTag>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
    pub address: Option<RawAddress>,
    #[serde(rename = "propertyType")]
    pub property_type: Option<IdRef>,
    #[serde(rename = "listingCompany")]
    pub listing_company: Option<ListingCompany>,
    #[serde(rename = "generalFeatures")]
    pub general_features: Option<GeneralFeatures>,
    #[serde(rename = "propertySizes")]
    pub property_sizes: Option<PropertySizes>,
    pub price: Option<RawPrice>,
    #[serde(rename = "dateSold")]
    pub date_sold: Option<Display>,
    pub auction: Option<Auction>,
    pub description: Option<Scalar>,
    #[serde(default)]
    pub listers: Vec<RawLister>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLister {
    pub id: Option<Scalar>,
    pub name: Option<Scalar>,
    #[serde(rename = "agentId")]
    pub agent_id: Option<Scalar>,
    #[serde(rename = "jobTitle")]
    pub job_title: Option<Scalar>,
    #[serde(rename = "_links")]
    pub links: Option<Links>,
    #[serde(rename = "preferredPhoneNumber")]
    pub preferred_phone_number: Option<Scalar>,
    pub email: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TypeTag {
    #[serde(rename = "__typename")]
    pub typename: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Links {
    pub canonical: Option<Href>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Href {
    pub href: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAddress {
    pub suburb: Option<Scalar>,
    pub state: Option<Scalar>,
    pub postcode: Option<Scalar>,
    pub display: Option<AddressDisplay>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressDisplay {
    #[serde(rename = "shortAddress")]
    pub short_address: Option<Scalar>,
    #[serde(rename = "fullAddress")]
    pub full_address: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IdRef {
    pub id: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingCompany {
    pub id: Option<Scalar>,
    pub name: Option<Scalar>,
    #[serde(rename = "businessPhone")]
    pub business_phone: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralFeatures {
    pub bedrooms: Option<Feature>,
    pub bathrooms: Option<Feature>,
    #[serde(rename = "parkingSpaces")]
    pub parking_spaces: Option<Feature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Feature {
    pub value: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PropertySizes {
    pub building: Option<PropertySize>,
    pub land: Option<PropertySize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PropertySize {
    #[serde(rename = "displayValue")]
    pub display_value: Option<Scalar>,
    #[serde(rename = "sizeUnit")]
    pub size_unit: Option<SizeUnit>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SizeUnit {
    #[serde(rename = "displayValue")]
    pub display_value: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPrice {
    pub display: Option<Scalar>,
    #[serde(rename = "__typename")]
    pub typename: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Display {
    pub display: Option<Scalar>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Auction {
    #[serde(rename = "dateTime")]
    pub date_time: Option<DateTimeValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateTimeValue {
    pub value: Option<Scalar>,
}

/// A leaf value as the API sent it.
///
/// Leaves never fail deserialization: a value of an unexpected type lands
/// in `Other` and reads back as `None`, so one drifted field does not cost
/// the whole listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(Number),
    Other(Value),
}

impl Scalar {
    /// Strings as-is, numbers as their decimal text (some ids are numeric).
    pub fn text(&self, field: &str) -> Option<String> {
        match self {
            Scalar::Text(s) => Some(s.clone()),
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Other(v) => {
                debug!(field, found = json_type_name(v), "ignoring non-text value");
                None
            }
        }
    }

    /// Whole numbers only; `1.5` bathrooms or `"three"` read as `None`.
    pub fn count(&self, field: &str) -> Option<i64> {
        let count = match self {
            Scalar::Number(n) => n.as_i64(),
            _ => None,
        };
        if count.is_none() {
            debug!(field, value = ?self, "ignoring non-integer count");
        }
        count
    }
}

pub(crate) fn text(scalar: Option<&Scalar>, field: &str) -> Option<String> {
    scalar.and_then(|s| s.text(field))
}

pub(crate) fn count(scalar: Option<&Scalar>, field: &str) -> Option<i64> {
    scalar.and_then(|s| s.count(field))
}
