use serde_json::{json, Value};

/// A buy listing shaped like a search-results entry from the API.
pub fn sample_listing() -> Value {
    json!({
        "id": "143160680",
        "raw": { "__typename": "BuyResidentialListing" },
        "_links": {
            "canonical": { "href": "https://www.realestate.com.au/property-house-nsw-bondi-143160680" }
        },
        "address": {
            "suburb": "Bondi",
            "state": "NSW",
            "postcode": "2026",
            "display": {
                "shortAddress": "12 Curlewis Street",
                "fullAddress": "12 Curlewis Street, Bondi, NSW 2026"
            }
        },
        "propertyType": { "id": "house" },
        "listingCompany": {
            "id": "XBOBND",
            "name": "Bondi Coastal Realty",
            "businessPhone": "02 9999 8888"
        },
        "generalFeatures": {
            "bedrooms": { "value": 3 },
            "bathrooms": { "value": 2 },
            "parkingSpaces": { "value": null }
        },
        "propertySizes": {
            "building": { "displayValue": "180", "sizeUnit": { "displayValue": "m²" } },
            "land": { "displayValue": "450", "sizeUnit": { "displayValue": "m²" } }
        },
        "price": { "display": "$1.2m", "__typename": "BuyPrice" },
        "dateSold": null,
        "auction": { "dateTime": { "value": "2024-03-16T10:30:00+11:00" } },
        "description": "Sun-drenched family home<br/>Walk to the beach.",
        "listers": [
            sample_lister("1", "Alex Morgan", Some("0412 111 222")),
            sample_lister("2", "Priya Shah", Some("0413 333 444")),
            sample_lister("3", "Chris Tan", None),
        ]
    })
}

pub fn sample_lister(id: &str, name: &str, phone: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": name,
        "agentId": format!("agent-{id}"),
        "jobTitle": "Sales Agent",
        "_links": { "canonical": { "href": format!("https://www.realestate.com.au/agent/{id}") } },
        "preferredPhoneNumber": phone,
        "email": null
    })
}
