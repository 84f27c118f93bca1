use crate::listing::parse::{parse_description, parse_phone, parse_price_text};
use crate::listing::raw::{self, RawLister, RawListing, RawPrice};
use crate::listing::value::strip_nulls;
use crate::listing::{json_type_name, Lister, Listing, MappingError, PriceCategory, PriceInfo, Prices};
use serde_json::Value;
use tracing::{debug, trace_span};

/// Flattens one raw listing object from the API into a `Listing`.
///
/// Nulls are stripped first, so a null and a missing key both come out as
/// `None`; a leaf of the wrong type is also `None`. Only a broken structure
/// (see `MappingError`) fails the listing.
/// `raw` is left untouched; the returned record keeps the stripped copy.
pub fn map_listing(raw: &Value) -> Result<Listing, MappingError> {
    if !raw.is_object() {
        return Err(MappingError::NotAnObject {
            found: json_type_name(raw),
        });
    }

    let stripped = strip_nulls(raw.clone());
    let source: RawListing = serde_json::from_value(stripped.clone())?;

    let id = raw::text(source.id.as_ref(), "id");
    let span = trace_span!("map_listing", id = id.as_deref().unwrap_or("<none>"));
    let _guard = span.enter();

    let address = source.address.as_ref();
    let display = address.and_then(|a| a.display.as_ref());
    let company = source.listing_company.as_ref();
    let features = source.general_features.as_ref();
    let building = source.property_sizes.as_ref().and_then(|s| s.building.as_ref());
    let land = source.property_sizes.as_ref().and_then(|s| s.land.as_ref());

    Ok(Listing {
        id,
        listing_type: raw::text(
            source.raw.as_ref().and_then(|r| r.typename.as_ref()),
            "raw.__typename",
        ),
        url: raw::text(
            source
                .links
                .as_ref()
                .and_then(|l| l.canonical.as_ref())
                .and_then(|c| c.href.as_ref()),
            "_links.canonical.href",
        ),

        suburb: raw::text(address.and_then(|a| a.suburb.as_ref()), "address.suburb"),
        state: raw::text(address.and_then(|a| a.state.as_ref()), "address.state"),
        postcode: raw::text(address.and_then(|a| a.postcode.as_ref()), "address.postcode"),
        short_address: raw::text(
            display.and_then(|d| d.short_address.as_ref()),
            "address.display.shortAddress",
        ),
        full_address: raw::text(
            display.and_then(|d| d.full_address.as_ref()),
            "address.display.fullAddress",
        ),

        property_type: raw::text(
            source.property_type.as_ref().and_then(|p| p.id.as_ref()),
            "propertyType.id",
        ),
        prices: build_prices(source.price.as_ref()),

        bedrooms: raw::count(
            features
                .and_then(|f| f.bedrooms.as_ref())
                .and_then(|b| b.value.as_ref()),
            "generalFeatures.bedrooms.value",
        ),
        bathrooms: raw::count(
            features
                .and_then(|f| f.bathrooms.as_ref())
                .and_then(|b| b.value.as_ref()),
            "generalFeatures.bathrooms.value",
        ),
        parking_spaces: raw::count(
            features
                .and_then(|f| f.parking_spaces.as_ref())
                .and_then(|p| p.value.as_ref()),
            "generalFeatures.parkingSpaces.value",
        ),

        building_size: raw::text(
            building.and_then(|b| b.display_value.as_ref()),
            "propertySizes.building.displayValue",
        ),
        building_size_unit: raw::text(
            building
                .and_then(|b| b.size_unit.as_ref())
                .and_then(|u| u.display_value.as_ref()),
            "propertySizes.building.sizeUnit.displayValue",
        ),
        land_size: raw::text(
            land.and_then(|l| l.display_value.as_ref()),
            "propertySizes.land.displayValue",
        ),
        land_size_unit: raw::text(
            land.and_then(|l| l.size_unit.as_ref())
                .and_then(|u| u.display_value.as_ref()),
            "propertySizes.land.sizeUnit.displayValue",
        ),

        listing_company_id: raw::text(company.and_then(|c| c.id.as_ref()), "listingCompany.id"),
        listing_company_name: raw::text(
            company.and_then(|c| c.name.as_ref()),
            "listingCompany.name",
        ),
        listing_company_phone: parse_phone(
            raw::text(
                company.and_then(|c| c.business_phone.as_ref()),
                "listingCompany.businessPhone",
            )
            .as_deref(),
        ),

        auction_date: raw::text(
            source
                .auction
                .as_ref()
                .and_then(|a| a.date_time.as_ref())
                .and_then(|d| d.value.as_ref()),
            "auction.dateTime.value",
        ),
        sold_date: raw::text(
            source.date_sold.as_ref().and_then(|d| d.display.as_ref()),
            "dateSold.display",
        ),
        description: parse_description(
            raw::text(source.description.as_ref(), "description").as_deref(),
        ),

        listers: source.listers.iter().map(flatten_lister).collect(),
        raw: stripped,
    })
}

/// Flattens one entry of a listing's `listers` array.
pub fn map_lister(raw: &Value) -> Result<Lister, MappingError> {
    if !raw.is_object() {
        return Err(MappingError::NotAnObject {
            found: json_type_name(raw),
        });
    }

    let source: RawLister = serde_json::from_value(strip_nulls(raw.clone()))?;
    Ok(flatten_lister(&source))
}

fn flatten_lister(lister: &RawLister) -> Lister {
    Lister {
        id: raw::text(lister.id.as_ref(), "listers.id"),
        name: raw::text(lister.name.as_ref(), "listers.name"),
        agent_id: raw::text(lister.agent_id.as_ref(), "listers.agentId"),
        job_title: raw::text(lister.job_title.as_ref(), "listers.jobTitle"),
        url: raw::text(
            lister
                .links
                .as_ref()
                .and_then(|l| l.canonical.as_ref())
                .and_then(|c| c.href.as_ref()),
            "listers._links.canonical.href",
        ),
        phone: parse_phone(
            raw::text(
                lister.preferred_phone_number.as_ref(),
                "listers.preferredPhoneNumber",
            )
            .as_deref(),
        ),
        email: raw::text(lister.email.as_ref(), "listers.email"),
    }
}

/// Both categories start empty; the one named by `price.__typename`
/// gets the display text and its parsed value.
pub fn build_prices(price: Option<&RawPrice>) -> Prices {
    let mut prices = Prices::default();

    let text =
        raw::text(price.and_then(|p| p.display.as_ref()), "price.display").unwrap_or_default();
    let Some(typename) = raw::text(price.and_then(|p| p.typename.as_ref()), "price.__typename")
    else {
        debug!("listing has no price category, leaving prices empty");
        return prices;
    };

    let Some(category) = PriceCategory::from_typename(&typename) else {
        debug!(%typename, "unknown price category, leaving prices empty");
        return prices;
    };

    let value = parse_price_text(&text);
    if value.is_none() {
        debug!(%text, "price text has no dollar amount");
    }

    prices.set(category, PriceInfo { text, value });
    prices
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prices_of(price: Value) -> Prices {
        let price: RawPrice = serde_json::from_value(price).unwrap();
        build_prices(Some(&price))
    }

    #[test]
    fn test_build_prices_fills_named_category() {
        let prices = prices_of(json!({ "display": "$500,000", "__typename": "BuyPrice" }));

        assert_eq!(prices.buy.text, "$500,000");
        assert_eq!(prices.buy.value, Some(500000));
        assert_eq!(prices.sold, PriceInfo::default());
    }

    #[test]
    fn test_build_prices_sold_without_amount() {
        let prices = prices_of(json!({ "display": "Contact Agent", "__typename": "SoldPrice" }));

        assert_eq!(prices.buy, PriceInfo::default());
        assert_eq!(prices.sold.text, "Contact Agent");
        assert_eq!(prices.sold.value, None);
    }

    #[test]
    fn test_build_prices_missing_or_unknown_category() {
        assert_eq!(build_prices(None), Prices::default());
        assert_eq!(prices_of(json!({ "display": "$400 per week" })), Prices::default());
        assert_eq!(
            prices_of(json!({ "display": "$400 pw", "__typename": "RentPrice" })),
            Prices::default()
        );
    }

    #[test]
    fn test_build_prices_missing_display_keeps_empty_text() {
        let prices = prices_of(json!({ "__typename": "BuyPrice" }));
        assert_eq!(prices.buy, PriceInfo { text: String::new(), value: None });
    }

    #[test]
    fn test_map_lister_strips_nulls_and_phone_spaces() {
        let lister = json!({
            "id": "a1",
            "name": "Sam Lee",
            "agentId": null,
            "jobTitle": "Sales Agent",
            "_links": { "canonical": { "href": "https://example.com/agent/sam-lee" } },
            "preferredPhoneNumber": "0412 345 678",
            "email": null,
        });

        let mapped = map_lister(&lister).unwrap();

        assert_eq!(mapped.id.as_deref(), Some("a1"));
        assert_eq!(mapped.agent_id, None);
        assert_eq!(mapped.url.as_deref(), Some("https://example.com/agent/sam-lee"));
        assert_eq!(mapped.phone.as_deref(), Some("0412345678"));
        assert_eq!(mapped.email, None);
    }

    #[test]
    fn test_lister_with_odd_leaf_types_still_maps() {
        let lister = json!({ "name": { "first": "Sam" }, "email": false, "jobTitle": "Agent" });
        let mapped = map_lister(&lister).unwrap();

        assert_eq!(mapped.name, None);
        assert_eq!(mapped.email, None);
        assert_eq!(mapped.job_title.as_deref(), Some("Agent"));
    }

    #[test]
    fn test_null_lister_entry_is_shape_error() {
        let listing = json!({ "listers": [ null ] });
        assert!(matches!(
            map_listing(&listing),
            Err(MappingError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_non_array_listers_is_shape_error() {
        let listing = json!({ "listers": { "id": "1" } });
        assert!(matches!(
            map_listing(&listing),
            Err(MappingError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_non_object_input_is_rejected() {
        assert_eq!(
            map_listing(&json!([1, 2])),
            Err(MappingError::NotAnObject { found: "an array" })
        );
        assert_eq!(
            map_lister(&json!("Sam Lee")),
            Err(MappingError::NotAnObject { found: "a string" })
        );
    }
}
