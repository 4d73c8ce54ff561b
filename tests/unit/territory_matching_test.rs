// Tests for territory and zone matching
//
// - Country, administrative area and postal code filters combine with AND
// - Excluded postal codes win over included ones
// - Numeric ranges only match all-digit postal codes
// - Territories load from YAML with their patterns validated

use commerce_tax::customers::Address;
use commerce_tax::taxes::plugins::{european_union_vat, swiss_vat};
use commerce_tax::zones::{PostalCodePattern, Territory};
use proptest::prelude::*;

fn address(country: &str, postal_code: &str) -> Address {
    Address::new(country).with_postal_code(postal_code)
}

fn zone_ids(zones: &[commerce_tax::zones::TaxZone], address: &Address) -> Vec<String> {
    zones
        .iter()
        .filter(|zone| zone.matches(address))
        .map(|zone| zone.id().to_string())
        .collect()
}

#[test]
fn test_filters_combine() {
    let territory = Territory::country("US")
        .with_administrative_area("CA")
        .including("90000:96199")
        .unwrap()
        .excluding("94100:94199")
        .unwrap();
    let california = |postal_code: &str| {
        Address::new("US")
            .with_administrative_area("CA")
            .with_postal_code(postal_code)
    };

    assert!(territory.matches(&california("90210")));
    assert!(!territory.matches(&california("94105")));
    assert!(!territory.matches(&california("10001")));
    assert!(!territory.matches(&address("US", "90210")));
}

#[test]
fn test_matching_is_case_insensitive() {
    let territory = Territory::country("ca").with_administrative_area("qc");
    assert!(territory.matches(&Address::new("CA").with_administrative_area("QC")));
    assert!(territory.matches(&Address::new("ca").with_administrative_area(" qc ")));

    let pattern = PostalCodePattern::parse("SW1A 1AA").unwrap();
    assert!(pattern.matches("sw1a 1aa"));
}

#[test]
fn test_territories_from_yaml() {
    let territories: Vec<Territory> = serde_yaml::from_str(
        r#"
- country_code: FI
  excluded_postal_codes: "22000:22999"
- country_code: ES
  excluded_postal_codes: "/^(35|38|51|52)[0-9]{3}/"
"#,
    )
    .unwrap();

    assert!(territories[0].matches(&address("FI", "00100")));
    assert!(!territories[0].matches(&address("FI", "22100")));
    assert!(!territories[1].matches(&address("ES", "51001")));

    let invalid: Result<Vec<Territory>, _> =
        serde_yaml::from_str("- { country_code: ES, included_postal_codes: '/[/' }");
    assert!(invalid.is_err());
}

#[test]
fn test_busingen_is_swiss_not_german() {
    let busingen = address("DE", "78266");
    let eu_zones = european_union_vat::build_zones().unwrap();
    let swiss_zones = swiss_vat::build_zones().unwrap();

    assert!(zone_ids(&eu_zones, &busingen).is_empty());
    assert_eq!(zone_ids(&swiss_zones, &busingen), vec!["ch"]);
    assert_eq!(zone_ids(&eu_zones, &address("DE", "78267")), vec!["de"]);
}

#[test]
fn test_monaco_and_overseas_france() {
    let eu_zones = european_union_vat::build_zones().unwrap();
    assert_eq!(zone_ids(&eu_zones, &Address::new("MC")), vec!["fr"]);
    assert!(zone_ids(&eu_zones, &address("FR", "97400")).is_empty());
    assert_eq!(zone_ids(&eu_zones, &address("FR", "75002")), vec!["fr"]);
}

proptest! {
    #[test]
    fn test_range_matches_exactly_its_bounds(
        low in 1000u32..5000u32,
        width in 0u32..1000u32,
        candidate in 0u32..10000u32
    ) {
        let high = low + width;
        let pattern = PostalCodePattern::parse(&format!("{}:{}", low, high)).unwrap();
        let expected = candidate >= low && candidate <= high;
        prop_assert_eq!(pattern.matches(&format!("{:04}", candidate)), expected);
    }

    #[test]
    fn test_excluded_codes_never_match(code in "[0-9]{5}") {
        let territory = Territory::country("DE").excluding(&code).unwrap();
        prop_assert!(!territory.matches(&address("DE", &code)));
    }

    #[test]
    fn test_non_numeric_codes_never_match_ranges(code in "[0-9]{2}[A-Z][0-9]{2}") {
        let pattern = PostalCodePattern::parse("00000:99999").unwrap();
        prop_assert!(!pattern.matches(&code));
    }
}
