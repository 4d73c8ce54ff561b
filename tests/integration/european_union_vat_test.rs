//! Integration tests for EU VAT place-of-supply rules
//!
//! Covers origin vs destination taxation, intra-community B2B supplies,
//! digital goods sourcing, registrations and non-EU sellers.

#[path = "../helpers/mod.rs"]
mod helpers;

use commerce_tax::core::Currency;
use commerce_tax::customers::{Address, CustomerProfile, Profile, TaxNumber, VerificationState};
use commerce_tax::taxes::{PluginConfiguration, TaxType, TaxTypeConfig, TaxTypeRegistry};
use helpers::*;
use rust_decimal_macros::dec;

fn eu_vat() -> Box<dyn TaxType> {
    builtin("eu_vat", "european_union_vat")
}

fn german_customer() -> Profile {
    Profile::with_address(Address::new("DE").with_postal_code("10115"))
}

fn resolved_zone_ids(
    tax_type: &dyn TaxType,
    store: &commerce_tax::orders::Store,
    item: &commerce_tax::orders::OrderItem,
    profile: &CustomerProfile,
    placed: &str,
) -> Vec<String> {
    tax_type
        .as_local()
        .unwrap()
        .resolve_zones(item, store, day(placed), profile)
        .into_iter()
        .map(|zone| zone.id().to_string())
        .collect()
}

#[test]
fn test_digital_goods_taxed_at_customer_location() {
    let mut order = order(
        french_store(),
        digital(eur(dec!(10.00))),
        german_customer(),
        "2019-06-01",
    );
    let tax_type = eu_vat();

    assert!(tax_type.applies(&order));
    tax_type.apply(&mut order).unwrap();

    assert_eq!(
        tax_adjustments(&order),
        vec![("eu_vat|de|standard".to_string(), dec!(1.60))]
    );
    let adjustment = &order.items[0].adjustments[0];
    assert_eq!(adjustment.percentage, Some(dec!(0.19)));
    assert_eq!(adjustment.label, "VAT");
    assert!(adjustment.included);
}

#[test]
fn test_percentage_follows_calculation_date() {
    let mut order = order(
        french_store(),
        digital(eur(dec!(10.00))),
        german_customer(),
        "2020-08-01",
    );
    eu_vat().apply(&mut order).unwrap();

    assert_eq!(
        tax_adjustments(&order),
        vec![("eu_vat|de|standard".to_string(), dec!(1.38))]
    );
}

#[test]
fn test_physical_goods_use_origin_principle() {
    let mut order = order(
        french_store(),
        physical(eur(dec!(10.00))),
        german_customer(),
        "2019-06-01",
    );
    eu_vat().apply(&mut order).unwrap();

    assert_eq!(
        tax_adjustments(&order),
        vec![("eu_vat|fr|standard".to_string(), dec!(1.67))]
    );
}

#[test]
fn test_digital_goods_before_2015_use_origin_principle() {
    let tax_type = eu_vat();
    let profile = CustomerProfile::new(Address::new("DE"));

    assert_eq!(
        resolved_zone_ids(
            tax_type.as_ref(),
            &french_store(),
            &digital(eur(dec!(10))),
            &profile,
            "2014-06-01"
        ),
        vec!["fr"]
    );
}

#[test]
fn test_cross_border_b2b_is_intra_community_supply() {
    let customer = german_customer().with_tax_number(verified_vat_number("DE 123 456 789"));
    let mut order = order(
        french_store(),
        physical(eur(dec!(10.00))),
        customer,
        "2019-06-01",
    );
    eu_vat().apply(&mut order).unwrap();

    assert_eq!(
        tax_adjustments(&order),
        vec![("eu_vat|ic|zero".to_string(), dec!(0))]
    );
}

#[test]
fn test_domestic_b2b_charges_local_vat() {
    let tax_type = eu_vat();
    let profile = CustomerProfile::new(Address::new("FR"))
        .with_tax_number(verified_vat_number("FR40303265045"));

    assert_eq!(
        resolved_zone_ids(
            tax_type.as_ref(),
            &french_store(),
            &physical(eur(dec!(10))),
            &profile,
            "2019-06-01"
        ),
        vec!["fr"]
    );
}

#[test]
fn test_rejected_tax_numbers_are_treated_as_b2c() {
    let tax_type = eu_vat();
    let store = french_store();
    let item = physical(eur(dec!(10)));

    let malformed = CustomerProfile::new(Address::new("DE"))
        .with_tax_number(verified_vat_number("DE123"));
    let failed = CustomerProfile::new(Address::new("DE")).with_tax_number(
        TaxNumber::new("european_union_vat", "DE123456789").verified(VerificationState::Failure),
    );
    let unverified = CustomerProfile::new(Address::new("DE"))
        .with_tax_number(TaxNumber::new("european_union_vat", "DE123456789"));
    let other_scheme = CustomerProfile::new(Address::new("DE"))
        .with_tax_number(TaxNumber::new("other", "DE123456789").verified(VerificationState::Success));

    for profile in [&malformed, &failed, &unverified, &other_scheme] {
        assert_eq!(
            resolved_zone_ids(tax_type.as_ref(), &store, &item, profile, "2019-06-01"),
            vec!["fr"]
        );
    }
}

#[test]
fn test_unverified_numbers_accepted_when_configured() {
    let config = TaxTypeConfig::new("eu_vat", "EU VAT", "european_union_vat").with_configuration(
        PluginConfiguration {
            allow_unverified_tax_numbers: true,
            ..PluginConfiguration::default()
        },
    );
    let tax_type = TaxTypeRegistry::with_builtin().create(&config).unwrap();
    let profile = CustomerProfile::new(Address::new("DE"))
        .with_tax_number(TaxNumber::new("european_union_vat", "DE123456789"));

    assert_eq!(
        resolved_zone_ids(
            tax_type.as_ref(),
            &french_store(),
            &physical(eur(dec!(10))),
            &profile,
            "2019-06-01"
        ),
        vec!["ic"]
    );
}

#[test]
fn test_registration_switches_to_destination_principle() {
    let store = french_store().with_tax_registrations(["DE"]);
    let mut order = order(store, physical(eur(dec!(10.00))), german_customer(), "2019-06-01");
    eu_vat().apply(&mut order).unwrap();

    assert_eq!(
        tax_adjustments(&order),
        vec![("eu_vat|de|standard".to_string(), dec!(1.60))]
    );
}

#[test]
fn test_non_eu_store_registered_for_eu_vat() {
    let tax_type = eu_vat();
    let store = store(Address::new("US"), Currency::EUR, false).with_tax_registrations(["DE"]);
    let consumer = CustomerProfile::new(Address::new("DE"));
    let business =
        CustomerProfile::new(Address::new("DE")).with_tax_number(verified_vat_number("DE123456789"));

    let physical_item = physical(eur(dec!(10)));
    let digital_item = digital(eur(dec!(10)));
    assert!(
        resolved_zone_ids(tax_type.as_ref(), &store, &physical_item, &consumer, "2019-06-01")
            .is_empty()
    );
    assert_eq!(
        resolved_zone_ids(tax_type.as_ref(), &store, &digital_item, &consumer, "2019-06-01"),
        vec!["de"]
    );
    assert_eq!(
        resolved_zone_ids(tax_type.as_ref(), &store, &digital_item, &business, "2019-06-01"),
        vec!["ic"]
    );
}

#[test]
fn test_non_eu_store_prices_are_converted_to_vat_inclusive() {
    let store = store(Address::new("US"), Currency::EUR, false).with_tax_registrations(["DE"]);
    let mut order = order(store, digital(eur(dec!(10.00))), german_customer(), "2019-06-01");
    let tax_type = eu_vat();

    assert!(tax_type.applies(&order));
    tax_type.apply(&mut order).unwrap();

    assert_eq!(order.items[0].unit_price.number, dec!(11.90));
    assert_eq!(
        tax_adjustments(&order),
        vec![("eu_vat|de|standard".to_string(), dec!(1.90))]
    );
}

#[test]
fn test_customers_outside_the_eu_vat_area_are_not_taxed() {
    let tax_type = eu_vat();
    let store = french_store();
    let item = digital(eur(dec!(10)));

    let american = CustomerProfile::new(Address::new("US"));
    let heligoland = CustomerProfile::new(Address::new("DE").with_postal_code("27498"));
    let canary_islands = CustomerProfile::new(Address::new("ES").with_postal_code("35001"));

    for profile in [&american, &heligoland, &canary_islands] {
        assert!(
            resolved_zone_ids(tax_type.as_ref(), &store, &item, profile, "2019-06-01").is_empty()
        );
    }
}

#[test]
fn test_store_outside_eu_without_registration_does_not_apply() {
    let store = store(Address::new("US"), Currency::USD, false);
    let order = order(
        store,
        digital(commerce_tax::core::Price::new(dec!(10), Currency::USD)),
        german_customer(),
        "2019-06-01",
    );
    assert!(!eu_vat().applies(&order));
}
