//! Integration tests for user-defined ("custom") tax types
//!
//! Covers YAML configuration, rounding and display options, rate resolvers,
//! customer profile alter hooks and the promotion-adjusted tax base.

#[path = "../helpers/mod.rs"]
mod helpers;

use commerce_tax::config::TaxSettings;
use commerce_tax::core::{Currency, Price, TaxError};
use commerce_tax::customers::{Address, CustomerProfile, CustomerProfileAlter, Profile};
use commerce_tax::orders::{Adjustment, AdjustmentType, Order, OrderItem, TaxableType};
use commerce_tax::taxes::plugins::custom;
use commerce_tax::taxes::services::{OrderItemTypeRateResolver, RateResolution, TaxRateResolver};
use commerce_tax::taxes::{TaxType, TaxTypeConfig, TaxTypeRegistry};
use commerce_tax::zones::TaxZone;
use helpers::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const NEW_YORK: &str = r#"
tax_types:
  - id: us_ny
    label: New York sales tax
    plugin: custom
    configuration:
      display_label: sales_tax
      territories:
        - country_code: US
          administrative_area: NY
      rates:
        - id: standard
          label: Standard
          percentage: "0.04"
          default: true
        - id: exempt
          label: Exempt
          percentage: "0"
"#;

fn new_york_config() -> TaxTypeConfig {
    TaxSettings::from_yaml_str(NEW_YORK).unwrap().tax_types[0].clone()
}

fn usd(number: Decimal) -> Price {
    Price::new(number, Currency::USD)
}

fn new_york() -> Address {
    Address::new("US").with_administrative_area("NY")
}

fn new_york_order(item: OrderItem) -> Order {
    order(
        store(new_york(), Currency::USD, false),
        item,
        Profile::with_address(new_york()),
        "2024-05-01",
    )
}

fn typed_item(order_item_type: &str, quantity: Decimal, unit_price: Price) -> OrderItem {
    let mut item = item("item-1", quantity, unit_price, TaxableType::PhysicalGoods);
    item.order_item_type = order_item_type.to_string();
    item
}

#[test]
fn test_custom_tax_type_from_settings() {
    let settings = TaxSettings::from_yaml_str(NEW_YORK).unwrap();
    let tax_types = TaxTypeRegistry::with_builtin().build_all(&settings).unwrap();
    assert_eq!(tax_types.len(), 1);

    let mut order = new_york_order(typed_item("default", dec!(2), usd(dec!(25.00))));
    assert!(tax_types[0].applies(&order));
    tax_types[0].apply(&mut order).unwrap();

    assert_eq!(
        tax_adjustments(&order),
        vec![("us_ny|default|standard".to_string(), dec!(2.00))]
    );
    assert_eq!(order.items[0].adjustments[0].label, "Sales tax");
}

#[test]
fn test_promotions_reduce_the_tax_base() {
    let mut item = typed_item("default", dec!(2), usd(dec!(25.00)));
    item.add_adjustment(
        Adjustment::new(AdjustmentType::Promotion, "10 off", usd(dec!(-10.00)))
            .with_source_id("promotion-1"),
    );
    let mut order = new_york_order(item);
    custom::create(&new_york_config())
        .unwrap()
        .apply(&mut order)
        .unwrap();

    assert_eq!(
        tax_adjustments(&order),
        vec![("us_ny|default|standard".to_string(), dec!(1.60))]
    );
}

#[test]
fn test_rounding_disabled() {
    let mut config = new_york_config();
    config.configuration.round = Some(false);
    let mut order = new_york_order(typed_item("default", dec!(1), usd(dec!(0.99))));
    custom::create(&config).unwrap().apply(&mut order).unwrap();

    assert_eq!(
        tax_adjustments(&order),
        vec![("us_ny|default|standard".to_string(), dec!(0.0396))]
    );
}

#[test]
fn test_item_type_rate_resolver() {
    let tax_type = custom::create(&new_york_config())
        .unwrap()
        .with_rate_resolver(Box::new(
            OrderItemTypeRateResolver::new().map("clothing", "exempt"),
        ));

    let mut clothing = new_york_order(typed_item("clothing", dec!(1), usd(dec!(50.00))));
    tax_type.apply(&mut clothing).unwrap();
    assert_eq!(
        tax_adjustments(&clothing),
        vec![("us_ny|default|exempt".to_string(), dec!(0))]
    );

    let mut other = new_york_order(typed_item("default", dec!(1), usd(dec!(50.00))));
    tax_type.apply(&mut other).unwrap();
    assert_eq!(
        tax_adjustments(&other),
        vec![("us_ny|default|standard".to_string(), dec!(2.00))]
    );
}

#[derive(Debug)]
struct NoTaxOnGiftCards;

impl TaxRateResolver for NoTaxOnGiftCards {
    fn resolve<'z>(
        &self,
        _zone: &'z TaxZone,
        order_item: &OrderItem,
        _customer_profile: &CustomerProfile,
    ) -> Option<RateResolution<'z>> {
        (order_item.order_item_type == "gift_card").then_some(RateResolution::NoApplicableRate)
    }
}

#[test]
fn test_resolver_can_decline_taxation() {
    let tax_type = custom::create(&new_york_config())
        .unwrap()
        .with_rate_resolver(Box::new(NoTaxOnGiftCards));

    let mut order = new_york_order(typed_item("gift_card", dec!(1), usd(dec!(50.00))));
    tax_type.apply(&mut order).unwrap();
    assert!(tax_adjustments(&order).is_empty());
}

/// Gifts are taxed where the recipient lives
#[derive(Debug)]
struct ShipGiftsToNewJersey;

impl CustomerProfileAlter for ShipGiftsToNewJersey {
    fn alter(&self, profile: &mut CustomerProfile, order_item: &OrderItem) {
        if order_item.order_item_type == "gift" {
            profile.address = Address::new("US").with_administrative_area("NJ");
        }
    }
}

#[test]
fn test_profile_alter_changes_item_destination() {
    let tax_type = custom::create(&new_york_config())
        .unwrap()
        .with_profile_alter(Box::new(ShipGiftsToNewJersey));

    let mut order = new_york_order(typed_item("gift", dec!(1), usd(dec!(50.00))));
    order.items.push(typed_item("default", dec!(1), usd(dec!(50.00))));
    tax_type.apply(&mut order).unwrap();

    assert!(order.items[0].adjustments.is_empty());
    assert_eq!(order.items[1].adjustments.len(), 1);
    assert_eq!(order.items[1].adjustments[0].amount.number, dec!(2.00));
}

#[test]
fn test_display_inclusive_custom_tax_converts_prices() {
    let mut config = new_york_config();
    config.configuration.display_inclusive = Some(true);
    let tax_type = custom::create(&config).unwrap();
    assert!(tax_type.is_display_inclusive());

    let mut order = new_york_order(typed_item("default", dec!(1), usd(dec!(50.00))));
    tax_type.apply(&mut order).unwrap();

    assert_eq!(order.items[0].unit_price.number, dec!(52.00));
    assert_eq!(order.items[0].adjustments[0].amount.number, dec!(2.00));
    assert!(order.items[0].adjustments[0].included);
}

#[test]
fn test_invalid_custom_configurations() {
    let mut no_rates = new_york_config();
    no_rates.configuration.rates.clear();
    assert!(matches!(
        custom::create(&no_rates),
        Err(TaxError::Configuration(_))
    ));

    let mut no_territories = new_york_config();
    no_territories.configuration.territories.clear();
    assert!(custom::create(&no_territories).is_err());

    let mut two_defaults = new_york_config();
    for rate in two_defaults.configuration.rates.iter_mut() {
        rate.default = true;
    }
    assert!(custom::create(&two_defaults).is_err());

    let mut too_high = new_york_config();
    too_high.configuration.rates[0].percentage = dec!(1.5);
    assert!(custom::create(&too_high).is_err());
}

#[test]
fn test_rates_summary_for_display() {
    let tax_type = custom::create(&new_york_config()).unwrap();
    let zone = tax_type.zone(custom::ZONE_ID).unwrap();
    let summary = zone.rates_summary(day("2024-05-01"));

    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].rate_id, "standard");
    assert_eq!(summary[0].percentage, Some(dec!(0.04)));
    assert!(summary[0].default);
    assert_eq!(summary[1].percentage, Some(dec!(0)));

    assert!(zone.rates_summary(day("1999-12-31"))[0].percentage.is_none());
}
