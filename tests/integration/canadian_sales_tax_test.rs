//! Integration tests for Canadian GST/HST/PST/QST
//!
//! Canadian sales tax is destination based and only ever applies to
//! customers in Canada; federal and provincial taxes stack.

#[path = "../helpers/mod.rs"]
mod helpers;

use commerce_tax::core::Currency;
use commerce_tax::customers::{Address, Profile};
use commerce_tax::orders::{Order, Store};
use commerce_tax::taxes::TaxType;
use helpers::*;
use rust_decimal_macros::dec;

fn canadian_sales_tax() -> Box<dyn TaxType> {
    builtin("canada", "canadian_sales_tax")
}

fn quebec_store() -> Store {
    store(
        Address::new("CA").with_administrative_area("QC"),
        Currency::CAD,
        false,
    )
}

fn customer_in(province: &str) -> Profile {
    Profile::with_address(Address::new("CA").with_administrative_area(province))
}

fn taxed_order(province: &str, placed: &str) -> Order {
    let mut order = order(
        quebec_store(),
        physical(cad(dec!(100.00))),
        customer_in(province),
        placed,
    );
    let tax_type = canadian_sales_tax();
    assert!(tax_type.applies(&order));
    tax_type.apply(&mut order).unwrap();
    order
}

#[test]
fn test_quebec_customer_pays_gst_and_qst() {
    let order = taxed_order("QC", "2020-01-01");

    assert_eq!(
        tax_adjustments(&order),
        vec![
            ("canada|ca|gst".to_string(), dec!(5.00)),
            ("canada|ca_qc|qst".to_string(), dec!(9.98)),
        ]
    );
    let labels: Vec<_> = order.items[0]
        .adjustments
        .iter()
        .map(|adjustment| adjustment.label.as_str())
        .collect();
    assert_eq!(labels, vec!["GST", "QST"]);
    assert!(order.items[0].adjustments.iter().all(|a| !a.included));
    // Sales tax is added on top; the unit price is untouched.
    assert_eq!(order.items[0].unit_price.number, dec!(100.00));
}

#[test]
fn test_harmonized_provinces_pay_hst_only() {
    let order = taxed_order("ON", "2020-01-01");
    assert_eq!(
        tax_adjustments(&order),
        vec![("canada|ca_on|hst".to_string(), dec!(13.00))]
    );
}

#[test]
fn test_gst_only_territory() {
    let order = taxed_order("AB", "2020-01-01");
    assert_eq!(
        tax_adjustments(&order),
        vec![("canada|ca|gst".to_string(), dec!(5.00))]
    );
}

#[test]
fn test_rate_change_takes_effect_on_start_date() {
    let before = taxed_order("NS", "2025-03-31");
    let after = taxed_order("NS", "2025-04-01");

    assert_eq!(
        tax_adjustments(&before),
        vec![("canada|ca_ns|hst".to_string(), dec!(15.00))]
    );
    assert_eq!(
        tax_adjustments(&after),
        vec![("canada|ca_ns|hst".to_string(), dec!(14.00))]
    );
}

#[test]
fn test_customers_outside_canada_are_not_taxed() {
    let mut order = order(
        quebec_store(),
        physical(cad(dec!(100.00))),
        Profile::with_address(Address::new("US").with_administrative_area("NY")),
        "2020-01-01",
    );
    canadian_sales_tax().apply(&mut order).unwrap();
    assert!(tax_adjustments(&order).is_empty());
}

#[test]
fn test_customer_without_province_matches_no_zone() {
    let mut order = order(
        quebec_store(),
        physical(cad(dec!(100.00))),
        Profile::with_address(Address::new("CA")),
        "2020-01-01",
    );
    canadian_sales_tax().apply(&mut order).unwrap();
    assert!(tax_adjustments(&order).is_empty());
}

#[test]
fn test_store_outside_canada_does_not_apply() {
    let order = order(
        store(Address::new("US"), Currency::USD, false),
        physical(cad(dec!(100.00))),
        customer_in("QC"),
        "2020-01-01",
    );
    assert!(!canadian_sales_tax().applies(&order));
}

#[test]
fn test_store_registered_in_a_province_collects_canadian_tax() {
    for registration in ["CA-QC", "ca-qc"] {
        let us_store =
            store(Address::new("US"), Currency::CAD, false).with_tax_registrations([registration]);
        let mut order = order(
            us_store,
            physical(cad(dec!(100.00))),
            customer_in("QC"),
            "2020-01-01",
        );
        let tax_type = canadian_sales_tax();

        assert!(tax_type.applies(&order), "registration {}", registration);
        tax_type.apply(&mut order).unwrap();
        assert_eq!(
            tax_adjustments(&order),
            vec![
                ("canada|ca|gst".to_string(), dec!(5.00)),
                ("canada|ca_qc|qst".to_string(), dec!(9.98)),
            ]
        );
    }
}
