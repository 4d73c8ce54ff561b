// Tests for customer tax number validation
//
// - Every member state format accepts a well-formed number
// - Separators and case do not matter
// - Arbitrary input never panics and never validates without a known prefix

use commerce_tax::customers::services::tax_number_validator::{
    normalize_vat_number, parse_eu_vat_number, EUROPEAN_UNION_VAT,
};
use commerce_tax::customers::{
    EuropeanUnionVatNumberValidator, Profile, TaxNumberValidator, VerificationState,
};
use proptest::prelude::*;

const WELL_FORMED: [&str; 27] = [
    "ATU13585627",
    "BE0411905847",
    "BG175074752",
    "CY10259033P",
    "CZ00177041",
    "DE136695976",
    "DK13585628",
    "EE100931558",
    "EL094014201",
    "ESA28015865",
    "FI20774740",
    "FRXX999999999",
    "HR33392005961",
    "HU12892312",
    "IE6388047V",
    "IT00743110157",
    "LT119511515",
    "LU15027442",
    "LV40003521600",
    "MT11679112",
    "NL004495445B01",
    "PL5260001246",
    "PT501964843",
    "RO18547290",
    "SE556188840401",
    "SI50223054",
    "SK2022749619",
];

#[test]
fn test_member_state_formats() {
    for number in WELL_FORMED {
        assert!(
            parse_eu_vat_number(number).is_some(),
            "{} should be well formed",
            number
        );
    }
}

#[test]
fn test_separators_are_ignored() {
    assert_eq!(normalize_vat_number("de 136-695.976"), "DE136695976");
    assert_eq!(
        parse_eu_vat_number("nl 0044.95445.b01"),
        Some(("NL".to_string(), "004495445B01".to_string()))
    );
}

#[test]
fn test_billing_profile_from_json() {
    let profile: Profile = serde_json::from_str(
        r#"{
            "address": {"country_code": "DE", "postal_code": "10115"},
            "tax_number": {
                "type": "european_union_vat",
                "value": "DE136695976",
                "verification_state": "success"
            }
        }"#,
    )
    .unwrap();

    let tax_number = profile.tax_number.unwrap();
    assert_eq!(tax_number.number_type, EUROPEAN_UNION_VAT);
    assert_eq!(
        tax_number.verification_state,
        Some(VerificationState::Success)
    );
    assert!(EuropeanUnionVatNumberValidator::new(false).is_valid(&tax_number));
}

proptest! {
    #[test]
    fn test_arbitrary_input_never_panics(value in "\\PC{0,20}") {
        let _ = parse_eu_vat_number(&value);
        let _ = normalize_vat_number(&value);
    }

    #[test]
    fn test_unknown_prefixes_never_validate(
        prefix in "(US|CA|GB|CH|NO|GR)",
        body in "[0-9]{8,12}"
    ) {
        let input = format!("{}{}", prefix, body);
        prop_assert!(parse_eu_vat_number(&input).is_none());
    }

    #[test]
    fn test_german_numbers(body in "[0-9]{9}") {
        let plain = format!("DE{}", body);
        let spaced = format!("de {}", body);
        let too_long = format!("DE{}0", body);
        prop_assert!(parse_eu_vat_number(&plain).is_some());
        prop_assert!(parse_eu_vat_number(&spaced).is_some());
        prop_assert!(parse_eu_vat_number(&too_long).is_none());
    }
}
