use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::modules::customers::{CustomerProfile, TaxNumber, TaxNumberValidator};
use crate::modules::orders::{OrderItem, Store};
use crate::modules::zones::TaxZone;

/// First year digital goods are taxed at the customer's location in the EU
pub const EU_DIGITAL_DESTINATION_YEAR: i32 = 2015;

/// Which zones apply to an order item, given who sells to whom.
#[derive(Debug)]
pub enum SourcingPolicy {
    /// Zones containing the customer address
    Default,
    /// Like `Default`, but only ever for Canadian customers
    CanadianRestricted,
    /// EU VAT place-of-supply rules
    EuVat {
        /// Zero-rated zone used for cross-border B2B sales
        intra_community_supply: TaxZone,
        tax_numbers: Box<dyn TaxNumberValidator>,
    },
}

/// What the policy needs to know about the sale
///
/// Zones are borrowed from the tax type (`'z`), the rest from the order
/// being processed (`'o`), so resolved zones outlive the order borrow.
pub struct SourcingContext<'z, 'o> {
    pub zones: &'z [TaxZone],
    pub order_item: &'o OrderItem,
    pub store: &'o Store,
    pub customer_profile: &'o CustomerProfile,
    pub calculation_date: NaiveDate,
}

impl<'z, 'o> SourcingContext<'z, 'o> {
    fn customer_zones(&self) -> Vec<&'z TaxZone> {
        let address = &self.customer_profile.address;
        self.zones.iter().filter(|z| z.matches(address)).collect()
    }

    fn store_zones(&self) -> Vec<&'z TaxZone> {
        let address = &self.store.address;
        self.zones.iter().filter(|z| z.matches(address)).collect()
    }
}

/// Whether the store is registered to collect tax in the zone
pub fn is_registered_in(store: &Store, zone: &TaxZone) -> bool {
    store
        .registration_addresses()
        .any(|address| zone.matches(&address))
}

impl SourcingPolicy {
    pub fn resolve_zones<'z>(&'z self, context: &SourcingContext<'z, '_>) -> Vec<&'z TaxZone> {
        match self {
            SourcingPolicy::Default => context.customer_zones(),
            SourcingPolicy::CanadianRestricted => {
                let country = context.customer_profile.address.country_code.trim();
                if !country.eq_ignore_ascii_case("CA") {
                    debug!(country, "Customer outside Canada, no Canadian sales tax");
                    return Vec::new();
                }
                context.customer_zones()
            }
            SourcingPolicy::EuVat {
                intra_community_supply,
                tax_numbers,
            } => resolve_eu_zones(context, intra_community_supply, tax_numbers.as_ref()),
        }
    }
}

fn valid_tax_number<'p>(
    profile: &'p CustomerProfile,
    validator: &dyn TaxNumberValidator,
) -> Option<&'p TaxNumber> {
    let tax_number = profile.tax_number.as_ref()?;
    if tax_number.number_type != validator.number_type() {
        debug!(
            number_type = %tax_number.number_type,
            expected = validator.number_type(),
            "Customer tax number of another scheme, treating the sale as B2C"
        );
        return None;
    }
    if validator.is_valid(tax_number) {
        Some(tax_number)
    } else {
        warn!(
            number_type = %tax_number.number_type,
            "Customer tax number rejected, treating the sale as B2C"
        );
        None
    }
}

fn resolve_eu_zones<'z>(
    context: &SourcingContext<'z, '_>,
    intra_community_supply: &'z TaxZone,
    validator: &dyn TaxNumberValidator,
) -> Vec<&'z TaxZone> {
    let customer_zones = context.customer_zones();
    if customer_zones.is_empty() {
        debug!("Customer outside the EU, no EU VAT");
        return Vec::new();
    }

    let store_zones = context.store_zones();
    let store_registered = context
        .zones
        .iter()
        .any(|zone| is_registered_in(context.store, zone));
    let has_tax_number = valid_tax_number(context.customer_profile, validator).is_some();
    let is_digital = context.order_item.is_digital()
        && context.calculation_date.year() >= EU_DIGITAL_DESTINATION_YEAR;
    let cross_border = !context
        .customer_profile
        .address
        .country_code
        .trim()
        .eq_ignore_ascii_case(context.store.address.country_code.trim());

    if store_zones.is_empty() && store_registered {
        // Non-EU store registered for EU VAT: only digital goods are taxed.
        if !is_digital {
            return Vec::new();
        }
        if has_tax_number {
            return vec![intra_community_supply];
        }
        return customer_zones;
    }

    if has_tax_number && cross_border {
        debug!("Cross-border B2B sale, intra-community supply");
        return vec![intra_community_supply];
    }

    if is_digital {
        return customer_zones;
    }

    // Physical goods: origin principle, unless the store registered in the
    // customer's zone after passing the distance selling threshold.
    let registered_in_customer_zone = customer_zones
        .first()
        .is_some_and(|zone| is_registered_in(context.store, zone));
    if registered_in_customer_zone {
        debug!("Store registered in the customer zone, destination principle");
        return customer_zones;
    }
    store_zones
}
