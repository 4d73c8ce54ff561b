use std::fmt;
use tracing::debug;

use crate::modules::customers::models::CustomerProfile;
use crate::modules::orders::{Order, OrderItem};

/// Hook allowed to rewrite the customer profile for a single order item,
/// e.g. to tax a gift order item at the recipient's address.
pub trait CustomerProfileAlter: Send + Sync + fmt::Debug {
    fn alter(&self, profile: &mut CustomerProfile, order_item: &OrderItem);
}

/// Builds the transient customer profile tax is calculated against
pub struct CustomerProfileResolver;

impl CustomerProfileResolver {
    /// Build the profile for an order
    ///
    /// Address priority: shipping, billing, then the store address when the
    /// tax type is display-inclusive. The tax number only ever comes from the
    /// billing profile. Returns `None` when no address is available yet.
    pub fn build(order: &Order, fallback_to_store: bool) -> Option<CustomerProfile> {
        let profiles = order.collect_profiles();
        let address = [profiles.shipping.as_ref(), profiles.billing.as_ref()]
            .into_iter()
            .flatten()
            .find_map(|profile| profile.usable_address())
            .cloned()
            .or_else(|| fallback_to_store.then(|| order.store().address.clone()));

        let Some(address) = address else {
            debug!(order_id = %order.id, "No customer address available, order not yet taxable");
            return None;
        };

        let tax_number = profiles
            .billing
            .as_ref()
            .and_then(|billing| billing.tax_number.clone());

        Some(CustomerProfile {
            address,
            tax_number,
        })
    }

    /// Profile for one order item after every alter hook ran
    pub fn for_item(
        base: &CustomerProfile,
        order_item: &OrderItem,
        alters: &[Box<dyn CustomerProfileAlter>],
    ) -> CustomerProfile {
        let mut profile = base.clone();
        for alter in alters {
            alter.alter(&mut profile, order_item);
        }
        profile
    }
}
