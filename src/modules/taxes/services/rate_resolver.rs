use std::collections::HashMap;
use std::fmt;

use crate::modules::customers::CustomerProfile;
use crate::modules::orders::OrderItem;
use crate::modules::zones::{TaxRate, TaxZone};

/// A resolver's decision for one zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateResolution<'z> {
    /// Tax this order item at the given rate of the zone
    Rate(&'z TaxRate),
    /// The zone matched, but the order item is not taxed in it
    NoApplicableRate,
}

/// Picks the rate of a zone that applies to an order item.
///
/// Returning `None` means "no opinion": the next resolver in the chain
/// is asked.
pub trait TaxRateResolver: Send + Sync + fmt::Debug {
    fn resolve<'z>(
        &self,
        zone: &'z TaxZone,
        order_item: &OrderItem,
        customer_profile: &CustomerProfile,
    ) -> Option<RateResolution<'z>>;
}

/// Always answers with the zone's default rate
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTaxRateResolver;

impl TaxRateResolver for DefaultTaxRateResolver {
    fn resolve<'z>(
        &self,
        zone: &'z TaxZone,
        _order_item: &OrderItem,
        _customer_profile: &CustomerProfile,
    ) -> Option<RateResolution<'z>> {
        Some(RateResolution::Rate(zone.default_rate()))
    }
}

/// Maps order item types to a rate id, e.g. `"e_book" => "reduced"`.
///
/// Zones without the mapped rate are left to the next resolver.
#[derive(Debug, Clone, Default)]
pub struct OrderItemTypeRateResolver {
    rates: HashMap<String, String>,
}

impl OrderItemTypeRateResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map(mut self, order_item_type: impl Into<String>, rate_id: impl Into<String>) -> Self {
        self.rates.insert(order_item_type.into(), rate_id.into());
        self
    }
}

impl TaxRateResolver for OrderItemTypeRateResolver {
    fn resolve<'z>(
        &self,
        zone: &'z TaxZone,
        order_item: &OrderItem,
        _customer_profile: &CustomerProfile,
    ) -> Option<RateResolution<'z>> {
        let rate_id = self.rates.get(&order_item.order_item_type)?;
        zone.rate(rate_id).ok().map(RateResolution::Rate)
    }
}

/// Runs resolvers in order; the first answer wins.
///
/// The default-rate resolver always runs last, so a chain never returns
/// `None` for a valid zone.
#[derive(Debug, Default)]
pub struct ChainTaxRateResolver {
    resolvers: Vec<Box<dyn TaxRateResolver>>,
    fallback: DefaultTaxRateResolver,
}

impl ChainTaxRateResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver after previously added ones, ahead of the default
    pub fn add_resolver(&mut self, resolver: Box<dyn TaxRateResolver>) {
        self.resolvers.push(resolver);
    }
}

impl TaxRateResolver for ChainTaxRateResolver {
    fn resolve<'z>(
        &self,
        zone: &'z TaxZone,
        order_item: &OrderItem,
        customer_profile: &CustomerProfile,
    ) -> Option<RateResolution<'z>> {
        self.resolvers
            .iter()
            .find_map(|resolver| resolver.resolve(zone, order_item, customer_profile))
            .or_else(|| self.fallback.resolve(zone, order_item, customer_profile))
    }
}
