use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::debug;

use crate::core::{Result, TaxError};
use crate::modules::customers::{CustomerProfile, CustomerProfileAlter, CustomerProfileResolver};
use crate::modules::orders::{Adjustment, AdjustmentType, Order, OrderItem, Store};
use crate::modules::zones::{TaxRate, TaxZone};

use super::sourcing::{is_registered_in, SourcingContext, SourcingPolicy};
use super::{ChainTaxRateResolver, RateResolution, TaxCalculator, TaxRateResolver, TaxType};

/// Adjustments the tax base includes, on top of the item's total price
const TAXABLE_ADJUSTMENT_TYPES: [AdjustmentType; 2] =
    [AdjustmentType::Promotion, AdjustmentType::Fee];

/// A zone matched for an order item, with the rate chosen in it
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRate<'z> {
    pub zone: &'z TaxZone,
    pub rate: &'z TaxRate,
}

/// Zone-based tax type: the shared engine behind every built-in plugin.
///
/// The zone table is validated once at construction and never changes.
/// Customer profiles are built per `apply()` call and never cached here.
#[derive(Debug)]
pub struct LocalTaxType {
    id: String,
    label: String,
    plugin_id: String,
    display_inclusive: bool,
    round: bool,
    zones: Vec<TaxZone>,
    sourcing: SourcingPolicy,
    rate_resolver: ChainTaxRateResolver,
    profile_alters: Vec<Box<dyn CustomerProfileAlter>>,
}

impl LocalTaxType {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        plugin_id: impl Into<String>,
        zones: Vec<TaxZone>,
        sourcing: SourcingPolicy,
    ) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TaxError::configuration("Tax type id cannot be empty"));
        }
        if id.contains('|') {
            return Err(TaxError::configuration(format!(
                "Tax type id '{}' cannot contain '|'",
                id
            )));
        }
        if zones.is_empty() {
            return Err(TaxError::configuration(format!(
                "Tax type '{}' has no zones",
                id
            )));
        }

        let mut seen = HashSet::new();
        for zone in &zones {
            if !seen.insert(zone.id()) {
                return Err(TaxError::configuration(format!(
                    "Tax type '{}' defines zone '{}' more than once",
                    id,
                    zone.id()
                )));
            }
        }

        Ok(Self {
            id,
            label: label.into(),
            plugin_id: plugin_id.into(),
            display_inclusive: false,
            round: true,
            zones,
            sourcing,
            rate_resolver: ChainTaxRateResolver::new(),
            profile_alters: Vec::new(),
        })
    }

    pub fn display_inclusive(mut self, display_inclusive: bool) -> Self {
        self.display_inclusive = display_inclusive;
        self
    }

    pub fn rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Register a rate resolver ahead of the default-rate fallback
    pub fn with_rate_resolver(mut self, resolver: Box<dyn TaxRateResolver>) -> Self {
        self.rate_resolver.add_resolver(resolver);
        self
    }

    pub fn with_profile_alter(mut self, alter: Box<dyn CustomerProfileAlter>) -> Self {
        self.profile_alters.push(alter);
        self
    }

    pub fn zones(&self) -> &[TaxZone] {
        &self.zones
    }

    pub fn zone(&self, zone_id: &str) -> Result<&TaxZone> {
        self.zones
            .iter()
            .find(|zone| zone.id() == zone_id)
            .ok_or_else(|| {
                TaxError::not_found(format!("Zone '{}' in tax type '{}'", zone_id, self.id))
            })
    }

    pub fn sourcing(&self) -> &SourcingPolicy {
        &self.sourcing
    }

    /// Whether tax amounts are rounded per order item
    pub fn should_round(&self) -> bool {
        self.round
    }

    fn matches_address(&self, store: &Store) -> bool {
        self.zones.iter().any(|zone| zone.matches(&store.address))
    }

    fn matches_registrations(&self, store: &Store) -> bool {
        self.zones.iter().any(|zone| is_registered_in(store, zone))
    }

    /// Zones that apply to the order item for this customer
    pub fn resolve_zones(
        &self,
        order_item: &OrderItem,
        store: &Store,
        calculation_date: NaiveDate,
        customer_profile: &CustomerProfile,
    ) -> Vec<&TaxZone> {
        let context = SourcingContext {
            zones: &self.zones,
            order_item,
            store,
            customer_profile,
            calculation_date,
        };
        self.sourcing.resolve_zones(&context)
    }

    /// The rate to use in each resolved zone
    pub fn resolve_rates(
        &self,
        order_item: &OrderItem,
        store: &Store,
        calculation_date: NaiveDate,
        customer_profile: &CustomerProfile,
    ) -> Vec<ResolvedRate<'_>> {
        self.resolve_zones(order_item, store, calculation_date, customer_profile)
            .into_iter()
            .filter_map(|zone| {
                match self.rate_resolver.resolve(zone, order_item, customer_profile) {
                    Some(RateResolution::Rate(rate)) => Some(ResolvedRate { zone, rate }),
                    Some(RateResolution::NoApplicableRate) | None => {
                        debug!(
                            tax_type = %self.id,
                            zone = zone.id(),
                            order_item_id = %order_item.id,
                            "No applicable rate in zone"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    fn apply_to_item(
        &self,
        order_item: &mut OrderItem,
        store: &Store,
        calculation_date: NaiveDate,
        customer_profile: &CustomerProfile,
    ) -> Result<()> {
        let resolved = self.resolve_rates(order_item, store, calculation_date, customer_profile);
        if resolved.is_empty() {
            debug!(tax_type = %self.id, order_item_id = %order_item.id, "No zone applies");
        }

        for ResolvedRate { zone, rate } in resolved {
            let Some(percentage) = rate.percentage_on(calculation_date) else {
                debug!(
                    tax_type = %self.id,
                    zone = zone.id(),
                    rate = %rate.id,
                    %calculation_date,
                    "Rate has no percentage on calculation date"
                );
                continue;
            };

            // Stores may enter prices without tax even when they are displayed
            // with tax, and vice versa: convert the unit price first.
            if store.prices_include_tax != self.display_inclusive {
                let calculator = TaxCalculator::new();
                let unit_price = if store.prices_include_tax {
                    calculator.price_without_tax(&order_item.unit_price, percentage.number)?
                } else {
                    calculator.price_with_tax(&order_item.unit_price, percentage.number)?
                };
                order_item.set_unit_price(unit_price);
            }

            let adjusted_total_price = order_item.adjusted_total_price(&TAXABLE_ADJUSTMENT_TYPES)?;
            let mut tax_amount =
                percentage.calculate_tax_amount(&adjusted_total_price, self.display_inclusive)?;
            if self.should_round() {
                tax_amount = tax_amount.round();
            }

            debug!(
                tax_type = %self.id,
                zone = zone.id(),
                rate = %rate.id,
                percentage = %percentage.number,
                amount = %tax_amount,
                order_item_id = %order_item.id,
                "Adding tax adjustment"
            );

            order_item.add_adjustment(
                Adjustment::new(AdjustmentType::Tax, zone.display_label(), tax_amount)
                    .with_percentage(percentage.number)
                    .with_source_id(format!("{}|{}|{}", self.id, zone.id(), rate.id))
                    .included(self.display_inclusive),
            );
        }

        Ok(())
    }
}

impl TaxType for LocalTaxType {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    fn is_display_inclusive(&self) -> bool {
        self.display_inclusive
    }

    fn applies(&self, order: &Order) -> bool {
        let store = order.store();
        self.matches_address(store) || self.matches_registrations(store)
    }

    fn apply(&self, order: &mut Order) -> Result<()> {
        let Some(base_profile) = CustomerProfileResolver::build(order, self.display_inclusive)
        else {
            return Ok(());
        };
        let calculation_date = order.calculation_date();

        let Order { store, items, .. } = order;
        for order_item in items.iter_mut() {
            let customer_profile =
                CustomerProfileResolver::for_item(&base_profile, order_item, &self.profile_alters);
            self.apply_to_item(order_item, store, calculation_date, &customer_profile)?;
        }

        Ok(())
    }

    fn as_local(&self) -> Option<&LocalTaxType> {
        Some(self)
    }
}
