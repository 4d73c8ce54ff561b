use tracing::{debug, info};

use crate::core::Result;
use crate::modules::customers::CustomerProfile;
use crate::modules::orders::{Adjustment, AdjustmentType, Order};

use super::{LocalTaxType, TaxCalculator, TaxType};

/// Runs every configured tax type over an order.
///
/// Unit prices are reset to the catalog price and previous tax adjustments
/// are cleared first, so processing the same order twice yields the same
/// prices and adjustments.
pub struct TaxOrderProcessor {
    tax_types: Vec<Box<dyn TaxType>>,
}

impl TaxOrderProcessor {
    pub fn new(tax_types: Vec<Box<dyn TaxType>>) -> Self {
        Self { tax_types }
    }

    pub fn tax_types(&self) -> &[Box<dyn TaxType>] {
        &self.tax_types
    }

    pub fn process(&self, order: &mut Order) -> Result<()> {
        for item in order.items.iter_mut() {
            item.restore_unit_price();
            item.remove_adjustments_of_type(AdjustmentType::Tax);
        }

        for tax_type in &self.tax_types {
            if tax_type.applies(order) {
                debug!(order_id = %order.id, tax_type = tax_type.id(), "Applying tax type");
                tax_type.apply(order)?;
            }
        }

        if order.store.prices_include_tax {
            self.remove_store_tax_from_untaxed_items(order)?;
        }

        info!(order_id = %order.id, "Processed taxes");
        Ok(())
    }

    /// Don't overcharge tax-exempt customers when prices include tax.
    ///
    /// A 12 EUR price with 20% VAT becomes 10 EUR for a customer outside the
    /// EU, as long as no other tax type taxed the item.
    fn remove_store_tax_from_untaxed_items(&self, order: &mut Order) -> Result<()> {
        let calculation_date = order.calculation_date();
        let store_profile = CustomerProfile::new(order.store.address.clone());
        let calculator = TaxCalculator::new();
        let applicable: Vec<&LocalTaxType> = {
            let order: &Order = order;
            self.tax_types
                .iter()
                .filter(|tax_type| tax_type.applies(order))
                .filter_map(|tax_type| tax_type.as_local())
                .collect()
        };

        let Order { store, items, .. } = order;
        for item in items.iter_mut() {
            if item.adjustments.iter().any(Adjustment::is_tax) {
                continue;
            }

            let mut unit_price = item.unit_price;
            for tax_type in &applicable {
                for resolved in tax_type.resolve_rates(item, store, calculation_date, &store_profile)
                {
                    let Some(percentage) = resolved.rate.percentage_on(calculation_date) else {
                        continue;
                    };
                    let tax_amount = calculator.calculate_rounded(
                        &item.unit_price,
                        percentage.number,
                        true,
                        true,
                    )?;
                    unit_price = unit_price.subtract(&tax_amount)?;
                }
            }

            if unit_price != item.unit_price {
                debug!(
                    order_item_id = %item.id,
                    from = %item.unit_price,
                    to = %unit_price,
                    "Removed store tax from untaxed item"
                );
                item.set_unit_price(unit_price);
            }
        }

        Ok(())
    }
}
