use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::CalendarDate;
use crate::modules::customers::Profile;

use super::{OrderItem, Store};

/// Customer profiles collected on an order, by scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProfiles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Profile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Profile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,

    pub store: Store,

    #[serde(default)]
    pub items: Vec<OrderItem>,

    #[serde(default)]
    pub profiles: OrderProfiles,

    /// Date the order was placed; unset while still a cart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed: Option<NaiveDate>,
}

impl Order {
    pub fn new(id: impl Into<String>, store: Store) -> Self {
        Self {
            id: id.into(),
            store,
            items: Vec::new(),
            profiles: OrderProfiles::default(),
            placed: None,
        }
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_shipping_profile(mut self, profile: Profile) -> Self {
        self.profiles.shipping = Some(profile);
        self
    }

    pub fn with_billing_profile(mut self, profile: Profile) -> Self {
        self.profiles.billing = Some(profile);
        self
    }

    pub fn placed_on(mut self, date: NaiveDate) -> Self {
        self.placed = Some(date);
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn collect_profiles(&self) -> &OrderProfiles {
        &self.profiles
    }

    /// Date used to pick rate percentages: the placed date, else today
    pub fn calculation_date(&self) -> NaiveDate {
        self.placed.unwrap_or_else(CalendarDate::today)
    }
}
