//! Plan pricing.

use serde::{Deserialize, Serialize};

use crate::SubscriptionPlan;

/// Discount applied to annual billing.
pub const ANNUAL_DISCOUNT: f64 = 0.2;

/// How often a plan is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Annual,
}

impl SubscriptionPlan {
    /// Returns the monthly list price in whole dollars.
    pub fn monthly_base_price(&self) -> u32 {
        match self {
            Self::Free => 0,
            Self::Pro => 19,
            Self::Enterprise => 99,
        }
    }

    /// Returns the price in whole dollars for one billing period.
    ///
    /// Annual billing is twelve months at the discounted rate, rounded to the
    /// nearest dollar.
    pub fn price_amount(&self, billing: BillingPeriod) -> u32 {
        let base = self.monthly_base_price();
        match billing {
            BillingPeriod::Monthly => base,
            BillingPeriod::Annual => {
                (f64::from(base) * 12.0 * (1.0 - ANNUAL_DISCOUNT)).round() as u32
            }
        }
    }

    /// Returns the price label shown on the pricing page.
    pub fn price(&self, billing: BillingPeriod) -> String {
        if self.is_free() {
            return "$0".to_string();
        }
        let amount = self.price_amount(billing);
        match billing {
            BillingPeriod::Monthly => format!("${}/mo", amount),
            BillingPeriod::Annual => format!("${}/yr", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_prices() {
        assert_eq!(SubscriptionPlan::Free.price(BillingPeriod::Monthly), "$0");
        assert_eq!(SubscriptionPlan::Pro.price(BillingPeriod::Monthly), "$19/mo");
        assert_eq!(
            SubscriptionPlan::Enterprise.price(BillingPeriod::Monthly),
            "$99/mo"
        );
    }

    #[test]
    fn test_annual_prices_are_discounted() {
        assert_eq!(SubscriptionPlan::Free.price(BillingPeriod::Annual), "$0");
        assert_eq!(SubscriptionPlan::Pro.price(BillingPeriod::Annual), "$182/yr");
        assert_eq!(
            SubscriptionPlan::Enterprise.price(BillingPeriod::Annual),
            "$950/yr"
        );
    }
}
