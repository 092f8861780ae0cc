//! Supplier balance used to authorise feed purchases
//!
//! A supplier earns money for delivered milk; outgoing payments and feed
//! bought on the supplier's behalf are deducted from it.

use super::FeedPurchase;
use crate::domain::a001_supplier::Supplier;
use crate::domain::a003_milk_reception::MilkReception;
use crate::domain::a005_payment::Payment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BalanceError {
    #[error("Purchase total must be greater than zero")]
    InvalidAmount,

    #[error("Insufficient supplier balance: available {available:.2}, required {requested:.2}")]
    Insufficient { available: f64, requested: f64 },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplierBalance {
    pub supplier_id: i64,
    /// Value of all milk received from the supplier
    pub milk_amount: f64,
    /// Outgoing payments made to the supplier
    pub paid_amount: f64,
    /// Feed charged to the supplier
    pub feed_amount: f64,
    pub balance: f64,
}

impl SupplierBalance {
    pub fn compute(
        supplier_id: i64,
        receptions: &[MilkReception],
        payments: &[Payment],
        feed_purchases: &[FeedPurchase],
    ) -> Self {
        let milk_amount: f64 = receptions
            .iter()
            .filter(|r| r.supplier_id == Some(supplier_id))
            .map(|r| r.total_amount)
            .sum();
        let paid_amount: f64 = payments
            .iter()
            .filter(|p| p.is_paid_to_supplier(supplier_id))
            .map(|p| p.amount)
            .sum();
        let feed_amount: f64 = feed_purchases
            .iter()
            .filter(|f| f.supplier_id == Some(supplier_id))
            .map(|f| f.total_amount)
            .sum();

        Self {
            supplier_id,
            milk_amount,
            paid_amount,
            feed_amount,
            balance: milk_amount - paid_amount - feed_amount,
        }
    }

    /// Check that a new purchase of `total` fits into the balance
    pub fn check_purchase(&self, total: f64) -> Result<(), BalanceError> {
        if !total.is_finite() || total <= 0.0 {
            return Err(BalanceError::InvalidAmount);
        }
        if total > self.balance {
            return Err(BalanceError::Insufficient {
                available: self.balance.max(0.0),
                requested: total,
            });
        }
        Ok(())
    }
}

/// Balance of every supplier that has an id
pub fn balances_for(
    suppliers: &[Supplier],
    receptions: &[MilkReception],
    payments: &[Payment],
    feed_purchases: &[FeedPurchase],
) -> BTreeMap<i64, SupplierBalance> {
    suppliers
        .iter()
        .filter_map(|s| s.id)
        .map(|id| {
            (
                id,
                SupplierBalance::compute(id, receptions, payments, feed_purchases),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::PaymentDirection;

    fn reception(supplier_id: i64, total: f64) -> MilkReception {
        MilkReception {
            supplier_id: Some(supplier_id),
            date: "2024-07-01".into(),
            quantity_liters: total,
            price_per_liter: 1.0,
            total_amount: total,
            ..Default::default()
        }
    }

    fn payment(supplier_id: i64, amount: f64, direction: PaymentDirection) -> Payment {
        Payment {
            date: "2024-07-02".into(),
            amount,
            direction,
            supplier_id: Some(supplier_id),
            ..Default::default()
        }
    }

    fn feed(supplier_id: i64, total: f64) -> FeedPurchase {
        FeedPurchase {
            supplier_id: Some(supplier_id),
            total_amount: total,
            ..Default::default()
        }
    }

    #[test]
    fn balance_subtracts_payments_and_feed() {
        let receptions = vec![reception(1, 500.0), reception(1, 250.0), reception(2, 90.0)];
        let payments = vec![
            payment(1, 200.0, PaymentDirection::Outgoing),
            // incoming money never reduces what is owed to a supplier
            payment(1, 999.0, PaymentDirection::Incoming),
        ];
        let purchases = vec![feed(1, 100.0), feed(2, 10.0)];

        let b = SupplierBalance::compute(1, &receptions, &payments, &purchases);
        assert_eq!(b.milk_amount, 750.0);
        assert_eq!(b.paid_amount, 200.0);
        assert_eq!(b.feed_amount, 100.0);
        assert_eq!(b.balance, 450.0);
    }

    #[test]
    fn purchase_check() {
        let b = SupplierBalance {
            supplier_id: 1,
            balance: 100.0,
            ..Default::default()
        };
        assert!(b.check_purchase(100.0).is_ok());
        assert_eq!(b.check_purchase(0.0), Err(BalanceError::InvalidAmount));
        assert_eq!(
            b.check_purchase(120.0),
            Err(BalanceError::Insufficient {
                available: 100.0,
                requested: 120.0
            })
        );
    }

    #[test]
    fn negative_balance_reports_zero_available() {
        let b = SupplierBalance {
            supplier_id: 1,
            balance: -30.0,
            ..Default::default()
        };
        let err = b.check_purchase(10.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Insufficient supplier balance: available 0.00, required 10.00"
        );
    }

    #[test]
    fn balances_for_every_supplier() {
        let suppliers = vec![
            Supplier {
                id: Some(1),
                name: "A".into(),
                ..Default::default()
            },
            Supplier {
                id: None,
                name: "unsaved".into(),
                ..Default::default()
            },
            Supplier {
                id: Some(2),
                name: "B".into(),
                ..Default::default()
            },
        ];
        let map = balances_for(&suppliers, &[reception(2, 40.0)], &[], &[]);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1].balance, 0.0);
        assert_eq!(map[&2].balance, 40.0);
    }
}
