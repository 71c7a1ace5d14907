use airline_core::Payment;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;
use uuid::Uuid;

use crate::{StoreError, StoreResult};

static GLOBAL: OnceLock<Arc<PaymentStore>> = OnceLock::new();

/// Ledger of recorded payment outcomes, keyed by payment id.
#[derive(Debug, Default)]
pub struct PaymentStore {
    payments: RwLock<HashMap<Uuid, Arc<Payment>>>,
}

impl PaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide ledger, created on first access.
    pub fn global() -> Arc<Self> {
        GLOBAL.get_or_init(|| Arc::new(Self::new())).clone()
    }

    pub fn add_payment(&self, payment: Payment) -> Arc<Payment> {
        let payment = Arc::new(payment);
        self.payments.write().insert(payment.id, payment.clone());
        debug!(
            "Payment {} recorded for booking {}: {:?}",
            payment.id, payment.booking_id, payment.status
        );
        payment
    }

    pub fn try_add_payment(&self, payment: Payment) -> StoreResult<Arc<Payment>> {
        let mut payments = self.payments.write();
        if payments.contains_key(&payment.id) {
            return Err(StoreError::DuplicateKey(payment.id.to_string()));
        }

        let payment = Arc::new(payment);
        payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    pub fn get_payment(&self, payment_id: &Uuid) -> Option<Arc<Payment>> {
        self.payments.read().get(payment_id).cloned()
    }

    /// All attempts recorded against a booking, oldest first.
    pub fn payments_for_booking(&self, booking_id: &Uuid) -> Vec<Arc<Payment>> {
        let mut found: Vec<Arc<Payment>> = self
            .payments
            .read()
            .values()
            .filter(|payment| payment.booking_id == *booking_id)
            .cloned()
            .collect();
        found.sort_by_key(|payment| payment.recorded_at);
        found
    }

    pub fn len(&self) -> usize {
        self.payments.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airline_core::{PaymentMethod, PaymentStatus};
    use rust_decimal_macros::dec;

    fn payment(booking_id: Uuid, status: PaymentStatus) -> Payment {
        Payment::new(booking_id, dec!(120.50), PaymentMethod::CreditCard, status).unwrap()
    }

    #[test]
    fn test_store_and_retrieve() {
        let store = PaymentStore::new();
        assert!(store.is_empty());

        let booking_id = Uuid::new_v4();
        let stored = store.add_payment(payment(booking_id, PaymentStatus::Succeeded));

        let found = store.get_payment(&stored.id).unwrap();
        assert_eq!(found.amount, dec!(120.50));
        assert_eq!(found.booking_id, booking_id);
        assert!(store.get_payment(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_try_add_rejects_duplicate_id() {
        let store = PaymentStore::new();
        let original = payment(Uuid::new_v4(), PaymentStatus::Pending);
        store.try_add_payment(original.clone()).unwrap();

        assert_eq!(
            store.try_add_payment(original.clone()),
            Err(StoreError::DuplicateKey(original.id.to_string()))
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_payments_for_booking() {
        let store = PaymentStore::new();
        let booking_id = Uuid::new_v4();
        store.add_payment(payment(booking_id, PaymentStatus::Failed));
        store.add_payment(payment(Uuid::new_v4(), PaymentStatus::Succeeded));
        store.add_payment(payment(booking_id, PaymentStatus::Succeeded));

        let attempts = store.payments_for_booking(&booking_id);
        assert_eq!(attempts.len(), 2);
        assert!(attempts.iter().all(|p| p.booking_id == booking_id));
    }

    #[test]
    fn test_global_is_a_single_instance() {
        let a = PaymentStore::global();
        let b = PaymentStore::global();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_concurrent_writers() {
        let store = PaymentStore::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                let store = &store;
                scope.spawn(move || {
                    for _ in 0..100 {
                        let stored =
                            store.add_payment(payment(Uuid::new_v4(), PaymentStatus::Succeeded));
                        let found = store.get_payment(&stored.id).unwrap();
                        assert_eq!(*found, *stored);
                    }
                });
            }
        });

        assert_eq!(store.len(), 800);
    }
}
