use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    DebitCard,
    BankTransfer,
    Wallet,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::Wallet => "WALLET",
        };
        f.write_str(name)
    }
}

/// Outcome reported for a payment attempt. The core records it; it does not
/// talk to a gateway to find it out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
}

/// Ledger entry for one payment attempt against a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub recorded_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(
        booking_id: Uuid,
        amount: Decimal,
        method: PaymentMethod,
        status: PaymentStatus,
    ) -> CoreResult<Self> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::Validation(format!(
                "payment amount must be positive, got {}",
                amount
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            booking_id,
            amount,
            method,
            status,
            recorded_at: Utc::now(),
        })
    }
}
