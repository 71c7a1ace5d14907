pub mod app_config;
pub mod booking_store;
pub mod payment_store;

pub use app_config::Config;
pub use booking_store::BookingStore;
pub use payment_store::PaymentStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
