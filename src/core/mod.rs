//! Core business logic abstractions

pub mod currency;
pub mod date;
pub mod error;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use currency::CurrencyRateProvider;
pub use date::DateKey;
pub use error::{ErrorKind, RateError};
pub use rates::RateTable;
