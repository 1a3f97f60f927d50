//! Currency rate abstractions

use crate::core::date::DateKey;
use crate::core::error::RateError;
use crate::core::rates::RateTable;

/// A source of daily exchange-rate tables.
///
/// Both lookups are answered from a single `rates_on` call, so each costs
/// exactly one upstream request.
pub trait CurrencyRateProvider: Send + Sync {
    fn rates_on(&self, date: DateKey) -> Result<RateTable, RateError>;

    /// Rate of `currency` against the provider's reference currency.
    fn rate_of(&self, currency: &str, date: DateKey) -> Result<f64, RateError> {
        self.rates_on(date)?.rate_of(currency)
    }

    fn cross_rate_of(&self, from: &str, to: &str, date: DateKey) -> Result<f64, RateError> {
        self.rates_on(date)?.cross_rate(from, to)
    }
}
