//! One day's exchange-rate table

use std::collections::HashMap;

use crate::core::error::RateError;

/// Rates of every listed currency against the provider's reference currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    pub base: Option<String>,
    pub date: Option<String>,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        RateTable {
            base: None,
            date: None,
            rates,
        }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate of `currency` against the reference currency.
    pub fn rate_of(&self, currency: &str) -> Result<f64, RateError> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| RateError::MissingCurrency(currency.to_string()))
    }

    /// `rates[from] / rates[to]`, refusing a zero denominator.
    pub fn cross_rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        let numerator = self.rate_of(from)?;
        let denominator = self.rate_of(to)?;
        if denominator == 0.0 {
            return Err(RateError::ZeroRate(to.to_string()));
        }
        Ok(numerator / denominator)
    }

    /// Entries sorted by currency code.
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self
            .rates
            .iter()
            .map(|(code, rate)| (code.as_str(), *rate))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
