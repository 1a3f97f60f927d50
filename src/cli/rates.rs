//! Rate lookups rendered for the terminal

use anyhow::{Context, Result};

use crate::cli::ui::{self, StyleType};
use crate::core::{CurrencyRateProvider, DateKey};

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

pub fn rate(provider: &dyn CurrencyRateProvider, currency: &str, date: DateKey) -> Result<String> {
    let currency = normalize(currency);
    let rate = provider
        .rate_of(&currency, date)
        .with_context(|| format!("Failed to get {currency} rate for {date}"))?;

    Ok(format!(
        "{} {} {}",
        ui::style_text(&date.to_string(), StyleType::Subtle),
        currency,
        ui::style_text(&ui::format_rate(rate), StyleType::Value)
    ))
}

pub fn cross_rate(
    provider: &dyn CurrencyRateProvider,
    from: &str,
    to: &str,
    date: DateKey,
) -> Result<String> {
    let (from, to) = (normalize(from), normalize(to));
    let rate = provider
        .cross_rate_of(&from, &to, date)
        .with_context(|| format!("Failed to get {from}/{to} rate for {date}"))?;

    Ok(format!(
        "{} {}/{} {}",
        ui::style_text(&date.to_string(), StyleType::Subtle),
        from,
        to,
        ui::style_text(&ui::format_rate(rate), StyleType::Value)
    ))
}

pub fn rate_table(provider: &dyn CurrencyRateProvider, date: DateKey) -> Result<String> {
    let rates = provider
        .rates_on(date)
        .with_context(|| format!("Failed to get rates for {date}"))?;

    let title = match rates.base.as_deref() {
        Some(base) => format!("Rates against {base} on {date}"),
        None => format!("Rates on {date}"),
    };

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Rate")]);
    for (code, rate) in rates.sorted() {
        table.add_row(vec![comfy_table::Cell::new(code), ui::rate_cell(rate)]);
    }

    Ok(format!(
        "{}\n{}",
        ui::style_text(&title, StyleType::Title),
        table
    ))
}
