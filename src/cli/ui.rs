use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Value,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right aligned cell for a rate, zero rates are dimmed.
pub fn rate_cell(rate: f64) -> Cell {
    let cell = Cell::new(format_rate(rate)).set_alignment(CellAlignment::Right);
    if rate == 0.0 {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}

/// At least six decimals, more for small rates so six significant digits remain.
pub fn format_rate(rate: f64) -> String {
    let magnitude = rate.abs();
    let decimals = if magnitude == 0.0 || magnitude >= 1.0 || !magnitude.is_finite() {
        6
    } else {
        (5 - magnitude.log10().floor() as i32).clamp(6, 17) as usize
    };
    format!("{rate:.decimals$}")
}
