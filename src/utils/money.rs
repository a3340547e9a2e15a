// Formatting helpers for monetary amounts

/// Renders an amount with exactly two decimal places, e.g. `10.5` -> `"10.50"`.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
