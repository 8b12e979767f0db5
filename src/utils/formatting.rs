/// Format a price for the y-axis with two decimals.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Number of x-axis labels to request for a series of `len` observations,
/// capped at `max` so long series stay readable.
pub fn x_label_count(len: usize, max: usize) -> usize {
    len.clamp(2, max.max(2))
}
