pub mod formatting;

pub use formatting::{format_price, x_label_count};
