pub mod card;
pub mod price_chart;

pub use card::{Card, CardContent};
pub use price_chart::PriceChart;
