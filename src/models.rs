use serde::{Deserialize, Serialize};

/// One (date, price) observation as delivered by the price API.
///
/// The wire keys are `"Date"` and `"Price"` and must match the producing
/// service exactly. The date stays an opaque string; the client never
/// parses or re-sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

/// The (labels, values) projection handed to the chart renderer.
///
/// Derived from the fetched points on every render, never cached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Projects dates and prices out of the point sequence, order preserved.
    pub fn from_points(points: &[PricePoint]) -> Self {
        Self {
            labels: points.iter().map(|p| p.date.clone()).collect(),
            values: points.iter().map(|p| p.price).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, price: f64) -> PricePoint {
        PricePoint {
            date: date.to_string(),
            price,
        }
    }

    #[test]
    fn test_series_projection_preserves_order() {
        let points = vec![
            point("2024-01-02", 77.5),
            point("2024-01-03", 78.1),
            point("2024-01-04", 76.9),
        ];

        let series = ChartSeries::from_points(&points);

        assert_eq!(
            series.labels,
            vec!["2024-01-02", "2024-01-03", "2024-01-04"]
        );
        assert_eq!(series.values, vec![77.5, 78.1, 76.9]);
    }

    #[test]
    fn test_series_projection_is_pure() {
        let points = vec![point("2024-01-02", 77.5), point("2024-01-03", 78.1)];

        let first = ChartSeries::from_points(&points);
        let second = ChartSeries::from_points(&points);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_points_give_empty_series() {
        let series = ChartSeries::from_points(&[]);

        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.labels.is_empty());
    }

    #[test]
    fn test_wire_format_deserialization() {
        let payload = r#"[{"Date":"2024-01-02","Price":77.5},{"Date":"2024-01-03","Price":78.1}]"#;

        let points: Vec<PricePoint> = serde_json::from_str(payload).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2024-01-02");
        assert_eq!(points[0].price, 77.5);
        assert_eq!(points[1].date, "2024-01-03");
        assert_eq!(points[1].price, 78.1);
    }

    #[test]
    fn test_wire_format_rejects_lowercase_keys() {
        let payload = r#"[{"date":"2024-01-02","price":77.5}]"#;

        let result: Result<Vec<PricePoint>, _> = serde_json::from_str(payload);

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_payload_deserializes() {
        let points: Vec<PricePoint> = serde_json::from_str("[]").unwrap();

        assert!(points.is_empty());
    }
}
