//! Advice response types and the canned response table.

use serde::{Deserialize, Serialize};

/// Topic a farmer query classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// No agriculture keyword present at all.
    OutOfScope,
    MarketPrice,
    PestControl,
    SoilHealth,
    Irrigation,
    /// In-domain, but no specific topic group matched.
    GeneralAgriculture,
}

/// A single labeled point in a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Static chart attached to an advice response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub chart_type: String,
    pub title: String,
    pub unit: String,
    pub data: Vec<ChartPoint>,
}

/// Citation attached to an advice response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub uri: String,
}

/// Advisory response returned to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceRef>>,
}

impl Advice {
    /// Text-only advice.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chart: None,
            sources: None,
        }
    }
}

/// Refusal returned for out-of-scope questions.
pub const REFUSAL_TEXT: &str = "My expertise is strictly limited to agriculture. \
    Please ask me a question about your crops, soil, market prices, or farming practices.";

const MARKET_SUMMARY: &str = "HERE IS A BRIEF SUMMARY: WHEAT PRICES IN RAJASTHAN SHOW A MODEST \
    UPWARD TREND OVER 8 MONTHS, PEAKING IN NOV 2024.";

const PEST_TIP: &str = "Spray NEEM OIL (5–10 ml/L) and use pheromone traps to control pests.";

const SOIL_TIP: &str = "Test soil pH. Add compost or lime/sulphur based on test results.";

const IRRIGATION_TIP: &str = "Use DRIP IRRIGATION and mulch to reduce evaporation losses.";

const GENERAL_PROMPT: &str = "Provide crop name and issue for more specific agricultural guidance.";

/// Sample wheat price series served with market-price answers.
const WHEAT_PRICES: [(&str, f64); 5] = [
    ("2024-05", 2200.0),
    ("2024-07", 2250.0),
    ("2024-09", 2320.0),
    ("2024-11", 2400.0),
    ("2025-01", 2350.0),
];

/// Canned advice for a classified topic.
pub fn advice_for(topic: Topic) -> Advice {
    match topic {
        Topic::OutOfScope => Advice::text(REFUSAL_TEXT),
        Topic::MarketPrice => Advice {
            text: MARKET_SUMMARY.to_string(),
            chart: Some(ChartSpec {
                chart_type: "line".to_string(),
                title: "HISTORICAL PRICE OF WHEAT (RAJASTHAN)".to_string(),
                unit: "RS/QUINTAL".to_string(),
                data: WHEAT_PRICES
                    .iter()
                    .map(|(label, value)| ChartPoint {
                        label: label.to_string(),
                        value: *value,
                    })
                    .collect(),
            }),
            sources: Some(vec![SourceRef {
                title: "LOCAL SAMPLE DATA".to_string(),
                uri: "#".to_string(),
            }]),
        },
        Topic::PestControl => Advice::text(PEST_TIP),
        Topic::SoilHealth => Advice::text(SOIL_TIP),
        Topic::Irrigation => Advice::text(IRRIGATION_TIP),
        Topic::GeneralAgriculture => Advice::text(GENERAL_PROMPT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_serializes_camel_case() {
        let advice = advice_for(Topic::MarketPrice);
        let json = serde_json::to_value(&advice).unwrap();

        assert_eq!(json["chart"]["chartType"], "line");
        assert_eq!(json["chart"]["unit"], "RS/QUINTAL");
        assert_eq!(json["chart"]["data"].as_array().unwrap().len(), 5);
        assert_eq!(json["chart"]["data"][0]["label"], "2024-05");
        assert_eq!(json["chart"]["data"][0]["value"], 2200.0);
        assert_eq!(json["chart"]["data"][4]["label"], "2025-01");
        assert_eq!(json["sources"][0]["title"], "LOCAL SAMPLE DATA");
        assert_eq!(json["sources"][0]["uri"], "#");
    }

    #[test]
    fn test_text_only_advice_omits_optional_fields() {
        let advice = advice_for(Topic::PestControl);
        let json = serde_json::to_value(&advice).unwrap();

        assert!(json.get("chart").is_none());
        assert!(json.get("sources").is_none());
        assert!(json["text"].as_str().unwrap().contains("NEEM OIL"));
    }

    #[test]
    fn test_price_series_order() {
        let advice = advice_for(Topic::MarketPrice);
        let chart = advice.chart.unwrap();
        let labels: Vec<&str> = chart.data.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["2024-05", "2024-07", "2024-09", "2024-11", "2025-01"]
        );
        let values: Vec<f64> = chart.data.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2200.0, 2250.0, 2320.0, 2400.0, 2350.0]);
    }
}
