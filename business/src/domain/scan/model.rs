use serde_json::{Map, Value};

pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
pub const NO_INGREDIENTS: &str = "No ingredients found.";
pub const NOT_AVAILABLE: &str = "N/A";

/// Health score supplied by the backend, 0–100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthScore(f64);

impl HealthScore {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Self),
            Value::String(s) => s.trim().parse::<f64>().ok().map(Self),
            _ => None,
        }
    }
}

impl std::fmt::Display for HealthScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 && self.0.is_finite() {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Nutrition details for one product, with placeholders already applied
/// for anything the backend left out.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductReport {
    pub product_name: String,
    pub ingredients: String,
    pub model_prediction: String,
    pub result: String,
    pub health_score: Option<HealthScore>,
    pub warnings: Vec<String>,
}

impl ProductReport {
    /// Builds a report from a backend JSON object. Missing or `null` keys
    /// fall back to their placeholder.
    pub fn from_json(object: &Map<String, Value>) -> Self {
        Self {
            product_name: text_field(object, "product_name", UNKNOWN_PRODUCT),
            ingredients: text_field(object, "ingredients", NO_INGREDIENTS),
            model_prediction: text_field(object, "model_prediction", NOT_AVAILABLE),
            result: text_field(object, "result", NOT_AVAILABLE),
            health_score: object.get("health_score").and_then(HealthScore::from_json),
            warnings: warnings_field(object),
        }
    }

    /// Score as shown on the metric, `N/A` when the backend gave none.
    pub fn health_score_label(&self) -> String {
        self.health_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Outcome of a backend lookup once the body has been parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanReply {
    NotFound,
    Found(ProductReport),
}

impl ScanReply {
    /// Interprets a backend reply body.
    ///
    /// A top-level `error` key marks the product as not found, whatever its
    /// value. Returns `None` when the body is not a JSON object.
    pub fn from_json(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        if object.contains_key("error") {
            return Some(ScanReply::NotFound);
        }
        Some(ScanReply::Found(ProductReport::from_json(object)))
    }
}

fn text_field(object: &Map<String, Value>, key: &str, fallback: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => fallback.to_string(),
        Some(value) => json_text(value),
    }
}

fn warnings_field(object: &Map<String, Value>) -> Vec<String> {
    match object.get("warnings") {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(json_text)
            .collect(),
        Some(Value::String(single)) => vec![single.clone()],
        _ => Vec::new(),
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn found(body: Value) -> ProductReport {
        match ScanReply::from_json(&body) {
            Some(ScanReply::Found(report)) => report,
            other => panic!("expected a product report, got {other:?}"),
        }
    }

    #[test]
    fn should_treat_error_key_as_not_found() {
        let reply = ScanReply::from_json(&json!({"error": "not found"}));
        assert_eq!(reply, Some(ScanReply::NotFound));
    }

    #[test]
    fn should_treat_error_key_as_not_found_even_with_product_fields() {
        let reply = ScanReply::from_json(&json!({
            "error": null,
            "product_name": "Ghost"
        }));
        assert_eq!(reply, Some(ScanReply::NotFound));
    }

    #[test]
    fn should_reject_non_object_body() {
        assert_eq!(ScanReply::from_json(&json!(["error"])), None);
        assert_eq!(ScanReply::from_json(&json!("ok")), None);
        assert_eq!(ScanReply::from_json(&Value::Null), None);
    }

    #[test]
    fn should_fill_missing_fields_with_placeholders() {
        let report = found(json!({
            "product_name": "Test Bar",
            "health_score": 72,
            "warnings": ["High sugar"]
        }));

        assert_eq!(report.product_name, "Test Bar");
        assert_eq!(report.health_score_label(), "72");
        assert_eq!(report.warnings, vec!["High sugar".to_string()]);
        assert_eq!(report.ingredients, "No ingredients found.");
        assert_eq!(report.model_prediction, "N/A");
        assert_eq!(report.result, "N/A");
    }

    #[test]
    fn should_use_placeholders_for_empty_object() {
        let report = found(json!({}));

        assert_eq!(report.product_name, UNKNOWN_PRODUCT);
        assert_eq!(report.health_score, None);
        assert_eq!(report.health_score_label(), "N/A");
        assert!(!report.has_warnings());
    }

    #[test]
    fn should_treat_null_as_missing() {
        let report = found(json!({"product_name": null, "warnings": null}));
        assert_eq!(report.product_name, UNKNOWN_PRODUCT);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn should_keep_all_recognized_fields() {
        let report = found(json!({
            "product_name": "Oat Drink",
            "ingredients": "water, oats, salt",
            "model_prediction": "healthy",
            "result": "Good choice",
            "health_score": 88.5,
            "warnings": ["Contains gluten", "Added salt"]
        }));

        assert_eq!(report.ingredients, "water, oats, salt");
        assert_eq!(report.model_prediction, "healthy");
        assert_eq!(report.result, "Good choice");
        assert_eq!(report.health_score_label(), "88.5");
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn should_accept_numeric_string_score() {
        let report = found(json!({"health_score": "64"}));
        assert_eq!(report.health_score, Some(HealthScore::new(64.0)));
    }

    #[test]
    fn should_ignore_unusable_score() {
        let report = found(json!({"health_score": {"value": 10}}));
        assert_eq!(report.health_score_label(), "N/A");
    }

    #[test]
    fn should_render_non_string_text_as_json() {
        let report = found(json!({"result": 3, "warnings": [1, "Low fibre"]}));
        assert_eq!(report.result, "3");
        assert_eq!(report.warnings, vec!["1".to_string(), "Low fibre".to_string()]);
    }

    #[test]
    fn should_treat_single_string_warning_as_one_line() {
        let report = found(json!({"warnings": "High fat"}));
        assert_eq!(report.warnings, vec!["High fat".to_string()]);
    }

    #[test]
    fn should_render_large_integral_score_in_full() {
        let report = found(json!({"health_score": 1e20}));
        assert_eq!(report.health_score_label(), "100000000000000000000");
    }

    proptest! {
        #[test]
        fn error_key_always_means_not_found(name in "[a-zA-Z ]{0,20}", code in 0i64..1000) {
            let body = json!({"error": code, "product_name": name});
            prop_assert_eq!(ScanReply::from_json(&body), Some(ScanReply::NotFound));
        }

        #[test]
        fn integral_scores_render_without_fraction(score in 0i64..=100) {
            let report = found(json!({"health_score": score}));
            prop_assert_eq!(report.health_score_label(), score.to_string());
        }
    }
}
