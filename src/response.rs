//! Rule evaluation response records and their equality check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fixture::MockResource;

/// Alert detail attached to a rule response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertObject {
    /// Resources the rule flagged, as normalized mock documents.
    #[serde(rename = "k8sApiObjects", default, skip_serializing_if = "Vec::is_empty")]
    pub api_objects: Vec<MockResource>,

    /// Non-Kubernetes payload; shape is left to the producing rule.
    #[serde(
        rename = "externalObjects",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_objects: Option<Value>,
}

/// Outcome of evaluating a single policy rule against a resource.
///
/// Produced by an external evaluation engine; this crate only compares them.
/// Field names follow the upstream wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleResponse {
    /// Human-readable explanation of the alert
    #[serde(rename = "alertMessage")]
    pub alert_message: String,

    /// Paths within the resource that failed the rule
    #[serde(rename = "failedPaths", default)]
    pub failed_paths: Vec<String>,

    /// Evaluation status (e.g. "failed", "warning")
    #[serde(rename = "ruleStatus")]
    pub rule_status: String,

    /// Policy package that produced the response
    #[serde(rename = "packagename", default)]
    pub package_name: String,

    /// Severity score assigned by the rule
    #[serde(rename = "alertScore", default)]
    pub alert_score: f64,

    /// Nested alert detail
    #[serde(rename = "alertObject", default)]
    pub alert_object: AlertObject,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,

    #[serde(rename = "rulename", default, skip_serializing_if = "String::is_empty")]
    pub rule_name: String,
}

/// Exact, order-sensitive comparison of two response sequences.
///
/// True iff both have the same length and every positional pair is
/// structurally equal, nested fields included. Floats compare with `==`,
/// no epsilon.
pub fn responses_match(responses: &[RuleResponse], expected: &[RuleResponse]) -> bool {
    responses == expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn response(msg: &str) -> RuleResponse {
        RuleResponse {
            alert_message: msg.to_string(),
            failed_paths: vec!["spec.containers[0].securityContext".to_string()],
            rule_status: "failed".to_string(),
            package_name: "armo_builtins".to_string(),
            alert_score: 7.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_responses_match_reflexive() {
        let xs = vec![response("privileged container"), response("host network")];
        assert!(responses_match(&xs, &xs));
        assert!(responses_match(&[], &[]));
    }

    #[test]
    fn test_responses_match_order_sensitive() {
        let r1 = response("privileged container");
        let r2 = response("host network");
        assert!(!responses_match(
            &[r1.clone(), r2.clone()],
            &[r2.clone(), r1.clone()]
        ));
    }

    #[test]
    fn test_responses_match_length_mismatch() {
        let r = response("privileged container");
        assert!(!responses_match(&[r.clone()], &[r.clone(), r.clone()]));
        assert!(!responses_match(&[r], &[]));
    }

    #[test]
    fn test_nested_alert_object_differences_detected() {
        let mut a = response("privileged container");
        let mut b = a.clone();
        assert!(responses_match(&[a.clone()], &[b.clone()]));

        let mut flagged = MockResource::new();
        flagged.insert("kind".to_string(), json!("Pod"));
        b.alert_object.api_objects.push(flagged);
        assert!(!responses_match(&[a.clone()], &[b]));

        a.alert_score = 7.000001;
        let reference = response("privileged container");
        assert!(!responses_match(&[a], &[reference]));
    }

    #[test]
    fn test_wire_format_round_trip() {
        let r = response("privileged container");
        let encoded = serde_json::to_string(&r).unwrap();
        assert!(encoded.contains("\"alertMessage\""));
        assert!(encoded.contains("\"failedPaths\""));
        assert!(encoded.contains("\"ruleStatus\""));
        assert!(encoded.contains("\"alertScore\""));
        assert!(encoded.contains("\"alertObject\""));

        let decoded: RuleResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(r, decoded);
    }
}
