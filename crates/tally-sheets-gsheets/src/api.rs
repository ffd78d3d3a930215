//! Request/response models for the spreadsheet service REST API

use serde::{Deserialize, Serialize};
use tally_sheets_core::{CellWrite, SheetValue};

/// One A1-range with its cell values
#[derive(Debug, Serialize)]
pub struct ValueRange {
    pub range: String,
    pub values: Vec<Vec<serde_json::Value>>,
}

impl From<&CellWrite> for ValueRange {
    fn from(write: &CellWrite) -> Self {
        Self {
            range: write.range(),
            values: vec![vec![scalar(&write.value)]],
        }
    }
}

fn scalar(value: &SheetValue) -> serde_json::Value {
    match value {
        SheetValue::Text(s) => serde_json::Value::String(s.clone()),
        SheetValue::Number(n) => serde_json::json!(n),
        SheetValue::Bool(b) => serde_json::Value::Bool(*b),
    }
}

/// `values:batchUpdate` request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    pub value_input_option: &'static str,
    pub data: Vec<ValueRange>,
}

/// Per-range result inside a batch update response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    #[serde(default)]
    pub updated_cells: u64,
}

/// `values:batchUpdate` response body
#[derive(Debug, Deserialize)]
pub struct BatchUpdateResponse {
    #[serde(default)]
    pub responses: Vec<UpdateValuesResponse>,
}

/// `values:batchClear` request body
#[derive(Debug, Serialize)]
pub struct BatchClearRequest {
    pub ranges: Vec<String>,
}

/// Error envelope the service wraps failures in
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorItem {
    #[serde(default)]
    pub reason: Option<String>,
}

impl ApiErrorBody {
    /// All reason/status strings carried by the error envelope
    pub fn reasons(&self) -> Vec<&str> {
        let mut reasons = Vec::new();
        if let Some(detail) = &self.error {
            if let Some(status) = &detail.status {
                reasons.push(status.as_str());
            }
            for item in &detail.errors {
                if let Some(reason) = &item.reason {
                    reasons.push(reason.as_str());
                }
            }
        }
        reasons
    }

    /// The human-readable upstream message, if any
    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().and_then(|d| d.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_sheets_core::ColumnAddress;

    #[test]
    fn value_range_from_write() {
        let write = CellWrite::new("ROUND 1", ColumnAddress::new(3).unwrap(), 4, 15);
        let range = ValueRange::from(&write);
        assert_eq!(range.range, "'ROUND 1'!C4");
        assert_eq!(range.values, vec![vec![serde_json::json!(15.0)]]);
    }

    #[test]
    fn error_body_reasons() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"error":{"status":"PERMISSION_DENIED","message":"nope",
                "errors":[{"reason":"insufficientPermissions"}]}}"#,
        )
        .unwrap();
        assert_eq!(
            body.reasons(),
            vec!["PERMISSION_DENIED", "insufficientPermissions"]
        );
        assert_eq!(body.message(), Some("nope"));
    }

    #[test]
    fn empty_error_body_tolerated() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.reasons().is_empty());
        assert!(body.message().is_none());
    }
}
