//! Request and response bodies.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::ApiError;
use crate::model::{FilterBoard, FilterValue, Param};

/// Generic `{success, message}` reply.
///
/// `success` is the string `"true"` on success, not a JSON boolean.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerReply {
    pub success: String,
    #[serde(default)]
    pub message: String,
}

impl ServerReply {
    pub fn is_success(&self) -> bool {
        self.success == "true"
    }

    /// The server message on success, a rejection otherwise.
    pub fn into_result(self) -> Result<String, ApiError> {
        if self.is_success() {
            Ok(self.message)
        } else {
            Err(ApiError::rejected(self.message))
        }
    }
}

/// Reply to `POST /upload`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadReply {
    pub success: String,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl UploadReply {
    pub fn is_success(&self) -> bool {
        self.success == "true"
    }

    /// The assigned file name and message on success, a rejection otherwise.
    ///
    /// A successful reply without `fileName` is also rejected since nothing
    /// can be done with it.
    pub fn into_result(self) -> Result<(String, String), ApiError> {
        if !self.is_success() {
            return Err(ApiError::rejected(self.message));
        }
        match self.file_name {
            Some(name) if !name.is_empty() => Ok((name, self.message)),
            _ => Err(ApiError::decode("upload reply has no fileName")),
        }
    }
}

/// Value of one filter as the range inputs report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Single(String),
    Pair { alpha: String, beta: String },
}

/// Enabled flag and value of one filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterPayload {
    pub enabled: bool,
    pub value: PayloadValue,
}

/// Body of `POST /filter/update`: every filter keyed by name, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterUpdate {
    filters: Vec<(String, FilterPayload)>,
}

impl FilterUpdate {
    /// Snapshot every filter on the board.
    pub fn from_board(board: &FilterBoard) -> Self {
        let filters = board
            .catalog()
            .iter()
            .filter_map(|def| {
                let entry = board.entry(def.name)?;
                let text = |param| {
                    let spec = def.param(param)?;
                    let value = entry.value.get(param)?;
                    Some(spec.range.input_value(value))
                };
                let value = match entry.value {
                    FilterValue::Single(_) => PayloadValue::Single(text(Param::Value)?),
                    FilterValue::Pair { .. } => PayloadValue::Pair {
                        alpha: text(Param::Alpha)?,
                        beta: text(Param::Beta)?,
                    },
                };
                Some((
                    def.name.to_string(),
                    FilterPayload {
                        enabled: entry.enabled,
                        value,
                    },
                ))
            })
            .collect();
        Self { filters }
    }

    /// Payload of one filter.
    pub fn get(&self, name: &str) -> Option<&FilterPayload> {
        self.filters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, payload)| payload)
    }

    /// Number of filters in the body.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Serialize for FilterUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.filters.len()))?;
        for (name, payload) in &self.filters {
            map.serialize_entry(name, payload)?;
        }
        map.end()
    }
}

/// Body of `POST /filter/order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderUpdate {
    pub order: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog;
    use serde_json::json;

    #[test]
    fn test_success_is_string_comparison() {
        let ok: ServerReply =
            serde_json::from_str(r#"{"success":"true","message":"Filters applied."}"#).unwrap();
        assert!(ok.is_success());

        let failed: ServerReply =
            serde_json::from_str(r#"{"success":"false","message":"No image state"}"#).unwrap();
        assert!(!failed.is_success());

        let odd: ServerReply = serde_json::from_str(r#"{"success":"TRUE"}"#).unwrap();
        assert!(!odd.is_success());
        assert_eq!(odd.message, "");

        assert!(serde_json::from_str::<ServerReply>(r#"{"success":true}"#).is_err());
    }

    #[test]
    fn test_upload_reply() {
        let reply: UploadReply = serde_json::from_str(
            r#"{"success":"true","fileName":"7f3a_cat.png","message":"Uploaded"}"#,
        )
        .unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.file_name.as_deref(), Some("7f3a_cat.png"));

        let failed: UploadReply =
            serde_json::from_str(r#"{"success":"false","message":"Upload failed: disk full"}"#)
                .unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.file_name, None);
        assert_eq!(
            failed.into_result(),
            Err(ApiError::rejected("Upload failed: disk full"))
        );

        let nameless: UploadReply = serde_json::from_str(r#"{"success":"true"}"#).unwrap();
        assert!(matches!(nameless.into_result(), Err(ApiError::Decode(_))));

        assert_eq!(
            reply.into_result(),
            Ok(("7f3a_cat.png".to_string(), "Uploaded".to_string()))
        );
    }

    #[test]
    fn test_filter_update_body() {
        let mut board = FilterBoard::new(catalog::all());
        board.set_enabled("blur", true);
        board.set_value("blur", Param::Value, 9.0);
        board.set_enabled("brightness", true);
        board.set_value("brightness", Param::Alpha, 1.5);
        board.set_value("brightness", Param::Beta, -20.0);
        board.move_before("blur", Some("grayscale"));

        let body = FilterUpdate::from_board(&board);
        assert_eq!(body.len(), catalog::all().len());

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["blur"], json!({"enabled": true, "value": "9"}));
        assert_eq!(
            value["brightness"],
            json!({"enabled": true, "value": {"alpha": "1.5", "beta": "-20"}})
        );
        assert_eq!(value["grayscale"], json!({"enabled": false, "value": "1"}));

        // Keys follow catalog order regardless of visual order
        let text = serde_json::to_string(&body).unwrap();
        assert!(text.find("\"grayscale\"").unwrap() < text.find("\"blur\"").unwrap());
    }

    #[test]
    fn test_order_body() {
        let body = OrderUpdate {
            order: vec!["blur".into(), "grayscale".into()],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"order": ["blur", "grayscale"]})
        );
    }
}
