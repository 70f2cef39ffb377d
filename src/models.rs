use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A client record. The schema is owned by whoever maintains the data file,
/// so attributes are kept as an open JSON object.
pub type ClientRecord = Map<String, Value>;

/// Top-level sales document: `{"salesReps": [...]}`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, deserialize_with = "lenient_reps")]
    pub sales_reps: Vec<SalesRep>,

    /// Any other top-level keys, returned verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.sales_reps.is_empty()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SalesRep {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_clients")]
    pub clients: Vec<ClientRecord>,

    /// region, role, deals, skills, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` reads as no reps. A rep that doesn't fit [`SalesRep`] is skipped
/// with a warning so the rest of the document still loads.
fn lenient_reps<'de, D>(deserializer: D) -> Result<Vec<SalesRep>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(rep) => Some(rep),
            Err(e) => {
                tracing::warn!(index, "skipping sales rep: {}", e);
                None
            }
        })
        .collect())
}

/// `null` reads as no clients; non-object entries are dropped.
fn lenient_clients<'de, D>(deserializer: D) -> Result<Vec<ClientRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;

    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(record) => Some(record),
            other => {
                tracing::warn!(value = %other, "skipping non-object client");
                None
            }
        })
        .collect())
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Speaker label used when rendering a transcript
    pub fn label(self) -> &'static str {
        match self {
            ChatRole::User => "User",
            ChatRole::Assistant => "Assistant",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataset_keeps_unknown_fields() {
        let raw = json!({
            "salesReps": [{
                "id": 1,
                "name": "Alice",
                "region": "Europe",
                "clients": [{"name": "Acme", "industry": "Tech"}]
            }],
            "generatedAt": "2024-01-01"
        });

        let dataset: Dataset = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(dataset.sales_reps.len(), 1);
        assert_eq!(dataset.sales_reps[0].extra["region"], "Europe");

        assert_eq!(serde_json::to_value(&dataset).unwrap(), raw);
    }

    #[test]
    fn test_missing_clients_defaults_to_empty() {
        let rep: SalesRep = serde_json::from_value(json!({"id": 7, "name": "Bob"})).unwrap();
        assert!(rep.clients.is_empty());
    }

    #[test]
    fn test_null_clients_read_as_empty() {
        let dataset: Dataset = serde_json::from_value(json!({
            "salesReps": [
                {"id": 1, "name": "Zed", "clients": [{"name": "Acme"}]},
                {"id": 2, "name": "Bob", "clients": null}
            ]
        }))
        .unwrap();

        assert_eq!(dataset.sales_reps.len(), 2);
        assert_eq!(dataset.sales_reps[0].clients.len(), 1);
        assert!(dataset.sales_reps[1].clients.is_empty());
    }

    #[test]
    fn test_bad_rep_skipped_others_kept() {
        let dataset: Dataset = serde_json::from_value(json!({
            "salesReps": [
                {"id": "one", "name": "String id"},
                {"id": 2},
                {"id": 3, "name": "Carol", "clients": [{"name": "Acme"}, "stray", 7]}
            ]
        }))
        .unwrap();

        assert_eq!(dataset.sales_reps.len(), 1);
        assert_eq!(dataset.sales_reps[0].name, "Carol");
        assert_eq!(dataset.sales_reps[0].clients.len(), 1);
    }

    #[test]
    fn test_null_sales_reps_read_as_empty() {
        let dataset: Dataset = serde_json::from_value(json!({"salesReps": null})).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_attribute_order_is_kept() {
        let raw = r#"{"salesReps":[{"id":1,"name":"A","clients":[{"zeta":1,"alpha":2}],"region":"EU","age":3}]}"#;
        let dataset: Dataset = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&dataset).unwrap(), raw);
    }

    #[test]
    fn test_chat_role_serialization() {
        let msg = ChatMessage::assistant("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"assistant","text":"hi"}"#);
    }
}
