use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A product as returned by the remote list endpoint.
///
/// Fields are passed through without validation: `id` keeps whatever JSON
/// value the API sent, and `title`/`body` accept any value (null or
/// missing become empty, non-strings keep their JSON text). Extra fields
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub body: String,
}

impl Product {
    /// `id` as display text, without quotes for string ids.
    pub fn id_label(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            Value::Null => "-".to_string(),
            other => other.to_string(),
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
