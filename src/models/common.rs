use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that can be left out, sent as `null`, or sent with a value.
///
/// Use with `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`
/// so that `Absent` omits the key entirely while `Null` writes `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Nullable<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    /// Borrow the value, if one is present
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Only reached when the field is not skipped
            Nullable::Absent | Nullable::Null => serializer.serialize_none(),
            Nullable::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A missing key never gets here; `#[serde(default)]` yields `Absent`.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        })
    }
}

/// Error body returned by the gateway for any non-200 response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    #[serde(rename = "Error")]
    pub error: ErrorDetail,
}

/// `Error` object inside an [`ErrorEnvelope`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        zip: Nullable<String>,
    }

    #[test]
    fn test_nullable_three_wire_states() {
        let absent = Holder { zip: Nullable::Absent };
        let null = Holder { zip: Nullable::Null };
        let value = Holder { zip: "10029".to_string().into() };

        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
        assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"zip":null}"#);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"zip":"10029"}"#);

        let parsed: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, absent);
        let parsed: Holder = serde_json::from_str(r#"{"zip":null}"#).unwrap();
        assert_eq!(parsed, null);
        let parsed: Holder = serde_json::from_str(r#"{"zip":"10029"}"#).unwrap();
        assert_eq!(parsed.zip.as_value().map(String::as_str), Some("10029"));
    }

    #[test]
    fn test_error_envelope_parses() {
        let body = r#"{"Error":{"Code":"BadRequest","Message":"Agency is required"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.error.code, "BadRequest");
        assert_eq!(envelope.error.message, "Agency is required");
    }
}
