use serde_json::Value;

/// A country document exactly as the lookup endpoint returned it.
///
/// The shape is never validated; it is only pretty-printed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord(Value);

impl CountryRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// JSON with two-space indentation, one field per line.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for CountryRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_uses_two_space_indent() {
        let record = CountryRecord::new(json!({"name": "Canada", "capital": "Ottawa"}));
        let pretty = record.pretty();
        assert!(pretty.contains("\n  \"name\": \"Canada\""));
        assert!(pretty.contains("\n  \"capital\": \"Ottawa\""));
    }

    #[test]
    fn pretty_keeps_server_key_order() {
        let value: Value =
            serde_json::from_str(r#"{"name":"Canada","capital":"Ottawa","alpha2Code":"CA"}"#)
                .unwrap();
        let pretty = CountryRecord::new(value).pretty();
        let keys: Vec<usize> = ["\"name\"", "\"capital\"", "\"alpha2Code\""]
            .iter()
            .map(|key| pretty.find(key).unwrap())
            .collect();
        assert!(keys[0] < keys[1] && keys[1] < keys[2], "keys reordered: {}", pretty);
    }

    #[test]
    fn non_object_documents_are_kept_verbatim() {
        let record = CountryRecord::from(json!([1, 2]));
        assert_eq!(record.value(), &json!([1, 2]));
    }
}
