//! Helpers for reading loosely-shaped upstream JSON.

use serde_json::Value;

/// Whether an upstream value carries anything worth returning.
///
/// `null`, `false`, zero, empty strings, empty arrays and empty objects all
/// count as absent.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Pick a named field out of an upstream payload.
///
/// Count-style endpoints answer either with an object carrying the figure
/// under `key` or with the bare figure itself; both are accepted. Anything
/// else yields `null`.
pub fn pick(value: Option<&Value>, key: &str) -> Value {
    match value {
        Some(Value::Object(fields)) => fields.get(key).cloned().unwrap_or(Value::Null),
        Some(scalar @ (Value::Number(_) | Value::String(_))) => scalar.clone(),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presence_follows_emptiness() {
        for absent in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(!is_present(&absent), "{absent} should be absent");
        }
        for present in [json!(true), json!(3), json!("x"), json!([0]), json!({"a": null})] {
            assert!(is_present(&present), "{present} should be present");
        }
    }

    #[test]
    fn pick_reads_objects_and_scalars() {
        let counted = json!({"jumlah_mahasiswa": 4200, "other": 1});
        assert_eq!(pick(Some(&counted), "jumlah_mahasiswa"), json!(4200));
        assert_eq!(pick(Some(&counted), "jumlah_dosen"), Value::Null);
        assert_eq!(pick(Some(&json!(17)), "jumlah"), json!(17));
        assert_eq!(pick(Some(&json!("1:20")), "rasio"), json!("1:20"));
        assert_eq!(pick(Some(&json!([1, 2])), "jumlah"), Value::Null);
        assert_eq!(pick(None, "jumlah"), Value::Null);
    }
}
