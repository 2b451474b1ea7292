//! Hashing y canonicalización JSON para definiciones de secuencia.
//!
//! El hash de definición resume las etiquetas ordenadas de los pasos más la
//! versión del motor. Los marcadores de progreso persistidos lo llevan: si el
//! contenido de la lección cambió, el marcador deja de coincidir y el
//! progreso guardado se descarta en vez de reproducirse sobre otra secuencia.

use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Serializa un `Value` a JSON canónico (claves de objeto ordenadas).
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => serde_json::to_string(s).unwrap(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(to_canonical_json).collect();
            format!("[{}]", parts.join(","))
        }
        Value::Object(map) => {
            let ordered: BTreeMap<&String, String> =
                map.iter().map(|(k, v)| (k, to_canonical_json(v))).collect();
            let parts: Vec<String> = ordered.into_iter()
                                            .map(|(k, v)| format!("{}:{}", serde_json::to_string(k).unwrap(), v))
                                            .collect();
            format!("{{{}}}", parts.join(","))
        }
    }
}

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// Hash estable de una definición de secuencia a partir de sus etiquetas
/// ordenadas (los pasos sin etiqueta aportan `null` en su posición).
pub fn definition_hash(labels: &[Option<&str>]) -> String {
    let input = json!({
        "engine_version": crate::constants::ENGINE_VERSION,
        "labels": labels,
    });
    hash_str(&to_canonical_json(&input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_json_orders_object_keys() {
        let v = json!({"b": 1, "a": [true, null]});
        assert_eq!(to_canonical_json(&v), r#"{"a":[true,null],"b":1}"#);
    }

    #[test]
    fn definition_hash_is_stable_and_order_sensitive() {
        let a = definition_hash(&[Some("intro"), None, Some("quiz")]);
        let b = definition_hash(&[Some("intro"), None, Some("quiz")]);
        let c = definition_hash(&[Some("quiz"), None, Some("intro")]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
