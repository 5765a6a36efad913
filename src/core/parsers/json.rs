use anyhow::Result;
use serde_json::Value;

use super::{Entity, EntityParser};

/// Nested JSON message file parser.
///
/// String leaves are flattened to dot-separated keys (`Common.save`). Arrays
/// of strings are one entity with the items joined by `, `; other arrays are
/// expanded with their index (`faq.items.0.question`). Numbers, booleans and
/// nulls are not translatable and are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonParser;

impl EntityParser for JsonParser {
    fn parse(&self, content: &str) -> Result<Vec<Entity>> {
        let json: Value = serde_json::from_str(content)?;
        let mut entities = Vec::new();
        flatten_json(&json, String::new(), &mut entities);
        Ok(entities)
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn flatten_json(value: &Value, prefix: String, result: &mut Vec<Entity>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, join_key(&prefix, key), result);
            }
        }
        Value::String(s) => {
            if !prefix.is_empty() {
                result.push(Entity::new(prefix, s.clone()));
            }
        }
        Value::Array(arr) => {
            if arr.is_empty() {
                return;
            }

            let is_string_array = arr.iter().all(|v| matches!(v, Value::String(_)));

            if is_string_array && !prefix.is_empty() {
                let values: Vec<&str> = arr.iter().filter_map(|v| v.as_str()).collect();
                result.push(Entity::new(prefix, values.join(", ")));
            } else {
                for (index, val) in arr.iter().enumerate() {
                    flatten_json(val, join_key(&prefix, &index.to_string()), result);
                }
            }
        }
        _ => {}
    }
}
