//! Merge a record into an existing JSON template and persist it.

use crate::error::{RecordError, RecordResult};
use crate::record::DesignRecord;
use serde_json::Value;
use std::path::Path;

/// Recursively merge `patch` into `target`.
///
/// Objects merge key by key; any other value in `patch` replaces the one in
/// `target`. Keys present only in `target` are kept.
pub fn merge_json(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(t), Value::Object(p)) => {
            for (key, value) in p {
                match t.get_mut(key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        t.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

impl DesignRecord {
    /// Merge this record into `template`, which must be a JSON object.
    pub fn merge_into(&self, template: &mut Value) -> RecordResult<()> {
        if !template.is_object() {
            return Err(RecordError::Template {
                what: "template root must be a JSON object".into(),
            });
        }
        merge_json(template, &self.to_value()?);
        Ok(())
    }
}

pub fn load_template(path: &Path) -> RecordResult<Value> {
    let content = std::fs::read_to_string(path)?;
    let template: Value = serde_json::from_str(&content)?;
    if !template.is_object() {
        return Err(RecordError::Template {
            what: format!("{} does not hold a JSON object", path.display()),
        });
    }
    Ok(template)
}

/// Merge `record` into `template` (or an empty object) and write it pretty-printed.
pub fn write_record(
    path: &Path,
    record: &DesignRecord,
    template: Option<&Value>,
) -> RecordResult<Value> {
    let mut merged = template
        .cloned()
        .unwrap_or_else(|| Value::Object(Default::default()));
    record.merge_into(&mut merged)?;
    let content = serde_json::to_string_pretty(&merged)?;
    std::fs::write(path, content)?;
    Ok(merged)
}
