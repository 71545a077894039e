// src/content/normalize.rs
//! Raw record to typed entity conversion

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::entity::Entity;
use crate::error::{Result, ShowcaseError};

use super::loader::RawRecord;

/// Derive an entity id from its source name: the final path segment
/// (either separator style) with its extension removed.
pub fn derive_id(source: &str) -> Result<String> {
    let segment = source.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(source);

    let stem = match segment.rfind('.') {
        Some(pos) if pos > 0 => &segment[..pos],
        _ => segment,
    };

    if stem.is_empty() {
        return Err(ShowcaseError::EmptyId(source.to_string()));
    }
    Ok(stem.to_string())
}

/// Move legacy field values onto their canonical names.
///
/// The canonical field wins when present and non-null; the legacy key is
/// always dropped.
pub fn apply_aliases(fields: &mut Map<String, Value>, aliases: &[(&str, &str)]) {
    for (canonical, legacy) in aliases {
        let legacy_value = fields.remove(*legacy);
        let has_canonical = fields.get(*canonical).is_some_and(|v| !v.is_null());

        if !has_canonical {
            if let Some(value) = legacy_value {
                fields.insert(canonical.to_string(), value);
            }
        }
    }
}

/// Normalize one raw record into an entity of kind `T`
pub fn normalize<T: Entity>(record: RawRecord) -> Result<T> {
    let id = derive_id(&record.source.to_string_lossy())?;

    let mut fields = record.fields;
    apply_aliases(&mut fields, T::ALIASES);
    fields.insert("id".to_string(), Value::String(id.clone()));

    serde_json::from_value(Value::Object(fields)).map_err(|source| ShowcaseError::Schema {
        kind: T::KIND,
        id,
        source,
    })
}

/// Normalize a whole collection, rejecting duplicate ids
pub fn normalize_all<T: Entity>(records: Vec<RawRecord>) -> Result<Vec<T>> {
    let mut seen = HashSet::new();
    let mut entities = Vec::with_capacity(records.len());

    for record in records {
        let entity: T = normalize(record)?;
        if !seen.insert(entity.id().to_string()) {
            return Err(ShowcaseError::DuplicateId {
                kind: T::KIND,
                id: entity.id().to_string(),
            });
        }
        entities.push(entity);
    }

    Ok(entities)
}
