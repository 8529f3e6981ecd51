//! The todo record and its JSON validation rules.
//!
//! # Design
//! `parse` is strict: `title` is required, every present property must have
//! the right JSON type, and unknown keys are rejected. `apply_patch` is
//! lenient about presence (every property is optional) but applies the same
//! type checks to whatever it is given. Type checks always run before the
//! unknown-key scan, so a type error wins when both are present.

use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::json::{describe, JsonType};

const ID: &str = "id";
const TITLE: &str = "title";
const COMPLETED: &str = "completed";
const ORDER: &str = "order";

/// A single todo item.
///
/// Fields are read-only once constructed. `completed` and `order` keep the
/// difference between "not set" and an explicit value, which `to_json`
/// preserves by omitting unset keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    id: Option<String>,
    title: String,
    completed: Option<bool>,
    order: Option<f64>,
}

impl Todo {
    /// Property names a serialized record may contain.
    pub const FIELDS: [&'static str; 4] = [ID, TITLE, COMPLETED, ORDER];

    pub fn new(
        id: Option<String>,
        title: impl Into<String>,
        completed: Option<bool>,
        order: Option<f64>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
            order,
        }
    }

    /// Build a record from an untyped JSON object, rejecting anything that
    /// does not match the schema exactly.
    ///
    /// An absent `completed` becomes `Some(false)`.
    pub fn parse(json: &Value) -> Result<Self> {
        let title = string_field(json, TITLE)?.ok_or_else(|| ModelError::RequiredPropertyMissing {
            name: TITLE.to_string(),
        })?;
        let id = string_field(json, ID)?;
        let completed = bool_field(json, COMPLETED)?.unwrap_or(false);
        let order = number_field(json, ORDER)?;

        if let Some(object) = json.as_object() {
            if let Some(key) = object.keys().find(|key| !Self::FIELDS.contains(&key.as_str())) {
                return Err(ModelError::ExtraneousProperty { name: key.clone() });
            }
        }

        Ok(Self {
            id,
            title,
            completed: Some(completed),
            order,
        })
    }

    /// Copy of this record with `id` replaced.
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self.clone()
        }
    }

    /// Merge a partial update into a copy of this record.
    ///
    /// Only properties present in `patch` are type-checked and override the
    /// current values. Unknown keys are ignored and nothing is required, so
    /// an empty patch yields an identical record.
    pub fn apply_patch(&self, patch: &Value) -> Result<Self> {
        let id = string_field(patch, ID)?.or_else(|| self.id.clone());
        let title = string_field(patch, TITLE)?.unwrap_or_else(|| self.title.clone());
        let completed = bool_field(patch, COMPLETED)?.or(self.completed);
        let order = number_field(patch, ORDER)?.or(self.order);

        Ok(Self {
            id,
            title,
            completed,
            order,
        })
    }

    /// Serialize to a JSON object. Unset optional properties are omitted.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        if let Some(id) = &self.id {
            object.insert(ID.to_string(), Value::from(id.as_str()));
        }
        object.insert(TITLE.to_string(), Value::from(self.title.as_str()));
        if let Some(completed) = self.completed {
            object.insert(COMPLETED.to_string(), Value::from(completed));
        }
        if let Some(order) = self.order {
            object.insert(ORDER.to_string(), Value::from(order));
        }
        Value::Object(object)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn completed(&self) -> Option<bool> {
        self.completed
    }

    pub fn order(&self) -> Option<f64> {
        self.order
    }
}

impl<'a> TryFrom<&'a Value> for Todo {
    type Error = ModelError;

    fn try_from(json: &'a Value) -> Result<Self> {
        Todo::parse(json)
    }
}

impl<'a> From<&'a Todo> for Value {
    fn from(todo: &'a Todo) -> Self {
        todo.to_json()
    }
}

/// Look up `name` in `json` and convert it with `extract`.
///
/// Absent keys yield `Ok(None)`; present keys that `extract` rejects yield
/// `PropertyTypeMismatch`. Non-object inputs have no keys.
fn typed_field<'a, T>(
    json: &'a Value,
    name: &str,
    expected_type: JsonType,
    extract: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<Option<T>> {
    let Some(value) = json.get(name) else {
        return Ok(None);
    };
    extract(value)
        .map(Some)
        .ok_or_else(|| ModelError::PropertyTypeMismatch {
            name: name.to_string(),
            expected_type,
            actual_value: describe(value),
            actual_type: JsonType::of(value),
        })
}

fn string_field(json: &Value, name: &str) -> Result<Option<String>> {
    typed_field(json, name, JsonType::String, |v| v.as_str().map(str::to_owned))
}

fn bool_field(json: &Value, name: &str) -> Result<Option<bool>> {
    typed_field(json, name, JsonType::Boolean, Value::as_bool)
}

fn number_field(json: &Value, name: &str) -> Result<Option<f64>> {
    typed_field(json, name, JsonType::Number, Value::as_f64)
}
