//! Cat — the single record kind held by the record store.
//!
//! A cat is an open JSON object. Only `name` is known by convention; every
//! other attribute is kept verbatim so that what goes in through
//! `POST /cats/create` comes back unchanged from `GET /cats/findAll`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cat record. No identity, no uniqueness constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cat {
    fields: Map<String, Value>,
}

impl Cat {
    /// Create a builder for constructing a [`Cat`].
    #[must_use]
    pub fn builder() -> CatBuilder {
        CatBuilder::default()
    }

    /// The `name` attribute, when present and a string.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Look up any attribute by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All attributes, in the order they were received.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Cat {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl fmt::Display for Cat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(&self.fields, f)
    }
}

/// Step-by-step builder for [`Cat`].
#[derive(Debug, Default)]
pub struct CatBuilder {
    fields: Map<String, Value>,
}

impl CatBuilder {
    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        self.attribute("name", name.into())
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Consume the builder and return a [`Cat`].
    #[must_use]
    pub fn build(self) -> Cat {
        Cat {
            fields: self.fields,
        }
    }
}

/// Body accepted by `PUT /cats/update/:id`.
///
/// Every attribute is optional. The payload is only logged; no stored
/// record is ever changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateCat {
    fields: Map<String, Value>,
}

impl UpdateCat {
    /// All attributes carried by the update request.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for UpdateCat {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl fmt::Display for UpdateCat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(&self.fields, f)
    }
}

fn write_json(fields: &Map<String, Value>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let json = serde_json::to_string(fields).map_err(|_| fmt::Error)?;
    f.write_str(&json)
}
