/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Typed decoders for the `{ data, meta: { hasMore } }` envelope.
//!
//! Two flavours exist. The lenient decoder never fails: a missing or
//! mistyped `data` becomes an empty list and a missing or non-boolean
//! `meta.hasMore` becomes `false`. The strict decoder reports the same
//! situations as [`AppError::ShapeMismatch`] so the caller can log them.

use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One page of a paginated resource
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageResult {
    /// Items exactly as returned by the API
    pub items: Vec<Value>,
    /// Whether another page is available
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

#[derive(Deserialize, Default)]
struct LenientEnvelope {
    #[serde(default, deserialize_with = "array_or_empty")]
    data: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_meta")]
    meta: LenientMeta,
}

#[derive(Deserialize, Default)]
struct LenientMeta {
    #[serde(rename = "hasMore", default, deserialize_with = "bool_or_false")]
    has_more: bool,
}

#[derive(Deserialize)]
struct StrictEnvelope {
    data: Value,
    meta: StrictMeta,
}

#[derive(Deserialize)]
struct StrictMeta {
    #[serde(rename = "hasMore")]
    has_more: bool,
}

#[derive(Deserialize, Default)]
struct SectionedEnvelope {
    #[serde(default, deserialize_with = "object_or_empty")]
    data: Map<String, Value>,
    #[serde(default, deserialize_with = "object_or_empty")]
    meta: Map<String, Value>,
}

impl PageResult {
    /// An empty page with no further pages
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decodes a single-resource envelope, defaulting every missing field
    #[must_use]
    pub fn from_envelope(body: &Value) -> Self {
        let envelope = LenientEnvelope::deserialize(body).unwrap_or_default();
        Self {
            items: envelope.data,
            has_more: envelope.meta.has_more,
        }
    }

    /// Decodes a single-resource envelope, rejecting malformed bodies
    ///
    /// # Errors
    /// [`AppError::ShapeMismatch`] when `data` is missing or falsy, when it is
    /// not a list, or when `meta.hasMore` is missing or not a boolean.
    pub fn from_envelope_strict(body: &Value) -> Result<Self, AppError> {
        let envelope = StrictEnvelope::deserialize(body)
            .map_err(|e| AppError::ShapeMismatch(e.to_string()))?;

        if !is_truthy(&envelope.data) {
            return Err(AppError::ShapeMismatch("`data` is missing".to_string()));
        }
        match envelope.data {
            Value::Array(items) => Ok(Self {
                items,
                has_more: envelope.meta.has_more,
            }),
            other => Err(AppError::ShapeMismatch(format!(
                "`data` is not a list: {other}"
            ))),
        }
    }

    /// Number of items on the page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the page has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Deserializes every item into `T`
    ///
    /// # Errors
    /// [`AppError::Json`] on the first item that does not match `T`
    pub fn items_as<T: DeserializeOwned>(&self) -> Result<Vec<T>, AppError> {
        self.items
            .iter()
            .map(|item| T::deserialize(item).map_err(AppError::from))
            .collect()
    }
}

/// Sections of the combined preload body
///
/// The body nests one list per section under `data` and one `{ hasMore }`
/// object per section under `meta`. Every lookup defaults on its own.
pub(crate) struct Sections {
    envelope: SectionedEnvelope,
}

impl Sections {
    pub(crate) fn new(body: &Value) -> Self {
        Self {
            envelope: SectionedEnvelope::deserialize(body).unwrap_or_default(),
        }
    }

    pub(crate) fn page(&self, key: &str) -> PageResult {
        let items = match self.envelope.data.get(key) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        };
        let has_more = self
            .envelope
            .meta
            .get(key)
            .and_then(|meta| meta.get("hasMore"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        PageResult { items, has_more }
    }

    pub(crate) fn object(&self, key: &str) -> Map<String, Value> {
        match self.envelope.data.get(key) {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn array_or_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn lenient_meta<'de, D>(deserializer: D) -> Result<LenientMeta, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(LenientMeta::deserialize(&value).unwrap_or_default())
}
