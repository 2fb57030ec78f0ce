//! Order parameters and the presence-only validation gate.
//!
//! Parameters are kept as an open mapping from field name to JSON value so
//! callers can pass whatever the broker accepts (`exchange`, `product`,
//! `price`, `validity`, ...). Only the four fields every order needs are
//! checked, and only for presence.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields every order must carry, in canonical order.
pub const REQUIRED_ORDER_FIELDS: [&str; 4] =
    ["tradingsymbol", "quantity", "transaction_type", "order_type"];

/// Field set describing one order submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderParams(BTreeMap<String, Value>);

impl OrderParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Required fields absent from these parameters, in canonical order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_ORDER_FIELDS
            .into_iter()
            .filter(|field| !self.contains(field))
            .collect()
    }

    /// Render the parameters as form fields for the broker API.
    ///
    /// Strings are sent verbatim, numbers and booleans in their JSON text
    /// form, nested values as JSON. Nulls are skipped.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    other => other.to_string(),
                };
                Some((key.clone(), rendered))
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OrderParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Display for OrderParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}={v}")).collect();
        write!(f, "{{{}}}", fields.join(", "))
    }
}

/// Return true iff all required order fields are present.
///
/// Values are not inspected: a LIMIT order without a price still passes.
#[must_use]
pub fn validate_order_params(params: &OrderParams) -> bool {
    REQUIRED_ORDER_FIELDS
        .iter()
        .all(|field| params.contains(field))
}

/// Broker-assigned order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
