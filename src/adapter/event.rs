use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const USER_QUERY_FIELD: &str = "user_query";

/// Triggering event in API-gateway proxy shape. Fields other than `body`
/// and `user_query` (headers, path, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundEvent {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub user_query: Option<Value>,
}

impl InboundEvent {
    /// Event carrying a raw request body, as delivered by proxy integration.
    /// An empty body counts as absent.
    pub fn from_raw_body(body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            body: (!body.is_empty()).then(|| Value::String(body)),
            user_query: None,
        }
    }

    /// A textual body is parsed as JSON; an absent body becomes `{}`.
    /// Text that parses to `null` has no fields to look up and is rejected.
    pub fn normalized_body(&self) -> Result<Value> {
        match &self.body {
            Some(Value::String(text)) => match serde_json::from_str(text)? {
                Value::Null => Err(Error::invalid_body(format!(
                    "Cannot read properties of null (reading '{USER_QUERY_FIELD}')"
                ))),
                parsed => Ok(parsed),
            },
            None | Some(Value::Null) => Ok(Value::Object(Map::new())),
            Some(other) => Ok(other.clone()),
        }
    }

    /// First non-empty `user_query` from `body.user_query`, then
    /// `event.user_query`. Empty strings and non-string values count as missing.
    pub fn user_query<'a>(&'a self, body: &'a Value) -> Option<&'a str> {
        [body.get(USER_QUERY_FIELD), self.user_query.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .find(|query| !query.is_empty())
    }
}
