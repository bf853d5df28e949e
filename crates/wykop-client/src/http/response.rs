/*
[INPUT]:  Decoded JSON envelopes from the API
[OUTPUT]: Pagination-aware response wrappers and the notifications iterator
[POS]:    HTTP layer - response envelope handling
[UPDATE]: When the envelope shape or pagination handling changes
*/

use serde_json::Value;

use crate::http::{Result, WykopError};
use crate::types::Notification;

fn pagination_handle(pagination: Option<&Value>, key: &str) -> Option<String> {
    pagination
        .and_then(|pagination| pagination.get(key))
        .and_then(Value::as_str)
        .filter(|handle| !handle.is_empty())
        .map(str::to_string)
}

/// Generic response wrapper
///
/// Holds the raw decoded `data` plus the pagination handles lifted from the
/// envelope. Used for endpoints without a dedicated wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    data: Value,
    pagination_next: Option<String>,
    pagination_prev: Option<String>,
}

impl ApiResponse {
    /// Build a response from a full API envelope
    ///
    /// The envelope must be an object carrying `data`. Empty pagination
    /// handles are treated as absent.
    pub(crate) fn from_envelope(envelope: Value) -> Result<Self> {
        let Value::Object(mut envelope) = envelope else {
            return Err(WykopError::InvalidResponse(
                "response envelope is not a JSON object".to_string(),
            ));
        };

        let data = envelope.remove("data").ok_or_else(|| {
            WykopError::InvalidResponse("response envelope is missing `data`".to_string())
        })?;

        let pagination = envelope.get("pagination");
        Ok(Self {
            pagination_next: pagination_handle(pagination, "next"),
            pagination_prev: pagination_handle(pagination, "prev"),
            data,
        })
    }

    /// Raw decoded data
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn into_data(self) -> Value {
        self.data
    }

    /// URL of the next page of results, if the API reported one
    pub fn pagination_next(&self) -> Option<&str> {
        self.pagination_next.as_deref()
    }

    /// URL of the previous page of results, if the API reported one
    pub fn pagination_prev(&self) -> Option<&str> {
        self.pagination_prev.as_deref()
    }
}

/// Notification list response
///
/// Keeps the raw list and pagination handles, and lazily maps elements into
/// [`Notification`] entities as it is iterated. A malformed element yields an
/// `Err` for that element only; iteration continues with the next one.
#[derive(Debug, Clone)]
pub struct Notifications {
    items: Vec<Value>,
    cursor: usize,
    pagination_next: Option<String>,
    pagination_prev: Option<String>,
}

impl Notifications {
    pub(crate) fn from_envelope(envelope: Value) -> Result<Self> {
        Self::from_response(ApiResponse::from_envelope(envelope)?)
    }

    /// Build a notification list from a generic response
    pub fn from_response(response: ApiResponse) -> Result<Self> {
        let pagination_next = response.pagination_next.clone();
        let pagination_prev = response.pagination_prev.clone();
        let Value::Array(items) = response.data else {
            return Err(WykopError::InvalidResponse(
                "notification list data is not an array".to_string(),
            ));
        };

        Ok(Self {
            items,
            cursor: 0,
            pagination_next,
            pagination_prev,
        })
    }

    /// Raw list elements as returned by the API
    pub fn raw(&self) -> &[Value] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pagination_next(&self) -> Option<&str> {
        self.pagination_next.as_deref()
    }

    pub fn pagination_prev(&self) -> Option<&str> {
        self.pagination_prev.as_deref()
    }
}

impl Iterator for Notifications {
    type Item = Result<Notification>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.items.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(serde_json::from_value(raw).map_err(WykopError::from))
    }
}
