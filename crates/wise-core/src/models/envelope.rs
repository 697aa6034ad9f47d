//! Response envelope shared by every backend endpoint.

use serde::{de::DeserializeOwned, Deserialize};

use crate::error::{ConsoleError, Result};

/// `{ code, msg, data }` wrapper; `code == 0` means success.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub code: i64,

    #[serde(default)]
    pub msg: Option<String>,

    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    /// Unwrap the payload, turning a non-zero code into a business error.
    ///
    /// `data` is decoded only on success, so `null` works for unit payloads.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        if self.code != 0 {
            return Err(ConsoleError::business(
                self.code,
                self.msg.as_deref().unwrap_or_default(),
            ));
        }
        Ok(serde_json::from_value(self.data)?)
    }
}

/// Outcome body of a lifecycle action.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ActionOutcome {
    #[serde(default)]
    pub result: String,
}
