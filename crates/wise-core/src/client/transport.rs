//! Request plumbing: endpoint resolution and envelope decoding.

use serde::de::DeserializeOwned;

use super::ConsoleClient;
use crate::{
    error::{ConsoleError, Result},
    models::Envelope,
};

impl ConsoleClient {
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request and unwrap the `{code, msg, data}` envelope.
    ///
    /// All three failure kinds (transport, HTTP status, non-zero code) come
    /// back as a `ConsoleError` carrying a readable message.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await.map_err(ConsoleError::transport)?;
        let status = response.status();
        log::debug!("{} {}", status.as_u16(), response.url());

        let body = response.text().await.map_err(ConsoleError::transport)?;

        if !status.is_success() {
            let msg = backend_message(&body);
            return Err(ConsoleError::http(status.as_u16(), msg.as_deref()));
        }

        let envelope: Envelope = serde_json::from_str(&body)?;
        envelope.into_data()
    }
}

/// `msg` field of an error body, if it is a JSON object carrying one.
fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("msg")?
        .as_str()
        .map(str::to_string)
}
