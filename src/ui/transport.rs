//! Browser implementation of the form transport

use crate::core::{FormTransport, SubmissionError, SubmissionPayload};

/// Posts consultation payloads with `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[cfg(not(feature = "ssr"))]
impl FormTransport for BrowserTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<u16, SubmissionError> {
        use gloo_net::http::Request;

        let request = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| SubmissionError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        Ok(response.status())
    }
}

/// No network from the server render
#[cfg(feature = "ssr")]
impl FormTransport for BrowserTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        _payload: &SubmissionPayload,
    ) -> Result<u16, SubmissionError> {
        Err(SubmissionError::Network(format!(
            "cannot reach {endpoint} during server render"
        )))
    }
}
