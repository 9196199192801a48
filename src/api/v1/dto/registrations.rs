/*
 * Responsibility
 * - /registrations/inspect の request/response DTO
 * - JSON で受けた URL / ヘッダを url::Url / HeaderMap に変換する (形式チェック)
 * - RegistrationParam は move で受け取って response に詰め替える
 */
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::services::session_registration::RegistrationParam;

#[derive(Debug, Deserialize)]
pub struct InspectRequest {
    // URL of the request that produced the response (absolute)
    pub request_url: String,
    // Response headers in wire order; repeated names are kept
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

impl InspectRequest {
    pub fn request_url(&self) -> Result<Url, &'static str> {
        let url = Url::parse(self.request_url.trim()).map_err(|_| "request_url must be an absolute URL")?;
        if url.cannot_be_a_base() {
            return Err("request_url cannot be used as a base URL");
        }
        Ok(url)
    }

    pub fn header_map(&self) -> Result<HeaderMap, &'static str> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for entry in &self.headers {
            let name = HeaderName::from_bytes(entry.name.trim().as_bytes())
                .map_err(|_| "invalid header name")?;
            let value =
                HeaderValue::from_str(&entry.value).map_err(|_| "invalid header value")?;
            map.append(name, value);
        }
        Ok(map)
    }
}

#[derive(Debug, Serialize)]
pub struct InspectResponse {
    pub registrations: Vec<RegistrationResponse>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub registration_endpoint: String,
    pub supported_algorithms: Vec<&'static str>,
    pub challenge: String,
}

impl From<RegistrationParam> for RegistrationResponse {
    fn from(param: RegistrationParam) -> Self {
        let (endpoint, algos, challenge) = param.into_parts();
        Self {
            registration_endpoint: endpoint.into(),
            supported_algorithms: algos.iter().map(|a| a.as_token()).collect(),
            challenge,
        }
    }
}
