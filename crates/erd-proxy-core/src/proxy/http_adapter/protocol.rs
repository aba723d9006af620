use reqwest::StatusCode;
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::error::ProxyError;

/// `code` value the proxy sends alongside a populated `data` object.
pub(super) const SUCCESS_CODE: &str = "successful";

/// Longest body excerpt carried inside `UnexpectedStatus`.
const MAX_ERROR_BODY_CHARS: usize = 256;

/// The proxy's outer JSON object, exactly as it appears on the wire.
#[derive(serde::Deserialize)]
pub(super) struct ResponseEnvelope<T> {
    pub(super) data: Option<T>,
    pub(super) error: Option<String>,
    pub(super) code: Option<String>,
}

/// An envelope after inspection: either the payload, or the failure the
/// proxy reported in place of it.
#[derive(Debug, PartialEq)]
pub(super) enum ProxyResponse<T> {
    Success(T),
    Failure { code: String, message: String },
}

impl<T> ResponseEnvelope<T> {
    /// A non-empty `error`, or a `code` other than [`SUCCESS_CODE`], wins over
    /// whatever `data` holds. Otherwise `data` must be present.
    pub(super) fn into_response(self) -> Result<ProxyResponse<T>, ProxyError> {
        let message = self.error.unwrap_or_default();
        let code = self.code.unwrap_or_default();

        if !message.is_empty() || !(code.is_empty() || code == SUCCESS_CODE) {
            return Ok(ProxyResponse::Failure { code, message });
        }

        self.data
            .map(ProxyResponse::Success)
            .ok_or(ProxyError::MissingField("data"))
    }
}

impl<T> ProxyResponse<T> {
    pub(super) fn into_result(self, status: StatusCode) -> Result<T, ProxyError> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure { code, message } => Err(ProxyError::Server {
                status: status.as_u16(),
                code,
                message,
            }),
        }
    }
}

/// Decode a proxy response body into the payload type `T`.
///
/// Non-2xx statuses never yield a payload: the body is only read for the
/// envelope's `code`/`error` so the caller sees what the proxy reported.
/// On 2xx, `data` stays untyped until `code`/`error` have been checked, so
/// a reported failure is never masked by a payload that does not decode.
pub(super) fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, ProxyError> {
    if !status.is_success() {
        return Err(decode_failure(status, body));
    }

    let envelope: ResponseEnvelope<serde_json::Value> =
        serde_json::from_str(body).map_err(ProxyError::Deserialization)?;
    let data = envelope.into_response()?.into_result(status)?;
    serde_json::from_value(data).map_err(ProxyError::Deserialization)
}

fn decode_failure(status: StatusCode, body: &str) -> ProxyError {
    if let Ok(envelope) = serde_json::from_str::<ResponseEnvelope<IgnoredAny>>(body) {
        let code = envelope.code.unwrap_or_default();
        let message = envelope.error.unwrap_or_default();
        if !code.is_empty() || !message.is_empty() {
            return ProxyError::Server {
                status: status.as_u16(),
                code,
                message,
            };
        }
    }

    ProxyError::UnexpectedStatus {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}
