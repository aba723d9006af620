#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid proxy url: {0}")]
    InvalidUrl(String),

    #[error("proxy transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("decode proxy response: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("proxy response is missing `{0}`")]
    MissingField(&'static str),

    #[error("proxy reported an error (status {status}, code `{code}`): {message}")]
    Server {
        status: u16,
        code: String,
        message: String,
    },

    #[error("proxy returned status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}
