use reqwest::Url;

use crate::error::ProxyError;

/// Validate a proxy base URL and normalize away trailing slashes so that
/// resource paths can be appended with a single `/`.
///
/// A query or fragment would end up ahead of the appended resource path, so
/// both are rejected.
pub(super) fn parse_base_url(url: &str) -> Result<String, ProxyError> {
    let parsed = Url::parse(url)
        .map_err(|e| ProxyError::InvalidUrl(format!("`{url}`: expected HTTP(S) URL ({e})")))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ProxyError::InvalidUrl(format!(
                "unsupported scheme `{other}` in `{url}`; expected http or https"
            )));
        }
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ProxyError::InvalidUrl(format!(
            "`{url}` must not contain a query or fragment"
        )));
    }

    Ok(url.trim_end_matches('/').to_owned())
}

pub(super) fn resource_url(base_url: &str, resource: &str) -> String {
    format!("{base_url}/{}", resource.trim_start_matches('/'))
}
