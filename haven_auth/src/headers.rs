use axum::http::HeaderMap;

use crate::error::HavenAuthError;

/// Pull the bearer token out of the `Authorization` header.
pub fn extract_access_token_from_request_headers(
    headers: &HeaderMap,
) -> Result<String, HavenAuthError> {
    let value = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(HavenAuthError::MissingToken)?;

    let value = value.to_str().map_err(|_| HavenAuthError::MissingToken)?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(HavenAuthError::MissingToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            "Bearer abc.def.ghi".parse().unwrap(),
        );
        assert_eq!(
            extract_access_token_from_request_headers(&headers).unwrap(),
            "abc.def.ghi"
        );
    }

    #[test]
    fn missing_or_malformed_header_is_an_error() {
        let headers = HeaderMap::new();
        assert!(extract_access_token_from_request_headers(&headers).is_err());

        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::AUTHORIZATION,
            "Basic dXNlcjpwdw==".parse().unwrap(),
        );
        assert!(extract_access_token_from_request_headers(&headers).is_err());
    }
}
