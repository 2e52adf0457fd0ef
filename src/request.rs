//! Request assembly.
//!
//! Combines an [`Endpoint`], the configured API key, and the parameter
//! encoder into a fully-formed [`reqwest::Request`]. The wire address is
//! `base_url + "/" + api_key + "/" + path` plus any encoded query.

use std::time::Duration;

use reqwest::header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use url::Url;

use crate::endpoint::{Endpoint, Task};
use crate::error::NetworkError;
use crate::params;

/// Fixed per-request deadline. Exceeding it surfaces as a transport error.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build a transport request for `endpoint`.
///
/// JSON calls carry a `Cache-Control: no-store` directive — the client never
/// reuses JSON responses; only image assets go through the content cache.
/// Address-assembly failures are reported as [`NetworkError::MissingUrl`]
/// rather than aborting the process, keeping misconfiguration observable at
/// the call site.
pub fn build(
    endpoint: &Endpoint,
    api_key: &str,
    timeout: Duration,
) -> Result<reqwest::Request, NetworkError> {
    let url = join_url(&endpoint.base_url, api_key, &endpoint.path)?;

    let mut request = reqwest::Request::new(endpoint.method.clone(), url);
    *request.timeout_mut() = Some(timeout);
    request
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

    match &endpoint.task {
        Task::Plain => {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        Task::Parameters(parameters) => params::encode(parameters, &mut request)?,
    }

    Ok(request)
}

fn join_url(base_url: &str, api_key: &str, path: &str) -> Result<Url, NetworkError> {
    if base_url.is_empty() {
        return Err(NetworkError::MissingUrl);
    }
    let mut url = Url::parse(base_url).map_err(|_| NetworkError::MissingUrl)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| NetworkError::MissingUrl)?;
        segments.pop_if_empty().push(api_key);
        // A relative path may span several segments; pushing it whole would
        // percent-encode the separators.
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Method;

    #[test]
    fn joins_base_key_and_path() {
        let url = join_url("https://api.example.com", "1", "random.php").unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/1/random.php");
    }

    #[test]
    fn tolerates_trailing_slash_and_nested_paths() {
        let url = join_url(
            "https://www.thecocktaildb.com/api/json/v1/",
            "1",
            "lookup.php",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.thecocktaildb.com/api/json/v1/1/lookup.php"
        );
    }

    #[test]
    fn rejects_unparseable_bases() {
        for base in ["", "not a url", "mailto:someone"] {
            assert!(matches!(
                join_url(base, "1", "random.php"),
                Err(NetworkError::MissingUrl)
            ));
        }
    }

    #[test]
    fn plain_task_sets_json_header_and_no_body() {
        let endpoint = Endpoint::get("https://api.example.com", "random.php");
        let request = build(&endpoint, "1", REQUEST_TIMEOUT).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/1/random.php"
        );
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(request.headers().get(CACHE_CONTROL).unwrap(), "no-store");
        assert!(request.body().is_none());
        assert_eq!(request.timeout(), Some(&REQUEST_TIMEOUT));
    }

    #[test]
    fn parameterized_task_encodes_query_without_json_header() {
        let mut parameters = crate::endpoint::Parameters::new();
        parameters.insert("s".into(), serde_json::json!("margarita"));
        let endpoint = Endpoint::get_with("https://api.example.com", "search.php", parameters);

        let request = build(&endpoint, "1", REQUEST_TIMEOUT).unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/1/search.php?s=margarita"
        );
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }
}
