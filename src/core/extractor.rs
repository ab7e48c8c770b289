use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};

/// Boolean switches read from the query string.
///
/// A flag is set when its key is present, whatever the value: `?open`,
/// `?open=` and `?open=0` all set `open`. Built once per request; routes only
/// look at the flags they care about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryFlags {
    pub open: bool,
    pub closed: bool,
    pub simple: bool,
    pub verbose: bool,
}

impl QueryFlags {
    pub fn from_uri(uri: &Uri) -> Self {
        let params = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(params)| params)
            .unwrap_or_default();
        let has = |key: &str| params.iter().any(|(k, _)| k == key);

        Self {
            open: has("open"),
            closed: has("closed"),
            simple: has("simple"),
            verbose: has("verbose"),
        }
    }
}

impl<S> FromRequestParts<S> for QueryFlags
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_uri(&parts.uri))
    }
}
