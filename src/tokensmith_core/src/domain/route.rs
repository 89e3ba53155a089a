pub const ISSUE_PATH: &str = "/token";
pub const VERIFY_PATH: &str = "/";

/// The logical route a request path maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `POST /token` mints a token around the request body.
    Issue,
    /// `GET /` verifies a bearer token and echoes its data.
    Verify,
    NotFound,
}

impl Route {
    /// Classify a path. Matching is exact: no trailing-slash or case folding.
    pub fn classify(path: &str) -> Self {
        match path {
            ISSUE_PATH => Route::Issue,
            VERIFY_PATH => Route::Verify,
            _ => Route::NotFound,
        }
    }
}
