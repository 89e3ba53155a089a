use serde::{Deserialize, Serialize};

/// Response returned to the invocation shell.
///
/// `body` is either empty or a JSON document followed by a single newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// A response with no body.
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            body: String::new(),
        }
    }

    /// A response whose body is `value` serialized as JSON plus a trailing newline.
    pub fn json<T>(status_code: u16, value: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        let mut body = serde_json::to_string(value)?;
        body.push('\n');
        Ok(Self { status_code, body })
    }

    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}
