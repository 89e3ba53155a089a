use std::collections::HashMap;

/// Header view keyed by lower-cased header name.
///
/// Built once per request. Lookups lower-case the requested name, so
/// `get("Content-Type")` and `get("content-type")` resolve the same entry.
/// When two incoming names differ only in case, the one seen last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    /// Normalize raw header pairs into a case-insensitive view.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
                .collect(),
        )
    }

    /// Look up a header value. `None` means the header was not sent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
