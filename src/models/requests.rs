use axum::extract::Query;
use axum::http::Uri;
use std::time::Duration;

use crate::error::{BridgeError, Result};

/// Query parameters of a command request.
///
/// Names may repeat; lookups always use the first value.
#[derive(Debug, Clone, Default)]
pub struct CommandParams {
    pairs: Vec<(String, String)>,
}

impl CommandParams {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse the query string of `uri`. A query that cannot be decoded is
    /// treated as empty.
    pub fn from_uri(uri: &Uri) -> Self {
        match Query::<Vec<(String, String)>>::try_from_uri(uri) {
            Ok(Query(pairs)) => Self { pairs },
            Err(e) => {
                tracing::debug!("Ignoring undecodable query on {}: {}", uri.path(), e);
                Self::default()
            }
        }
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First value parsed as a base-10 integer. Unparseable is the same as absent.
    pub fn int(&self, name: &str) -> Option<i32> {
        self.first(name).and_then(|v| v.parse().ok())
    }

    /// All of `names` as integers, or `MissingParameters(listing)` if any is
    /// absent or malformed
    pub fn require_ints<const N: usize>(
        &self,
        names: [&str; N],
        listing: &'static str,
    ) -> Result<[i32; N]> {
        let mut values = [0; N];
        for (slot, name) in values.iter_mut().zip(names) {
            *slot = self
                .int(name)
                .ok_or(BridgeError::MissingParameters(listing))?;
        }
        Ok(values)
    }

    pub fn require_str(&self, name: &str, listing: &'static str) -> Result<&str> {
        self.first(name).ok_or(BridgeError::MissingParameters(listing))
    }

    /// Optional duration in milliseconds. Absent, non-numeric and negative
    /// values all fall back to `default`.
    pub fn millis_or(&self, name: &str, default: Duration) -> Duration {
        self.first(name)
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_first_value_wins() {
        let params = CommandParams::from_uri(&uri("/tap?x=1&x=2&y=3"));
        assert_eq!(params.int("x"), Some(1));
        assert_eq!(params.int("y"), Some(3));
    }

    #[test]
    fn test_malformed_is_absent() {
        let params = CommandParams::from_pairs([("x", "12px"), ("y", "")]);
        assert_eq!(params.int("x"), None);
        assert_eq!(params.int("y"), None);
        assert_eq!(params.int("z"), None);
    }

    #[test]
    fn test_require_ints() {
        let params = CommandParams::from_pairs([("x", "100"), ("y", "-200")]);
        assert_eq!(params.require_ints(["x", "y"], "x, y").unwrap(), [100, -200]);

        let params = CommandParams::from_pairs([("y", "200")]);
        let err = params.require_ints(["x", "y"], "x, y").unwrap_err();
        assert_eq!(err.to_string(), "missing parameters: x, y");
    }

    #[test]
    fn test_millis_default() {
        let default = Duration::from_millis(300);
        let cases = [
            ("duration=750", Duration::from_millis(750)),
            ("duration=abc", default),
            ("duration=-5", default),
            ("", default),
        ];
        for (query, expected) in cases {
            let params = CommandParams::from_uri(&uri(&format!("/swipe?{}", query)));
            assert_eq!(params.millis_or("duration", default), expected, "{}", query);
        }
    }

    #[test]
    fn test_text_decoding() {
        let params = CommandParams::from_uri(&uri("/input?text=hello+world%21"));
        assert_eq!(params.first("text"), Some("hello world!"));
    }
}
