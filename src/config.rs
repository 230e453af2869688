//! The configuration of `Router`.

use serde::{Deserialize, Serialize};

/// The settings which change how `Router` resolves a request.
///
/// This type can be deserialized from any format supported by `serde`.
/// Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether a `HEAD` request without a dedicated handler falls back to the
    /// handler registered for `GET`.
    ///
    /// The default value is `false`.
    pub fallback_head: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fallback_head: false,
        }
    }
}

impl Config {
    /// Sets whether the fallback to GET if the handler for HEAD is not registered is enabled or not.
    pub fn fallback_head(mut self, enabled: bool) -> Self {
        self.fallback_head = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_fallback_head() {
        let config: Config = serde_json::from_str(r#"{ "fallback_head": true }"#).unwrap();
        assert_eq!(config, Config::default().fallback_head(true));
    }
}
