//! PRTG API credentials and query-string authentication

use url::form_urlencoded;

use crate::config::Config;

/// Form-encode a value for use in a query string (space becomes `+`)
pub fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Percent-encoded credentials for the PRTG HTTP API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    passhash: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("uses_passhash", &self.uses_passhash())
            .finish()
    }
}

impl Credentials {
    /// Build credentials from raw (unencoded) values
    pub fn new(username: &str, password: &str, passhash: &str) -> Self {
        Self {
            username: encode_query_value(username),
            password: encode_query_value(password),
            passhash: encode_query_value(passhash),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.username, &config.password, &config.passhash)
    }

    /// The encoded username
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn uses_passhash(&self) -> bool {
        !self.passhash.is_empty()
    }

    /// Append `&passhash=` when a passhash is set, otherwise `&password=`.
    ///
    /// Never both. An empty password is still appended.
    pub fn append_to(&self, url: &str) -> String {
        if self.uses_passhash() {
            format!("{}&passhash={}", url, self.passhash)
        } else {
            format!("{}&password={}", url, self.password)
        }
    }
}

/// Mask password and passhash values so a URL can be logged
pub fn redact(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key @ ("password" | "passhash"), _)) => format!("{}=***", key),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}
