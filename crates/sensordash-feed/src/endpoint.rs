//! Server endpoints derived from the configured origin.

use sensordash_core::prelude::*;
use url::Url;

/// Path of the live sensor push channel.
pub const FEED_PATH: &str = "/ws/sensors/";

/// Path of the historical-data query endpoint.
pub const HISTORICAL_PATH: &str = "/api/historical-data/";

/// Path of the security-events query endpoint.
pub const SECURITY_EVENTS_PATH: &str = "/api/security-events/";

/// Validated server origin (`http` or `https`, with a host).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    origin: Url,
}

impl Endpoints {
    /// Parse and validate an origin such as `http://raspberrypi.local:8000`.
    pub fn parse(origin: &str) -> Result<Self> {
        let url = Url::parse(origin.trim())
            .map_err(|e| Error::invalid_origin(origin, e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::invalid_origin(
                    origin,
                    format!("unsupported scheme '{other}', expected http or https"),
                ))
            }
        }

        if url.host_str().is_none() {
            return Err(Error::invalid_origin(origin, "missing host"));
        }

        Ok(Self { origin: url })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Push channel URL: `ws://` for `http` origins, `wss://` for `https`.
    pub fn feed_url(&self) -> Url {
        let mut url = self.at(FEED_PATH);
        let scheme = if self.origin.scheme() == "https" {
            "wss"
        } else {
            "ws"
        };
        // http(s) -> ws(s) stays within the special schemes, so this cannot fail
        let _ = url.set_scheme(scheme);
        url
    }

    /// `GET` URL for historical data over the last `hours`.
    pub fn historical_url(&self, hours: u32) -> Url {
        self.with_hours(HISTORICAL_PATH, hours)
    }

    /// `GET` URL for security events over the last `hours`.
    pub fn security_events_url(&self, hours: u32) -> Url {
        self.with_hours(SECURITY_EVENTS_PATH, hours)
    }

    fn at(&self, path: &str) -> Url {
        let mut url = self.origin.clone();
        url.set_path(path);
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    fn with_hours(&self, path: &str, hours: u32) -> Url {
        let mut url = self.at(path);
        url.query_pairs_mut()
            .append_pair("hours", &hours.to_string());
        url
    }
}
