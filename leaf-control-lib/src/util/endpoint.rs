use std::fmt;

use derivative::Derivative;

use crate::error::{Error, Result};

/// The REST port the panels listen on when the host string doesn't name one.
pub const DEFAULT_API_PORT: u16 = 16021;

/// Where the device lives and the token that authorizes every request.
///
/// The token is kept out of `Debug` output, it grants full control of the device.
#[derive(Derivative)]
#[derivative(Debug)]
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceEndpoint {
    host: String,
    port: u16,
    #[derivative(Debug = "ignore")]
    access_token: String,
}

impl DeviceEndpoint {
    pub fn new(host: &str, port: u16, access_token: &str) -> Result<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(Error::InvalidEndpoint("host is empty".to_string()));
        }
        if access_token.trim().is_empty() {
            return Err(Error::InvalidEndpoint("access token is empty".to_string()));
        }
        Ok(DeviceEndpoint {
            host: host.to_string(),
            port,
            access_token: access_token.trim().to_string(),
        })
    }

    /**
    Parses `name`, `name:port`, `1.2.3.4:port` or `[v6]:port`.

    A bare name gets [DEFAULT_API_PORT].
     */
    pub fn parse(host: &str, access_token: &str) -> Result<Self> {
        let host = host.trim();
        let bracketed = host.starts_with('[');
        match host.rsplit_once(':') {
            // A bare IPv6 address has colons but no brackets, so no port.
            Some((name, port)) if bracketed || !name.contains(':') => {
                if bracketed && !name.ends_with(']') {
                    return DeviceEndpoint::new(host, DEFAULT_API_PORT, access_token);
                }
                let port = port
                    .parse::<u16>()
                    .map_err(|_| Error::InvalidEndpoint(format!("bad port in {}", host)))?;
                DeviceEndpoint::new(name, port, access_token)
            }
            _ => DeviceEndpoint::new(host, DEFAULT_API_PORT, access_token),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// `host:port`, with IPv6 literals bracketed.
    pub fn authority(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Full URL of a REST resource, `path` is relative to the token.
    pub fn url(&self, path: &str) -> String {
        format!(
            "http://{}/api/v1/{}/{}",
            self.authority(),
            self.access_token,
            path
        )
    }
}

impl fmt::Display for DeviceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.authority())
    }
}
