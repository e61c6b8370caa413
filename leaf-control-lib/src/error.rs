/// All errors the device client can return.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Building the HTTP client or performing a REST call failed
    #[error("{action} failed: {source}")]
    Http {
        action: String,
        #[source]
        source: reqwest::Error,
    },

    /// Some socket error while resolving the device or sending a datagram
    #[error("socket {action} error: {source}")]
    Socket {
        action: String,
        #[source]
        source: std::io::Error,
    },

    /// The device host resolved, but to no address at all
    #[error("host {0} did not resolve to any address")]
    Resolve(String),

    /// Used when failing to dump json
    #[error("failed to encode json: {0}")]
    JsonEncode(#[source] serde_json::Error),

    /// Used when a document has an unexpected shape
    #[error("failed to decode json: {0}")]
    JsonDecode(#[source] serde_json::Error),

    /// A response body that didn't decode, with the status it came with
    #[error("failed to decode response to GET {path} (HTTP {status}): {source}")]
    ResponseDecode {
        path: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// A caller supplied value outside of its documented range
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A caller supplied value that isn't a number at all
    #[error("{name} must be an integer {min}-{max}, got {input:?}")]
    InvalidValue {
        name: &'static str,
        input: String,
        min: i64,
        max: i64,
    },

    /// The host string can't be turned into a device endpoint
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The external control datagram carries its panel count as a u16
    #[error("expected between 0-{} panels, got {0}", u16::MAX)]
    TooManyPanels(usize),
}

impl Error {
    /// Create a new HTTP error. The URL carries the access token, so it's dropped.
    pub fn http(action: &str, source: reqwest::Error) -> Self {
        Error::Http {
            action: action.to_string(),
            source: source.without_url(),
        }
    }

    /// Create a new socket error
    pub fn socket(action: &str, source: std::io::Error) -> Self {
        Error::Socket {
            action: action.to_string(),
            source,
        }
    }

    /// Create a new out of range error
    pub fn out_of_range(name: &'static str, value: i64, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            name,
            value,
            min,
            max,
        }
    }

    /// If the error came from the network rather than from the data.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http { .. } | Error::Socket { .. } | Error::Resolve(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_panels_message() {
        let err = Error::TooManyPanels(65536);
        assert_eq!(err.to_string(), "expected between 0-65535 panels, got 65536");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range("hue", 400, 0, 360);
        assert_eq!(err.to_string(), "hue must be between 0 and 360, got 400");
    }

    #[test]
    fn test_response_decode_message_has_status() {
        let source = serde_json::from_str::<Vec<String>>("").unwrap_err();
        let err = Error::ResponseDecode {
            path: "effects/effectsList".to_string(),
            status: 401,
            source,
        };
        assert!(err
            .to_string()
            .starts_with("failed to decode response to GET effects/effectsList (HTTP 401): "));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_socket_is_transport() {
        let err = Error::socket(
            "send",
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        );
        assert!(err.is_transport());
        assert!(err.to_string().starts_with("socket send error"));
    }
}
