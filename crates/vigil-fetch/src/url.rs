//! Status endpoint URL construction.

/// Port the status server listens on.
pub const STATUS_PORT: u16 = 8080;

/// Path of the status endpoint.
pub const STATUS_PATH: &str = "/data";

/// Builds the URL of the status endpoint for the given server address.
///
/// A bare host gets the default port appended; an address that already
/// carries a `:port` is used verbatim, so tests can point at stub
/// servers on ephemeral ports.
///
/// # Example
///
/// ```
/// use vigil_fetch::url::status_url;
///
/// assert_eq!(status_url("192.168.1.175"), "http://192.168.1.175:8080/data");
/// assert_eq!(status_url("127.0.0.1:9999"), "http://127.0.0.1:9999/data");
/// ```
#[must_use]
pub fn status_url(server_address: &str) -> String {
    if server_address.contains(':') {
        format!("http://{server_address}{STATUS_PATH}")
    } else {
        format!("http://{server_address}:{STATUS_PORT}{STATUS_PATH}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_url_bare_host() {
        assert_eq!(
            status_url("192.168.1.175"),
            "http://192.168.1.175:8080/data"
        );
    }

    #[test]
    fn test_status_url_hostname() {
        assert_eq!(status_url("detector.local"), "http://detector.local:8080/data");
    }

    #[test]
    fn test_status_url_explicit_port() {
        assert_eq!(status_url("127.0.0.1:3000"), "http://127.0.0.1:3000/data");
    }
}
