//! Service address-list parsing.

use serde_json::{json, Value};

/// Parse a comma-separated `host:port` list into an address sequence.
///
/// Each well-formed token becomes a `[host, port]` pair. Tokens without
/// exactly one colon, or with a non-numeric port, are dropped with a debug
/// log; a malformed token never fails the whole override.
#[must_use]
pub fn parse_address_list(raw: &str) -> Value {
    let mut addresses = Vec::new();
    for token in raw.split(',') {
        let parts: Vec<&str> = token.split(':').collect();
        let [host, port] = parts.as_slice() else {
            tracing::debug!(%token, "dropping address token without host:port form");
            continue;
        };
        let Ok(port) = port.trim().parse::<i64>() else {
            tracing::debug!(%token, "dropping address token with non-numeric port");
            continue;
        };
        addresses.push(json!([host, port]));
    }
    Value::Array(addresses)
}
