//! Core annotation values and binary annotation keys recorded on spans.

pub const CLIENT_SEND: &str = "cs";
pub const CLIENT_SEND_FRAGMENT: &str = "csf";
pub const CLIENT_RECEIVE: &str = "cr";
pub const CLIENT_RECEIVE_FRAGMENT: &str = "crf";
pub const SERVER_SEND: &str = "ss";
pub const SERVER_SEND_FRAGMENT: &str = "ssf";
pub const SERVER_RECEIVE: &str = "sr";
pub const SERVER_RECEIVE_FRAGMENT: &str = "srf";
pub const SERVER_ADDR: &str = "sa";
pub const CLIENT_ADDR: &str = "ca";
pub const LOCAL_COMPONENT: &str = "lc";

/// Annotations logged by an instrumented client.
pub const CORE_CLIENT: [&str; 4] = [
    CLIENT_RECEIVE,
    CLIENT_RECEIVE_FRAGMENT,
    CLIENT_SEND,
    CLIENT_SEND_FRAGMENT,
];

/// Annotations logged by an instrumented server.
pub const CORE_SERVER: [&str; 4] = [
    SERVER_RECEIVE,
    SERVER_RECEIVE_FRAGMENT,
    SERVER_SEND,
    SERVER_SEND_FRAGMENT,
];

pub fn is_core_client(value: &str) -> bool {
    CORE_CLIENT.contains(&value)
}

pub fn is_core_server(value: &str) -> bool {
    CORE_SERVER.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_core_annotations() {
        assert!(is_core_client("csf"));
        assert!(is_core_server("sr"));
        assert!(!is_core_server("cs"));
        assert!(!is_core_client("sa"));
        assert!(!is_core_client("cache miss"));
    }
}
