use std::collections::HashMap;

lazy_static! {
    static ref REASON_PHRASES: HashMap<u16, &'static str> = {
        let mut m = HashMap::new();
        m.insert(100, "Continue");
        m.insert(101, "Switching Protocols");
        m.insert(200, "OK");
        m.insert(201, "Created");
        m.insert(202, "Accepted");
        m.insert(203, "Non-Authoritative Information");
        m.insert(204, "No Content");
        m.insert(205, "Reset Content");
        m.insert(206, "Partial Content");
        m.insert(301, "Moved Permanently");
        m.insert(304, "Not Modified");
        m.insert(305, "Use Proxy");
        m.insert(307, "Temporary Redirect");
        m.insert(400, "Bad Request");
        m.insert(401, "Unauthorized");
        m.insert(403, "Forbidden");
        m.insert(404, "Not Found");
        m.insert(405, "Method Not Allowed");
        m.insert(406, "Not Acceptable");
        m.insert(407, "Proxy Authentication Required");
        m.insert(408, "Request Timeout");
        m.insert(409, "Conflict");
        m.insert(410, "Gone");
        m.insert(411, "Length Required");
        m.insert(412, "Precondition Failed");
        m.insert(413, "Request Entity Too Large");
        m.insert(414, "Request-URI Too Long");
        m.insert(415, "Unsupported Media Type");
        m.insert(416, "Requested Range Not Satisfiable");
        m.insert(417, "Expectation Failed");
        m.insert(500, "Internal Server Error");
        m.insert(501, "Not Implemented");
        m.insert(502, "Bad Gateway");
        m.insert(503, "Service Unavailable");
        m.insert(505, "HTTP Version Not Supported");
        m
    };
}

/// Looks up the canonical reason phrase for a status code.
///
/// The table covers a curated subset of the registered codes, not the full
/// IANA registry. Codes without an entry return `None`; emission falls back
/// to `"Unknown"` for those.
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    REASON_PHRASES.get(&code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_curated_codes() {
        assert_eq!(reason_phrase(200), Some("OK"));
        assert_eq!(reason_phrase(404), Some("Not Found"));
        assert_eq!(reason_phrase(416), Some("Requested Range Not Satisfiable"));
        assert_eq!(reason_phrase(505), Some("HTTP Version Not Supported"));
    }

    #[test]
    fn should_not_resolve_codes_outside_the_curated_set() {
        // assigned codes the table deliberately leaves out
        assert_eq!(reason_phrase(302), None);
        assert_eq!(reason_phrase(402), None);
        assert_eq!(reason_phrase(418), None);
        assert_eq!(reason_phrase(504), None);
        // and codes that were never assigned
        assert_eq!(reason_phrase(299), None);
    }
}
