//! Response classification.
//!
//! Maps a status code and body to the executor's next step. The order of the
//! checks matters: an empty 204 is recognised before the general 2xx range,
//! so a 204 with a body is parsed like any other success.

/// HTTP 204 No Content.
pub const NO_CONTENT: u16 = 204;

/// HTTP 429 Too Many Requests.
pub const TOO_MANY_REQUESTS: u16 = 429;

/// What the executor does with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// 204 with an empty body; succeed with a null payload.
    NoContent,
    /// 2xx; parse the body as the expected payload.
    Success,
    /// 429; back off and retry.
    RateLimited,
    /// Anything else, 3xx included; parse the body as an API error.
    Failure,
}

/// Classify a response by status and body text.
pub fn classify(status: u16, body: &str) -> ResponseClass {
    if status == NO_CONTENT && body.is_empty() {
        ResponseClass::NoContent
    } else if (200..300).contains(&status) {
        ResponseClass::Success
    } else if status == TOO_MANY_REQUESTS {
        ResponseClass::RateLimited
    } else {
        ResponseClass::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_requires_empty_body() {
        assert_eq!(classify(204, ""), ResponseClass::NoContent);
        assert_eq!(classify(204, "{}"), ResponseClass::Success);
    }

    #[test]
    fn test_success_range() {
        assert_eq!(classify(200, "{}"), ResponseClass::Success);
        assert_eq!(classify(201, "{}"), ResponseClass::Success);
        assert_eq!(classify(299, ""), ResponseClass::Success);
    }

    #[test]
    fn test_rate_limited() {
        assert_eq!(classify(429, ""), ResponseClass::RateLimited);
    }

    #[test]
    fn test_everything_else_fails() {
        assert_eq!(classify(400, "{}"), ResponseClass::Failure);
        assert_eq!(classify(404, "{}"), ResponseClass::Failure);
        assert_eq!(classify(500, ""), ResponseClass::Failure);
        assert_eq!(classify(302, ""), ResponseClass::Failure);
        assert_eq!(classify(199, ""), ResponseClass::Failure);
    }
}
