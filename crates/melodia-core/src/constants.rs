//! Shared constants.

use std::time::Duration;
use uuid::Uuid;

/// Fixed identity used everywhere a request principal would normally come
/// from authentication. Library, history, and profile operations all act on
/// behalf of this user until real authentication lands.
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(1);

/// Lifetime of presigned stream URLs handed out by the media service.
pub const STREAM_URL_TTL: Duration = Duration::from_secs(3600);

/// Prefix for all public API routes.
pub const API_PREFIX: &str = "/api/v1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_user_id_is_stable() {
        assert_eq!(
            DEMO_USER_ID.to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
    }
}
