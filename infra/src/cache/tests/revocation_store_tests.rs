//! Unit tests for the Redis revocation store

use std::time::Duration;

use crate::cache::revocation_store::ttl_seconds;

#[test]
fn test_ttl_seconds_rounds_up() {
    assert_eq!(ttl_seconds(Duration::from_secs(900)), 900);
    assert_eq!(ttl_seconds(Duration::from_millis(1500)), 2);
    assert_eq!(ttl_seconds(Duration::from_millis(10)), 1);
    assert_eq!(ttl_seconds(Duration::ZERO), 1);
}
