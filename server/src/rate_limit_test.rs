use super::*;

fn limiter(per_session: usize, global: usize) -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_session_limit: per_session,
        per_session_window: Duration::from_secs(60),
        global_limit: global,
        global_window: Duration::from_secs(60),
    })
}

#[test]
fn defaults_match_documented_limits() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.per_session_limit, 10);
    assert_eq!(cfg.global_limit, 30);
    assert_eq!(cfg.per_session_window, Duration::from_secs(60));
    assert_eq!(cfg.global_window, Duration::from_secs(60));
}

#[test]
fn per_session_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let session = Uuid::new_v4();
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(session, now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(session, now),
        Err(RateLimitError::PerSessionExceeded { limit: 3, window_secs: 60 })
    );
}

#[test]
fn per_session_limit_is_independent_per_session() {
    let rl = limiter(1, 100);
    let now = Instant::now();

    assert!(rl.check_and_record_at(Uuid::new_v4(), now).is_ok());
    assert!(rl.check_and_record_at(Uuid::new_v4(), now).is_ok());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(100, 5);
    let now = Instant::now();

    // Distinct sessions so the per-session limit never trips first.
    for i in 0..5 {
        assert!(rl.check_and_record_at(Uuid::new_v4(), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(Uuid::new_v4(), now),
        Err(RateLimitError::GlobalExceeded { limit: 5, window_secs: 60 })
    );
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(100, 2);
    let now = Instant::now();

    rl.check_and_record_at(Uuid::new_v4(), now).unwrap();
    rl.check_and_record_at(Uuid::new_v4(), now).unwrap();
    for _ in 0..50 {
        assert!(rl.check_and_record_at(Uuid::new_v4(), now).is_err());
    }
    assert_eq!(rl.tracked_sessions(), 2);
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 100);
    let session = Uuid::new_v4();
    let start = Instant::now();

    rl.check_and_record_at(session, start).unwrap();
    rl.check_and_record_at(session, start).unwrap();
    assert!(rl.check_and_record_at(session, start).is_err());

    let later = start + Duration::from_secs(61);
    assert!(rl.check_and_record_at(session, later).is_ok());
}

#[test]
fn expired_sessions_are_forgotten() {
    let rl = limiter(5, 100);
    let start = Instant::now();

    for _ in 0..10 {
        rl.check_and_record_at(Uuid::new_v4(), start).unwrap();
    }
    assert_eq!(rl.tracked_sessions(), 10);

    let later = start + Duration::from_secs(61);
    rl.check_and_record_at(Uuid::new_v4(), later).unwrap();
    assert_eq!(rl.tracked_sessions(), 1);
}
