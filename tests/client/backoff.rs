use std::time::Duration;

use stockdex_rs::Backoff;

fn exponential() -> Backoff {
    Backoff::Exponential {
        base: Duration::from_millis(200),
        factor: 2.0,
        max: Duration::from_secs(3),
    }
}

#[test]
fn exponential_backoff_grows_then_caps() {
    let backoff = exponential();
    assert_eq!(backoff.delay(0), Duration::from_millis(200));
    assert_eq!(backoff.delay(1), Duration::from_millis(400));
    assert_eq!(backoff.delay(3), Duration::from_millis(1600));
    assert_eq!(backoff.delay(4), Duration::from_secs(3));
}

#[test]
fn exponential_backoff_saturates_for_large_attempts() {
    let backoff = exponential();
    assert_eq!(backoff.delay(70), Duration::from_secs(3));
    assert_eq!(backoff.delay(5_000), Duration::from_secs(3));
    assert_eq!(backoff.delay(u32::MAX), Duration::from_secs(3));
}

#[test]
fn degenerate_factors_fall_back_to_max() {
    let max = Duration::from_secs(1);
    let negative = Backoff::Exponential {
        base: Duration::from_millis(10),
        factor: -2.0,
        max,
    };
    let nan = Backoff::Exponential {
        base: Duration::from_millis(10),
        factor: f64::NAN,
        max,
    };
    assert_eq!(negative.delay(1), max);
    assert_eq!(nan.delay(1), max);
}

#[test]
fn fixed_backoff_ignores_attempt() {
    let backoff = Backoff::Fixed(Duration::from_millis(5));
    assert_eq!(backoff.delay(0), Duration::from_millis(5));
    assert_eq!(backoff.delay(100), Duration::from_millis(5));
}
