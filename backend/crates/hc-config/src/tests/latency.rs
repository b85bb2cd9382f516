use crate::{Config, LatencyConfig};
use crate::tests::{EnvGuard, setup_config_dir};

use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
fn given_default_latency_when_durations_then_match_millis() {
    let latency = LatencyConfig::default();

    assert_that!(latency.sign_in(), eq(Duration::from_millis(500)));
    assert_that!(latency.register(), eq(Duration::from_millis(800)));
    assert_that!(latency.donation(), eq(Duration::from_millis(800)));
    assert_that!(latency.volunteer(), eq(Duration::from_millis(800)));
    assert_that!(latency.password_reset(), eq(Duration::from_millis(1000)));
}

#[test]
fn given_none_latency_when_durations_then_all_zero() {
    let latency = LatencyConfig::none();

    assert_that!(latency.sign_in(), eq(Duration::ZERO));
    assert_that!(latency.password_reset(), eq(Duration::ZERO));
    assert_that!(latency.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_excessive_latency_when_validate_then_error_names_field() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _latency = EnvGuard::set("HC_LATENCY_DONATION_MS", "60000");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        format!("{}", result.unwrap_err()),
        contains_substring("latency.donation_ms")
    );
}
