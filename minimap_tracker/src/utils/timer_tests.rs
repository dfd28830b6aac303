/// Tests for Timer

use super::*;

#[test]
fn new_timer_is_stopped() {
    let timer = Timer::new(2.0);
    assert!(!timer.started());
    assert!(!timer.expired());
}

#[test]
fn update_is_ignored_until_started() {
    let mut timer = Timer::new(2.0);
    timer.update(5.0);

    assert_eq!(timer.elapsed(), 0.0);
    assert!(!timer.expired());
}

#[test]
fn expires_once_the_duration_has_elapsed() {
    let mut timer = Timer::new(2.0);
    timer.start();

    timer.update(1.0);
    assert!(!timer.expired());

    timer.update(1.0);
    assert!(timer.expired());
}

#[test]
fn reset_stops_and_zeroes() {
    let mut timer = Timer::new(2.0);
    timer.start();
    timer.update(3.0);

    timer.reset();

    assert!(!timer.started());
    assert!(!timer.expired());
    assert_eq!(timer.elapsed(), 0.0);
}

#[test]
fn restart_rearms_in_one_step() {
    let mut timer = Timer::new(2.0);
    timer.start();
    timer.update(3.0);
    assert!(timer.expired());

    timer.restart();

    assert!(timer.started());
    assert!(!timer.expired());

    timer.update(2.5);
    assert!(timer.expired());
}
