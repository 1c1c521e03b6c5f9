use std::time::{Duration, Instant};

use space_shooter::input::{Controls, Direction, HeldKeys, FIRST_REPEAT_WINDOW, REPEAT_WINDOW};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ── Controls ──────────────────────────────────────────────────────────────────

#[test]
fn opposite_directions_cancel() {
    let mut c = Controls::default();
    c.set(Direction::Left, true);
    c.set(Direction::Up, true);
    assert_eq!(c.velocity(3), (-3, -3));

    c.set(Direction::Right, true);
    c.set(Direction::Down, true);
    assert_eq!(c.velocity(3), (0, 0));

    c.set(Direction::Left, false);
    assert_eq!(c.velocity(3), (3, 0));
}

// ── HeldKeys ──────────────────────────────────────────────────────────────────

#[test]
fn only_the_first_press_is_new() {
    let start = Instant::now();
    let mut held = HeldKeys::default();
    assert!(held.press(Direction::Left, start));
    assert!(!held.press(Direction::Left, start + ms(10)));
    assert!(held.press(Direction::Up, start + ms(10)));
}

#[test]
fn release_reports_only_held_directions() {
    let start = Instant::now();
    let mut held = HeldKeys::default();
    assert!(!held.release(Direction::Right));

    held.press(Direction::Right, start);
    assert!(held.release(Direction::Right));
    assert!(!held.release(Direction::Right));
    assert!(held.expire(start + ms(10_000)).is_empty());
}

#[test]
fn fresh_press_survives_the_initial_repeat_delay() {
    let start = Instant::now();
    let mut held = HeldKeys::default();
    held.press(Direction::Left, start);

    // Typical initial key-repeat delays are 500 to 660 ms.
    assert!(held.expire(start + ms(660)).is_empty());
    assert!(held.expire(start + FIRST_REPEAT_WINDOW).is_empty());
    assert_eq!(
        held.expire(start + FIRST_REPEAT_WINDOW + ms(1)),
        vec![Direction::Left]
    );
}

#[test]
fn repeating_key_expires_after_the_short_window() {
    let start = Instant::now();
    let mut held = HeldKeys::default();
    held.press(Direction::Down, start);
    let repeat = start + ms(500);
    held.press(Direction::Down, repeat);

    assert!(held.expire(repeat + REPEAT_WINDOW).is_empty());
    assert_eq!(held.expire(repeat + REPEAT_WINDOW + ms(1)), vec![Direction::Down]);

    // Expired keys count as new on the next press.
    assert!(held.press(Direction::Down, repeat + ms(1000)));
}

#[test]
fn expiry_is_per_direction() {
    let start = Instant::now();
    let mut held = HeldKeys::default();
    held.press(Direction::Left, start);
    held.press(Direction::Left, start + ms(100));
    held.press(Direction::Up, start + ms(100));

    let expired = held.expire(start + ms(400));
    assert_eq!(expired, vec![Direction::Left]);
    assert!(!held.press(Direction::Up, start + ms(450)));
}
