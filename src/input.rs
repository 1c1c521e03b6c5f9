//! Player input, independent of any terminal or window toolkit.

use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Press(Direction),
    Release(Direction),
    Fire,
}

/// Which directions are currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Controls {
    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// Velocity for the held set; opposite directions cancel.
    pub fn velocity(&self, speed: i32) -> (i32, i32) {
        let axis = |neg: bool, pos: bool| match (neg, pos) {
            (true, false) => -speed,
            (false, true) => speed,
            _ => 0,
        };
        (axis(self.left, self.right), axis(self.up, self.down))
    }
}

// ── Held keys without release events ──────────────────────────────────────────

/// How long a fresh press stays live before its first repeat arrives.  Must
/// outlast the OS initial repeat delay (about 500 ms, 660 ms on X11).
pub const FIRST_REPEAT_WINDOW: Duration = Duration::from_millis(750);

/// How long a repeating key stays live between repeats.
pub const REPEAT_WINDOW: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug)]
struct Held {
    seen: Instant,
    repeating: bool,
}

/// Tracks held directions for terminals that only report presses, where
/// key-repeat shows up as more presses and a release is just silence.
#[derive(Clone, Debug, Default)]
pub struct HeldKeys {
    keys: HashMap<Direction, Held>,
}

impl HeldKeys {
    /// Record a press or repeat.  Returns true when the direction was not
    /// already held.
    pub fn press(&mut self, direction: Direction, now: Instant) -> bool {
        match self.keys.get_mut(&direction) {
            Some(held) => {
                held.seen = now;
                held.repeating = true;
                false
            }
            None => {
                self.keys.insert(direction, Held { seen: now, repeating: false });
                true
            }
        }
    }

    /// Returns true when the direction was held.
    pub fn release(&mut self, direction: Direction) -> bool {
        self.keys.remove(&direction).is_some()
    }

    /// Drop directions that went quiet for longer than their window and
    /// return them.
    pub fn expire(&mut self, now: Instant) -> Vec<Direction> {
        let mut expired = Vec::new();
        self.keys.retain(|&direction, held| {
            let window = if held.repeating { REPEAT_WINDOW } else { FIRST_REPEAT_WINDOW };
            let live = now.saturating_duration_since(held.seen) <= window;
            if !live {
                expired.push(direction);
            }
            live
        });
        expired
    }
}
