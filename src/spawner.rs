//! Enemy spawner: one enemy per spawn period, at a random column above the
//! screen.  Periods missed during a stall are not made up.
//!
//! The spawner owns no thread.  It is fed wall time by the game thread and
//! hands back the enemies it produced, so nothing outlives a reset.

use std::time::Duration;

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::Entity;
use crate::timer::Periodic;

#[derive(Clone, Debug)]
pub struct Spawner {
    timer: Periodic,
    running: bool,
    cfg: GameConfig,
}

impl Spawner {
    /// A running spawner whose first period starts now.
    pub fn new(cfg: &GameConfig) -> Self {
        Spawner {
            timer: Periodic::new(cfg.spawn_period()),
            running: true,
            cfg: cfg.clone(),
        }
    }

    /// Feed `dt` of wall time; returns the enemy for a completed period, if
    /// any.  A stall longer than one period still yields a single enemy and
    /// the missed periods are skipped.  A stopped spawner discards the time
    /// and returns nothing.
    pub fn advance(&mut self, dt: Duration, rng: &mut impl Rng) -> Vec<Entity> {
        if !self.running {
            return Vec::new();
        }
        let due = self.timer.advance_capped(dt, 1);
        (0..due)
            .map(|_| {
                let x = rng.gen_range(0..self.cfg.screen_width);
                debug!("spawning enemy at x={x}, y={}", self.cfg.spawn_y);
                Entity::enemy(&self.cfg, x)
            })
            .collect()
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.timer.reset();
    }

    /// Resume with a fresh period.
    pub fn restart(&mut self) {
        self.timer.reset();
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
