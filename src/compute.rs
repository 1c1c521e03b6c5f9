//! Game loop and Playing/GameOver state machine.
//!
//! `GameWorld` owns every entity, the score and the spawner.  The front-end
//! feeds it wall time (`elapse`), input (`handle_input`) and fixed ticks
//! (`tick`); all randomness comes through an injected RNG so tests can use a
//! seeded one.

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::collision::resolve;
use crate::config::GameConfig;
use crate::entities::{Entity, GameState, GameStatus};
use crate::input::{Controls, Direction, InputEvent};
use crate::spawner::Spawner;

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Entities advanced; still playing.
    Running,
    /// The player was hit on this tick.  Reported once per session.
    GameOver,
    /// Already over; nothing moved.
    Halted,
}

#[derive(Clone, Debug)]
pub struct GameWorld {
    pub player: Entity,
    pub projectiles: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub state: GameState,
    pub ticks: u64,
    controls: Controls,
    /// Shots fired since the last tick.
    pending_shots: Vec<Entity>,
    /// Enemies produced by the spawner since the last tick.
    pending_spawns: Vec<Entity>,
    spawner: Spawner,
    cfg: GameConfig,
}

impl GameWorld {
    pub fn new(cfg: &GameConfig) -> Self {
        GameWorld {
            player: Entity::player(cfg),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            state: GameState::default(),
            ticks: 0,
            controls: Controls::default(),
            pending_shots: Vec::new(),
            pending_spawns: Vec::new(),
            spawner: Spawner::new(cfg),
            cfg: cfg.clone(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    /// Enemies waiting to join the field on the next tick.
    pub fn pending_spawns(&self) -> &[Entity] {
        &self.pending_spawns
    }

    /// Shots waiting to join the field on the next tick.
    pub fn pending_shots(&self) -> &[Entity] {
        &self.pending_shots
    }

    // ── Time & input ──────────────────────────────────────────────────────────

    /// Feed wall time to the spawner.  Its enemies are queued until the next
    /// tick so the entity lists only change inside `tick`.
    pub fn elapse(&mut self, dt: Duration, rng: &mut impl Rng) {
        if self.state.status != GameStatus::Playing {
            return;
        }
        let spawned = self.spawner.advance(dt, rng);
        self.pending_spawns.extend(spawned);
    }

    /// Ignored once the game is over.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.state.status != GameStatus::Playing {
            return;
        }
        match event {
            InputEvent::Press(direction) => self.steer(direction, true),
            InputEvent::Release(direction) => self.steer(direction, false),
            InputEvent::Fire => {
                let shot = Entity::projectile_from(&self.player, &self.cfg);
                self.pending_shots.push(shot);
            }
        }
    }

    fn steer(&mut self, direction: Direction, held: bool) {
        self.controls.set(direction, held);
        let (dx, dy) = self.controls.velocity(self.cfg.player_speed);
        self.player.dx = dx;
        self.player.dy = dy;
    }

    // ── Per-tick update ───────────────────────────────────────────────────────

    /// Advance the simulation by one fixed step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status == GameStatus::GameOver {
            return TickOutcome::Halted;
        }

        // ── 1. Drain queued shots and spawns ─────────────────────────────────
        self.projectiles.append(&mut self.pending_shots);
        self.enemies.append(&mut self.pending_spawns);

        // ── 2. Move everything ───────────────────────────────────────────────
        self.player.advance();
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        for enemy in &mut self.enemies {
            enemy.advance();
        }

        // ── 3. Collisions ────────────────────────────────────────────────────
        let resolution = resolve(&self.projectiles, &self.enemies, &self.player, self.state.score);
        if resolution.hits > 0 {
            debug!("{} enemies destroyed, score {}", resolution.hits, resolution.score);
        }
        self.projectiles = resolution.projectiles;
        self.enemies = resolution.enemies;
        self.state.score = resolution.score;

        // ── 4. Drop whatever has left the field ──────────────────────────────
        let field = self.cfg.field();
        self.projectiles.retain(|p| !p.has_left(&field));
        self.enemies.retain(|e| !e.has_left(&field));

        self.ticks += 1;

        // ── 5. Status ────────────────────────────────────────────────────────
        if resolution.game_over {
            self.state.status = GameStatus::GameOver;
            self.spawner.stop();
            self.pending_spawns.clear();
            info!("game over after {} ticks, score {}", self.ticks, self.state.score);
            return TickOutcome::GameOver;
        }
        TickOutcome::Running
    }

    // ── Reset ─────────────────────────────────────────────────────────────────

    /// Fresh session: default player, empty field, zero score, spawner
    /// restarted, back to Playing.
    pub fn reset(&mut self) {
        self.player = Entity::player(&self.cfg);
        self.projectiles.clear();
        self.enemies.clear();
        self.pending_shots.clear();
        self.pending_spawns.clear();
        self.controls = Controls::default();
        self.state = GameState::default();
        self.ticks = 0;
        self.spawner.restart();
        debug!("game reset");
    }
}
