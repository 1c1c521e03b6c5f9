//! Game entity types: one positioned, sized record with a kind tag.
//!
//! Movement rules differ per kind only in the player clamp; everything else
//! (bounds, velocity step) is shared.

use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in pixel units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Width and height are floored at zero.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w: w.max(0), h: h.max(0) }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Strict overlap: touching edges and empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Score and terminal flag.  Only the collision resolver and reset touch it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        GameState { score: 0, status: GameStatus::Playing }
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub dx: i32,
    pub dy: i32,
    pub kind: EntityKind,
    /// Largest allowed `(x, y)` when the entity is confined to the screen.
    limit: Option<(i32, i32)>,
}

impl Entity {
    pub fn new(kind: EntityKind, x: i32, y: i32, w: i32, h: i32, dx: i32, dy: i32) -> Self {
        Entity { x, y, w: w.max(0), h: h.max(0), dx, dy, kind, limit: None }
    }

    /// Player at the configured spawn point, standing still.
    pub fn player(cfg: &GameConfig) -> Self {
        let (w, h) = (cfg.player.width, cfg.player.height);
        Entity::new(EntityKind::Player, cfg.player_spawn_x, cfg.player_spawn_y, w, h, 0, 0)
            .confined_to(cfg.screen_width, cfg.screen_height)
    }

    /// Keep the whole rectangle inside `[0, width] × [0, height]` after every move.
    pub fn confined_to(mut self, width: i32, height: i32) -> Self {
        self.limit = Some(((width - self.w).max(0), (height - self.h).max(0)));
        self.x = self.x.clamp(0, (width - self.w).max(0));
        self.y = self.y.clamp(0, (height - self.h).max(0));
        self
    }

    /// Enemy entering at `x`, at the configured above-screen offset.
    pub fn enemy(cfg: &GameConfig, x: i32) -> Self {
        Entity::new(
            EntityKind::Enemy,
            x,
            cfg.spawn_y,
            cfg.enemy.width,
            cfg.enemy.height,
            0,
            cfg.enemy_speed,
        )
    }

    /// Projectile leaving from the horizontal centre of `shooter`'s top edge.
    pub fn projectile_from(shooter: &Entity, cfg: &GameConfig) -> Self {
        Entity::new(
            EntityKind::Projectile,
            shooter.x + shooter.w / 2 - 2,
            shooter.y,
            cfg.projectile.width,
            cfg.projectile.height,
            0,
            -cfg.projectile_speed,
        )
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// One tick of movement.  Saturates at the `i32` range instead of wrapping.
    pub fn advance(&mut self) {
        self.x = self.x.saturating_add(self.dx);
        self.y = self.y.saturating_add(self.dy);
        if let Some((max_x, max_y)) = self.limit {
            self.x = self.x.clamp(0, max_x);
            self.y = self.y.clamp(0, max_y);
        }
    }

    /// True once the entity is clear of `field` and still heading away from it.
    pub fn has_left(&self, field: &Rect) -> bool {
        match self.kind {
            EntityKind::Player => false,
            _ => {
                (self.dy < 0 && self.bounds().bottom() <= field.y)
                    || (self.dy > 0 && self.y >= field.bottom())
                    || (self.dx < 0 && self.bounds().right() <= field.x)
                    || (self.dx > 0 && self.x >= field.right())
            }
        }
    }
}
