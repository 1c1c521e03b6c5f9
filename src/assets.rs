//! Sprite loading.
//!
//! A sprite is a small text file of glyph rows (`player.txt`, `enemy.txt`,
//! `projectile.txt` under the assets directory).  A missing or unreadable
//! file is never fatal: the kind falls back to a solid placeholder block in
//! a fixed colour and a warning is logged.

use std::path::{Path, PathBuf};

use crossterm::style::Color;
use log::warn;

use crate::entities::EntityKind;

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("cannot read sprite {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite {0} is empty")]
    Empty(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Glyph rows, drawn from the entity's top-left cell.
    Art(Vec<String>),
    /// Fill the entity's whole footprint.
    Block,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub shape: Shape,
    pub color: Color,
}

impl Sprite {
    /// Stand-in used when a sprite file cannot be loaded.
    pub fn placeholder(kind: EntityKind) -> Self {
        let color = match kind {
            EntityKind::Player => Color::Green,
            EntityKind::Enemy => Color::Red,
            EntityKind::Projectile => Color::Yellow,
        };
        Sprite { shape: Shape::Block, color }
    }

    pub fn is_placeholder(&self) -> bool {
        self.shape == Shape::Block
    }
}

fn file_name(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Player => "player.txt",
        EntityKind::Enemy => "enemy.txt",
        EntityKind::Projectile => "projectile.txt",
    }
}

fn art_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Player => Color::White,
        EntityKind::Enemy => Color::Green,
        EntityKind::Projectile => Color::Cyan,
    }
}

/// Read one sprite file.  Trailing blank lines are dropped.
pub fn load_sprite(dir: &Path, kind: EntityKind) -> Result<Sprite, AssetError> {
    let path = dir.join(file_name(kind));
    let text = std::fs::read_to_string(&path).map_err(|source| AssetError::Io {
        path: path.clone(),
        source,
    })?;

    let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(AssetError::Empty(path));
    }
    Ok(Sprite { shape: Shape::Art(rows), color: art_color(kind) })
}

/// One sprite per entity kind.
#[derive(Clone, Debug)]
pub struct Sprites {
    pub player: Sprite,
    pub enemy: Sprite,
    pub projectile: Sprite,
}

impl Sprites {
    /// Load every sprite from `dir`, substituting placeholders for failures.
    pub fn load(dir: &Path) -> Self {
        let load = |kind| {
            load_sprite(dir, kind).unwrap_or_else(|err| {
                warn!("{err}; using placeholder for {kind:?}");
                Sprite::placeholder(kind)
            })
        };
        Sprites {
            player: load(EntityKind::Player),
            enemy: load(EntityKind::Enemy),
            projectile: load(EntityKind::Projectile),
        }
    }

    pub fn get(&self, kind: EntityKind) -> &Sprite {
        match kind {
            EntityKind::Player => &self.player,
            EntityKind::Enemy => &self.enemy,
            EntityKind::Projectile => &self.projectile,
        }
    }
}
