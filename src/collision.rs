//! Collision resolution for one tick.
//!
//! Pure and total: takes the current projectiles, enemies, player and
//! score, returns the surviving sets, the new score and whether the player
//! was hit.

use std::collections::BTreeSet;

use crate::entities::Entity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub projectiles: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub score: u32,
    /// Enemies destroyed this tick.
    pub hits: u32,
    /// An enemy overlaps the player.
    pub game_over: bool,
}

/// Projectiles against enemies, then surviving enemies against the player.
///
/// Every overlapping (projectile, enemy) pair marks both for removal; each
/// destroyed enemy scores one point no matter how many projectiles hit it,
/// and one projectile can take out several enemies at once.
pub fn resolve(projectiles: &[Entity], enemies: &[Entity], player: &Entity, score: u32) -> Resolution {
    let mut used_projectiles: BTreeSet<usize> = BTreeSet::new();
    let mut killed_enemies: BTreeSet<usize> = BTreeSet::new();

    for (pi, projectile) in projectiles.iter().enumerate() {
        let bounds = projectile.bounds();
        for (ei, enemy) in enemies.iter().enumerate() {
            if bounds.intersects(&enemy.bounds()) {
                used_projectiles.insert(pi);
                killed_enemies.insert(ei);
            }
        }
    }

    let projectiles: Vec<Entity> = projectiles
        .iter()
        .enumerate()
        .filter(|(i, _)| !used_projectiles.contains(i))
        .map(|(_, p)| p.clone())
        .collect();

    let enemies: Vec<Entity> = enemies
        .iter()
        .enumerate()
        .filter(|(i, _)| !killed_enemies.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    let player_bounds = player.bounds();
    let game_over = enemies.iter().any(|e| e.bounds().intersects(&player_bounds));

    let hits = killed_enemies.len() as u32;
    Resolution {
        projectiles,
        enemies,
        score: score.saturating_add(hits),
        hits,
        game_over,
    }
}
