use space_shooter::config::GameConfig;
use space_shooter::entities::*;

fn cfg() -> GameConfig {
    GameConfig::default()
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_never_has_negative_size() {
    let r = Rect::new(5, 5, -3, -1);
    assert_eq!(r.w, 0);
    assert_eq!(r.h, 0);

    let e = Entity::new(EntityKind::Enemy, 0, 0, -10, 4, 0, 1);
    assert_eq!(e.bounds().w, 0);
    assert_eq!(e.bounds().h, 4);
}

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert!(a.intersects(&b));
}

#[test]
fn touching_edges_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    let right = Rect::new(10, 0, 10, 10);
    let below = Rect::new(0, 10, 10, 10);
    assert!(!a.intersects(&right));
    assert!(!a.intersects(&below));
}

#[test]
fn empty_rect_never_intersects() {
    let a = Rect::new(0, 0, 10, 10);
    let empty = Rect::new(2, 2, 0, 5);
    assert!(!a.intersects(&empty));
    assert!(!empty.intersects(&a));
}

#[test]
fn intersection_is_commutative() {
    let projectile = Entity::new(EntityKind::Projectile, 100, 100, 15, 75, 0, -5);
    let cases = [
        Entity::new(EntityKind::Enemy, 90, 60, 50, 50, 0, 1),
        Entity::new(EntityKind::Enemy, 115, 100, 50, 50, 0, 1),
        Entity::new(EntityKind::Enemy, 300, 300, 50, 50, 0, 1),
        Entity::new(EntityKind::Enemy, 100, 175, 50, 50, 0, 1),
    ];
    for enemy in &cases {
        assert_eq!(
            projectile.bounds().intersects(&enemy.bounds()),
            enemy.bounds().intersects(&projectile.bounds()),
        );
    }
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_moves_by_velocity() {
    let mut enemy = Entity::enemy(&cfg(), 120);
    let (x, y) = (enemy.x, enemy.y);
    enemy.advance();
    assert_eq!((enemy.x, enemy.y), (x, y + 1));

    let player = Entity::player(&cfg());
    let mut shot = Entity::projectile_from(&player, &cfg());
    let (x, y) = (shot.x, shot.y);
    shot.advance();
    assert_eq!((shot.x, shot.y), (x, y - 5));

    let mut drifting = Entity::new(EntityKind::Enemy, 10, 10, 5, 5, -3, 7);
    drifting.advance();
    assert_eq!((drifting.x, drifting.y), (7, 17));
}

#[test]
fn player_moves_by_velocity_inside_board() {
    let mut player = Entity::player(&cfg());
    player.dx = 2;
    player.dy = -2;
    player.advance();
    assert_eq!((player.x, player.y), (402, 498));
}

#[test]
fn player_clamps_to_board() {
    let c = cfg();
    let mut player = Entity::player(&c);

    player.x = 1;
    player.y = 1;
    player.dx = -2;
    player.dy = -2;
    player.advance();
    assert_eq!((player.x, player.y), (0, 0));

    player.x = c.screen_width - c.player.width - 1;
    player.y = c.screen_height - c.player.height - 1;
    player.dx = 2;
    player.dy = 2;
    player.advance();
    assert_eq!(player.x, 720);
    assert_eq!(player.y, 520);
}

#[test]
fn unconfined_entities_are_not_clamped() {
    let mut enemy = Entity::new(EntityKind::Enemy, 0, -20, 50, 50, -1, 1);
    enemy.advance();
    assert_eq!((enemy.x, enemy.y), (-1, -19));
}

// ── constructors ──────────────────────────────────────────────────────────────

#[test]
fn player_starts_at_spawn_point_standing_still() {
    let p = Entity::player(&cfg());
    assert_eq!(p.kind, EntityKind::Player);
    assert_eq!((p.x, p.y, p.w, p.h), (400, 500, 80, 80));
    assert_eq!((p.dx, p.dy), (0, 0));
}

#[test]
fn projectile_leaves_from_player_centre() {
    let p = Entity::player(&cfg());
    let shot = Entity::projectile_from(&p, &cfg());
    assert_eq!(shot.kind, EntityKind::Projectile);
    assert_eq!(shot.x, 400 + 80 / 2 - 2);
    assert_eq!(shot.y, 500);
    assert_eq!((shot.w, shot.h), (15, 75));
}

#[test]
fn enemy_enters_above_screen() {
    let e = Entity::enemy(&cfg(), 333);
    assert_eq!(e.kind, EntityKind::Enemy);
    assert_eq!((e.x, e.y), (333, -20));
    assert_eq!((e.w, e.h, e.dy), (50, 50, 1));
}

// ── has_left ──────────────────────────────────────────────────────────────────

#[test]
fn projectile_leaves_through_the_top() {
    let field = cfg().field();
    let mut shot = Entity::new(EntityKind::Projectile, 100, -74, 15, 75, 0, -5);
    assert!(!shot.has_left(&field));
    shot.advance();
    assert!(shot.has_left(&field));
}

#[test]
fn enemy_leaves_through_the_bottom() {
    let field = cfg().field();
    let mut enemy = Entity::new(EntityKind::Enemy, 100, 599, 50, 50, 0, 1);
    assert!(!enemy.has_left(&field));
    enemy.advance();
    assert!(enemy.has_left(&field));
}

#[test]
fn freshly_spawned_enemy_has_not_left() {
    let c = cfg();
    let enemy = Entity::enemy(&c, 10);
    assert!(!enemy.has_left(&c.field()));
}

#[test]
fn enemy_above_field_is_still_arriving() {
    let field = cfg().field();
    let enemy = Entity::new(EntityKind::Enemy, 100, -500, 50, 50, 0, 1);
    assert!(!enemy.has_left(&field));
}

#[test]
fn default_game_state_is_playing_with_zero_score() {
    let s = GameState::default();
    assert_eq!(s.score, 0);
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn advance_saturates_instead_of_overflowing() {
    let mut runaway = Entity::new(EntityKind::Projectile, i32::MAX - 1, i32::MIN + 1, 15, 75, 5, -5);
    runaway.advance();
    assert_eq!((runaway.x, runaway.y), (i32::MAX, i32::MIN));

    let mut player = Entity::player(&GameConfig::default());
    player.dx = i32::MAX;
    player.advance();
    assert_eq!(player.x, 720);
}
