//! End-to-end turn scenarios driven through `World::step`

use holy_diver::core::rng::seeded;
use holy_diver::core::{
    ActionOutcome, IlluminateOutcome, Layout, MoveOutcome, StepReport, TickReport, TileView,
    World,
};
use holy_diver::types::{
    CollectibleKind, DeathCause, Direction, EnemyKind, Intent, Pos, MAX_BATTERY, MAX_HEALTH,
    MAX_OXYGEN,
};

fn open_world(layout: Layout) -> World {
    World::new(layout, seeded(99))
}

#[test]
fn four_moves_cost_eight_oxygen_and_a_wall_bump_costs_two_more() {
    let mut world = open_world(Layout::empty(Pos::new(14, 5)));

    for _ in 0..4 {
        world.step(Intent::Move(Direction::Right));
    }
    assert_eq!(world.player().pos(), Pos::new(18, 5));
    assert_eq!(world.player().oxygen(), 92);

    // x=19 is the border wall
    let report = world.step(Intent::Move(Direction::Right));
    assert_eq!(report.action, ActionOutcome::Move(MoveOutcome::Blocked));
    assert_eq!(world.player().pos(), Pos::new(18, 5));
    assert_eq!(world.player().oxygen(), 90);
}

#[test]
fn battery_runs_out_after_twenty_illuminations() {
    let mut world = open_world(Layout::empty(Pos::new(5, 5)));

    for _ in 0..20 {
        let report = world.step(Intent::Illuminate(Direction::Down));
        assert_eq!(
            report.action,
            ActionOutcome::Illuminate(IlluminateOutcome::Lit { enemies: 0 })
        );
    }
    assert_eq!(world.player().battery(), 0);

    let report = world.step(Intent::Illuminate(Direction::Up));
    assert_eq!(
        report.action,
        ActionOutcome::Illuminate(IlluminateOutcome::NoBattery)
    );
    assert_eq!(world.player().battery(), 0);
    assert!(!world.visibility().is_visible(Pos::new(5, 4)));
    // Lamp use never touches oxygen or health
    assert_eq!(world.player().oxygen(), MAX_OXYGEN);
    assert_eq!(world.player().health(), MAX_HEALTH);
}

#[test]
fn coin_scores_once() {
    let layout = Layout::empty(Pos::new(5, 5)).with_collectible(Pos::new(6, 5), CollectibleKind::Coin);
    let mut world = open_world(layout);

    let report = world.step(Intent::Move(Direction::Right));
    assert_eq!(
        report.action,
        ActionOutcome::Move(MoveOutcome::Moved {
            collected: Some(CollectibleKind::Coin)
        })
    );
    assert_eq!(world.score(), 50);

    world.step(Intent::Move(Direction::Left));
    world.step(Intent::Move(Direction::Right));
    assert_eq!(world.score(), 50);
    assert_eq!(world.collectibles().remaining(), 0);
}

#[test]
fn supplies_refill_without_exceeding_maximum() {
    let layout = Layout::empty(Pos::new(5, 5))
        .with_collectible(Pos::new(6, 5), CollectibleKind::OxygenTank)
        .with_collectible(Pos::new(6, 6), CollectibleKind::BatteryPack);
    let mut world = open_world(layout);

    world.step(Intent::Illuminate(Direction::Up));
    world.step(Intent::Move(Direction::Right));
    assert_eq!(world.player().oxygen(), MAX_OXYGEN);
    assert_eq!(world.score(), 20);

    world.step(Intent::Move(Direction::Down));
    assert_eq!(world.player().battery(), MAX_BATTERY);
    assert_eq!(world.score(), 40);
}

#[test]
fn bumping_an_enemy_until_death_ends_the_run() {
    let layout = Layout::empty(Pos::new(5, 5)).with_enemy(Pos::new(6, 5), EnemyKind::Stationary);
    let mut world = open_world(layout);

    for i in 0..5 {
        let report = world.step(Intent::Move(Direction::Right));
        assert_eq!(
            report.action,
            ActionOutcome::Move(MoveOutcome::Bumped { damage: 20 })
        );
        if i < 4 {
            assert!(report.ended.is_none());
        } else {
            assert_eq!(report.ended, Some(DeathCause::Health));
        }
    }
    assert!(world.is_over());
    assert_eq!(world.player().pos(), Pos::new(5, 5));
    assert_eq!(world.player().oxygen(), MAX_OXYGEN);

    // Nothing but reset acts after the end
    let report = world.step(Intent::Move(Direction::Left));
    assert_eq!(report.action, ActionOutcome::Ignored);
    assert!(report.tick.is_none());
    assert_eq!(world.player().pos(), Pos::new(5, 5));
    let turn = world.turn();
    world.step(Intent::Illuminate(Direction::Up));
    assert_eq!(world.turn(), turn);
    assert_eq!(world.player().battery(), MAX_BATTERY);

    world.step(Intent::Reset);
    assert!(!world.is_over());
    assert_eq!(world.player().health(), MAX_HEALTH);
    assert_eq!(world.episode_id(), 1);
}

#[test]
fn running_out_of_oxygen_reports_oxygen() {
    let mut world = open_world(Layout::empty(Pos::new(1, 1)));

    // Bump the corner wall until the tank is empty
    let mut ended = None;
    for _ in 0..50 {
        ended = world.step(Intent::Move(Direction::Up)).ended;
    }
    assert_eq!(ended, Some(DeathCause::Oxygen));
    assert_eq!(world.death_cause(), Some(DeathCause::Oxygen));
    assert_eq!(world.snapshot().death_cause, Some(DeathCause::Oxygen));
}

#[test]
fn reset_restores_initial_state_but_keeps_terrain() {
    let layout = Layout::empty(Pos::new(5, 5))
        .with_wall(Pos::new(8, 8))
        .with_collectible(Pos::new(6, 5), CollectibleKind::Coin)
        .with_enemy(Pos::new(5, 6), EnemyKind::Stationary);
    let mut world = open_world(layout);
    let walls = world.grid().wall_count();

    world.step(Intent::Illuminate(Direction::Down));
    world.step(Intent::Move(Direction::Right));
    world.step(Intent::Move(Direction::Right));
    assert_eq!(world.score(), 50);
    assert!(world.enemies()[0].is_active());

    world.step(Intent::Reset);

    assert_eq!(world.player().pos(), Pos::new(5, 5));
    assert_eq!(world.player().health(), MAX_HEALTH);
    assert_eq!(world.player().oxygen(), MAX_OXYGEN);
    assert_eq!(world.player().battery(), MAX_BATTERY);
    assert_eq!(world.score(), 0);
    assert_eq!(world.turn(), 0);
    assert_eq!(world.visibility().revealed_count(), 1);
    assert_eq!(world.collectibles().remaining(), 1);
    assert!(!world.enemies()[0].is_active());
    assert!(!world.enemies()[0].is_visible());
    assert_eq!(world.grid().wall_count(), walls);
    assert!(world.grid().is_wall(Pos::new(8, 8)));
}

#[test]
fn lit_enemy_stays_active_after_the_diver_leaves() {
    let layout = Layout::empty(Pos::new(5, 5)).with_enemy(Pos::new(5, 6), EnemyKind::Stationary);
    let mut world = open_world(layout);

    let report = world.step(Intent::Illuminate(Direction::Down));
    assert_eq!(
        report.action,
        ActionOutcome::Illuminate(IlluminateOutcome::Lit { enemies: 1 })
    );
    assert!(world.enemies()[0].is_active());
    assert_eq!(
        world.tile_view(Pos::new(5, 6)),
        TileView::Enemy(EnemyKind::Stationary)
    );

    for _ in 0..10 {
        world.step(Intent::Move(Direction::Right));
    }
    assert!(world.enemies()[0].is_active());
    assert!(world.enemies()[0].is_visible());
    assert_eq!(world.enemies()[0].pos(), Pos::new(5, 6));
}

#[test]
fn lamp_wakes_a_dormant_moving_enemy() {
    let layout = Layout::empty(Pos::new(5, 5)).with_enemy(Pos::new(7, 5), EnemyKind::Moving);
    let mut world = open_world(layout);

    world.step(Intent::Move(Direction::Right));
    assert!(!world.enemies()[0].is_active());

    let report = world.step(Intent::Illuminate(Direction::Right));
    assert_eq!(
        report.action,
        ActionOutcome::Illuminate(IlluminateOutcome::Lit { enemies: 1 })
    );
    assert!(world.enemies()[0].is_active());
}

#[test]
fn bump_damage_and_enemy_tick_land_in_the_same_step() {
    // One stationary enemy blocks the way, another shares the start tile.
    let layout = Layout::empty(Pos::new(5, 5))
        .with_enemy(Pos::new(6, 5), EnemyKind::Stationary)
        .with_enemy(Pos::new(5, 5), EnemyKind::Stationary);
    let mut world = open_world(layout);

    let report = world.step(Intent::Move(Direction::Right));
    assert_eq!(
        report,
        StepReport {
            intent: Intent::Move(Direction::Right),
            action: ActionOutcome::Move(MoveOutcome::Bumped { damage: 20 }),
            tick: Some(TickReport {
                activated: 1,
                moved: 0,
                hits: 1,
                damage: 20,
            }),
            ended: None,
        }
    );
    assert_eq!(world.player().health(), MAX_HEALTH - 40);
    assert_eq!(world.turn(), 1);

    // The lamp deals no damage; the tick still does.
    let report = world.step(Intent::Illuminate(Direction::Up));
    assert_eq!(
        report.tick,
        Some(TickReport {
            activated: 0,
            moved: 0,
            hits: 1,
            damage: 20,
        })
    );
    assert_eq!(world.player().health(), 40);

    // The bump leaves 20 health; the tick that follows ends the run.
    let report = world.step(Intent::Move(Direction::Right));
    assert_eq!(
        report,
        StepReport {
            intent: Intent::Move(Direction::Right),
            action: ActionOutcome::Move(MoveOutcome::Bumped { damage: 20 }),
            tick: Some(TickReport {
                activated: 0,
                moved: 0,
                hits: 1,
                damage: 20,
            }),
            ended: Some(DeathCause::Health),
        }
    );
    assert!(world.is_over());
}

#[test]
fn lamp_woken_enemy_moves_and_hits_in_the_same_step() {
    let start = Pos::new(5, 5);
    let mut hit_seeds = Vec::new();
    let mut wander_seeds = Vec::new();

    for seed in 0..100 {
        let layout = Layout::empty(start).with_enemy(Pos::new(6, 5), EnemyKind::Moving);
        let mut world = World::new(layout, seeded(seed));

        let report = world.step(Intent::Illuminate(Direction::Right));
        assert_eq!(
            report.action,
            ActionOutcome::Illuminate(IlluminateOutcome::Lit { enemies: 1 })
        );
        let tick = report.tick.unwrap();
        // Already woken by the lamp, so the tick does not count it again
        assert_eq!(tick.activated, 0);

        let enemy = &world.enemies()[0];
        assert!(enemy.is_active());
        if enemy.pos() == start {
            assert_eq!(tick.moved, 1);
            assert_eq!((tick.hits, tick.damage), (1, 15));
            assert_eq!(world.player().health(), MAX_HEALTH - 15);
            hit_seeds.push(seed);
        } else {
            assert_eq!((tick.hits, tick.damage), (0, 0));
            assert_eq!(world.player().health(), MAX_HEALTH);
            if tick.moved == 1 {
                wander_seeds.push(seed);
            }
        }
    }
    assert!(!hit_seeds.is_empty());
    assert!(!wander_seeds.is_empty());

    // Replaying a hitting seed gives the full report
    let layout = Layout::empty(start).with_enemy(Pos::new(6, 5), EnemyKind::Moving);
    let mut world = World::new(layout, seeded(hit_seeds[0]));
    assert_eq!(
        world.step(Intent::Illuminate(Direction::Right)),
        StepReport {
            intent: Intent::Illuminate(Direction::Right),
            action: ActionOutcome::Illuminate(IlluminateOutcome::Lit { enemies: 1 }),
            tick: Some(TickReport {
                activated: 0,
                moved: 1,
                hits: 1,
                damage: 15,
            }),
            ended: None,
        }
    );
}

#[test]
fn moving_enemies_stay_on_open_water() {
    let mut world = World::generated(2024);
    let dirs = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    for i in 0..200 {
        world.step(Intent::Illuminate(dirs[i % 4]));
        world.step(Intent::Move(dirs[(i / 3) % 4]));
        if world.is_over() {
            world.step(Intent::Reset);
        }
        for enemy in world.enemies() {
            assert!(enemy.pos().in_bounds());
            assert!(world.grid().is_open(enemy.pos()));
        }
    }
}

#[test]
fn same_seed_replays_the_same_game() {
    let intents = [
        Intent::Move(Direction::Right),
        Intent::Illuminate(Direction::Down),
        Intent::Move(Direction::Down),
        Intent::Illuminate(Direction::Right),
        Intent::Move(Direction::Right),
        Intent::Move(Direction::Down),
        Intent::Illuminate(Direction::Left),
        Intent::Move(Direction::Left),
    ];

    let play = |seed: u64| {
        let mut world = World::generated(seed);
        for _ in 0..5 {
            for intent in intents {
                world.step(intent);
            }
        }
        world.snapshot()
    };

    assert_eq!(play(7), play(7));
    assert_eq!(World::generated(7).snapshot(), World::generated(7).snapshot());
}

#[test]
fn snapshot_draws_player_over_everything_and_hides_unlit_tiles() {
    let layout = Layout::empty(Pos::new(5, 5))
        .with_collectible(Pos::new(6, 5), CollectibleKind::BatteryPack)
        .with_enemy(Pos::new(4, 5), EnemyKind::Moving);
    let world = open_world(layout);
    let snap = world.snapshot();

    assert_eq!(snap.tile(Pos::new(5, 5)), Some(TileView::Player));
    assert_eq!(snap.tile(Pos::new(6, 5)), Some(TileView::Dark));
    assert_eq!(snap.tile(Pos::new(4, 5)), Some(TileView::Dark));
    assert_eq!(snap.tile(Pos::new(0, 0)), Some(TileView::Dark));
    assert_eq!(snap.collectibles_left, 1);
    assert_eq!(snap.lives, 3);
}
