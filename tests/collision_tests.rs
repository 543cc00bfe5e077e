use paper_plane::core::{check_collision, seeded, GameConfig, GameState, ObstacleGenerator};
use paper_plane::types::{GameAction, Obstacle, ObstaclePair, Phase, TICK_MS};

fn reference_pair() -> ObstaclePair {
    ObstaclePair {
        upper: Obstacle::new(0.0, 120.0),
        lower: Obstacle::new(320.0, 480.0),
    }
}

#[test]
fn plane_inside_upper_bar_collides() {
    let config = GameConfig::default();
    assert!(check_collision(&config, 100.0, &reference_pair(), 40.0));
}

#[test]
fn distant_pair_does_not_collide() {
    let config = GameConfig::default();
    assert!(!check_collision(&config, 100.0, &reference_pair(), 500.0));
}

#[test]
fn ceiling_and_ground_collide_anywhere() {
    let config = GameConfig::default();
    let pair = reference_pair();
    assert!(check_collision(&config, 0.0, &pair, 500.0));
    assert!(check_collision(&config, 760.0, &pair, 500.0));
    assert!(!check_collision(&config, 1.0, &pair, 500.0));
    assert!(!check_collision(&config, 759.0, &pair, 500.0));
}

#[test]
fn centred_in_gap_passes_every_generated_pair() {
    let config = GameConfig::default();
    let generator = ObstacleGenerator::from_config(&config).unwrap();
    let mut rng = seeded(8);
    for _ in 0..1_000 {
        let pair = generator.generate(&mut rng);
        let y = pair.gap_center() - config.plane_height / 2.0;
        for x in [-10.0, 0.0, 50.0, 110.0] {
            assert!(!check_collision(&config, y, &pair, x), "pair {:?} x {}", pair, x);
        }
    }
}

#[test]
fn gliding_plane_eventually_crashes_into_the_ground() {
    let mut state = GameState::with_seed(3).unwrap();
    state.apply_action(GameAction::Start);

    let mut ticks = 0u32;
    while state.phase() == Phase::Playing {
        state.tick(TICK_MS);
        ticks += 1;
        assert!(ticks <= 80, "plane never crashed");
    }
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.game_over());
}
