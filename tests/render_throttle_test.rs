use paper_plane::core::GameState;
use paper_plane::term::RenderThrottle;
use paper_plane::types::{GameAction, TICK_MS};

#[test]
fn first_frame_always_renders() {
    let mut throttle = RenderThrottle::new(250);
    assert!(throttle.should_render(0, 0, true));
}

#[test]
fn static_screen_throttles_until_interval() {
    let mut throttle = RenderThrottle::new(250);
    assert!(throttle.should_render(0, 7, true));
    assert!(!throttle.should_render(100, 7, true));
    assert!(!throttle.should_render(249, 7, true));
    assert!(throttle.should_render(250, 7, true));
}

#[test]
fn fingerprint_change_renders_immediately() {
    let mut throttle = RenderThrottle::new(250);
    assert!(throttle.should_render(0, 1, true));
    assert!(throttle.should_render(10, 2, true));
    assert!(!throttle.should_render(20, 2, true));
}

#[test]
fn invalidate_forces_render() {
    let mut throttle = RenderThrottle::new(250);
    assert!(throttle.should_render(0, 1, true));
    throttle.invalidate();
    assert!(throttle.should_render(5, 1, true));
}

#[test]
fn playing_is_never_throttled() {
    let mut throttle = RenderThrottle::new(250);
    for t in 0..10 {
        assert!(throttle.should_render(t, 1, false));
    }
}

#[test]
fn idle_snapshot_is_stable_and_start_changes_it() {
    let mut state = GameState::with_seed(3).unwrap();
    let idle = state.snapshot();
    assert!(!idle.playable());
    assert_eq!(idle.fingerprint(), state.snapshot().fingerprint());

    state.apply_action(GameAction::Start);
    state.tick(TICK_MS);
    let playing = state.snapshot();
    assert!(playing.playable());
    assert_ne!(playing.fingerprint(), idle.fingerprint());
}
