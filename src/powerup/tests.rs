//! Power-up domain: tests for the timer and visual selection.

use super::components::PowerUpPhase;
use super::resources::PowerUpTuning;

const DURATION: f32 = 4.0;

fn active_at(elapsed: f32) -> PowerUpPhase {
    PowerUpPhase::Active { elapsed }
}

// -----------------------------------------------------------------------------
// Activation
// -----------------------------------------------------------------------------

#[test]
fn test_default_phase_is_inactive() {
    assert_eq!(PowerUpPhase::default(), PowerUpPhase::Inactive);
}

#[test]
fn test_activate_from_inactive_zeroes_timer() {
    let mut phase = PowerUpPhase::Inactive;
    assert!(phase.activate());
    assert_eq!(phase.elapsed(), Some(0.0));
}

#[test]
fn test_activate_while_active_is_noop() {
    let mut phase = active_at(1.0);
    assert!(!phase.activate());
    assert_eq!(phase.elapsed(), Some(1.0));
}

// -----------------------------------------------------------------------------
// Timer
// -----------------------------------------------------------------------------

#[test]
fn test_elapsed_strictly_increases_while_active() {
    let mut phase = PowerUpPhase::Inactive;
    phase.activate();

    let mut previous = 0.0;
    for _ in 0..10 {
        assert!(!phase.tick(0.25, DURATION));
        let elapsed = phase.elapsed().unwrap();
        assert!(elapsed > previous);
        previous = elapsed;
    }
}

#[test]
fn test_expiry_flips_inactive() {
    let mut phase = active_at(3.9);
    assert!(phase.tick(0.2, DURATION));
    assert_eq!(phase, PowerUpPhase::Inactive);
}

#[test]
fn test_reaching_exact_duration_does_not_expire() {
    // Expiry requires exceeding the duration, not meeting it.
    let mut phase = active_at(3.75);
    assert!(!phase.tick(0.25, DURATION));
    assert_eq!(phase.elapsed(), Some(4.0));

    assert!(phase.tick(0.25, DURATION));
    assert_eq!(phase, PowerUpPhase::Inactive);
}

#[test]
fn test_tick_while_inactive_is_noop() {
    let mut phase = PowerUpPhase::Inactive;
    assert!(!phase.tick(1.0, DURATION));
    assert_eq!(phase, PowerUpPhase::Inactive);
}

#[test]
fn test_reactivation_after_expiry_starts_fresh() {
    let mut phase = active_at(3.9);
    phase.tick(0.2, DURATION);
    assert!(phase.activate());
    assert_eq!(phase.elapsed(), Some(0.0));
}

// -----------------------------------------------------------------------------
// Visual selection
// -----------------------------------------------------------------------------

#[test]
fn test_active_visuals() {
    let tuning = PowerUpTuning::default();
    let phase = active_at(1.0);

    assert_eq!(tuning.scale_for(&phase), 1.0);
    assert_eq!(tuning.overlay_alpha_for(&phase), 0.1);
}

#[test]
fn test_inactive_visuals_restore_defaults() {
    let tuning = PowerUpTuning::default();

    // The frame that expires the timer also snaps the visuals back.
    let mut phase = active_at(3.9);
    phase.tick(0.2, tuning.duration);

    assert_eq!(tuning.scale_for(&phase), 0.75);
    assert_eq!(tuning.overlay_alpha_for(&phase), 1.0);
}

#[test]
fn test_default_tuning_matches_authoring_constants() {
    let tuning = PowerUpTuning::default();
    assert_eq!(tuning.duration, 4.0);
    assert_eq!(tuning.active_scale, 1.0);
    assert_eq!(tuning.idle_scale, 0.75);
    assert_eq!(tuning.overlay_alpha, 0.1);
}
