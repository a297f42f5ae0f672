use shimmer::ui::mvi::Reducer;
use shimmer::ui::overlay::{OverlayIntent, OverlayReducer, OverlayState};
use std::time::{Duration, Instant};

#[test]
fn mount_starts_animating() {
    let at = Instant::now();
    let state = OverlayReducer::reduce(OverlayState::Unmounted, OverlayIntent::Mount { at });
    assert_eq!(state, OverlayState::Animating { mounted_at: at });
    assert!(state.is_animating());
}

#[test]
fn mount_while_animating_is_ignored() {
    let first = Instant::now();
    let state = OverlayState::Animating { mounted_at: first };
    let state = OverlayReducer::reduce(
        state,
        OverlayIntent::Mount {
            at: first + Duration::from_secs(1),
        },
    );
    assert_eq!(state, OverlayState::Animating { mounted_at: first });
}

#[test]
fn unmount_discards_progress() {
    let state = OverlayState::Animating {
        mounted_at: Instant::now(),
    };
    let state = OverlayReducer::reduce(state, OverlayIntent::Unmount);
    assert_eq!(state, OverlayState::Unmounted);
}

#[test]
fn unmount_while_unmounted_is_noop() {
    let state = OverlayReducer::reduce(OverlayState::Unmounted, OverlayIntent::Unmount);
    assert_eq!(state, OverlayState::Unmounted);
}

#[test]
fn default_state_is_unmounted() {
    assert_eq!(OverlayState::default(), OverlayState::Unmounted);
}

#[test]
fn phase_follows_mount_instant() {
    let at = Instant::now();
    let state = OverlayReducer::reduce(OverlayState::Unmounted, OverlayIntent::Mount { at });

    let phase = state
        .phase(1.5, at + Duration::from_millis(375))
        .expect("animating");
    assert_eq!(phase.cycle, 0);
    assert!((phase.progress - 0.25).abs() < 1e-9);

    // Nothing has elapsed at the mount instant itself
    let phase = state.phase(1.5, at).expect("animating");
    assert_eq!(phase.progress, 0.0);
}
