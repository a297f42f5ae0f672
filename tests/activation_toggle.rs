mod common;

use common::{area, blank};
use ratatui::widgets::{Paragraph, StatefulWidget, Widget};
use shimmer::ui::overlay::OverlayState;
use shimmer::{Location, ShimmerConfiguration, ShimmerExt, ShimmerState, UnitPoint};
use std::time::{Duration, Instant};

fn render_sample(is_active: bool, state: &mut ShimmerState, now: Instant) -> ratatui::buffer::Buffer {
    let mut buf = blank();
    Paragraph::new("Sample")
        .shimmer(is_active)
        .at(now)
        .render(area(), &mut buf, state);
    buf
}

#[test]
fn inactive_renders_content_unchanged() {
    let mut plain = blank();
    Widget::render(Paragraph::new("Sample"), area(), &mut plain);

    let mut state = ShimmerState::default();
    let decorated = render_sample(false, &mut state, Instant::now());

    assert_eq!(decorated, plain);
    assert!(!state.is_animating());
    assert_eq!(state.endpoints(), None);
}

#[test]
fn inactive_with_custom_configuration_is_plain() {
    let config = ShimmerConfiguration {
        opacity: 1.0,
        ..ShimmerConfiguration::default()
    };
    let shimmered = Paragraph::new("Sample").shimmer_with(config, false);
    assert!(!shimmered.is_active());
}

#[test]
fn mount_starts_at_initial_location() {
    let config = ShimmerConfiguration::default();
    let mut state = ShimmerState::default();
    render_sample(true, &mut state, Instant::now());

    assert!(state.is_animating());
    assert_eq!(state.endpoints(), Some(config.initial_location));
}

#[test]
fn rerender_keeps_mount_instant() {
    let t0 = Instant::now();
    let mut state = ShimmerState::default();
    render_sample(true, &mut state, t0);
    render_sample(true, &mut state, t0 + Duration::from_millis(750));
    render_sample(true, &mut state, t0 + Duration::from_millis(900));

    assert_eq!(state.lifecycle(), OverlayState::Animating { mounted_at: t0 });
}

#[test]
fn toggling_off_and_on_restarts_sweep() {
    let config = ShimmerConfiguration::default();
    let t0 = Instant::now();
    let mut state = ShimmerState::default();

    render_sample(true, &mut state, t0);
    render_sample(true, &mut state, t0 + Duration::from_millis(1000));
    assert_ne!(state.endpoints(), Some(config.initial_location));

    render_sample(false, &mut state, t0 + Duration::from_millis(1100));
    assert_eq!(state.lifecycle(), OverlayState::Unmounted);
    assert_eq!(state.endpoints(), None);

    let remount = t0 + Duration::from_millis(2000);
    render_sample(true, &mut state, remount);
    assert_eq!(state.endpoints(), Some(config.initial_location));
    assert_eq!(
        state.lifecycle(),
        OverlayState::Animating { mounted_at: remount }
    );
}

#[test]
fn instances_do_not_share_state() {
    let t0 = Instant::now();
    let narrow = ShimmerConfiguration {
        initial_location: Location::new(UnitPoint::TOP_LEADING, UnitPoint::TOP),
        final_location: Location::new(UnitPoint::BOTTOM, UnitPoint::BOTTOM_TRAILING),
        duration: 4.0,
        ..ShimmerConfiguration::default()
    };
    let mut first = ShimmerState::default();
    let mut second = ShimmerState::default();

    let mut buf = blank();
    Paragraph::new("a")
        .shimmer(true)
        .at(t0)
        .render(area(), &mut buf, &mut first);
    Paragraph::new("b")
        .shimmer_with(narrow.clone(), true)
        .at(t0 + Duration::from_millis(500))
        .render(area(), &mut buf, &mut second);

    assert_eq!(first.lifecycle(), OverlayState::Animating { mounted_at: t0 });
    assert_eq!(second.endpoints(), Some(narrow.initial_location));

    Paragraph::new("a")
        .shimmer(false)
        .render(area(), &mut buf, &mut first);
    assert!(!first.is_animating());
    assert!(second.is_animating());
    assert_eq!(
        second.lifecycle(),
        OverlayState::Animating {
            mounted_at: t0 + Duration::from_millis(500)
        }
    );
}
