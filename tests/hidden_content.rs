use std::time::{Duration, Instant};

use offstage::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn hidden_config<C>(child: C, is_hidden: bool, force_reveal: bool) -> HiddenContentConfig<C> {
    HiddenContentConfig::new(OffstageConfig::new(false, child))
        .is_hidden(is_hidden)
        .force_reveal(force_reveal)
}

#[test]
fn force_reveal_tap_reveals_and_corner_restores() {
    let _ = env_logger::builder().is_test(true).try_init();
    let t0 = Instant::now();
    let mut h = HiddenContent::new(hidden_config("secret", true, true), t0).unwrap();
    assert!(h.effective_hidden());
    assert!(h.presentation().show_loading);

    assert!(h.tap_indicator(t0));
    assert!(!h.manually_hidden());
    assert!(!h.effective_hidden());
    assert!(!h.offstage().actual_offstage());
    assert!(!h.presentation().show_loading);

    h.tick(t0 + ms(400));
    let frame = h.presentation();
    assert_eq!(frame.phase, Phase::Visible);
    assert_eq!(frame.child, Some(&"secret"));
    assert_eq!(frame.visuals, Visuals::VISIBLE);

    assert!(h.tap_corner(t0 + ms(500)));
    assert!(h.effective_hidden());
    assert_eq!(h.presentation().phase, Phase::TransitioningOut);
    assert_eq!(h.presentation().mount, MountMode::Unmounted);
    assert!(h.presentation().child.is_none());
    h.tick(t0 + ms(900));
    assert_eq!(h.presentation().phase, Phase::Hidden);
    assert_eq!(h.presentation().mount, MountMode::Unmounted);
}

#[test]
fn external_control_without_force_reveal() {
    let t0 = Instant::now();
    let mut h = HiddenContent::new(hidden_config((), false, false), t0).unwrap();
    assert!(!h.effective_hidden());

    h.set_hidden(true, t0);
    assert!(h.effective_hidden());
    assert!(h.offstage().is_offstage());
    assert!(!h.tap_indicator(t0));
    assert!(h.effective_hidden());
}

#[test]
fn entering_force_reveal_keeps_content_concealed() {
    let t0 = Instant::now();
    let mut h = HiddenContent::new(hidden_config((), true, false), t0).unwrap();
    h.set_force_reveal(true, t0);
    assert!(h.effective_hidden());
    assert_eq!(
        h.corner_affordance(),
        Some(CornerAffordance {
            icon: CornerIcon::Reveal,
            color: CornerAffordance::CONCEALED_COLOR,
        })
    );
}

#[test]
fn base_config_updates_keep_policy() {
    let t0 = Instant::now();
    let mut h = HiddenContent::new(hidden_config((), true, true), t0).unwrap();
    // Caller rebuilds with is_offstage=false; the manual flag still wins
    let mut rebuilt = hidden_config((), true, true);
    rebuilt.base = rebuilt.base.transition(TransitionKind::Slide);
    h.update(rebuilt, t0).unwrap();
    assert!(h.offstage().is_offstage());
    assert_eq!(h.offstage().config().transition, TransitionKind::Slide);
}
