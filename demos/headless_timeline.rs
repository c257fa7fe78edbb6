//! Drives an `Offstage` through a hide/show cycle on a simulated 60fps clock
//! and logs what a host would paint each frame.
//!
//! RUST_LOG=debug cargo run --example headless_timeline

use std::time::{Duration, Instant};

use offstage::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OffstageConfig::new(false, "profile card")
        .transition(TransitionKind::Slide)
        .slide_direction(SlideDirection::Up)
        .delay_before_hide(Duration::from_millis(100))
        .show_loading_after(Duration::from_millis(150))
        .on_offstage_state_changed(|hidden| log::info!("target -> hidden: {hidden}"))
        .on_animation_complete(|hidden| log::info!("settled  -> hidden: {hidden}"));

    let start = Instant::now();
    let mut widget = Offstage::new(config, start)?;

    let mut now = start;
    widget.set_offstage(true, now);
    run_until_idle(&mut widget, &mut now, start);

    widget.set_offstage(false, now);
    run_until_idle(&mut widget, &mut now, start);

    widget.dispose();
    Ok(())
}

fn run_until_idle(widget: &mut Offstage<&str>, now: &mut Instant, start: Instant) {
    while widget.needs_tick() {
        *now += FRAME;
        widget.tick(*now);
        flush_deferred();

        let frame = widget.presentation();
        let t = frame.visuals.to_transform(320.0, 200.0);
        log::info!(
            "{:>5}ms {:?} {:?} opacity={:.2} dy={:.1}px loading={}",
            now.duration_since(start).as_millis(),
            frame.phase,
            frame.mount,
            frame.visuals.opacity,
            t.translate.1,
            frame.show_loading,
        );
    }
}
