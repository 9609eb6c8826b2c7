use super::*;
use crate::consts::BG_OFFSET_PROPERTY;
use crate::memory_host::MemoryHost;

fn updater() -> ParallaxUpdater {
    ParallaxUpdater::new(&PageConfig::default())
}

#[test]
fn offset_value_negates_and_scales() {
    assert_eq!(offset_value(100.0, 0.04), "-4px");
    assert_eq!(offset_value(25.0, 0.04), "-1px");
    assert_eq!(offset_value(10.0, 0.04), "-0.4px");
}

#[test]
fn offset_value_at_top_is_plain_zero() {
    assert_eq!(offset_value(0.0, 0.04), "0px");
}

#[test]
fn offset_value_uses_exponent_for_tiny_offsets() {
    assert_eq!(offset_value(0.00001, 0.04), "-4.0000000000000003e-7px");
    assert_eq!(offset_value(-0.00001, 0.04), "4.0000000000000003e-7px");
}

#[test]
fn offset_value_uses_signed_exponent_for_huge_offsets() {
    assert_eq!(offset_value(1e23, 1.0), "-1e+23px");
}

#[test]
fn offset_value_stays_decimal_at_range_edges() {
    assert_eq!(offset_value(0.000_001, 1.0), "-0.000001px");
    assert_eq!(offset_value(1e20, 1.0), "-100000000000000000000px");
}

#[test]
fn initialize_writes_current_offset() {
    let mut host = MemoryHost::new();
    updater().initialize(&mut host);
    assert_eq!(host.style(BG_OFFSET_PROPERTY), Some("0px"));
    assert_eq!(host.frame_requests, 0);
}

#[test]
fn scroll_schedules_one_frame_and_marks_pending() {
    let mut host = MemoryHost::new();
    let mut parallax = updater();

    parallax.on_scroll(&mut host);

    assert!(parallax.is_pending());
    assert_eq!(host.frame_requests, 1);
    assert_eq!(host.style_writes, 0);
}

#[test]
fn scrolls_before_frame_are_coalesced() {
    let mut host = MemoryHost::new();
    let mut parallax = updater();

    for step in 1..=10 {
        host.scroll_y = f64::from(step) * 10.0;
        parallax.on_scroll(&mut host);
    }
    assert_eq!(host.frame_requests, 1);

    parallax.run_frame(&mut host);
    assert_eq!(host.style_writes, 1);
    assert!(!parallax.is_pending());
}

#[test]
fn frame_reads_offset_at_execution_time() {
    let mut host = MemoryHost::new();
    let mut parallax = updater();

    host.scroll_y = 10.0;
    parallax.on_scroll(&mut host);
    host.scroll_y = 200.0;
    parallax.run_frame(&mut host);

    assert_eq!(host.style(BG_OFFSET_PROPERTY), Some("-8px"));
}

#[test]
fn next_scroll_after_frame_schedules_again() {
    let mut host = MemoryHost::new();
    let mut parallax = updater();

    parallax.on_scroll(&mut host);
    parallax.run_frame(&mut host);
    parallax.on_scroll(&mut host);

    assert_eq!(host.frame_requests, 2);
    assert!(parallax.is_pending());
}

#[test]
fn failed_frame_request_updates_inline() {
    let mut host = MemoryHost::new();
    host.frames_unavailable = true;
    host.scroll_y = 100.0;
    let mut parallax = updater();

    parallax.on_scroll(&mut host);

    assert!(!parallax.is_pending());
    assert_eq!(host.style(BG_OFFSET_PROPERTY), Some("-4px"));
}

#[test]
fn custom_property_and_factor_are_honored() {
    let config = PageConfig { offset_property: "--hero-y".into(), parallax_factor: 0.5, ..PageConfig::default() };
    let mut host = MemoryHost::new();
    host.scroll_y = 10.0;
    let mut parallax = ParallaxUpdater::new(&config);

    parallax.initialize(&mut host);

    assert_eq!(host.style("--hero-y"), Some("-5px"));
    assert_eq!(host.style(BG_OFFSET_PROPERTY), None);
}
