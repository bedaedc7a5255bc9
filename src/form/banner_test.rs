use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn count(effects: &[Effect], pred: impl Fn(&Effect) -> bool) -> usize {
    effects.iter().filter(|e| pred(e)).count()
}

// =============================================================
// show
// =============================================================

#[test]
fn first_show_schedules_pair_without_cancel() {
    let mut banner = Banner::new();
    let mut out = Vec::new();
    banner.show("oops", ms(3000), ms(4000), &mut out);

    assert_eq!(out[0], Effect::SetText { target: Target::Banner, text: "oops".into() });
    assert_eq!(out[1], Effect::SetStyle { target: Target::Banner, property: "opacity", value: "1".into() });
    assert_eq!(count(&out, |e| matches!(e, Effect::Cancel(_))), 0);
    assert!(out.contains(&Effect::Schedule { timer: Timer::BannerFade, after: ms(3000) }));
    assert!(out.contains(&Effect::Schedule { timer: Timer::BannerClear, after: ms(4000) }));
    assert_eq!(banner.pending_timers(), 2);
}

#[test]
fn second_show_cancels_before_scheduling() {
    let mut banner = Banner::new();
    let mut out = Vec::new();
    banner.show("one", ms(3000), ms(4000), &mut out);
    out.clear();
    banner.show("two", ms(3000), ms(4000), &mut out);

    let cancel_fade = out.iter().position(|e| *e == Effect::Cancel(Timer::BannerFade)).unwrap();
    let cancel_clear = out.iter().position(|e| *e == Effect::Cancel(Timer::BannerClear)).unwrap();
    let schedule_fade =
        out.iter().position(|e| matches!(e, Effect::Schedule { timer: Timer::BannerFade, .. })).unwrap();
    assert!(cancel_fade < schedule_fade);
    assert!(cancel_clear < schedule_fade);
    assert_eq!(banner.pending_timers(), 2);
}

// =============================================================
// fade / clear
// =============================================================

#[test]
fn fade_sets_transition_and_hides() {
    let mut banner = Banner::new();
    let mut out = Vec::new();
    banner.show("x", ms(3000), ms(4000), &mut out);
    out.clear();
    banner.fade(&mut out);

    assert_eq!(
        out,
        vec![
            Effect::SetStyle { target: Target::Banner, property: "transition", value: "opacity 1s ease-out".into() },
            Effect::SetStyle { target: Target::Banner, property: "opacity", value: "0".into() },
        ]
    );
    assert_eq!(banner.pending_timers(), 1);
}

#[test]
fn clear_blanks_text() {
    let mut banner = Banner::new();
    let mut out = Vec::new();
    banner.show("x", ms(3000), ms(4000), &mut out);
    banner.fade(&mut out);
    out.clear();
    banner.clear(&mut out);

    assert_eq!(out[0], Effect::SetText { target: Target::Banner, text: String::new() });
    assert_eq!(banner.pending_timers(), 0);
}

#[test]
fn show_after_fade_only_cancels_clear() {
    let mut banner = Banner::new();
    let mut out = Vec::new();
    banner.show("x", ms(3000), ms(4000), &mut out);
    banner.fade(&mut out);
    out.clear();
    banner.show("y", ms(3000), ms(4000), &mut out);

    assert!(!out.contains(&Effect::Cancel(Timer::BannerFade)));
    assert!(out.contains(&Effect::Cancel(Timer::BannerClear)));
}
