//! End-to-end session tests: intents in, painted frames out.

use sortviz_app::{
    run_scenario, HeadlessConfig, PaintRecorder, Scenario, Session, SessionConfig,
};
use sortviz_core::{Algorithm, ControlIntent, Step};
use sortviz_replay::ReplayState;
use std::time::Duration;

const W: f32 = 800.0;
const H: f32 = 320.0;

fn session(size: usize) -> Session {
    let config = SessionConfig::default()
        .with_size(size)
        .with_seed(11)
        .with_base_interval(Duration::from_millis(1));
    Session::new(config).unwrap()
}

#[test]
fn idle_frame_paints_one_bar_per_element() {
    let mut s = session(10);
    let style = sortviz_charts::BarChartStyle::default();

    s.frame();
    let mut rec = PaintRecorder::new();
    s.render(&mut rec, W, H);

    let bars = rec.rects_with_color(style.bar);
    assert_eq!(bars.len(), 10);
    // Background + 5 grid lines + 10 bars.
    assert_eq!(rec.fill_count(), 16);
}

#[test]
fn bar_heights_follow_values() {
    let mut s = session(10);
    let style = sortviz_charts::BarChartStyle::default();
    let values = s.values().to_vec();

    s.frame();
    let mut rec = PaintRecorder::new();
    s.render(&mut rec, W, H);

    let bars = rec.rects_with_color(style.bar);
    assert_eq!(bars.len(), values.len());
    for i in 1..values.len() {
        if values[i - 1] < values[i] {
            assert!(bars[i - 1].height() < bars[i].height());
        } else if values[i - 1] > values[i] {
            assert!(bars[i - 1].height() > bars[i].height());
        }
    }
}

#[test]
fn first_merge_step_highlights_two_compared_bars() {
    let mut s = session(10);
    let style = sortviz_charts::BarChartStyle::default();

    s.handle(ControlIntent::StepForward);
    let snap = s.frame();
    assert!(matches!(snap.step, Some(Step::Compare { .. })));

    let mut rec = PaintRecorder::new();
    s.render(&mut rec, W, H);
    assert_eq!(rec.rects_with_color(style.compare).len(), 2);
    assert_eq!(rec.rects_with_color(style.bar).len(), 8);
}

#[test]
fn quick_sort_swap_highlights_two_bars() {
    let mut s = session(10);
    let style = sortviz_charts::BarChartStyle::default();
    s.handle(ControlIntent::SetAlgorithm {
        algorithm: Algorithm::Quick,
    });

    // Step until the first swap lands at the cursor.
    loop {
        s.handle(ControlIntent::StepForward);
        let snap = s.frame();
        match snap.step {
            Some(Step::Swap { .. }) => break,
            Some(Step::Done) | None => panic!("no swap recorded for this input"),
            _ => {}
        }
    }

    let mut rec = PaintRecorder::new();
    s.render(&mut rec, W, H);
    assert_eq!(rec.rects_with_color(style.swap).len(), 2);
}

#[test]
fn finished_playback_paints_plain_sorted_bars() {
    let mut s = session(10);
    let style = sortviz_charts::BarChartStyle::default();

    while s.state() != ReplayState::Finished {
        s.handle(ControlIntent::StepForward);
    }
    let snap = s.frame();
    assert!(snap.is_sorted());

    let mut rec = PaintRecorder::new();
    s.render(&mut rec, W, H);
    // The Done step highlights nothing.
    assert_eq!(rec.rects_with_color(style.bar).len(), 10);
    assert!(rec.rects_with_color(style.compare).is_empty());
    assert!(rec.rects_with_color(style.swap).is_empty());
    assert!(rec.rects_with_color(style.overwrite).is_empty());
}

#[test]
fn step_back_rewinds_the_painted_frame() {
    let mut s = session(10);

    for _ in 0..5 {
        s.handle(ControlIntent::StepForward);
    }
    let at_five = s.frame().values;

    s.handle(ControlIntent::StepForward);
    s.handle(ControlIntent::StepBack);
    let rewound = s.frame();
    assert_eq!(rewound.cursor, 5);
    assert_eq!(rewound.values, at_five);
}

#[test]
fn scenario_playback_sorts_and_finishes() {
    let mut s = session(10);
    let scenario = Scenario::from_json(
        r#"{"steps":[
            {"type":"intent","intent":{"intent":"set_speed","speed":4.0}},
            {"type":"intent","intent":{"intent":"toggle_play"}},
            {"type":"tick","frames":2000},
            {"type":"assert_finished"},
            {"type":"assert_sorted"}
        ]}"#,
    )
    .unwrap();

    let outcome = run_scenario(&mut s, &scenario, HeadlessConfig::default()).unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report().failure);
    assert!(outcome.report().applied_steps > 0);
}

#[test]
fn regenerate_redraws_with_the_new_size() {
    let mut s = session(10);
    let style = sortviz_charts::BarChartStyle::default();

    s.handle(ControlIntent::Regenerate { size: 24 });
    s.frame();
    let mut rec = PaintRecorder::new();
    s.render(&mut rec, W, H);
    assert_eq!(rec.rects_with_color(style.bar).len(), 24);
}
