use super::*;
use crate::foundation::core::{Fps, FrameIndex};

fn at(local: u64) -> ResultsFrame {
    render(SceneCtx {
        frame: FrameIndex(250 + local),
        local_frame: FrameIndex(local),
        duration_frames: 110,
        fps: Fps::new(30, 1).unwrap(),
    })
}

fn offset_y(t: Affine) -> f64 {
    t.as_coeffs()[5]
}

#[test]
fn banner_slides_in_over_fifteen_frames() {
    let f0 = at(0);
    assert_eq!(f0.banner.opacity, 0.0);
    assert_eq!(offset_y(f0.banner.transform), 10.0);
    assert_eq!(f0.banner.accuracy, 0);

    let f15 = at(15);
    assert_eq!(f15.banner.opacity, 1.0);
    assert_eq!(offset_y(f15.banner.transform), 0.0);
    assert_eq!(f15.banner.name, "Claude 3.5 Sonnet");
    assert_eq!(f15.banner.speed_text, "1.8s");
    assert_eq!(f15.banner.cost_text, "$0.0045");
}

#[test]
fn accuracy_counts_up_and_stops_at_winner_accuracy() {
    assert_eq!(at(20).banner.accuracy, 19);
    assert_eq!(at(40).banner.accuracy, 96);
    assert_eq!(at(100).banner.accuracy, 96);
}

#[test]
fn rows_stagger_in() {
    let f = at(19);
    assert_eq!(f.rows.len(), 7);
    assert_eq!(f.rows[0].opacity, 0.5);
    assert_eq!(offset_y(f.rows[0].transform), 4.0);
    assert_eq!(f.rows[1].opacity, 0.0);
    assert_eq!(offset_y(f.rows[1].transform), 8.0);

    let settled = at(60);
    assert!(settled.rows.iter().all(|r| r.opacity == 1.0));
    assert!(settled.rows.iter().all(|r| offset_y(r.transform) == 0.0));
}

#[test]
fn winner_row_is_marked() {
    let f = at(60);
    assert!(f.rows[0].winner);
    assert_eq!(f.rows[0].rank, 1);
    assert_eq!(f.rows[0].background.to_string(), "#F9731608");
    assert!(f.rows[1..].iter().all(|r| !r.winner));
    assert_eq!(f.rows[6].rank, 7);
    assert_eq!(f.rows[6].name, "GPT-4o-mini");
}

#[test]
fn scores_render_to_one_decimal_with_bands() {
    let f = at(60);
    assert_eq!(f.rows[0].score_text, "94.2");
    assert_eq!(f.rows[0].score_band, ScoreBand::Strong);
    assert_eq!(f.rows[2].score_band, ScoreBand::Strong);
    assert_eq!(f.rows[3].score_band, ScoreBand::Fair);
    assert_eq!(ScoreBand::for_score(79.9), ScoreBand::Weak);
    assert_eq!(ScoreBand::Weak.color(), theme::DANGER);
}

#[test]
fn savings_callout_fades_in_last() {
    assert_eq!(at(70).savings.opacity, 0.0);
    assert!((at(80).savings.opacity - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(at(85).savings.opacity, 1.0);
    assert!(at(85).savings.text.contains("$132/mo"));
}
