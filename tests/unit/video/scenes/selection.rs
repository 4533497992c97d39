use super::*;
use crate::foundation::core::{Fps, FrameIndex};

fn at(local: u64) -> ModelSelectionFrame {
    render(SceneCtx {
        frame: FrameIndex(90 + local),
        local_frame: FrameIndex(local),
        duration_frames: 60,
        fps: Fps::new(30, 1).unwrap(),
    })
}

fn scale(chip: &Chip) -> f64 {
    chip.transform.as_coeffs()[0]
}

#[test]
fn nothing_visible_on_first_frame() {
    let f = at(0);
    assert_eq!(f.chips.len(), 20);
    assert!(f.chips.iter().all(|c| !c.visible && !c.checked));
    assert!(f.chips.iter().all(|c| scale(c) == 0.0));
    assert_eq!(f.selected, 0);
    assert_eq!(f.counter_opacity, 0.0);
}

#[test]
fn chips_enter_two_frames_apart() {
    let f = at(5);
    assert!(f.chips[0].visible);
    assert!(f.chips[2].visible);
    assert!(!f.chips[3].visible);
    assert!(scale(&f.chips[0]) > scale(&f.chips[2]));
    assert!(scale(&f.chips[2]) > 0.0);
}

#[test]
fn chips_tick_eight_frames_after_entrance() {
    assert!(!at(8).chips[0].checked);
    let f = at(9);
    assert!(f.chips[0].checked);
    assert_eq!(f.chips[0].border, theme::EMBER);
    assert_eq!(f.chips[0].background.to_string(), "#F9731615");
    assert!(!f.chips[1].checked);
    assert_eq!(f.chips[1].border, theme::BORDER);
}

#[test]
fn last_chip_settles_by_end_of_scene() {
    let f = at(59);
    assert!(f.chips.iter().all(|c| c.checked));
    // Chip 19 entered at local frame 38: 21 frames of spring.
    assert!((scale(&f.chips[19]) - 1.0).abs() < 0.02);
    assert!((scale(&f.chips[0]) - 1.0).abs() < 0.01);
}

#[test]
fn counter_tracks_frame_and_caps() {
    assert_eq!(at(5).selected, 2);
    assert_eq!(at(26).selected, 10);
    assert_eq!(at(45).counter_label, "18 of 20 models selected");
    assert_eq!(at(45).counter_opacity, 0.5);
    assert_eq!(at(55).selected, 20);
    assert_eq!(at(55).counter_opacity, 1.0);
}
