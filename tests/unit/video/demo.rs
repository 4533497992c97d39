use super::*;

fn video() -> DemoVideo {
    DemoVideo::new(VideoConfig::default()).unwrap()
}

#[test]
fn windows_are_back_to_back() {
    let v = video();
    let starts: Vec<(SceneId, u64, u64)> = v
        .timeline()
        .windows()
        .iter()
        .map(|w| (w.scene, w.start_frame.0, w.duration_frames))
        .collect();
    assert_eq!(
        starts,
        vec![
            (SceneId::Input, 0, 90),
            (SceneId::ModelSelection, 90, 60),
            (SceneId::Processing, 150, 100),
            (SceneId::Results, 250, 110),
        ]
    );
    assert_eq!(v.duration(), FrameIndex(360));
}

#[test]
fn boundary_frames_map_to_expected_scene() {
    let v = video();
    for (frame, scene, local) in [
        (0, SceneId::Input, 0),
        (89, SceneId::Input, 89),
        (90, SceneId::ModelSelection, 0),
        (149, SceneId::ModelSelection, 59),
        (150, SceneId::Processing, 0),
        (249, SceneId::Processing, 99),
        (250, SceneId::Results, 0),
        (359, SceneId::Results, 109),
    ] {
        let active = v.timeline().resolve(FrameIndex(frame)).unwrap();
        assert_eq!(active.window.scene, scene, "frame {frame}");
        assert_eq!(active.local_frame, FrameIndex(local), "frame {frame}");
        let rendered = v.render(FrameIndex(frame));
        assert_eq!(rendered.scene.unwrap().scene_id(), scene);
    }
}

#[test]
fn frames_past_the_end_are_empty() {
    let v = video();
    for f in [360, 361, 10_000, u64::MAX] {
        let r = v.render(FrameIndex(f));
        assert!(r.is_empty());
        assert_eq!(r.background, v.config().background);
    }
}

#[test]
fn frames_iterates_whole_video() {
    let v = video();
    let frames: Vec<RenderedFrame> = v.frames().collect();
    assert_eq!(frames.len(), 360);
    assert!(frames.iter().all(|f| !f.is_empty()));
    assert_eq!(frames[123].frame, FrameIndex(123));
}

#[test]
fn rejects_invalid_config() {
    let mut config = VideoConfig::default();
    config.canvas.width = 0;
    assert!(DemoVideo::new(config).is_err());
}
