use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Probe {
    A,
    B,
}

impl Scene for Probe {
    type Output = (Probe, SceneCtx);

    fn render(&self, ctx: SceneCtx) -> Self::Output {
        (*self, ctx)
    }
}

fn fps() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn gapped() -> Timeline<Probe> {
    TimelineBuilder::new(fps())
        .window(FrameIndex(10), 5, Probe::A)
        .window(FrameIndex(20), 10, Probe::B)
        .build()
        .unwrap()
}

#[test]
fn frames_outside_every_window_render_nothing() {
    let tl = gapped();
    for f in (0..10).chain(15..20).chain(30..100) {
        assert!(tl.render(FrameIndex(f)).is_none(), "frame {f}");
    }
}

#[test]
fn frames_inside_a_window_get_local_frame() {
    let tl = gapped();
    for w in tl.windows() {
        for f in w.range().frames() {
            let (scene, ctx) = tl.render(f).unwrap();
            assert_eq!(scene, w.scene);
            assert_eq!(ctx.frame, f);
            assert_eq!(ctx.local_frame.0, f.0 - w.start_frame.0);
            assert!(ctx.local_frame.0 < w.duration_frames);
            assert_eq!(ctx.duration_frames, w.duration_frames);
            assert_eq!(ctx.fps, fps());
        }
    }
}

#[test]
fn overlapping_windows_resolve_to_first_declared() {
    let tl = TimelineBuilder::new(fps())
        .window(FrameIndex(0), 10, Probe::A)
        .window(FrameIndex(5), 10, Probe::B)
        .build()
        .unwrap();

    let active = tl.resolve(FrameIndex(7)).unwrap();
    assert_eq!(active.index, 0);
    assert_eq!(active.window.scene, Probe::A);
    assert_eq!(tl.active_windows(FrameIndex(7)).count(), 2);

    let active = tl.resolve(FrameIndex(12)).unwrap();
    assert_eq!(active.window.scene, Probe::B);
    assert_eq!(active.local_frame, FrameIndex(7));
}

#[test]
fn then_chains_windows_back_to_back() {
    let tl = TimelineBuilder::new(fps())
        .then(90, Probe::A)
        .then(60, Probe::B)
        .build()
        .unwrap();
    assert_eq!(tl.windows()[1].start_frame, FrameIndex(90));
    assert_eq!(tl.end(), FrameIndex(150));
}

#[test]
fn end_is_latest_window_end_not_last_declared() {
    let tl = TimelineBuilder::new(fps())
        .window(FrameIndex(50), 50, Probe::A)
        .window(FrameIndex(0), 10, Probe::B)
        .build()
        .unwrap();
    assert_eq!(tl.end(), FrameIndex(100));

    let empty = TimelineBuilder::<Probe>::new(fps()).build().unwrap();
    assert_eq!(empty.end(), FrameIndex(0));
    assert!(empty.render(FrameIndex(0)).is_none());
}

#[test]
fn build_rejects_degenerate_windows() {
    assert!(
        TimelineBuilder::new(fps())
            .window(FrameIndex(0), 0, Probe::A)
            .build()
            .is_err()
    );
    assert!(
        TimelineBuilder::new(fps())
            .window(FrameIndex(u64::MAX), 2, Probe::A)
            .build()
            .is_err()
    );
    assert!(
        TimelineBuilder::<Probe>::new(Fps { num: 30, den: 0 })
            .build()
            .is_err()
    );
}

#[test]
fn render_is_idempotent() {
    let tl = gapped();
    assert_eq!(tl.render(FrameIndex(23)), tl.render(FrameIndex(23)));
}
