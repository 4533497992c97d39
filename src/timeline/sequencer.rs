use crate::foundation::{
    core::{Fps, FrameIndex, FrameRange},
    error::{ModelPickError, ModelPickResult},
};

/// Everything a scene needs to render one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneCtx {
    /// Absolute frame in timeline space.
    pub frame: FrameIndex,
    /// Frame relative to the start of the scene's window (`frame - window.start`).
    pub local_frame: FrameIndex,
    /// Length of the scene's window.
    pub duration_frames: u64,
    /// Timeline frame rate.
    pub fps: Fps,
}

impl SceneCtx {
    /// Local frame as a float, the unit interpolation works in.
    pub fn local(&self) -> f64 {
        self.local_frame.0 as f64
    }
}

/// A renderable unit of animated content.
///
/// Implementations must be pure: the same context always yields the same output.
pub trait Scene {
    /// Description of what to paint for one frame.
    type Output;

    /// Render the frame described by `ctx`.
    fn render(&self, ctx: SceneCtx) -> Self::Output;
}

/// Placement of one scene on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneWindow<S> {
    /// First frame of the window.
    pub start_frame: FrameIndex,
    /// Window length in frames (`> 0`).
    pub duration_frames: u64,
    /// Scene bound to the window.
    pub scene: S,
}

impl<S> SceneWindow<S> {
    /// Timeline range `[start, start + duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: self.start_frame,
            end: FrameIndex(self.start_frame.0.saturating_add(self.duration_frames)),
        }
    }

    /// Return `true` when `frame` falls inside the window.
    pub fn contains(&self, frame: FrameIndex) -> bool {
        self.range().contains(frame)
    }
}

/// Result of mapping an absolute frame onto the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveScene<S> {
    /// Position of the window in declaration order.
    pub index: usize,
    /// The matched window.
    pub window: SceneWindow<S>,
    /// Frame relative to the window start.
    pub local_frame: FrameIndex,
}

/// Ordered list of scene windows.
///
/// Windows may overlap or leave gaps. Frames covered by no window render nothing; when windows
/// overlap, the first declared match wins.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline<S> {
    fps: Fps,
    windows: Vec<SceneWindow<S>>,
}

impl<S: Copy> Timeline<S> {
    /// Timeline frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Windows in declaration order.
    pub fn windows(&self) -> &[SceneWindow<S>] {
        &self.windows
    }

    /// Exclusive end of the latest window; the total length of the timeline.
    pub fn end(&self) -> FrameIndex {
        self.windows
            .iter()
            .map(|w| w.range().end)
            .max()
            .unwrap_or(FrameIndex(0))
    }

    /// Find the window active at `frame`.
    pub fn resolve(&self, frame: FrameIndex) -> Option<ActiveScene<S>> {
        self.windows
            .iter()
            .enumerate()
            .find(|(_, w)| w.contains(frame))
            .map(|(index, w)| ActiveScene {
                index,
                window: *w,
                local_frame: FrameIndex(frame.0 - w.start_frame.0),
            })
    }

    /// Every window covering `frame`, in declaration order.
    pub fn active_windows(&self, frame: FrameIndex) -> impl Iterator<Item = &SceneWindow<S>> {
        self.windows.iter().filter(move |w| w.contains(frame))
    }
}

impl<S: Scene + Copy> Timeline<S> {
    /// Render `frame` with the active scene, or `None` when no window covers it.
    pub fn render(&self, frame: FrameIndex) -> Option<S::Output> {
        let active = self.resolve(frame)?;
        tracing::trace!(
            frame = frame.0,
            window = active.index,
            local = active.local_frame.0,
            "dispatch scene"
        );
        Some(active.window.scene.render(SceneCtx {
            frame,
            local_frame: active.local_frame,
            duration_frames: active.window.duration_frames,
            fps: self.fps,
        }))
    }
}

/// Builder for [`Timeline`].
pub struct TimelineBuilder<S> {
    fps: Fps,
    windows: Vec<SceneWindow<S>>,
}

impl<S: Copy> TimelineBuilder<S> {
    /// Start an empty timeline at `fps`.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            windows: Vec::new(),
        }
    }

    /// Place `scene` at an explicit start frame.
    pub fn window(mut self, start_frame: FrameIndex, duration_frames: u64, scene: S) -> Self {
        self.windows.push(SceneWindow {
            start_frame,
            duration_frames,
            scene,
        });
        self
    }

    /// Place `scene` right after the previously declared window (or at 0 for the first).
    pub fn then(self, duration_frames: u64, scene: S) -> Self {
        let start = self
            .windows
            .last()
            .map(|w| w.range().end)
            .unwrap_or(FrameIndex(0));
        self.window(start, duration_frames, scene)
    }

    /// Validate and build.
    pub fn build(self) -> ModelPickResult<Timeline<S>> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ModelPickError::validation(
                "fps must have num>0 and den>0",
            ));
        }
        for (i, w) in self.windows.iter().enumerate() {
            if w.duration_frames == 0 {
                return Err(ModelPickError::validation(format!(
                    "scene window {i} must have duration_frames > 0"
                )));
            }
            if w.start_frame.0.checked_add(w.duration_frames).is_none() {
                return Err(ModelPickError::validation(format!(
                    "scene window {i} overflows the frame range"
                )));
            }
        }
        Ok(Timeline {
            fps: self.fps,
            windows: self.windows,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequencer.rs"]
mod tests;
