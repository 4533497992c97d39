use crate::{
    foundation::{
        color::Rgba8,
        core::{FrameIndex, FrameRange},
        error::ModelPickResult,
    },
    timeline::sequencer::{Timeline, TimelineBuilder},
    video::{
        config::VideoConfig,
        scenes::{SceneFrame, SceneId},
    },
};

/// Scene lengths in frames at the reference 30 fps, in playback order.
pub const SCENE_DURATIONS: [(SceneId, u64); 4] = [
    (SceneId::Input, 90),
    (SceneId::ModelSelection, 60),
    (SceneId::Processing, 100),
    (SceneId::Results, 110),
];

/// One rendered frame of the demo video.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RenderedFrame {
    /// Absolute frame index.
    pub frame: FrameIndex,
    /// Clear colour.
    pub background: Rgba8,
    /// Active scene output, `None` outside every scene window.
    pub scene: Option<SceneFrame>,
}

impl RenderedFrame {
    /// `true` when no scene covers this frame.
    pub fn is_empty(&self) -> bool {
        self.scene.is_none()
    }
}

/// The four-scene promotional video.
///
/// Windows are laid back to back and measured in frames, so the configured fps changes the
/// playback speed and spring timing, not the frame layout.
#[derive(Clone, Debug)]
pub struct DemoVideo {
    config: VideoConfig,
    timeline: Timeline<SceneId>,
}

impl DemoVideo {
    /// Build the video for `config`.
    pub fn new(config: VideoConfig) -> ModelPickResult<Self> {
        config.validate()?;
        let timeline = SCENE_DURATIONS
            .iter()
            .fold(TimelineBuilder::new(config.fps), |b, (scene, frames)| {
                b.then(*frames, *scene)
            })
            .build()?;
        Ok(Self { config, timeline })
    }

    /// Video configuration.
    pub fn config(&self) -> &VideoConfig {
        &self.config
    }

    /// Underlying scene timeline.
    pub fn timeline(&self) -> &Timeline<SceneId> {
        &self.timeline
    }

    /// Total length in frames.
    pub fn duration(&self) -> FrameIndex {
        self.timeline.end()
    }

    /// Full playback range `[0, duration)`.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration(),
        }
    }

    /// Render one absolute frame. Frames past the end render empty.
    #[tracing::instrument(skip(self), fields(frame = frame.0))]
    pub fn render(&self, frame: FrameIndex) -> RenderedFrame {
        let scene = self.timeline.render(frame);
        if scene.is_none() {
            tracing::debug!("frame outside every scene window");
        }
        RenderedFrame {
            frame,
            background: self.config.background,
            scene,
        }
    }

    /// Render every frame in `range`, in order.
    pub fn render_range(&self, range: FrameRange) -> impl Iterator<Item = RenderedFrame> + '_ {
        range.frames().map(move |f| self.render(f))
    }

    /// Render the whole video, in order.
    pub fn frames(&self) -> impl Iterator<Item = RenderedFrame> + '_ {
        self.render_range(self.range())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/video/demo.rs"]
mod tests;
