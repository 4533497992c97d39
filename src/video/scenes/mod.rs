//! The four scripted scenes of the demo video.
//!
//! Each scene is a pure function of its local frame; see [`SceneId`] for dispatch.

pub(crate) mod input;
pub(crate) mod processing;
pub(crate) mod results;
pub(crate) mod selection;

use crate::timeline::sequencer::{Scene, SceneCtx};

pub use input::{InputFrame, TypedText};
pub use processing::{ProcessingFrame, ProcessingRow, RowStatus};
pub use results::{Callout, ResultRow, ResultsFrame, ScoreBand, WinnerBanner};
pub use selection::{CHIP_SPRING, Chip, ModelSelectionFrame};

/// Identifies one of the demo scenes on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    /// Prompt and expected output being typed.
    Input,
    /// Models popping in and being ticked.
    ModelSelection,
    /// Benchmark run progress.
    Processing,
    /// Ranked report.
    Results,
}

impl SceneId {
    /// All scenes in playback order.
    pub const ALL: [SceneId; 4] = [
        Self::Input,
        Self::ModelSelection,
        Self::Processing,
        Self::Results,
    ];

    /// Stable short name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::ModelSelection => "model_selection",
            Self::Processing => "processing",
            Self::Results => "results",
        }
    }
}

/// What a scene wants painted for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum SceneFrame {
    /// Scene 1.
    Input(InputFrame),
    /// Scene 2.
    ModelSelection(ModelSelectionFrame),
    /// Scene 3.
    Processing(ProcessingFrame),
    /// Scene 4.
    Results(ResultsFrame),
}

impl SceneFrame {
    /// Scene that produced this frame.
    pub fn scene_id(&self) -> SceneId {
        match self {
            Self::Input(_) => SceneId::Input,
            Self::ModelSelection(_) => SceneId::ModelSelection,
            Self::Processing(_) => SceneId::Processing,
            Self::Results(_) => SceneId::Results,
        }
    }
}

impl Scene for SceneId {
    type Output = SceneFrame;

    fn render(&self, ctx: SceneCtx) -> SceneFrame {
        match self {
            Self::Input => SceneFrame::Input(input::render(ctx)),
            Self::ModelSelection => SceneFrame::ModelSelection(selection::render(ctx)),
            Self::Processing => SceneFrame::Processing(processing::render(ctx)),
            Self::Results => SceneFrame::Results(results::render(ctx)),
        }
    }
}
