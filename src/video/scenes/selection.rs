use kurbo::Affine;

use crate::{
    animation::{
        interpolate::interpolate_clamped,
        spring::{SpringConfig, spring},
    },
    foundation::color::Rgba8,
    timeline::sequencer::SceneCtx,
    video::{data::SELECTABLE_MODELS, theme},
};

/// Frames between consecutive chip entrances.
const STAGGER_FRAMES: u64 = 2;
/// Frames after its entrance at which a chip is ticked.
const CHECK_AFTER_FRAMES: u64 = 8;
const FRAMES_PER_SELECTED: f64 = 2.5;

/// Entrance spring for the model chips.
pub const CHIP_SPRING: SpringConfig = SpringConfig {
    mass: 1.0,
    damping: 15.0,
    stiffness: 200.0,
    overshoot_clamping: false,
};

/// One selectable model chip.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Chip {
    /// Model name.
    pub name: &'static str,
    /// Entrance has started.
    pub visible: bool,
    /// Checkbox ticked.
    pub checked: bool,
    /// Scale about the chip's centre.
    pub transform: Affine,
    /// Fill.
    pub background: Rgba8,
    /// Outline and checkbox border.
    pub border: Rgba8,
    /// Label colour.
    pub text_color: Rgba8,
}

/// Scene 2: twenty models pop in and get ticked.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ModelSelectionFrame {
    /// Chips in display order.
    pub chips: Vec<Chip>,
    /// Counter value.
    pub selected: usize,
    /// Number of selectable models.
    pub total: usize,
    /// "N of 20 models selected".
    pub counter_label: String,
    /// Counter opacity.
    pub counter_opacity: f64,
}

pub(crate) fn render(ctx: SceneCtx) -> ModelSelectionFrame {
    let f = ctx.local_frame.0;
    let total = SELECTABLE_MODELS.len();

    let chips = SELECTABLE_MODELS
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            let delay = i as u64 * STAGGER_FRAMES;
            let visible = f > delay;
            let scale = if visible {
                spring((f - delay) as f64, ctx.fps, CHIP_SPRING)
            } else {
                0.0
            };
            let checked = f > delay + CHECK_AFTER_FRAMES;
            let (background, border, text_color) = if checked {
                (theme::EMBER.with_alpha(0x15), theme::EMBER, theme::TEXT)
            } else {
                (theme::SURFACE, theme::BORDER, theme::TEXT_SECONDARY)
            };
            Chip {
                name,
                visible,
                checked,
                transform: Affine::scale(scale),
                background,
                border,
                text_color,
            }
        })
        .collect();

    let selected = ((ctx.local() / FRAMES_PER_SELECTED).floor() as usize).min(total);

    ModelSelectionFrame {
        chips,
        selected,
        total,
        counter_label: format!("{selected} of {total} models selected"),
        counter_opacity: interpolate_clamped(ctx.local(), [40.0, 50.0], [0.0, 1.0]),
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/video/scenes/selection.rs"]
mod tests;
