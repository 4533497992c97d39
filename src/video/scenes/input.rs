use crate::{
    animation::interpolate::interpolate_clamped,
    foundation::color::Rgba8,
    timeline::sequencer::SceneCtx,
    video::{
        data::{EXPECTED_OUTPUT_TEXT, PROMPT_TEXT},
        theme,
    },
};

const PROMPT_CHARS_PER_FRAME: f64 = 3.5;
const EXPECTED_CHARS_PER_FRAME: f64 = 4.0;
const EXPECTED_START: f64 = 55.0;
const CURSOR_BLINK_RATE: f64 = 0.3;

/// Text being typed out character by character.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TypedText {
    /// Visible prefix.
    pub visible: String,
    /// Number of visible characters.
    pub chars_visible: usize,
    /// Length of the full text.
    pub total_chars: usize,
    /// Whether the cursor glyph is drawn at all (typing in progress).
    pub cursor_shown: bool,
    /// Blink phase of the cursor when shown.
    pub cursor_on: bool,
    /// Box and text opacity.
    pub opacity: f64,
    /// Text colour.
    pub color: Rgba8,
}

/// Scene 1: the prompt and expected output being typed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InputFrame {
    /// "YOUR PROMPT" label opacity.
    pub prompt_label_opacity: f64,
    /// The prompt box.
    pub prompt: TypedText,
    /// "EXPECTED OUTPUT" label opacity.
    pub expected_label_opacity: f64,
    /// The expected output box.
    pub expected: TypedText,
}

pub(crate) fn render(ctx: SceneCtx) -> InputFrame {
    let f = ctx.local();
    let cursor_on = (f * CURSOR_BLINK_RATE).sin() > 0.0;

    let prompt_total = PROMPT_TEXT.chars().count();
    let prompt_chars = ((f * PROMPT_CHARS_PER_FRAME).floor() as usize).min(prompt_total);

    let expected_total = EXPECTED_OUTPUT_TEXT.chars().count();
    let expected_chars =
        ((f - EXPECTED_START) * EXPECTED_CHARS_PER_FRAME).floor().max(0.0) as usize;
    let expected_chars = expected_chars.min(expected_total);
    let expected_opacity = interpolate_clamped(f, [50.0, 55.0], [0.0, 1.0]);

    InputFrame {
        prompt_label_opacity: interpolate_clamped(f, [0.0, 8.0], [0.0, 1.0]),
        prompt: TypedText {
            visible: char_prefix(PROMPT_TEXT, prompt_chars).to_owned(),
            chars_visible: prompt_chars,
            total_chars: prompt_total,
            cursor_shown: prompt_chars < prompt_total,
            cursor_on,
            opacity: interpolate_clamped(f, [0.0, 10.0], [0.0, 1.0]),
            color: theme::TEXT,
        },
        expected_label_opacity: expected_opacity,
        expected: TypedText {
            visible: char_prefix(EXPECTED_OUTPUT_TEXT, expected_chars).to_owned(),
            chars_visible: expected_chars,
            total_chars: expected_total,
            cursor_shown: expected_chars > 0 && expected_chars < expected_total,
            cursor_on,
            opacity: expected_opacity,
            color: theme::SUCCESS,
        },
    }
}

fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/video/scenes/input.rs"]
mod tests;
