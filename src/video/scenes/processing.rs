use crate::{
    animation::interpolate::interpolate_clamped,
    foundation::color::Rgba8,
    timeline::sequencer::SceneCtx,
    video::{
        data::{BENCHMARK_ROWS, BenchmarkRow, SELECTABLE_MODELS},
        theme,
    },
};

const ROWS_SHOWN: usize = 8;
const ROW_STAGGER: u64 = 10;
const ROW_RUN_FRAMES: u64 = 12;
const ROW_FADE_LEAD: u64 = 5;
const FRAMES_PER_MODEL: f64 = 4.5;
/// The bar fills this many frames before the scene ends.
const PROGRESS_TAIL_FRAMES: u64 = 10;

/// Derived state of one row in the run list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Not started.
    Queued,
    /// In flight.
    Running,
    /// Finished.
    Done,
}

impl RowStatus {
    /// Status label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::Running => "Running",
            Self::Done => "Done",
        }
    }

    /// Leading status glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Queued => "⬜",
            Self::Running => "⏳",
            Self::Done => "✅",
        }
    }

    /// Label colour.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Queued => theme::TEXT_MUTED,
            Self::Running => theme::EMBER,
            Self::Done => theme::SUCCESS,
        }
    }

    /// Row tint.
    pub fn background(self) -> Rgba8 {
        match self {
            Self::Queued => Rgba8::transparent(),
            Self::Running => theme::EMBER.with_alpha(0x08),
            Self::Done => theme::SUCCESS.with_alpha(0x08),
        }
    }
}

/// One model in the run list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProcessingRow {
    /// Model name.
    pub name: &'static str,
    /// Derived status.
    pub status: RowStatus,
    /// Row opacity.
    pub opacity: f64,
    /// Latency column text (`...`, a ticking value, or the final latency).
    pub latency_text: String,
}

/// Scene 3: the benchmark "runs".
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProcessingFrame {
    /// Heading.
    pub heading: &'static str,
    /// "Testing model N of 20".
    pub status_line: String,
    /// Progress bar fill in percent.
    pub progress_percent: f64,
    /// Progress bar colour.
    pub progress_color: Rgba8,
    /// Run list.
    pub rows: Vec<ProcessingRow>,
}

pub(crate) fn render(ctx: SceneCtx) -> ProcessingFrame {
    let f = ctx.local();
    let total = SELECTABLE_MODELS.len();
    let fill_end = ctx.duration_frames.saturating_sub(PROGRESS_TAIL_FRAMES) as f64;

    let complete = ((f / FRAMES_PER_MODEL).floor() as usize).min(total);
    let testing = (complete + 1).min(total);

    let rows = BENCHMARK_ROWS
        .iter()
        .take(ROWS_SHOWN)
        .enumerate()
        .map(|(i, row)| processing_row(ctx.local_frame.0, i as u64, row))
        .collect();

    ProcessingFrame {
        heading: "Running your benchmark...",
        status_line: format!("Testing model {testing} of {total}"),
        progress_percent: interpolate_clamped(f, [0.0, fill_end], [0.0, 100.0]),
        progress_color: theme::EMBER,
        rows,
    }
}

fn processing_row(frame: u64, index: u64, row: &BenchmarkRow) -> ProcessingRow {
    let start = index * ROW_STAGGER;
    let end = start + ROW_RUN_FRAMES;
    let status = if frame > end {
        RowStatus::Done
    } else if frame > start {
        RowStatus::Running
    } else {
        RowStatus::Queued
    };

    let fade_start = start.saturating_sub(ROW_FADE_LEAD);
    let fade_end = (fade_start + 1).max(start);
    let f = frame as f64;
    let opacity = interpolate_clamped(f, [fade_start as f64, fade_end as f64], [0.4, 1.0]);

    let latency_text = match status {
        RowStatus::Done => format!("{}s", row.latency_secs),
        RowStatus::Running => {
            let ticking =
                interpolate_clamped(f, [start as f64, end as f64], [0.0, row.latency_secs]);
            format!("{ticking:.1}s")
        }
        RowStatus::Queued => "...".to_owned(),
    };

    ProcessingRow {
        name: row.name,
        status,
        opacity,
        latency_text,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/video/scenes/processing.rs"]
mod tests;
