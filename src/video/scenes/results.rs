use kurbo::Affine;

use crate::{
    animation::interpolate::interpolate_clamped,
    foundation::color::Rgba8,
    timeline::sequencer::SceneCtx,
    video::{
        data::{BENCHMARK_ROWS, BenchmarkRow, SAVINGS_CALLOUT},
        theme,
    },
};

const ROWS_SHOWN: usize = 7;
const ROW_FIRST_DELAY: u64 = 15;
const ROW_STAGGER: u64 = 6;
const ROW_FADE_FRAMES: u64 = 8;

/// Colour band for a score pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 88 and above.
    Strong,
    /// 80 up to 88.
    Fair,
    /// Below 80.
    Weak,
}

impl ScoreBand {
    /// Band for an overall score.
    pub fn for_score(score: f64) -> Self {
        if score >= 88.0 {
            Self::Strong
        } else if score >= 80.0 {
            Self::Fair
        } else {
            Self::Weak
        }
    }

    /// Pill colour.
    pub fn color(self) -> Rgba8 {
        match self {
            Self::Strong => theme::SUCCESS,
            Self::Fair => theme::WARNING,
            Self::Weak => theme::DANGER,
        }
    }
}

/// Recommended-model banner above the table.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WinnerBanner {
    /// Banner opacity.
    pub opacity: f64,
    /// Vertical slide-in offset.
    pub transform: Affine,
    /// Winning model.
    pub name: &'static str,
    /// Accuracy counter, counting up to the winner's accuracy.
    pub accuracy: u32,
    /// Latency text.
    pub speed_text: String,
    /// Cost per query.
    pub cost_text: &'static str,
}

/// One ranked row of the results table.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResultRow {
    /// 1-based rank.
    pub rank: usize,
    /// Row 1 gets the trophy and accent border.
    pub winner: bool,
    /// Model name.
    pub name: &'static str,
    /// Vendor.
    pub provider: &'static str,
    /// Accuracy pill.
    pub accuracy: u8,
    /// Latency text.
    pub speed_text: String,
    /// Cost per query.
    pub cost_text: &'static str,
    /// Score to one decimal.
    pub score_text: String,
    /// Score pill band.
    pub score_band: ScoreBand,
    /// Row opacity.
    pub opacity: f64,
    /// Vertical slide-in offset.
    pub transform: Affine,
    /// Row tint.
    pub background: Rgba8,
}

/// Savings line under the table.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Callout {
    /// Callout opacity.
    pub opacity: f64,
    /// Copy.
    pub text: &'static str,
}

/// Scene 4: the ranked report.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResultsFrame {
    /// Banner.
    pub banner: WinnerBanner,
    /// Table rows, best first.
    pub rows: Vec<ResultRow>,
    /// Savings callout.
    pub savings: Callout,
}

pub(crate) fn render(ctx: SceneCtx) -> ResultsFrame {
    let f = ctx.local();
    let winner = &BENCHMARK_ROWS[0];

    let counted = interpolate_clamped(f, [15.0, 40.0], [0.0, f64::from(winner.accuracy)]).round();
    let banner = WinnerBanner {
        opacity: interpolate_clamped(f, [0.0, 15.0], [0.0, 1.0]),
        transform: Affine::translate((0.0, interpolate_clamped(f, [0.0, 15.0], [10.0, 0.0]))),
        name: winner.name,
        accuracy: (counted as u32).min(u32::from(winner.accuracy)),
        speed_text: format!("{}s", winner.latency_secs),
        cost_text: winner.cost,
    };

    let rows = BENCHMARK_ROWS
        .iter()
        .take(ROWS_SHOWN)
        .enumerate()
        .map(|(i, row)| result_row(f, i, row))
        .collect();

    ResultsFrame {
        banner,
        rows,
        savings: Callout {
            opacity: interpolate_clamped(f, [70.0, 85.0], [0.0, 1.0]),
            text: SAVINGS_CALLOUT,
        },
    }
}

fn result_row(f: f64, index: usize, row: &BenchmarkRow) -> ResultRow {
    let delay = (ROW_FIRST_DELAY + index as u64 * ROW_STAGGER) as f64;
    let window = [delay, delay + ROW_FADE_FRAMES as f64];
    let winner = index == 0;
    let score_band = ScoreBand::for_score(row.score);

    ResultRow {
        rank: index + 1,
        winner,
        name: row.name,
        provider: row.provider,
        accuracy: row.accuracy,
        speed_text: format!("{}s", row.latency_secs),
        cost_text: row.cost,
        score_text: format!("{:.1}", row.score),
        score_band,
        opacity: interpolate_clamped(f, window, [0.0, 1.0]),
        transform: Affine::translate((0.0, interpolate_clamped(f, window, [8.0, 0.0]))),
        background: if winner {
            theme::EMBER.with_alpha(0x08)
        } else {
            Rgba8::transparent()
        },
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/video/scenes/results.rs"]
mod tests;
