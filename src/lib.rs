//! ModelPick promo: the landing page content and the four-scene demo video behind it.
//!
//! The crate produces *descriptions* of what to paint. A host picks an absolute frame, asks
//! [`DemoVideo::render`] for it, and hands the resulting [`RenderedFrame`] to its own painter.
//!
//! # Pipeline overview
//!
//! 1. **Sequence**: `Timeline + FrameIndex -> ActiveScene` (which window is live, and its local frame)
//! 2. **Animate**: each scene derives opacity, offsets, scale and text from its local frame via
//!    [`interpolate`] and [`spring`]
//! 3. **Describe**: the scene returns a serializable [`SceneFrame`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure rendering**: `render(frame)` is deterministic and has no side effects besides logs.
//! - **Total animation math**: interpolation clamps (or extends) outside its domain and never
//!   divides by zero.
//!
//! The landing page is static content ([`LANDING`]) plus disclosure state for the FAQ and the
//! mobile menu ([`Accordion`], [`MobileMenu`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod foundation;
mod landing;
mod timeline;
mod video;

pub use animation::ease::{Curve, Ease};
pub use animation::interpolate::{
    Breakpoints, Extrapolate, InterpolateOpts, interpolate, interpolate_clamped,
};
pub use animation::spring::{SpringConfig, settle_frame, spring};
pub use foundation::color::Rgba8;
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use foundation::error::{ModelPickError, ModelPickResult};
pub use landing::content::{
    Brand, CallToAction, Card, Coverage, DemoEmbed, FAQS, Faq, Footer, Hero, LANDING, LandingPage,
    Link, Nav, Pricing, Recommendation, ReportRow, SECTION_IDS, SampleReport, ScoreBadge,
    ScoreTier, Section, Step,
};
pub use landing::disclosure::{Accordion, Disclosure, FaqList, MobileMenu};
pub use timeline::sequencer::{
    ActiveScene, Scene, SceneCtx, SceneWindow, Timeline, TimelineBuilder,
};
pub use video::config::VideoConfig;
pub use video::data::{
    BENCHMARK_ROWS, BenchmarkRow, EXPECTED_OUTPUT_TEXT, PROMPT_TEXT, SAVINGS_CALLOUT,
    SELECTABLE_MODELS,
};
pub use video::demo::{DemoVideo, RenderedFrame, SCENE_DURATIONS};
pub use video::scenes::{
    CHIP_SPRING, Callout, Chip, InputFrame, ModelSelectionFrame, ProcessingFrame, ProcessingRow,
    ResultRow, ResultsFrame, RowStatus, SceneFrame, SceneId, ScoreBand, TypedText, WinnerBanner,
};

/// Colour palette shared by the page and the video.
pub mod theme {
    pub use crate::video::theme::*;
}
