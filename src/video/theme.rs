//! Palette shared by every scene of the demo video.

use crate::foundation::color::Rgba8;

/// Page and video background.
pub const VOID: Rgba8 = Rgba8::rgb_hex(0x0A0A0B);
/// Card background.
pub const SURFACE: Rgba8 = Rgba8::rgb_hex(0x141415);
/// Raised card background (table header).
pub const SURFACE_RAISED: Rgba8 = Rgba8::rgb_hex(0x1E1E20);
/// Hairline borders and the progress track.
pub const BORDER: Rgba8 = Rgba8::rgb_hex(0x2A2A2D);
/// Brand accent.
pub const EMBER: Rgba8 = Rgba8::rgb_hex(0xF97316);
/// Primary text.
pub const TEXT: Rgba8 = Rgba8::rgb_hex(0xF5F5F5);
/// Secondary text.
pub const TEXT_SECONDARY: Rgba8 = Rgba8::rgb_hex(0xA1A1AA);
/// Muted text and labels.
pub const TEXT_MUTED: Rgba8 = Rgba8::rgb_hex(0x71717A);
/// Positive values.
pub const SUCCESS: Rgba8 = Rgba8::rgb_hex(0x22C55E);
/// Middling scores.
pub const WARNING: Rgba8 = Rgba8::rgb_hex(0xEAB308);
/// Poor scores.
pub const DANGER: Rgba8 = Rgba8::rgb_hex(0xEF4444);
