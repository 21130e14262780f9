//! Pre-computed static text styles.
//!
//! Styles are `const`, so they live in read-only data and nothing is built
//! per frame. Fonts that need the `°` glyph come from the ISO 8859-1 set of
//! `embedded-graphics`; large numerals use `ProFont`.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        iso_8859_1::{FONT_9X15, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{ALERT, GRAY, PINK, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for the date line and boot banners.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for readings and boot status lines.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Font References
// =============================================================================

/// Large numeral font for the primary reading (`ProFont` 24pt).
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// Unit suffix font, drawn right after the primary numerals.
pub const UNIT_FONT: &MonoFont = &FONT_10X20;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Primary reading numerals.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(VALUE_FONT, WHITE);

/// Unit suffix after the primary reading (`°C`, `%`, `hPa`).
pub const UNIT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(UNIT_FONT, GRAY);

/// Secondary reading lines below the icon.
pub const SECONDARY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Date line on the clock screen.
pub const DATE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Boot status lines ("Sensors: OK.").
pub const STATUS_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, WHITE);

/// Boot status line for a fatal init failure.
pub const STATUS_ALERT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15, ALERT);

/// Large pink "Welcome" banner.
pub const WELCOME_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(VALUE_FONT, PINK);
