//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! SGR code interpretation and per-key styling aggregation.
//!
//! The interpreter walks the token cursor of one `key=value` assignment and
//! classifies each code as a style attribute, a combined ground+color code,
//! or an extended-color introducer. The results fold into a single
//! [`Styling`] record per key: a set of style attributes plus independent,
//! last-writer-wins foreground and background color slots.

use crate::palette;
use crate::tokens::SgrTokens;
use std::collections::BTreeSet;
use std::str::FromStr;

/// A single SGR style attribute.
///
/// | Code | Attribute     |
/// |------|---------------|
/// | `1`  | Bold          |
/// | `2`  | Dim           |
/// | `3`  | Italic        |
/// | `4`  | Underline     |
/// | `5`  | Blink         |
/// | `6`  | Rapid Blink   |
/// | `7`  | Reverse       |
/// | `8`  | Hidden        |
/// | `9`  | Strikethrough |
///
/// All nine codes are recognized during decoding, but only a subset has a
/// renderable terminal attribute; see [`TermAttr`](crate::TermAttr).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Style {
    /// Bold or increased intensity (Code: `1`).
    Bold,
    /// Dim or decreased intensity (Code: `2`).
    Dim,
    /// Italic or oblique (Code: `3`).
    Italic,
    /// Underline (Code: `4`).
    Underline,
    /// Slow blink (Code: `5`).
    Blink,
    /// Rapid blink (Code: `6`).
    BlinkFast,
    /// Reverse video (Code: `7`).
    Reverse,
    /// Hidden or concealed (Code: `8`).
    Hidden,
    /// Strikethrough (Code: `9`).
    Strikethrough,
}

impl Style {
    /// Matches a normalized SGR token against the style table.
    pub fn from_code(code: &str) -> Option<Style> {
        match code {
            "1" => Some(Style::Bold),
            "2" => Some(Style::Dim),
            "3" => Some(Style::Italic),
            "4" => Some(Style::Underline),
            "5" => Some(Style::Blink),
            "6" => Some(Style::BlinkFast),
            "7" => Some(Style::Reverse),
            "8" => Some(Style::Hidden),
            "9" => Some(Style::Strikethrough),
            _ => None,
        }
    }
}

/// Which color slot of a styling a code affects.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Ground {
    /// Text color.
    Foreground,
    /// Fill color behind the text.
    Background,
}

/// One of the sixteen named ANSI colors.
///
/// The eight base colors are followed by their eight bright counterparts.
/// Each carries a stable ordinal `1..=16` in declaration order; the 0-based
/// [`palette_index`](AnsiColor::palette_index) doubles as the terminal
/// palette position and recovers the ANSI code offset.
///
/// | FG Code | BG Code | Color          |
/// |---------|---------|----------------|
/// | `30`    | `40`    | Black          |
/// | `31`    | `41`    | Red            |
/// | `32`    | `42`    | Green          |
/// | `33`    | `43`    | Yellow         |
/// | `34`    | `44`    | Blue           |
/// | `35`    | `45`    | Magenta        |
/// | `36`    | `46`    | Cyan           |
/// | `37`    | `47`    | White          |
/// | `90`    | `100`   | Bright Black   |
/// | `91`    | `101`   | Bright Red     |
/// | `92`    | `102`   | Bright Green   |
/// | `93`    | `103`   | Bright Yellow  |
/// | `94`    | `104`   | Bright Blue    |
/// | `95`    | `105`   | Bright Magenta |
/// | `96`    | `106`   | Bright Cyan    |
/// | `97`    | `107`   | Bright White   |
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AnsiColor {
    /// Black - Color #0 (FG `30`, BG `40`).
    Black,
    /// Red - Color #1 (FG `31`, BG `41`).
    Red,
    /// Green - Color #2 (FG `32`, BG `42`).
    Green,
    /// Yellow - Color #3 (FG `33`, BG `43`).
    Yellow,
    /// Blue - Color #4 (FG `34`, BG `44`).
    Blue,
    /// Magenta - Color #5 (FG `35`, BG `45`).
    Magenta,
    /// Cyan - Color #6 (FG `36`, BG `46`).
    Cyan,
    /// White - Color #7 (FG `37`, BG `47`).
    White,
    /// Bright Black - Color #8 (FG `90`, BG `100`).
    BrightBlack,
    /// Bright Red - Color #9 (FG `91`, BG `101`).
    BrightRed,
    /// Bright Green - Color #10 (FG `92`, BG `102`).
    BrightGreen,
    /// Bright Yellow - Color #11 (FG `93`, BG `103`).
    BrightYellow,
    /// Bright Blue - Color #12 (FG `94`, BG `104`).
    BrightBlue,
    /// Bright Magenta - Color #13 (FG `95`, BG `105`).
    BrightMagenta,
    /// Bright Cyan - Color #14 (FG `96`, BG `106`).
    BrightCyan,
    /// Bright White - Color #15 (FG `97`, BG `107`).
    BrightWhite,
}

impl AnsiColor {
    /// All sixteen named colors in ordinal order.
    pub const ALL: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::BrightBlack,
        AnsiColor::BrightRed,
        AnsiColor::BrightGreen,
        AnsiColor::BrightYellow,
        AnsiColor::BrightBlue,
        AnsiColor::BrightMagenta,
        AnsiColor::BrightCyan,
        AnsiColor::BrightWhite,
    ];

    /// Stable ordinal `1..=16`.
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// 0-based terminal palette position (`ordinal - 1`).
    pub fn palette_index(self) -> u8 {
        self as u8
    }

    /// Symbolic snake_case name, used as the key into discrete color maps.
    pub fn name(self) -> &'static str {
        match self {
            AnsiColor::Black => "black",
            AnsiColor::Red => "red",
            AnsiColor::Green => "green",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
            AnsiColor::Cyan => "cyan",
            AnsiColor::White => "white",
            AnsiColor::BrightBlack => "bright_black",
            AnsiColor::BrightRed => "bright_red",
            AnsiColor::BrightGreen => "bright_green",
            AnsiColor::BrightYellow => "bright_yellow",
            AnsiColor::BrightBlue => "bright_blue",
            AnsiColor::BrightMagenta => "bright_magenta",
            AnsiColor::BrightCyan => "bright_cyan",
            AnsiColor::BrightWhite => "bright_white",
        }
    }

    /// Matches a normalized token against the combined ground+color codes.
    ///
    /// Codes `30..=37` and `40..=47` select the eight base colors on the
    /// foreground and background respectively; `90..=97` and `100..=107`
    /// select the bright counterparts.
    pub fn from_combined_code(code: &str) -> Option<(Ground, AnsiColor)> {
        let code: u8 = code.parse().ok()?;
        let (ground, index) = match code {
            30..=37 => (Ground::Foreground, code - 30),
            40..=47 => (Ground::Background, code - 40),
            90..=97 => (Ground::Foreground, code - 90 + 8),
            100..=107 => (Ground::Background, code - 100 + 8),
            _ => return None,
        };
        Some((ground, AnsiColor::ALL[index as usize]))
    }
}

/// Error produced when a symbolic color name is not one of the sixteen
/// named ANSI colors.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown color name: {0:?}")]
pub struct ColorNameError(pub String);

impl FromStr for AnsiColor {
    type Err = ColorNameError;

    fn from_str(s: &str) -> Result<AnsiColor, ColorNameError> {
        AnsiColor::ALL
            .iter()
            .copied()
            .find(|color| color.name() == s)
            .ok_or_else(|| ColorNameError(s.to_owned()))
    }
}

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Rgb {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

impl Rgb {
    /// Formats this color as a lowercase `#rrggbb` GUI hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error produced when a GUI hex color string cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum HexColorError {
    /// The string does not start with `#`.
    #[error("hex color must start with '#': {0:?}")]
    MissingHash(String),
    /// The string does not have exactly six hex digits after the `#`.
    #[error("hex color must have six digits: {0:?}")]
    BadLength(String),
    /// A character after the `#` is not a hex digit.
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

impl FromStr for Rgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Rgb, HexColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| HexColorError::MissingHash(s.to_owned()))?;
        if digits.len() != 6 {
            return Err(HexColorError::BadLength(s.to_owned()));
        }
        // The length guard counts bytes; reject non-ASCII before slicing so
        // a multibyte character cannot land inside a channel boundary.
        if !digits.is_ascii() {
            return Err(HexColorError::BadDigit(s.to_owned()));
        }
        let channel = |range| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| HexColorError::BadDigit(s.to_owned()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// A decoded color: either one of the sixteen named colors or a 24-bit
/// RGB triple. An unset color slot is `Option::<ColorValue>::None`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColorValue {
    /// One of the sixteen named ANSI colors.
    Named(AnsiColor),
    /// A 24-bit RGB color, from an extended-color sequence.
    Rgb(Rgb),
}

/// The aggregated styling of one `key=value` assignment.
///
/// Style attributes accumulate into a set; the foreground and background
/// slots are independent and last-writer-wins. A value with no recognized
/// codes still decodes to a fully empty, well-formed styling.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Styling {
    /// Accumulated style attributes.
    pub styles: BTreeSet<Style>,
    /// Foreground color, if any code set one.
    pub foreground: Option<ColorValue>,
    /// Background color, if any code set one.
    pub background: Option<ColorValue>,
}

impl Styling {
    /// Decodes the SGR code sequence of one `key=value` assignment.
    ///
    /// Codes are consumed left to right:
    ///
    /// 1. Style table codes `1..=9` add a [`Style`] to the set.
    /// 2. Combined ground+color codes assign a named color to their slot.
    /// 3. Introducers `38`/`48` pull follow-up tokens: `5` selects the
    ///    8-bit palette decoder, `2` the 24-bit decoder. A failed or
    ///    incomplete decode contributes nothing.
    /// 4. Anything else is skipped; unrecognized codes never abort decoding.
    pub fn decode(value: &str) -> Styling {
        let mut tokens = SgrTokens::new(value);
        let mut styling = Styling::default();
        while let Some(code) = tokens.next() {
            if let Some(style) = Style::from_code(code) {
                styling.styles.insert(style);
            } else if let Some((ground, color)) = AnsiColor::from_combined_code(code) {
                styling.set_color(ground, ColorValue::Named(color));
            } else if let Some(ground) = extended_ground(code) {
                if let Some(color) = palette::decode_extended(&mut tokens) {
                    styling.set_color(ground, color);
                }
            } else if !code.is_empty() {
                tracing::trace!(code, "skipping unrecognized SGR code");
            }
        }
        styling
    }

    fn set_color(&mut self, ground: Ground, color: ColorValue) {
        match ground {
            Ground::Foreground => self.foreground = Some(color),
            Ground::Background => self.background = Some(color),
        }
    }
}

/// Matches the extended-color introducer codes `38` (foreground) and `48`
/// (background).
fn extended_ground(code: &str) -> Option<Ground> {
    match code {
        "38" => Some(Ground::Foreground),
        "48" => Some(Ground::Background),
        _ => None,
    }
}
