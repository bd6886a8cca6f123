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

//! Extended-color decoders for the `38;…`/`48;…` SGR sequences.
//!
//! The 8-bit decoder covers three subranges of the 256-color palette:
//!
//! | Index     | Meaning                              |
//! |-----------|--------------------------------------|
//! | `0..=7`   | The eight base named colors          |
//! | `8..=15`  | Unmapped; the decode yields nothing  |
//! | `16..=231`| The 6x6x6 color cube                 |
//! | `232..=255`| 24-step greyscale ramp              |
//!
//! The 24-bit decoder reads three further tokens as RGB components. Any
//! parse failure or out-of-range value drops the whole color; the decoders
//! never error.

use crate::style::{AnsiColor, ColorValue, Rgb};
use crate::tokens::SgrTokens;

/// Quantization step of one cube channel (`255 / 5`).
const CUBE_STEP: u8 = 51;

/// Decodes the tokens following a `38`/`48` introducer.
///
/// Selector `5` reads one 8-bit palette index; selector `2` reads a 24-bit
/// RGB triple. Any other selector consumes only itself and yields nothing.
pub(crate) fn decode_extended(tokens: &mut SgrTokens) -> Option<ColorValue> {
    match tokens.next()? {
        "5" => decode_fixed(tokens),
        "2" => decode_rgb(tokens).map(ColorValue::Rgb),
        _ => None,
    }
}

/// Decodes one 8-bit palette index into a named or RGB color.
///
/// Indices `8..=15` fall between the base-color table and the cube and are
/// deliberately unmapped; they must not be routed through the cube formula.
fn decode_fixed(tokens: &mut SgrTokens) -> Option<ColorValue> {
    let index: i64 = tokens.next()?.parse().ok()?;
    match index {
        0..=7 => Some(ColorValue::Named(AnsiColor::ALL[index as usize])),
        16..=231 => Some(ColorValue::Rgb(cube(index as u8 - 16))),
        232..=255 => Some(ColorValue::Rgb(greyscale(index as u8 - 232))),
        _ => None,
    }
}

/// Decodes a 24-bit RGB triple from three further tokens.
///
/// Components are parsed left to right; a token that fails to parse stops
/// consumption there, while a numeric component outside `0..=255` consumes
/// all three tokens before the color is dropped.
fn decode_rgb(tokens: &mut SgrTokens) -> Option<Rgb> {
    let r: i64 = tokens.next()?.parse().ok()?;
    let g: i64 = tokens.next()?.parse().ok()?;
    let b: i64 = tokens.next()?.parse().ok()?;
    let range = 0..=255;
    if range.contains(&r) && range.contains(&g) && range.contains(&b) {
        Some(Rgb {
            r: r as u8,
            g: g as u8,
            b: b as u8,
        })
    } else {
        None
    }
}

/// Maps a 6x6x6 cube offset (`index - 16`) to its RGB value.
fn cube(code: u8) -> Rgb {
    Rgb {
        r: (code / 36) * CUBE_STEP,
        g: (code % 36 / 6) * CUBE_STEP,
        b: (code % 6) * CUBE_STEP,
    }
}

/// Maps a greyscale step (`index - 232`) to its RGB value.
fn greyscale(step: u8) -> Rgb {
    let value = (f64::from(step) / 23.0 * 255.0).round() as u8;
    Rgb {
        r: value,
        g: value,
        b: value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: &str) -> Option<ColorValue> {
        decode_extended(&mut SgrTokens::new(&format!("5;{value}")))
    }

    fn rgb(value: &str) -> Option<ColorValue> {
        decode_extended(&mut SgrTokens::new(&format!("2;{value}")))
    }

    #[test]
    fn test_fixed_base_colors() {
        assert_eq!(fixed("1"), Some(ColorValue::Named(AnsiColor::Red)));
        assert_eq!(fixed("7"), Some(ColorValue::Named(AnsiColor::White)));
    }

    #[test]
    fn test_fixed_index_zero_strips_to_nothing() {
        // "0" normalizes to an empty token before numeric parsing, so the
        // black palette index is unreachable through the 8-bit decoder.
        assert_eq!(fixed("0"), None);
    }

    #[test]
    fn test_fixed_indices_8_through_15_unmapped() {
        for index in 8..=15 {
            assert_eq!(fixed(&index.to_string()), None, "index {index}");
        }
    }

    #[test]
    fn test_fixed_cube_colors() {
        // Index 208: offset 192 -> (5, 2, 0) -> rgb(255, 102, 0).
        assert_eq!(
            fixed("208"),
            Some(ColorValue::Rgb(Rgb { r: 255, g: 102, b: 0 }))
        );
        // Index 16 is cube origin, index 231 is cube white.
        assert_eq!(fixed("16"), Some(ColorValue::Rgb(Rgb { r: 0, g: 0, b: 0 })));
        assert_eq!(
            fixed("231"),
            Some(ColorValue::Rgb(Rgb { r: 255, g: 255, b: 255 }))
        );
    }

    #[test]
    fn test_fixed_greyscale_boundaries() {
        assert_eq!(fixed("232"), Some(ColorValue::Rgb(Rgb { r: 0, g: 0, b: 0 })));
        assert_eq!(
            fixed("255"),
            Some(ColorValue::Rgb(Rgb { r: 255, g: 255, b: 255 }))
        );
    }

    #[test]
    fn test_fixed_greyscale_rounds_midpoints() {
        // Step 11 -> round(11 / 23 * 255) = round(121.95...) = 122.
        assert_eq!(
            fixed("243"),
            Some(ColorValue::Rgb(Rgb { r: 122, g: 122, b: 122 }))
        );
    }

    #[test]
    fn test_fixed_out_of_domain_dropped() {
        assert_eq!(fixed("256"), None);
        assert_eq!(fixed("9999"), None);
        assert_eq!(fixed("banana"), None);
        assert_eq!(decode_extended(&mut SgrTokens::new("5")), None);
    }

    #[test]
    fn test_rgb_in_range() {
        assert_eq!(
            rgb("255;107;53"),
            Some(ColorValue::Rgb(Rgb { r: 255, g: 107, b: 53 }))
        );
    }

    #[test]
    fn test_rgb_out_of_range_dropped() {
        assert_eq!(rgb("300;10;10"), None);
        assert_eq!(rgb("10;10;256"), None);
    }

    #[test]
    fn test_rgb_incomplete_dropped() {
        assert_eq!(rgb("10;10"), None);
        assert_eq!(rgb(""), None);
    }

    #[test]
    fn test_unknown_selector_yields_nothing() {
        assert_eq!(decode_extended(&mut SgrTokens::new("3;1;2;3")), None);
        assert_eq!(decode_extended(&mut SgrTokens::new("")), None);
    }
}
