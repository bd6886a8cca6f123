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

//! Arborix LsCodec decodes `dircolors`/`LS_COLORS` strings into structured
//! highlight rule sets.
//!
//! An `LS_COLORS` string is a colon-separated list of `key=SGR;SGR;...`
//! assignments. Each key names either a filesystem-entry classification (a
//! two-character code such as `di` or `ln`), a file extension (`*.tar`), or
//! a literal filename glob; each value is a semicolon-delimited sequence of
//! ANSI Select Graphic Rendition codes. [`LscDecoder`] turns one such string,
//! plus an optional map of named colors to GUI hex values, into an immutable
//! [`LsColorRules`] artifact ready for per-entry styling lookups.
//!
//! Decoding is a pure, synchronous, single-pass transform. Malformed input
//! never produces an error: unknown codes are skipped, broken extended-color
//! sequences are dropped, and every `key=value` assignment always yields a
//! well-formed (possibly empty) highlight group.

mod consts;
mod highlight;
mod mode;
mod palette;
mod ruleset;
mod style;
mod tokens;

pub use self::highlight::{
    HighlightGroup, NameSource, SequentialNames, TermAttr, UuidNames,
};
pub use self::mode::Mode;
pub use self::ruleset::{DiscreteColors, LsColorRules, LscDecoder, decode_ls_colors};
pub use self::style::{
    AnsiColor, ColorNameError, ColorValue, Ground, HexColorError, Rgb, Style, Styling,
};
