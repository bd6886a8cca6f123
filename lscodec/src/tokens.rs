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

//! Tokenization of the `dircolors`/`LS_COLORS` grammar.
//!
//! The raw string is split on `:` into `key=value` segments, and each value
//! is split on `;` into a stream of numeric SGR codes consumed through a
//! single-pass cursor.

/// Splits a raw `LS_COLORS` string into `(key, value)` segments.
///
/// Leading and trailing `:` separators are stripped before splitting. Each
/// segment is split on the first `=`; a segment without `=` yields an empty
/// value, which decodes to an empty styling.
pub(crate) fn segments(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.trim_matches(':')
        .split(':')
        .map(|segment| segment.split_once('=').unwrap_or((segment, "")))
}

/// Single-pass cursor over the semicolon-delimited SGR codes of one value.
///
/// Each code is yielded with its leading `0` characters stripped, so `01`
/// reads as `1` and a code consisting entirely of zeros reads as the empty
/// string. The conventional SGR reset code `0` therefore normalizes to an
/// empty token that matches nothing and is skipped; a reset mid-value does
/// not clear previously accumulated state.
///
/// The cursor supports "take next" only: no random access, no restart. To
/// re-read a value, build a fresh cursor from the original string.
#[derive(Clone, Debug)]
pub(crate) struct SgrTokens<'a> {
    codes: std::str::Split<'a, char>,
}

impl<'a> SgrTokens<'a> {
    /// Creates a cursor over the codes of one `key=value` value.
    pub(crate) fn new(value: &'a str) -> SgrTokens<'a> {
        SgrTokens {
            codes: value.split(';'),
        }
    }
}

impl<'a> Iterator for SgrTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.codes.next().map(|code| code.trim_start_matches('0'))
    }
}
