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

//! Highlight-group synthesis.
//!
//! A per-key [`Styling`] plus the caller-supplied discrete color map become
//! one named, renderer-ready [`HighlightGroup`]: terminal attribute names,
//! terminal palette indices, and GUI hex colors.

use crate::consts::HL_PREFIX;
use crate::ruleset::DiscreteColors;
use crate::style::{ColorValue, Style, Styling};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// A terminal attribute with a renderable equivalent.
///
/// Only five of the nine recognized [`Style`] codes map to a terminal
/// attribute; dim, both blink speeds, and hidden are accepted during
/// decoding but contribute no visual effect.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TermAttr {
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Reverse video.
    Reverse,
    /// Struck-through text.
    Strikethrough,
}

impl TermAttr {
    /// Attribute name as the host editor expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            TermAttr::Bold => "bold",
            TermAttr::Italic => "italic",
            TermAttr::Underline => "underline",
            TermAttr::Reverse => "reverse",
            TermAttr::Strikethrough => "strikethrough",
        }
    }

    fn from_style(style: Style) -> Option<TermAttr> {
        match style {
            Style::Bold => Some(TermAttr::Bold),
            Style::Italic => Some(TermAttr::Italic),
            Style::Underline => Some(TermAttr::Underline),
            Style::Reverse => Some(TermAttr::Reverse),
            Style::Strikethrough => Some(TermAttr::Strikethrough),
            Style::Dim | Style::Blink | Style::BlinkFast | Style::Hidden => None,
        }
    }
}

/// A named bundle of terminal and GUI styling attributes.
///
/// The `name` is freshly generated per group and unique within a decode; it
/// identifies the group to the host editor and carries no semantics. Use
/// [`styling_eq`](HighlightGroup::styling_eq) to compare groups by their
/// visual content.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighlightGroup {
    /// Generated unique group name.
    pub name: String,
    /// Terminal attributes to apply.
    pub cterm: BTreeSet<TermAttr>,
    /// Terminal foreground palette index, for named colors only.
    pub ctermfg: Option<u8>,
    /// Terminal background palette index, for named colors only.
    pub ctermbg: Option<u8>,
    /// GUI foreground color as a `#rrggbb` hex string.
    pub guifg: Option<String>,
    /// GUI background color as a `#rrggbb` hex string.
    pub guibg: Option<String>,
}

impl HighlightGroup {
    /// Compares every styling field, ignoring the generated `name`.
    pub fn styling_eq(&self, other: &HighlightGroup) -> bool {
        self.cterm == other.cterm
            && self.ctermfg == other.ctermfg
            && self.ctermbg == other.ctermbg
            && self.guifg == other.guifg
            && self.guibg == other.guibg
    }

    /// True when the group applies no visual styling at all.
    ///
    /// An all-empty group still counts as a rule; consumers must apply it
    /// as "no styling", not treat it as a missing entry.
    pub fn is_unstyled(&self) -> bool {
        self.cterm.is_empty()
            && self.ctermfg.is_none()
            && self.ctermbg.is_none()
            && self.guifg.is_none()
            && self.guibg.is_none()
    }
}

/// Source of unique highlight-group names.
///
/// The decoder synthesizes one group per `key=value` assignment and names
/// each through its source. Sources must be safe to share across threads;
/// deterministic implementations make decodes reproducible under test.
pub trait NameSource {
    /// Returns the next unique group name.
    fn next_name(&self) -> String;
}

/// Collision-resistant default source backed by random UUIDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidNames;

impl NameSource for UuidNames {
    fn next_name(&self) -> String {
        format!("{HL_PREFIX}_ls_{}", Uuid::new_v4().simple())
    }
}

/// Deterministic source that numbers groups from zero.
#[derive(Debug, Default)]
pub struct SequentialNames(AtomicU64);

impl NameSource for SequentialNames {
    fn next_name(&self) -> String {
        let n = self.0.fetch_add(1, Ordering::Relaxed);
        format!("{HL_PREFIX}_ls_{n}")
    }
}

/// Synthesizes the highlight group for one decoded styling.
///
/// Named colors populate the terminal index slots and, when present in the
/// discrete color map under their symbolic name, the GUI hex slots. RGB
/// colors populate only the GUI hex slots.
pub(crate) fn synthesize(
    styling: &Styling,
    discrete_colors: &DiscreteColors,
    names: &impl NameSource,
) -> HighlightGroup {
    let cterm = styling
        .styles
        .iter()
        .filter_map(|&style| TermAttr::from_style(style))
        .collect();
    let (ctermfg, guifg) = split_color(styling.foreground, discrete_colors);
    let (ctermbg, guibg) = split_color(styling.background, discrete_colors);
    HighlightGroup {
        name: names.next_name(),
        cterm,
        ctermfg,
        ctermbg,
        guifg,
        guibg,
    }
}

fn split_color(
    color: Option<ColorValue>,
    discrete_colors: &DiscreteColors,
) -> (Option<u8>, Option<String>) {
    match color {
        Some(ColorValue::Named(named)) => (
            Some(named.palette_index()),
            discrete_colors.get(named.name()).cloned(),
        ),
        Some(ColorValue::Rgb(rgb)) => (None, Some(rgb.to_hex())),
        None => (None, None),
    }
}
