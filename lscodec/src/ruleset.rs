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

//! The decoder entry point and key classification.
//!
//! [`LscDecoder::decode`] synthesizes one highlight group per `key=value`
//! assignment, then partitions the groups into four buckets: the fixed
//! two-character classification keys (pre- and post-fallback), extension
//! rules, and literal filename globs.

use crate::highlight::{HighlightGroup, NameSource, UuidNames, synthesize};
use crate::mode::Mode;
use crate::style::Styling;
use crate::tokens::segments;
use std::collections::HashMap;

/// Map from symbolic named-color name (`"blue"`, `"bright_red"`, …) to a
/// GUI hex color string, supplied by the configuration layer. May be empty.
pub type DiscreteColors = HashMap<String, String>;

/// Two-character keys resolved before extension and glob rules.
const MODE_PRE_TABLE: [(&str, Mode); 16] = [
    ("bd", Mode::BlockDevice),
    ("cd", Mode::CharDevice),
    ("do", Mode::Door),
    ("ex", Mode::Executable),
    ("ca", Mode::FileWithCapability),
    ("di", Mode::Folder),
    ("ln", Mode::Link),
    ("mh", Mode::MultiHardlink),
    ("or", Mode::OrphanLink),
    ("ow", Mode::OtherWritable),
    ("pi", Mode::Pipe),
    ("so", Mode::Socket),
    ("st", Mode::StickyDir),
    ("tw", Mode::StickyWritable),
    ("sg", Mode::SetGid),
    ("su", Mode::SetUid),
];

/// Two-character keys resolved after extension and glob rules; `no` is the
/// universal fallback slot.
const MODE_POST_TABLE: [(&str, Option<Mode>); 2] = [("fi", Some(Mode::File)), ("no", None)];

/// The decoded rule set.
///
/// Built once from `(raw string, discrete colors)` at configuration time and
/// immutable thereafter; a configuration reload discards the whole artifact
/// and builds a new one.
///
/// Consumers resolving one filesystem entry should check, in order:
/// `mode_pre` by classification, then `exts`, then `name_globs`, then the
/// `mode_post` fallback, then apply no styling. The precedence is the
/// renderer's contract; nothing here enforces it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LsColorRules {
    /// Classification-keyed rules checked before extension and glob rules.
    pub mode_pre: HashMap<Mode, HighlightGroup>,
    /// Classification-keyed fallback rules; the `None` key is the universal
    /// "no match" entry.
    pub mode_post: HashMap<Option<Mode>, HighlightGroup>,
    /// Extension-keyed rules, keyed without the `*.` prefix.
    pub exts: HashMap<String, HighlightGroup>,
    /// Literal filename-glob rules.
    pub name_globs: HashMap<String, HighlightGroup>,
}

/// Decoder from `LS_COLORS` strings to [`LsColorRules`].
///
/// The decoder is a pure function of its inputs plus the name source it
/// owns; concurrent decodes are safe whenever the source is.
#[derive(Clone, Debug, Default)]
pub struct LscDecoder<N = UuidNames> {
    names: N,
}

impl LscDecoder<UuidNames> {
    /// Creates a decoder with the default UUID name source.
    pub fn new() -> LscDecoder<UuidNames> {
        LscDecoder { names: UuidNames }
    }
}

impl<N: NameSource> LscDecoder<N> {
    /// Creates a decoder with an injected name source.
    pub fn with_names(names: N) -> LscDecoder<N> {
        LscDecoder { names }
    }

    /// Decodes one `LS_COLORS` string into a rule set.
    ///
    /// Decoding always completes: malformed codes are dropped segment-local
    /// and every assignment yields a (possibly unstyled) highlight group.
    #[tracing::instrument(skip_all, fields(len = ls_colors.len()))]
    pub fn decode(&self, ls_colors: &str, discrete_colors: &DiscreteColors) -> LsColorRules {
        let mut lookup: HashMap<&str, HighlightGroup> = segments(ls_colors)
            .map(|(key, value)| {
                let styling = Styling::decode(value);
                (key, synthesize(&styling, discrete_colors, &self.names))
            })
            .collect();

        let mut mode_pre = HashMap::new();
        for (key, mode) in MODE_PRE_TABLE {
            if let Some(group) = lookup.remove(key) {
                mode_pre.insert(mode, group);
            }
        }

        let mut mode_post = HashMap::new();
        for (key, mode) in MODE_POST_TABLE {
            if let Some(group) = lookup.remove(key) {
                mode_post.insert(mode, group);
            }
        }

        let mut exts = HashMap::new();
        let mut name_globs = HashMap::new();
        for (key, group) in lookup {
            if let Some(ext) = extension_of(key) {
                exts.insert(ext.to_owned(), group);
            } else {
                name_globs.insert(key.to_owned(), group);
            }
        }

        tracing::debug!(
            modes = mode_pre.len() + mode_post.len(),
            exts = exts.len(),
            globs = name_globs.len(),
            "decoded LS_COLORS rule set"
        );
        LsColorRules {
            mode_pre,
            mode_post,
            exts,
            name_globs,
        }
    }
}

/// Decodes with the default UUID name source.
pub fn decode_ls_colors(ls_colors: &str, discrete_colors: &DiscreteColors) -> LsColorRules {
    LscDecoder::new().decode(ls_colors, discrete_colors)
}

/// Returns the bare extension for keys of the form `*.<ext>`.
///
/// A key is an extension rule iff it starts with `*.` and that dot is the
/// only one in the key; `*.tar.gz` stays a glob rule.
fn extension_of(key: &str) -> Option<&str> {
    key.strip_prefix("*.").filter(|ext| !ext.contains('.'))
}
