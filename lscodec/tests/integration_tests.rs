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

//! End-to-end decoding tests for arborix-lscodec

use arborix_lscodec::{
    DiscreteColors, LsColorRules, LscDecoder, Mode, SequentialNames, TermAttr,
    decode_ls_colors,
};

fn decode(raw: &str) -> LsColorRules {
    LscDecoder::with_names(SequentialNames::default()).decode(raw, &DiscreteColors::new())
}

#[test]
fn test_classification_keys_with_reset_value_are_unstyled() {
    let raw = "bd=0:cd=0:do=0:ex=0:ca=0:di=0:ln=0:mh=0:or=0:ow=0:pi=0:so=0:st=0:tw=0:sg=0:su=0";
    let rules = decode(raw);
    assert_eq!(rules.mode_pre.len(), 16);
    for group in rules.mode_pre.values() {
        assert!(group.is_unstyled());
    }
}

#[test]
fn test_bold_blue_directory() {
    let rules = decode("di=01;34");
    let group = &rules.mode_pre[&Mode::Folder];
    assert_eq!(group.cterm.iter().copied().collect::<Vec<_>>(), vec![TermAttr::Bold]);
    assert_eq!(group.ctermfg, Some(4));
    assert_eq!(group.ctermbg, None);
    assert_eq!(group.guifg, None);
}

#[test]
fn test_bold_red_tar_extension() {
    let rules = decode("*.tar=01;31");
    let group = &rules.exts["tar"];
    assert!(group.cterm.contains(&TermAttr::Bold));
    assert_eq!(group.ctermfg, Some(1));
}

#[test]
fn test_cube_color_extension_sets_gui_hex_only() {
    let rules = decode("*.py=38;5;208");
    let group = &rules.exts["py"];
    assert_eq!(group.ctermfg, None);
    assert_eq!(group.guifg.as_deref(), Some("#ff6600"));
    assert_eq!(group.ctermbg, None);
    assert_eq!(group.guibg, None);
}

#[test]
fn test_greyscale_ramp_boundaries() {
    let rules = decode("*.lo=38;5;232:*.hi=38;5;255");
    assert_eq!(rules.exts["lo"].guifg.as_deref(), Some("#000000"));
    assert_eq!(rules.exts["hi"].guifg.as_deref(), Some("#ffffff"));
}

#[test]
fn test_malformed_truecolor_leaves_foreground_unset() {
    let rules = decode("*.bin=01;38;2;300;10;10");
    let group = &rules.exts["bin"];
    assert!(group.cterm.contains(&TermAttr::Bold));
    assert_eq!(group.ctermfg, None);
    assert_eq!(group.guifg, None);
}

#[test]
fn test_decode_is_idempotent_modulo_names() {
    let raw = "di=01;34:ln=target:*.tar=01;31:*.py=38;5;208:no=0:fi=37:core*=41";
    let mut colors = DiscreteColors::new();
    colors.insert("blue".to_owned(), "#2f5fbf".to_owned());
    let first = decode_with(raw, &colors);
    let second = decode_with(raw, &colors);

    assert_eq!(
        first.mode_pre.keys().collect::<std::collections::HashSet<_>>(),
        second.mode_pre.keys().collect::<std::collections::HashSet<_>>()
    );
    for (mode, group) in &first.mode_pre {
        assert!(group.styling_eq(&second.mode_pre[mode]));
    }
    for (mode, group) in &first.mode_post {
        assert!(group.styling_eq(&second.mode_post[mode]));
    }
    for (ext, group) in &first.exts {
        assert!(group.styling_eq(&second.exts[ext]));
    }
    for (glob, group) in &first.name_globs {
        assert!(group.styling_eq(&second.name_globs[glob]));
    }
}

fn decode_with(raw: &str, colors: &DiscreteColors) -> LsColorRules {
    LscDecoder::with_names(SequentialNames::default()).decode(raw, colors)
}

#[test]
fn test_end_to_end_four_segment_string() {
    let rules = decode("rs=0:di=01;34:ln=01;36:*.tar=01;31");

    assert_eq!(rules.mode_pre.len(), 2);
    let di = &rules.mode_pre[&Mode::Folder];
    assert!(di.cterm.contains(&TermAttr::Bold));
    assert_eq!(di.ctermfg, Some(4));
    let ln = &rules.mode_pre[&Mode::Link];
    assert!(ln.cterm.contains(&TermAttr::Bold));
    assert_eq!(ln.ctermfg, Some(6));

    assert!(rules.mode_post.is_empty());

    assert_eq!(rules.exts.len(), 1);
    let tar = &rules.exts["tar"];
    assert!(tar.cterm.contains(&TermAttr::Bold));
    assert_eq!(tar.ctermfg, Some(1));

    assert_eq!(rules.name_globs.len(), 1);
    assert!(rules.name_globs["rs"].is_unstyled());
}

#[test]
fn test_discrete_colors_flow_into_gui_slots() {
    let mut colors = DiscreteColors::new();
    colors.insert("blue".to_owned(), "#2f5fbf".to_owned());
    colors.insert("bright_cyan".to_owned(), "#5fdfdf".to_owned());
    let rules = decode_with("di=01;34:ln=96:so=35", &colors);

    assert_eq!(rules.mode_pre[&Mode::Folder].guifg.as_deref(), Some("#2f5fbf"));
    assert_eq!(rules.mode_pre[&Mode::Link].guifg.as_deref(), Some("#5fdfdf"));
    // Magenta has no discrete entry, so only the terminal index is set.
    assert_eq!(rules.mode_pre[&Mode::Socket].ctermfg, Some(5));
    assert_eq!(rules.mode_pre[&Mode::Socket].guifg, None);
}

#[test]
fn test_gnu_default_string_decodes_cleanly() {
    // Head of the dircolors default database output.
    let raw = "rs=0:di=01;34:ln=01;36:mh=00:pi=40;33:so=01;35:do=01;35:bd=40;33;01:\
               cd=40;33;01:or=40;31;01:mi=00:su=37;41:sg=30;43:ca=00:tw=30;42:ow=34;42:\
               st=37;44:ex=01;32:*.tar=01;31:*.tgz=01;31:*.zip=01;31:*.jpg=01;35:\
               *.mp4=01;35:*.flac=00;36";
    let rules = decode(raw);

    assert_eq!(rules.mode_pre.len(), 16);
    assert_eq!(rules.exts.len(), 6);
    // "mi" (missing file) is not a recognized classification key and stays
    // in the glob bucket along with "rs".
    assert!(rules.name_globs.contains_key("mi"));
    assert!(rules.name_globs.contains_key("rs"));
    assert!(rules.mode_post.is_empty());

    let pipe = &rules.mode_pre[&Mode::Pipe];
    assert_eq!(pipe.ctermfg, Some(3));
    assert_eq!(pipe.ctermbg, Some(0));
}

#[test]
fn test_default_decoder_names_are_unique_and_prefixed() {
    let rules = decode_ls_colors("di=34:ln=36:*.tar=31", &DiscreteColors::new());
    let mut names = vec![
        rules.mode_pre[&Mode::Folder].name.clone(),
        rules.mode_pre[&Mode::Link].name.clone(),
        rules.exts["tar"].name.clone(),
    ];
    assert!(names.iter().all(|name| name.starts_with("arborix_ls_")));
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 3);
}
