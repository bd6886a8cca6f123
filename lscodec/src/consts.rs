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

/// Prefix for generated highlight-group names.
///
/// Generated names take the form `{HL_PREFIX}_ls_{suffix}` where the suffix
/// comes from the active [`NameSource`](crate::NameSource). The prefix keeps
/// the groups namespaced away from user-defined highlight groups in the host
/// editor.
pub const HL_PREFIX: &str = "arborix";
