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

/// Filesystem-entry classification.
///
/// Modes are assigned by the tree-cartography layer while walking the
/// filesystem; this crate only consumes them as lookup keys for the
/// classification-keyed rule maps.
///
/// | Key  | Mode                 |
/// |------|----------------------|
/// | `bd` | Block Device         |
/// | `cd` | Char Device          |
/// | `do` | Door                 |
/// | `ex` | Executable           |
/// | `fi` | File                 |
/// | `ca` | File With Capability |
/// | `di` | Folder               |
/// | `ln` | Link                 |
/// | `mh` | Multi Hardlink       |
/// | `or` | Orphan Link          |
/// | `ow` | Other Writable       |
/// | `pi` | Pipe                 |
/// | `sg` | Set GID              |
/// | `su` | Set UID              |
/// | `so` | Socket               |
/// | `st` | Sticky Dir           |
/// | `tw` | Sticky Writable      |
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Block device node.
    BlockDevice,
    /// Character device node.
    CharDevice,
    /// Door (Solaris IPC endpoint).
    Door,
    /// File with any execute bit set.
    Executable,
    /// Plain file.
    File,
    /// File with capabilities set.
    FileWithCapability,
    /// Directory.
    Folder,
    /// Symbolic link.
    Link,
    /// File with multiple hard links.
    MultiHardlink,
    /// Symbolic link with a missing target.
    OrphanLink,
    /// Directory writable by others, without sticky bit.
    OtherWritable,
    /// Named pipe (FIFO).
    Pipe,
    /// File with the setgid bit set.
    SetGid,
    /// File with the setuid bit set.
    SetUid,
    /// Unix domain socket.
    Socket,
    /// Directory with the sticky bit set.
    StickyDir,
    /// Directory writable by others, with sticky bit.
    StickyWritable,
}
