//
// Copyright 2024-2026 the pipetint authors. All Rights Reserved.
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

/// Maximum length of an ANSI escape sequence in bytes.
///
/// This limit prevents unbounded sequence scanning on malicious or malformed
/// input. Standard SGR sequences are typically under 20 bytes, but we allow
/// up to 256 to accommodate sequences with many parameters.
///
/// A candidate sequence exceeding this length is reclassified as literal
/// text; the scanner never fails on untrusted input.
pub const MAX_SEQUENCE_LENGTH: usize = 256;
