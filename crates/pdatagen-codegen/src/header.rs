//! File header and import block assembly.
//!
//! Every generated file opens with the same license banner and
//! do-not-edit notice, then its package clause, then an import block.

use crate::model::ImportLine;

/// License banner and generated-file notice naming the regenerating command.
pub const HEADER: &str = r#"// Copyright The OpenTelemetry Authors
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

// Code generated by "pdata/internal/cmd/pdatagen/main.go". DO NOT EDIT.
// To regenerate this file run "make genpdata"."#;

/// Appends the banner, a blank line, the package clause and a blank line.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::header::{HEADER, generate_header};
///
/// let mut buf = String::new();
/// generate_header(&mut buf, "plog");
///
/// assert!(buf.starts_with(HEADER));
/// assert!(buf.ends_with("\n\npackage plog\n\n"));
/// ```
pub fn generate_header(buf: &mut String, package_name: &str) {
    buf.push_str(HEADER);
    buf.push_str("\n\n");
    buf.push_str("package ");
    buf.push_str(package_name);
    buf.push_str("\n\n");
}

/// Appends an import block.
///
/// Lines are emitted in order without deduplication. The closing
/// parenthesis is not followed by a newline.
///
/// # Examples
///
/// ```
/// use pdatagen_codegen::ImportLine;
/// use pdatagen_codegen::header::generate_imports;
///
/// let mut buf = String::new();
/// generate_imports(&mut buf, &[
///     ImportLine::import("\"testing\""),
///     ImportLine::Separator,
///     ImportLine::import("\"github.com/stretchr/testify/assert\""),
/// ]);
///
/// assert_eq!(buf, "import (\n\t\"testing\"\n\n\t\"github.com/stretchr/testify/assert\"\n)");
/// ```
pub fn generate_imports(buf: &mut String, imports: &[ImportLine]) {
    buf.push_str("import (\n");
    for line in imports {
        match line {
            ImportLine::Import(spec) => {
                buf.push('\t');
                buf.push_str(spec);
                buf.push('\n');
            }
            ImportLine::Separator => buf.push('\n'),
        }
    }
    buf.push(')');
}
