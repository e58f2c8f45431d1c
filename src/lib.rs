//! include-wrap — C header → pragma-wrapped header generator.
//!
//! Copies a header file into a new file whose content is bracketed by GCC
//! diagnostic pragmas that suppress `-Wunused-parameter`. Builds that enable
//! that warning (typically together with `-Werror`) can then include
//! upstream headers they cannot modify without breaking.
//!
//! The GCC pragmas are also honored by clang, cf.
//! <https://clang.llvm.org/docs/UsersManual.html#controlling-diagnostics-via-pragmas>
//!
//! # Quick start
//!
//! Wrap a header and write the result (suitable for `build.rs`):
//!
//! ```no_run
//! use std::path::Path;
//!
//! include_wrap::run(Path::new("in.h"), Path::new("out/in.h"), "build.rs").unwrap();
//! ```
//!
//! Or get the wrapped text without touching the filesystem:
//!
//! ```
//! let wrapped = include_wrap::wrap("void f(int unused);\n", "my-tool");
//! assert!(wrapped.starts_with("// Generated by my-tool\n"));
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Pragma block inserted before the header content. Disables the
/// unused-parameter diagnostic for everything up to the matching pop.
pub const PRAGMA_PUSH: &str =
    "#pragma GCC diagnostic push\n#pragma GCC diagnostic ignored \"-Wunused-parameter\"\n";

/// Pragma line inserted after the header content, restoring the
/// diagnostic state saved by [`PRAGMA_PUSH`].
pub const PRAGMA_POP: &str = "#pragma GCC diagnostic pop\n";

/// Produce the wrapped form of `content`.
///
/// `generator` identifies the producing tool in the leading marker comment;
/// the CLI passes its own invocation path.
///
/// `content` is treated as opaque text and carried over byte-for-byte. In
/// particular a missing trailing newline is preserved, so the pop line then
/// continues the last input line.
pub fn wrap(content: &str, generator: &str) -> String {
    let mut out = String::with_capacity(content.len() + 128);
    out.push_str("// Generated by ");
    out.push_str(generator);
    out.push('\n');
    out.push_str(PRAGMA_PUSH);
    out.push_str(content);
    out.push_str(PRAGMA_POP);
    out
}

/// Read the header at `input`, wrap it, and write the result to `output`.
///
/// Missing parent directories of `output` are created. The output file is
/// overwritten in full on every run.
///
/// The input is read completely before the output is opened, so a failed
/// read leaves any pre-existing file at `output` untouched.
pub fn run(input: &Path, output: &Path, generator: &str) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("reading input header {}", input.display()))?;

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let wrapped = wrap(&content, generator);
    fs::write(output, &wrapped)
        .with_context(|| format!("writing output to {}", output.display()))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        size = wrapped.len(),
        "wrote wrapped header"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_observer_header() {
        let wrapped = wrap("virtual void OnEvent(int arg) {}\n", "include_generator.py");
        assert_eq!(
            wrapped,
            "// Generated by include_generator.py\n\
             #pragma GCC diagnostic push\n\
             #pragma GCC diagnostic ignored \"-Wunused-parameter\"\n\
             virtual void OnEvent(int arg) {}\n\
             #pragma GCC diagnostic pop\n"
        );
    }

    #[test]
    fn wrap_empty_content() {
        let wrapped = wrap("", "tool");
        assert_eq!(
            wrapped,
            format!("// Generated by tool\n{PRAGMA_PUSH}{PRAGMA_POP}")
        );
    }

    #[test]
    fn wrap_preserves_missing_trailing_newline() {
        let wrapped = wrap("int x;", "tool");
        // Content is verbatim: no newline is inserted, the pop line runs on.
        assert!(wrapped.contains("int x;#pragma GCC diagnostic pop\n"));
    }

    #[test]
    fn wrap_is_pure_concatenation() {
        let content = "a\r\nb\n\nc\n";
        let wrapped = wrap(content, "t");
        let body = wrapped
            .strip_prefix("// Generated by t\n")
            .and_then(|s| s.strip_prefix(PRAGMA_PUSH))
            .and_then(|s| s.strip_suffix(PRAGMA_POP))
            .expect("marker, push and pop frame the content");
        assert_eq!(body, content);
    }
}
