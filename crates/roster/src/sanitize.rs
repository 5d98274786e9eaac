//! Filesystem-safe names for generated files.

use std::sync::LazyLock;

use regex::Regex;

/// Reserved filename characters, control characters and the Latin-1 block.
static RE_UNSAFE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\\/:*?"<>|\p{Cc}\x{7f}-\x{ff}]"#).expect("filename pattern is valid")
});

/// Replace characters that are unsafe in file names with `_`.
///
/// Letters outside the Latin-1 block (CJK and so on) are kept as-is.
pub fn sanitize_filename(text: &str) -> String {
    let replaced = RE_UNSAFE.replace_all(text, "_");
    if matches!(&*replaced, "" | "." | "..") {
        return "_".to_string();
    }
    replaced.into_owned()
}

/// File name of the rendered plate for an exhibitor.
pub fn plate_file_name(name: &str) -> String {
    format!("{}_plate.png", sanitize_filename(name))
}

/// File name of the QR image for an exhibitor.
pub fn qr_file_name(name: &str) -> String {
    format!("{}_qr.png", sanitize_filename(name))
}
