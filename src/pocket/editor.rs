use crate::error::{PocketError, Result};
use crate::language::Language;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(PocketError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments ("code --wait")
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| PocketError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(PocketError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(PocketError::Io)
}

/// Lets the user write code in their editor. The temp file carries the language's
/// extension so the editor picks the right highlighting.
pub fn edit_code(initial: &str, language: Language) -> Result<String> {
    let temp_file = env::temp_dir().join(format!(
        "pocket-{}.{}",
        Uuid::new_v4(),
        language.extension_or_fallback()
    ));

    fs::write(&temp_file, initial).map_err(PocketError::Io)?;
    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    result.map(|code| trim_trailing_newlines(&code))
}

/// Editors append a final newline; stored code should not grow one on every edit.
fn trim_trailing_newlines(code: &str) -> String {
    code.trim_end_matches(['\n', '\r']).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_only_trailing_newlines() {
        assert_eq!(trim_trailing_newlines("fn main() {}\n"), "fn main() {}");
        assert_eq!(trim_trailing_newlines("  a\n\nb\r\n\n"), "  a\n\nb");
        assert_eq!(trim_trailing_newlines("x  "), "x  ");
    }
}
