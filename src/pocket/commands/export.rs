use crate::commands::{CmdMessage, CmdResult, SnippetRef};
use crate::error::{PocketError, Result};
use crate::language::FALLBACK_EXTENSION;
use crate::model::Snippet;
use crate::store::{SnippetStore, StorageBackend};
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::resolve_all;

/// A snippet rendered as a downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub contents: Vec<u8>,
}

/// The file body is the code verbatim; the name comes from the title and language.
pub fn export_file(snippet: &Snippet) -> ExportFile {
    ExportFile {
        filename: suggested_filename(snippet),
        contents: snippet.code.as_bytes().to_vec(),
    }
}

/// Lowercased title with each run of whitespace turned into one `-`, plus the language
/// extension (`txt` when the language has none).
///
/// `/` and `\` in the title become `_`, so the name never points outside the
/// export directory.
pub fn suggested_filename(snippet: &Snippet) -> String {
    let mut stem = String::with_capacity(snippet.title.len());
    let mut in_space = false;
    for c in snippet.title.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        match c {
            '/' | '\\' => stem.push('_'),
            _ => stem.extend(c.to_lowercase()),
        }
    }
    format!("{}.{}", stem, snippet.language.extension_or_fallback())
}

/// `dir/filename`, or `dir/<stem>-2.<ext>`, `-3`, ... when that name is already taken.
/// Files written earlier in the same batch count as taken.
fn free_path(dir: &Path, filename: &str) -> PathBuf {
    let path = dir.join(filename);
    if !path.exists() {
        return path;
    }
    let (stem, ext) = filename.rsplit_once('.').unwrap_or((filename, FALLBACK_EXTENSION));
    (2..)
        .map(|n| dir.join(format!("{}-{}.{}", stem, n, ext)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(path)
}

pub fn run<B: StorageBackend>(
    store: &SnippetStore<B>,
    refs: &[SnippetRef],
    out_dir: &Path,
) -> Result<CmdResult> {
    let snippets = if refs.is_empty() {
        let selected = store
            .selected()
            .ok_or_else(|| PocketError::Api("No snippet selected".to_string()))?;
        vec![selected.clone()]
    } else {
        resolve_all(store, refs)?
    };

    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(PocketError::Io)?;
    }

    let mut result = CmdResult::default();
    for snippet in &snippets {
        let file = export_file(snippet);
        let path = free_path(out_dir, &file.filename);
        fs::write(&path, &file.contents).map_err(PocketError::Io)?;
        result.add_message(CmdMessage::success(format!(
            "Downloaded: {}",
            path.display()
        )));
        result.exported_paths.push(path);
    }

    Ok(result.with_affected_snippets(snippets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::model::SnippetDraft;
    use crate::store::mem_backend::MemBackend;
    use crate::store::Persistence;
    use tempfile::tempdir;

    fn snippet(title: &str, language: Language) -> Snippet {
        Snippet::from_draft(SnippetDraft::new(title, "body\n").with_language(language))
    }

    #[test]
    fn filename_from_title_and_language() {
        assert_eq!(
            suggested_filename(&snippet("Hello World", Language::Python)),
            "hello-world.py"
        );
        assert_eq!(
            suggested_filename(&snippet("Build  Script\tv2", Language::Bash)),
            "build-script-v2.sh"
        );
        assert_eq!(
            suggested_filename(&snippet("Config", Language::Yaml)),
            "config.yml"
        );
    }

    #[test]
    fn unmapped_language_uses_fallback_extension() {
        assert_eq!(
            suggested_filename(&snippet("Notes", Language::Plaintext)),
            "notes.txt"
        );
    }

    #[test]
    fn path_separators_do_not_escape_the_directory() {
        assert_eq!(
            suggested_filename(&snippet("a/b", Language::Go)),
            "a_b.go"
        );
    }

    #[test]
    fn contents_are_the_code_verbatim() {
        let s = snippet("x", Language::Rust);
        assert_eq!(export_file(&s).contents, b"body\n".to_vec());
    }

    #[test]
    fn run_writes_files() {
        let dir = tempdir().unwrap();
        let (mut store, _) = SnippetStore::open(Persistence::new(MemBackend::new())).unwrap();
        store
            .add(SnippetDraft::new("Hello", "print(1)").with_language(Language::Python))
            .unwrap();

        let result = run(&store, &[SnippetRef::Position(1)], dir.path()).unwrap();
        let path = dir.path().join("hello.py");
        assert_eq!(result.exported_paths, vec![path.clone()]);
        assert_eq!(fs::read_to_string(path).unwrap(), "print(1)");
    }

    #[test]
    fn clashing_names_get_a_numeric_suffix() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hello.py"), "already here").unwrap();
        let (mut store, _) = SnippetStore::open(Persistence::new(MemBackend::new())).unwrap();
        store
            .add(SnippetDraft::new("Hello", "first").with_language(Language::Python))
            .unwrap();
        store
            .add(SnippetDraft::new("hello", "second").with_language(Language::Python))
            .unwrap();

        let refs = [SnippetRef::Position(1), SnippetRef::Position(2)];
        let result = run(&store, &refs, dir.path()).unwrap();

        let second = dir.path().join("hello-2.py");
        let third = dir.path().join("hello-3.py");
        assert_eq!(result.exported_paths, vec![second.clone(), third.clone()]);
        assert_eq!(result.messages.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("hello.py")).unwrap(),
            "already here"
        );
        assert_eq!(fs::read_to_string(second).unwrap(), "second");
        assert_eq!(fs::read_to_string(third).unwrap(), "first");
    }

    #[test]
    fn run_without_refs_needs_a_selection() {
        let dir = tempdir().unwrap();
        let (mut store, _) = SnippetStore::open(Persistence::new(MemBackend::new())).unwrap();
        let s = store.add(SnippetDraft::new("Sel", "x")).unwrap();

        assert!(run(&store, &[], dir.path()).is_err());
        store.select(s.id);
        let result = run(&store, &[], dir.path()).unwrap();
        assert_eq!(result.exported_paths.len(), 1);
    }
}
