use crate::commands::ListedSnippet;
use crate::error::{PocketError, Result};
use crate::model::{Snippet, SHORT_ID_LEN};
use crate::store::{SnippetStore, StorageBackend};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// How a user points at a snippet: its 1-based position in the listing, or its id
/// (a unique prefix is enough). Digit strings shorter than a short id are positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetRef {
    Position(usize),
    Id(String),
}

impl FromStr for SnippetRef {
    type Err = PocketError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PocketError::Api("Empty snippet reference".to_string()));
        }
        // A short id can be all digits; at that length it is read as an id, not a position
        if s.len() < SHORT_ID_LEN {
            if let Ok(n) = s.parse::<usize>() {
                if n == 0 {
                    return Err(PocketError::Api("Positions start at 1".to_string()));
                }
                return Ok(SnippetRef::Position(n));
            }
        }
        if s.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            return Ok(SnippetRef::Id(s.to_lowercase()));
        }
        Err(PocketError::Api(format!("Invalid snippet reference: {}", s)))
    }
}

impl fmt::Display for SnippetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnippetRef::Position(n) => write!(f, "{}", n),
            SnippetRef::Id(id) => write!(f, "{}", id),
        }
    }
}

pub fn parse_refs<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<SnippetRef>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

/// Positions every snippet in the collection, marking the selected one.
pub fn listed<B: StorageBackend>(store: &SnippetStore<B>) -> Vec<ListedSnippet> {
    let selection = store.selection();
    store
        .list()
        .iter()
        .enumerate()
        .map(|(i, s)| ListedSnippet {
            position: i + 1,
            snippet: s.clone(),
            selected: selection.is_selected(&s.id),
        })
        .collect()
}

pub fn resolve<B: StorageBackend>(store: &SnippetStore<B>, r: &SnippetRef) -> Result<Snippet> {
    match r {
        SnippetRef::Position(n) => store
            .list()
            .get(n - 1)
            .cloned()
            .ok_or_else(|| PocketError::Api(format!("No snippet at position {}", n))),
        SnippetRef::Id(prefix) => {
            if let Ok(id) = Uuid::parse_str(prefix) {
                return store
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| PocketError::Api(format!("No snippet with id {}", id)));
            }
            let mut found = store
                .list()
                .iter()
                .filter(|s| s.id.to_string().starts_with(prefix.as_str()));
            match (found.next(), found.next()) {
                (Some(s), None) => Ok(s.clone()),
                (None, _) => Err(PocketError::Api(format!(
                    "No snippet with id starting with {}",
                    prefix
                ))),
                (Some(_), Some(_)) => Err(PocketError::Api(format!(
                    "Id prefix {} is ambiguous",
                    prefix
                ))),
            }
        }
    }
}

/// Resolves every reference before anything is acted on, so a bad reference in a batch
/// leaves the collection untouched.
pub fn resolve_all<B: StorageBackend>(
    store: &SnippetStore<B>,
    refs: &[SnippetRef],
) -> Result<Vec<Snippet>> {
    refs.iter().map(|r| resolve(store, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SnippetDraft;
    use crate::store::mem_backend::MemBackend;
    use crate::store::persistence::DEFAULT_STORAGE_KEY;
    use crate::store::Persistence;

    fn store_with(titles: &[&str]) -> SnippetStore<MemBackend> {
        let (mut store, _) = SnippetStore::open(Persistence::new(MemBackend::new())).unwrap();
        for t in titles {
            store.add(SnippetDraft::new(*t, "code")).unwrap();
        }
        store
    }

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!("3".parse::<SnippetRef>().unwrap(), SnippetRef::Position(3));
        assert_eq!(
            "0F8FAD5B".parse::<SnippetRef>().unwrap(),
            SnippetRef::Id("0f8fad5b".into())
        );
        assert!("0".parse::<SnippetRef>().is_err());
        assert!("hello".parse::<SnippetRef>().is_err());
    }

    #[test]
    fn all_digit_short_id_resolves_as_id() {
        let raw = r#"[{
            "id": "12345678-9abc-4def-8123-456789abcdef",
            "title": "Digits",
            "language": "go",
            "code": "x",
            "createdAt": 1717000000000
        }]"#;
        let backend = MemBackend::with_slot(DEFAULT_STORAGE_KEY, raw);
        let (store, _) = SnippetStore::open(Persistence::new(backend)).unwrap();
        let short = store.list()[0].short_id();
        assert_eq!(short, "12345678");

        let r: SnippetRef = short.parse().unwrap();
        assert_eq!(r, SnippetRef::Id("12345678".into()));
        assert_eq!(resolve(&store, &r).unwrap().title, "Digits");
        assert_eq!("1234567".parse::<SnippetRef>().unwrap(), SnippetRef::Position(1234567));
    }

    #[test]
    fn positions_follow_newest_first_order() {
        let store = store_with(&["old", "new"]);
        let first = resolve(&store, &SnippetRef::Position(1)).unwrap();
        assert_eq!(first.title, "new");
        assert!(resolve(&store, &SnippetRef::Position(3)).is_err());
    }

    #[test]
    fn resolves_full_id_and_prefix() {
        let store = store_with(&["a"]);
        let s = store.list()[0].clone();

        let full = SnippetRef::Id(s.id.to_string());
        assert_eq!(resolve(&store, &full).unwrap(), s);

        let prefix = SnippetRef::Id(s.short_id());
        assert_eq!(resolve(&store, &prefix).unwrap(), s);
    }

    #[test]
    fn resolve_all_fails_as_a_whole() {
        let store = store_with(&["a", "b"]);
        let refs = vec![SnippetRef::Position(1), SnippetRef::Position(9)];
        assert!(resolve_all(&store, &refs).is_err());
    }

    #[test]
    fn listed_marks_selection() {
        let mut store = store_with(&["a", "b"]);
        let id = store.list()[1].id;
        store.select(id);

        let rows = listed(&store);
        assert_eq!(rows[0].position, 1);
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
    }
}
