use uuid::Uuid;

/// The snippet currently being viewed, if any.
///
/// Holds an id only; it never owns the snippet. `SnippetStore::remove` clears it when
/// the selected snippet goes away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<Uuid>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Does not check that `id` exists; callers select from what they have listed.
    pub fn select(&mut self, id: Uuid) {
        self.current = Some(id);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<Uuid> {
        self.current
    }

    pub fn is_selected(&self, id: &Uuid) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Clears the selection if it points at `id`. Returns whether it did.
    pub(crate) fn release(&mut self, id: &Uuid) -> bool {
        if self.is_selected(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_clear() {
        let mut sel = Selection::new();
        assert_eq!(sel.current(), None);

        let id = Uuid::new_v4();
        sel.select(id);
        assert!(sel.is_selected(&id));

        sel.clear();
        assert_eq!(sel.current(), None);
    }

    #[test]
    fn release_only_clears_matching_id() {
        let mut sel = Selection::new();
        let id = Uuid::new_v4();
        sel.select(id);

        assert!(!sel.release(&Uuid::new_v4()));
        assert_eq!(sel.current(), Some(id));

        assert!(sel.release(&id));
        assert_eq!(sel.current(), None);
    }
}
