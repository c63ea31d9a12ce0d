//! Client-side cache of the current user's briefings.

#[cfg(test)]
#[path = "briefings_test.rs"]
mod briefings_test;

use crate::net::types::Briefing;

/// Briefing collection, newest first.
#[derive(Clone, Debug, Default)]
pub struct BriefingsState {
    pub items: Vec<Briefing>,
    pub loading: bool,
    /// True once at least one full fetch has landed. Lets pages tell a
    /// briefing that does not exist apart from one that has not loaded yet.
    pub fetched: bool,
    pub error: Option<String>,
}

impl BriefingsState {
    /// Replace the whole collection after a full fetch. Clears any error.
    pub fn replace_all(&mut self, items: Vec<Briefing>) {
        self.items = items;
        self.fetched = true;
        self.error = None;
    }

    /// Insert a newly created briefing at the head, ahead of any re-fetch,
    /// for a perceived-instant UI update.
    ///
    /// No dedup by id: if a background refresh races with a create, the
    /// prepended item and its fetched counterpart can coexist until the next
    /// `replace_all` (see DESIGN.md).
    pub fn prepend(&mut self, item: Briefing) {
        self.items.insert(0, item);
    }

    /// True only while the first fetch is in flight. Refreshes after that
    /// happen behind the already-cached items without a loading indicator.
    pub fn initial_loading(&self) -> bool {
        self.loading && !self.fetched
    }

    pub fn find(&self, id: &str) -> Option<&Briefing> {
        self.items.iter().find(|b| b.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|b| b.id == id)
    }

    /// Id of the briefing after `id` in collection order (older), if any.
    pub fn next_id(&self, id: &str) -> Option<String> {
        let index = self.position(id)?;
        self.items.get(index + 1).map(|b| b.id.clone())
    }

    /// Id of the briefing before `id` in collection order (newer), if any.
    pub fn previous_id(&self, id: &str) -> Option<String> {
        let index = self.position(id)?;
        index.checked_sub(1).map(|i| self.items[i].id.clone())
    }
}
