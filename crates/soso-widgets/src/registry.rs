//! Name-token registry and page resolution.

use crate::slot::PageId;
use std::collections::HashMap;

/// Split a page name into its registration tokens. Runs of whitespace
/// separate tokens and empty tokens are skipped.
pub fn name_tokens(name: &str) -> impl Iterator<Item = &str> {
    name.split_whitespace()
}

/// Maps name tokens to pages, rebuilt from scratch on every slot change.
#[derive(Debug, Default, Clone)]
pub struct PageRegistry {
    pages: Vec<PageId>,
    page_map: HashMap<String, PageId>,
}

impl PageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry contents with `entries`, given in scan order.
    ///
    /// A token claimed by more than one page ends up with the last page that
    /// claims it.
    pub fn rebuild<'a>(&mut self, entries: impl IntoIterator<Item = (PageId, &'a str)>) {
        self.pages.clear();
        self.page_map.clear();
        for (id, name) in entries {
            self.pages.push(id);
            for token in name_tokens(name) {
                if let Some(previous) = self.page_map.insert(token.to_string(), id) {
                    if previous != id {
                        tracing::debug!(token, %previous, page = %id, "name token claimed twice, later page wins");
                    }
                }
            }
        }
    }

    /// Page registered under `token`.
    pub fn lookup(&self, token: &str) -> Option<PageId> {
        self.page_map.get(token).copied()
    }

    /// Resolve `selected` first, then `default`.
    pub fn resolve(&self, selected: Option<&str>, default: &str) -> Option<PageId> {
        selected
            .and_then(|key| self.lookup(key))
            .or_else(|| self.lookup(default))
    }

    /// Scanned pages in slot order, registered or not.
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    /// Whether `id` was seen by the last re-scan.
    pub fn contains(&self, id: PageId) -> bool {
        self.pages.contains(&id)
    }

    /// Every registered token, unordered.
    pub fn tokens(&self) -> impl Iterator<Item = (&str, PageId)> + '_ {
        self.page_map.iter().map(|(token, id)| (token.as_str(), *id))
    }

    /// Number of scanned pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the last re-scan found no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Slot;
    use std::collections::BTreeMap;

    fn ids(n: usize) -> Vec<PageId> {
        let mut slot = Slot::new();
        (0..n).map(|_| slot.push(())).collect()
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        let tokens: Vec<_> = name_tokens("  settings \t prefs\nmore ").collect();
        assert_eq!(tokens, vec!["settings", "prefs", "more"]);
        assert_eq!(name_tokens("").count(), 0);
        assert_eq!(name_tokens("   ").count(), 0);
    }

    #[test]
    fn rebuild_maps_union_of_tokens() {
        let p = ids(3);
        let mut reg = PageRegistry::new();
        reg.rebuild([(p[0], "home"), (p[1], "settings prefs"), (p[2], "about")]);

        let map: BTreeMap<_, _> = reg.tokens().collect();
        let expected: BTreeMap<_, _> = [
            ("about", p[2]),
            ("home", p[0]),
            ("prefs", p[1]),
            ("settings", p[1]),
        ]
        .into_iter()
        .collect();
        assert_eq!(map, expected);
        assert_eq!(reg.pages(), p.as_slice());
    }

    #[test]
    fn later_page_wins_shared_token() {
        let p = ids(2);
        let mut reg = PageRegistry::new();
        reg.rebuild([(p[0], "home main"), (p[1], "main")]);
        assert_eq!(reg.lookup("main"), Some(p[1]));
        assert_eq!(reg.lookup("home"), Some(p[0]));
    }

    #[test]
    fn unnamed_pages_are_scanned_but_unregistered() {
        let p = ids(2);
        let mut reg = PageRegistry::new();
        reg.rebuild([(p[0], ""), (p[1], "   ")]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.tokens().count(), 0);
    }

    #[test]
    fn rebuild_discards_previous_contents() {
        let p = ids(2);
        let mut reg = PageRegistry::new();
        reg.rebuild([(p[0], "home")]);
        reg.rebuild([(p[1], "other")]);
        assert_eq!(reg.lookup("home"), None);
        assert!(!reg.contains(p[0]));
        assert!(reg.contains(p[1]));
    }

    #[test]
    fn resolve_prefers_selected_then_default() {
        let p = ids(2);
        let mut reg = PageRegistry::new();
        reg.rebuild([(p[0], "home"), (p[1], "settings")]);
        assert_eq!(reg.resolve(Some("settings"), "home"), Some(p[1]));
        assert_eq!(reg.resolve(Some("missing"), "home"), Some(p[0]));
        assert_eq!(reg.resolve(None, "home"), Some(p[0]));
        assert_eq!(reg.resolve(Some("missing"), "nowhere"), None);
    }
}
