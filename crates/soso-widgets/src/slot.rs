//! The content slot: pages mounted in a selector, in document order.
//!
//! The slot owns the mounted pages and their visibility. Everything else
//! refers to a page by its [`PageId`], which is never reused, so a stale id
//! simply stops resolving once its page is gone.

use std::fmt;

/// Identity of a mounted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page#{}", self.0)
    }
}

/// Display state of a mounted page. Hidden pages stay mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Shown and rendered.
    Active,
    /// Mounted but not rendered.
    #[default]
    Hidden,
}

struct Node<P> {
    id: PageId,
    page: P,
    visibility: Visibility,
}

/// Mounted pages in document order.
pub struct Slot<P> {
    nodes: Vec<Node<P>>,
    next_id: u64,
    changed: bool,
}

impl<P> Default for Slot<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Slot<P> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 0,
            changed: false,
        }
    }

    /// Mount `page` at the end. The page starts hidden.
    pub fn push(&mut self, page: P) -> PageId {
        let index = self.nodes.len();
        self.insert(index, page)
    }

    /// Mount `page` before position `index`; an index past the end appends.
    pub fn insert(&mut self, index: usize, page: P) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        let index = index.min(self.nodes.len());
        self.nodes.insert(
            index,
            Node {
                id,
                page,
                visibility: Visibility::Hidden,
            },
        );
        self.changed = true;
        id
    }

    /// Unmount the page with `id`.
    pub fn remove(&mut self, id: PageId) -> Option<P> {
        let index = self.position(id)?;
        self.changed = true;
        Some(self.nodes.remove(index).page)
    }

    /// Unmount every page, in document order.
    pub fn drain(&mut self) -> Vec<P> {
        if !self.nodes.is_empty() {
            self.changed = true;
        }
        self.nodes.drain(..).map(|node| node.page).collect()
    }

    /// Report and clear a pending structural change.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Whether a structural change has not been delivered yet.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// The page with `id`.
    pub fn get(&self, id: PageId) -> Option<&P> {
        self.node(id).map(|node| &node.page)
    }

    /// Mutable access to the page with `id`.
    pub fn get_mut(&mut self, id: PageId) -> Option<&mut P> {
        let index = self.position(id)?;
        Some(&mut self.nodes[index].page)
    }

    /// Display state of `id`, or `None` if it is not mounted.
    pub fn visibility(&self, id: PageId) -> Option<Visibility> {
        self.node(id).map(|node| node.visibility)
    }

    /// Set the display state of `id`. Returns `false` if it is not mounted.
    pub fn set_visibility(&mut self, id: PageId, visibility: Visibility) -> bool {
        match self.position(id) {
            Some(index) => {
                self.nodes[index].visibility = visibility;
                true
            }
            None => false,
        }
    }

    /// Ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = PageId> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    /// `(id, page)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (PageId, &P)> + '_ {
        self.nodes.iter().map(|node| (node.id, &node.page))
    }

    /// Number of mounted pages.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the slot holds no pages.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn position(&self, id: PageId) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    fn node(&self, id: PageId) -> Option<&Node<P>> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_document_order_and_starts_hidden() {
        let mut slot = Slot::new();
        let a = slot.push("a");
        let b = slot.push("b");
        assert_eq!(slot.ids().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(slot.visibility(a), Some(Visibility::Hidden));
        assert!(slot.take_changed());
        assert!(!slot.take_changed());
    }

    #[test]
    fn insert_clamps_index() {
        let mut slot = Slot::new();
        let a = slot.push("a");
        let b = slot.insert(0, "b");
        let c = slot.insert(99, "c");
        assert_eq!(slot.ids().collect::<Vec<_>>(), vec![b, a, c]);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut slot = Slot::new();
        let a = slot.push("a");
        assert_eq!(slot.remove(a), Some("a"));
        let b = slot.push("b");
        assert_ne!(a, b);
        assert!(slot.get(a).is_none());
        assert_eq!(slot.remove(a), None);
    }

    #[test]
    fn drain_empty_slot_is_not_a_change() {
        let mut slot: Slot<&str> = Slot::new();
        assert!(slot.drain().is_empty());
        assert!(!slot.is_changed());
    }

    #[test]
    fn set_visibility_of_unknown_id_fails() {
        let mut slot = Slot::new();
        let a = slot.push(1);
        slot.remove(a);
        assert!(!slot.set_visibility(a, Visibility::Active));
    }
}
