use std::collections::HashMap;

use crate::model::PageRef;

/// Turns a page-local element id into one that is unique in the output
/// document.
pub trait IdResolver {
    fn resolve_id(&self, page: &PageRef, id: &str) -> String;
}

/// A document made from a single page: ids are already unique.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePage;

impl IdResolver for SinglePage {
    fn resolve_id(&self, _page: &PageRef, id: &str) -> String {
        id.to_string()
    }
}

/// The ordered pages combined into one document. Ids on an indexed page get
/// a `page{n}-` prefix so the same local id on two pages cannot collide.
#[derive(Debug, Clone, Default)]
pub struct PageIndex {
    pages: Vec<PageRef>,
    positions: HashMap<PageRef, usize>,
}

impl PageIndex {
    pub fn new(pages: impl IntoIterator<Item = PageRef>) -> Self {
        let mut index = Self::default();
        for page in pages {
            index.push(page);
        }
        index
    }

    /// Appends a page, returning its index. A page already present keeps its
    /// first position.
    pub fn push(&mut self, page: PageRef) -> usize {
        if let Some(&existing) = self.positions.get(&page) {
            return existing;
        }
        let position = self.pages.len();
        self.positions.insert(page.clone(), position);
        self.pages.push(page);
        position
    }

    pub fn index_of(&self, page: &PageRef) -> Option<usize> {
        self.positions.get(page).copied()
    }

    pub fn pages(&self) -> &[PageRef] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl FromIterator<PageRef> for PageIndex {
    fn from_iter<T: IntoIterator<Item = PageRef>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl IdResolver for PageIndex {
    fn resolve_id(&self, page: &PageRef, id: &str) -> String {
        match self.index_of(page) {
            Some(n) => format!("page{}-{}", n, id),
            None => id.to_string(),
        }
    }
}
