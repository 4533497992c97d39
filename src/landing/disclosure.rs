use std::collections::BTreeMap;

use crate::landing::content::{Faq, Link};

/// Two-state open/closed toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    /// A closed disclosure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the state and return the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force closed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Independent disclosures keyed by item id. Items never toggled are closed.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Accordion<K: Ord> {
    items: BTreeMap<K, Disclosure>,
}

impl<K: Ord> Default for Accordion<K> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> Accordion<K> {
    /// Empty accordion, everything closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the item `key` and return its new state. Other items are untouched.
    pub fn toggle(&mut self, key: &K) -> bool {
        self.items.entry(key.clone()).or_default().toggle()
    }

    /// Whether `key` is open.
    pub fn is_open(&self, key: &K) -> bool {
        self.items.get(key).is_some_and(|d| d.is_open())
    }

    /// Open items in key order.
    pub fn open_items(&self) -> impl Iterator<Item = &K> {
        self.items
            .iter()
            .filter(|(_, d)| d.is_open())
            .map(|(k, _)| k)
    }
}

/// FAQ list with one disclosure per question, keyed by position.
#[derive(Clone, Debug)]
pub struct FaqList {
    faqs: &'static [Faq],
    state: Accordion<usize>,
}

impl FaqList {
    /// All questions collapsed.
    pub fn new(faqs: &'static [Faq]) -> Self {
        Self {
            faqs,
            state: Accordion::new(),
        }
    }

    /// Toggle question `index`; `None` when out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        (index < self.faqs.len()).then(|| self.state.toggle(&index))
    }

    /// Question text and, when expanded, its answer.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, Option<&'static str>)> + '_ {
        self.faqs.iter().enumerate().map(|(i, faq)| {
            (
                faq.question,
                self.state.is_open(&i).then_some(faq.answer),
            )
        })
    }
}

/// Collapsible navigation menu for narrow screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    state: Disclosure,
}

impl MobileMenu {
    /// Menu button pressed.
    pub fn toggle(&mut self) -> bool {
        self.state.toggle()
    }

    /// Whether the menu is expanded.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Follow `link` from the menu: the menu closes and the link target is returned.
    pub fn follow(&mut self, link: &Link) -> &'static str {
        self.state.close();
        tracing::debug!(href = link.href, "mobile menu link followed");
        link.href
    }
}

#[cfg(test)]
#[path = "../../tests/unit/landing/disclosure.rs"]
mod tests;
