/*
[INPUT]:  Book ids chosen by the user
[OUTPUT]: Ordered multiset of ids (duplicates = quantity)
[POS]:    State layer - basket contents, no I/O
[UPDATE]: When changing basket operations or their ordering guarantees
*/

use bookstore_adapter::BookId;

/// Outcome of a basket mutation, used to decide whether pricing must rerun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketChange {
    Added(BookId),
    Removed(BookId),
    Cleared,
}

/// Ordered multiset of book ids.
///
/// Quantity is represented by repetition, and insertion order is kept so the
/// pricing service sees the basket exactly as the user built it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Basket {
    items: Vec<BookId>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one copy of `id`.
    pub fn add(&mut self, id: BookId) -> BasketChange {
        self.items.push(id);
        BasketChange::Added(id)
    }

    /// Remove the first occurrence of `id`.
    ///
    /// Returns `None` when the id is absent; the basket is left untouched.
    pub fn remove_one(&mut self, id: BookId) -> Option<BasketChange> {
        let index = self.items.iter().position(|item| *item == id)?;
        self.items.remove(index);
        Some(BasketChange::Removed(id))
    }

    pub fn count_of(&self, id: BookId) -> usize {
        self.items.iter().filter(|item| **item == id).count()
    }

    pub fn clear(&mut self) -> BasketChange {
        self.items.clear();
        BasketChange::Cleared
    }

    pub fn ids(&self) -> &[BookId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
