use crate::Result;

/// Trait defining common behavior for read-only collections.
pub trait Collection<T> {
    /// The type used to iterate over the collections items.
    type Iter<'a>: Iterator<Item = T> + 'a
    where
        Self: 'a;

    /// Returns the amount of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection has no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the item at `index` in iteration order.
    fn get(&self, index: usize) -> Result<T>;

    /// Iterates over the collection.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if any item of the collection equals `item`.
    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|i| &i == item)
    }

    /// Returns all items in a newly allocated Vec.
    fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}
