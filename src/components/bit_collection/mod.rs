pub mod iter;
pub mod presets;

use crate::backend::BitSource;
use crate::components::bit_collection::iter::{BitElementIter, SetPositions};
use crate::traits::collection::Collection;
use crate::traits::element_operator::ElementOperator;
use crate::{Error, Result};
use std::fmt::{Debug, Formatter};

/// A read-only collection over the set bits of a `BitSource`.
///
/// Every set position is turned into an element by the collection's `ElementOperator`, lazily and
/// in ascending position order. Nothing gets cached: the amount of elements and the elements
/// themselves are read from the bits on every call.
///
/// The collection only borrows its bits, so they can't be changed while the collection or any of
/// its iterators is alive. Sources with interior mutability are not protected against that.
///
/// ```
/// use bitcollect::BitCollection;
///
/// let bits = [false, true, false, true, false, false, false, true];
/// let coll = BitCollection::new(&bits, |p: usize| p);
/// assert_eq!(coll.len(), 3);
/// assert_eq!(coll.to_vec(), vec![1, 3, 7]);
/// ```
pub struct BitCollection<'a, S: ?Sized, O> {
    bits: &'a S,
    operator: O,
}

impl<'a, S: ?Sized, O> BitCollection<'a, S, O> {
    #[inline]
    pub fn new(bits: &'a S, operator: O) -> Self {
        Self { bits, operator }
    }

    /// Returns the underlying bits.
    #[inline]
    pub fn bits(&self) -> &'a S {
        self.bits
    }

    #[inline]
    pub fn operator(&self) -> &O {
        &self.operator
    }
}

impl<'a, S, O> BitCollection<'a, S, O>
where
    S: BitSource + ?Sized,
{
    /// Returns the amount of elements, which is the amount of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.cardinality()
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.next_set(0).is_none()
    }

    /// Returns the amount of bits the underlying source can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bits.bit_capacity()
    }

    /// Returns an iterator over the set positions, without converting them.
    #[inline]
    pub fn positions(&self) -> SetPositions<'a, S> {
        SetPositions::new(self.bits)
    }
}

impl<'a, S, O> BitCollection<'a, S, O>
where
    S: BitSource + ?Sized,
    O: ElementOperator,
{
    /// Returns an iterator over all elements in the collection.
    #[inline]
    pub fn iter(&self) -> BitElementIter<'_, S, O> {
        BitElementIter::new(self.bits, &self.operator)
    }

    /// Gets the element of the `index`-th set bit.
    pub fn get(&self, index: usize) -> Result<O::Element> {
        self.iter().nth(index).ok_or(Error::OutOfBounds)
    }

    /// Returns `true` if any element equals `element`.
    pub fn contains(&self, element: &O::Element) -> bool
    where
        O::Element: PartialEq,
    {
        self.iter().any(|i| &i == element)
    }

    /// Returns all elements in a newly allocated Vec.
    pub fn to_vec(&self) -> Vec<O::Element> {
        self.iter().collect()
    }
}

impl<'a, S, O, T, X> BitCollection<'a, S, O>
where
    S: BitSource + ?Sized,
    O: ElementOperator<Element = std::result::Result<T, X>>,
{
    /// Collects the elements of a fallible operator. Stops at the first failing element and
    /// returns its error as is.
    pub fn try_to_vec(&self) -> std::result::Result<Vec<T>, X> {
        self.iter().collect()
    }
}

impl<'a, S, O> Collection<O::Element> for BitCollection<'a, S, O>
where
    S: BitSource + ?Sized,
    O: ElementOperator,
{
    type Iter<'b> = BitElementIter<'b, S, O> where Self: 'b;

    #[inline]
    fn len(&self) -> usize {
        BitCollection::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        BitCollection::is_empty(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<O::Element> {
        BitCollection::get(self, index)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        BitCollection::iter(self)
    }
}

impl<'a, 'b, S, O> IntoIterator for &'b BitCollection<'a, S, O>
where
    S: BitSource + ?Sized,
    O: ElementOperator,
{
    type Item = O::Element;
    type IntoIter = BitElementIter<'b, S, O>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: ?Sized, O: Clone> Clone for BitCollection<'a, S, O> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            bits: self.bits,
            operator: self.operator.clone(),
        }
    }
}

impl<'a, S: ?Sized, O: Copy> Copy for BitCollection<'a, S, O> {}

impl<'a, S, O> Debug for BitCollection<'a, S, O>
where
    S: BitSource + ?Sized,
    O: ElementOperator,
    O::Element: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
