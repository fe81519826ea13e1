use crate::backend::BitSource;
use crate::traits::element_operator::ElementOperator;
use std::iter::FusedIterator;

/// Iterator over the set positions of a `BitSource` in ascending order.
///
/// The cursor is either scanning from `pos` or done. Once done it keeps returning `None`.
#[derive(Debug)]
pub struct SetPositions<'a, S: ?Sized> {
    bits: &'a S,
    pos: usize,
    done: bool,
}

impl<'a, S: ?Sized> SetPositions<'a, S> {
    #[inline]
    pub(crate) fn new(bits: &'a S) -> Self {
        Self {
            bits,
            pos: 0,
            done: false,
        }
    }
}

impl<'a, S: ?Sized> Clone for SetPositions<'a, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            bits: self.bits,
            pos: self.pos,
            done: self.done,
        }
    }
}

impl<'a, S> Iterator for SetPositions<'a, S>
where
    S: BitSource + ?Sized,
{
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.bits.next_set(self.pos) {
            Some(pos) => {
                self.pos = pos + 1;
                Some(pos)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let left = self.bits.bit_capacity().saturating_sub(self.pos);
        (0, Some(left))
    }
}

impl<'a, S> FusedIterator for SetPositions<'a, S> where S: BitSource + ?Sized {}

/// Iterator over the elements of a `BitCollection`.
///
/// Elements are built lazily, one `element_at` call per set position.
pub struct BitElementIter<'a, S: ?Sized, O> {
    positions: SetPositions<'a, S>,
    operator: &'a O,
}

impl<'a, S: ?Sized, O> BitElementIter<'a, S, O> {
    #[inline]
    pub(super) fn new(bits: &'a S, operator: &'a O) -> Self {
        Self {
            positions: SetPositions::new(bits),
            operator,
        }
    }
}

impl<'a, S: ?Sized, O> Clone for BitElementIter<'a, S, O> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            positions: self.positions.clone(),
            operator: self.operator,
        }
    }
}

impl<'a, S, O> Iterator for BitElementIter<'a, S, O>
where
    S: BitSource + ?Sized,
    O: ElementOperator,
{
    type Item = O::Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.positions.next()?;
        Some(self.operator.element_at(pos))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }

    /// Counts the remaining set positions without building their elements.
    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.positions.count()
    }

    /// Skips `n` set positions without building their elements.
    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let pos = self.positions.nth(n)?;
        Some(self.operator.element_at(pos))
    }
}

impl<'a, S, O> FusedIterator for BitElementIter<'a, S, O>
where
    S: BitSource + ?Sized,
    O: ElementOperator,
{
}
