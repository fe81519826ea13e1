use crate::backend::BitSource;
use bitvec::order::BitOrder;
use bitvec::slice::BitSlice;
use bitvec::store::BitStore;
use bitvec::vec::BitVec;

impl<T, O> BitSource for BitSlice<T, O>
where
    T: BitStore,
    O: BitOrder,
{
    #[inline]
    fn bit_capacity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_set(&self, position: usize) -> bool {
        self[position]
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.count_ones()
    }

    fn next_set(&self, from: usize) -> Option<usize> {
        let rest = self.get(from..)?;
        rest.first_one().map(|p| p + from)
    }
}

impl<T, O> BitSource for BitVec<T, O>
where
    T: BitStore,
    O: BitOrder,
{
    #[inline]
    fn bit_capacity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_set(&self, position: usize) -> bool {
        self.as_bitslice().is_set(position)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.count_ones()
    }

    #[inline]
    fn next_set(&self, from: usize) -> Option<usize> {
        self.as_bitslice().next_set(from)
    }
}
