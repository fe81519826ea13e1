use crate::backend::BitSource;
use fixedbitset::FixedBitSet;

// `next_set` keeps the default probe: `FixedBitSet::ones` can only start at position 0.
impl BitSource for FixedBitSet {
    #[inline]
    fn bit_capacity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_set(&self, position: usize) -> bool {
        self.contains(position)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.count_ones(..)
    }
}

#[cfg(test)]
mod test {
    use super::super::test::*;
    use super::*;

    #[test]
    fn fixed_bit_set() {
        let mut set = FixedBitSet::with_capacity(8);
        set.insert(1);
        set.insert(3);
        set.insert(7);
        bs_matches(&set, &[1, 3, 7]);

        set.set(3, false);
        bs_matches(&set, &[1, 7]);
    }

    #[test]
    fn fixed_bit_set_bounds() {
        bs_empty(&FixedBitSet::with_capacity(70));

        let mut full = FixedBitSet::with_capacity(70);
        full.insert_range(..);
        bs_full(&full);
    }
}
