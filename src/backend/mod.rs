pub mod bit_slice;
pub mod bools;
pub mod fixed;
pub mod word;

/// A fixed-capacity sequence of bits that can be probed by position.
///
/// Positions range from `0` to `bit_capacity() - 1`. Implementations only need to provide
/// `bit_capacity` and `is_set`; `cardinality` and `next_set` fall back to a linear scan and
/// should be overwritten if the underlying bit vector can answer them faster.
pub trait BitSource {
    /// Should return the amount of positions that can hold a bit.
    fn bit_capacity(&self) -> usize;

    /// Should return `true` if the bit at `position` is set.
    ///
    /// `position` has to be smaller than `bit_capacity()`. Implementations are free to panic
    /// otherwise.
    fn is_set(&self, position: usize) -> bool;

    /// Returns the amount of set bits.
    #[inline]
    fn cardinality(&self) -> usize {
        (0..self.bit_capacity()).filter(|&p| self.is_set(p)).count()
    }

    /// Returns the first set position at or after `from`, or `None` if no bit is set in
    /// `from..bit_capacity()`.
    #[inline]
    fn next_set(&self, from: usize) -> Option<usize> {
        (from..self.bit_capacity()).find(|&p| self.is_set(p))
    }
}

impl<S> BitSource for &S
where
    S: BitSource + ?Sized,
{
    #[inline]
    fn bit_capacity(&self) -> usize {
        (**self).bit_capacity()
    }

    #[inline]
    fn is_set(&self, position: usize) -> bool {
        (**self).is_set(position)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        (**self).cardinality()
    }

    #[inline]
    fn next_set(&self, from: usize) -> Option<usize> {
        (**self).next_set(from)
    }
}

#[cfg(test)]
pub mod test {
    use super::BitSource;

    /// Checks every `BitSource` operation of `src` against the set positions in `expected`.
    pub fn bs_matches<S: BitSource + ?Sized>(src: &S, expected: &[usize]) {
        let cap = src.bit_capacity();
        assert_eq!(src.cardinality(), expected.len());

        for pos in 0..cap {
            assert_eq!(src.is_set(pos), expected.contains(&pos), "position {pos}");
        }

        let mut found = vec![];
        let mut from = 0;
        while let Some(pos) = src.next_set(from) {
            assert!(pos >= from);
            assert!(pos < cap);
            found.push(pos);
            from = pos + 1;
        }
        assert_eq!(found, expected);

        assert_eq!(src.next_set(cap), None);
        assert_eq!(src.next_set(cap + 10), None);
    }

    /// Checks a source with no bit set.
    pub fn bs_empty<S: BitSource + ?Sized>(src: &S) {
        assert_eq!(src.cardinality(), 0);
        assert_eq!(src.next_set(0), None);
    }

    /// Checks a source with every bit set.
    pub fn bs_full<S: BitSource + ?Sized>(src: &S) {
        let cap = src.bit_capacity();
        assert_eq!(src.cardinality(), cap);
        for pos in 0..cap {
            assert_eq!(src.next_set(pos), Some(pos));
        }
    }

    /// A source that only implements the required methods, so the default scans get tested.
    struct Sparse {
        cap: usize,
        every: usize,
    }

    impl BitSource for Sparse {
        fn bit_capacity(&self) -> usize {
            self.cap
        }

        fn is_set(&self, position: usize) -> bool {
            position % self.every == 0
        }
    }

    #[test]
    fn default_scans() {
        let src = Sparse { cap: 20, every: 7 };
        bs_matches(&src, &[0, 7, 14]);
        bs_matches(&&src, &[0, 7, 14]);

        bs_full(&Sparse { cap: 5, every: 1 });
        bs_empty(&Sparse { cap: 0, every: 1 });
    }
}
