use crate::backend::BitSource;

impl BitSource for [bool] {
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
        self.iter().filter(|b| **b).count()
    }

    fn next_set(&self, from: usize) -> Option<usize> {
        let rest = self.get(from..)?;
        rest.iter().position(|b| *b).map(|p| p + from)
    }
}

impl<const N: usize> BitSource for [bool; N] {
    #[inline]
    fn bit_capacity(&self) -> usize {
        N
    }

    #[inline]
    fn is_set(&self, position: usize) -> bool {
        self[position]
    }

    #[inline]
    fn cardinality(&self) -> usize {
        <[bool]>::cardinality(self)
    }

    #[inline]
    fn next_set(&self, from: usize) -> Option<usize> {
        <[bool]>::next_set(self, from)
    }
}

impl BitSource for Vec<bool> {
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
        <[bool]>::cardinality(self)
    }

    #[inline]
    fn next_set(&self, from: usize) -> Option<usize> {
        <[bool]>::next_set(self, from)
    }
}
