use crate::backend::BitSource;

/// Bit `p` of a word is `(word >> p) & 1`, so position 0 is the least significant bit.
macro_rules! impl_word_source {
    ($($t:ty),*) => {
        $(
            impl BitSource for $t {
                #[inline]
                fn bit_capacity(&self) -> usize {
                    <$t>::BITS as usize
                }

                #[inline]
                fn is_set(&self, position: usize) -> bool {
                    (*self >> position) & 1 == 1
                }

                #[inline]
                fn cardinality(&self) -> usize {
                    self.count_ones() as usize
                }

                #[inline]
                fn next_set(&self, from: usize) -> Option<usize> {
                    if from >= self.bit_capacity() {
                        return None;
                    }
                    let rest = *self >> from;
                    if rest == 0 {
                        return None;
                    }
                    Some(from + rest.trailing_zeros() as usize)
                }
            }
        )*
    };
}

impl_word_source!(u8, u16, u32, u64, u128, usize);
