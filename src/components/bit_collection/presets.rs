use super::BitCollection;
use crate::traits::element_operator::ElementOperator;
use crate::{Error, Result};
use num_traits::FromPrimitive;
use std::marker::PhantomData;

/// Uses the position of each set bit as element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Positions;

impl ElementOperator for Positions {
    type Element = usize;

    #[inline]
    fn element_at(&self, position: usize) -> usize {
        position
    }
}

/// Converts the position of each set bit into the number type `T`.
///
/// Positions that don't fit into `T` yield `Error::UnexpectedValue`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Numbered<T>(PhantomData<fn() -> T>);

impl<T> Numbered<T> {
    #[inline]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> ElementOperator for Numbered<T>
where
    T: FromPrimitive,
{
    type Element = Result<T>;

    #[inline]
    fn element_at(&self, position: usize) -> Result<T> {
        T::from_usize(position).ok_or(Error::UnexpectedValue)
    }
}

/// Maps the position of each set bit to the item at the same index of a table.
///
/// Positions past the end of the table yield `Error::OutOfBounds`.
#[derive(Debug)]
pub struct Lookup<'t, T> {
    table: &'t [T],
}

impl<'t, T> Lookup<'t, T> {
    #[inline]
    pub fn new(table: &'t [T]) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &'t [T] {
        self.table
    }
}

impl<'t, T> Clone for Lookup<'t, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'t, T> Copy for Lookup<'t, T> {}

impl<'t, T> ElementOperator for Lookup<'t, T> {
    type Element = Result<&'t T>;

    #[inline]
    fn element_at(&self, position: usize) -> Result<&'t T> {
        self.table.get(position).ok_or(Error::OutOfBounds)
    }
}

pub type PositionCollection<'a, S> = BitCollection<'a, S, Positions>;
pub type NumberedCollection<'a, S, T> = BitCollection<'a, S, Numbered<T>>;
pub type LookupCollection<'a, 't, S, T> = BitCollection<'a, S, Lookup<'t, T>>;
