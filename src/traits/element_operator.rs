/// Converts the position of a set bit into an element of a collection.
///
/// Operators are expected to be pure functions of the position. Nothing enforces this, so an
/// operator that depends on outside state makes repeated iterations yield different elements.
///
/// Every `Fn(usize) -> E` is an operator:
/// ```
/// use bitcollect::ElementOperator;
///
/// let square = |p: usize| p * p;
/// assert_eq!(square.element_at(3), 9);
/// ```
pub trait ElementOperator {
    /// The type of the elements produced.
    type Element;

    /// Returns the element belonging to the set bit at `position`.
    fn element_at(&self, position: usize) -> Self::Element;
}

impl<F, E> ElementOperator for F
where
    F: Fn(usize) -> E,
{
    type Element = E;

    #[inline]
    fn element_at(&self, position: usize) -> E {
        self(position)
    }
}
