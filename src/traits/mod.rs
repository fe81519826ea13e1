pub mod collection;
pub mod element_operator;
