#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod backend;
pub mod components;
pub mod error;
pub mod traits;

pub use backend::BitSource;
pub use components::bit_collection::BitCollection;
pub use error::Error;
pub use traits::element_operator::ElementOperator;

pub type Result<T> = std::result::Result<T, Error>;
