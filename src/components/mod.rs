pub mod bit_collection;
