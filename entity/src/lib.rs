//! SeaORM entities for the one-side and many-side collections.

pub mod prelude;

pub mod many_side;
pub mod one_side;
