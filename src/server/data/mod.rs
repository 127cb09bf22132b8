//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each record kind and return entity models or
//! plain values; conversion into domain models happens in the service layer. Every
//! repository is generic over `ConnectionTrait`, so the same queries run against the
//! pooled connection or inside a transaction.

pub mod many_side;
pub mod one_side;
pub mod reference;

#[cfg(test)]
mod test;
