pub use super::many_side::Entity as ManySide;
pub use super::one_side::Entity as OneSide;
