use sea_orm::entity::prelude::*;

/// Referenced record of the one-to-many pair.
///
/// The primary key is assigned by the application (next id after the current
/// maximum), so it is not auto-incremented by the database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "one_side")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::many_side::Entity")]
    ManySide,
}

impl Related<super::many_side::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ManySide.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
