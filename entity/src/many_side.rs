use sea_orm::entity::prelude::*;

/// Referencing record of the one-to-many pair.
///
/// `fk_neve` points at `one_side.id`. The reference is checked by the
/// application before writes and deletes, not by the database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "many_side")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub prep_time: f64,
    pub is_gluten_free: bool,
    pub enum_example: Option<String>,
    pub min_max_example: i32,
    pub custom_validator_example: Option<i32>,
    pub date_example: DateTimeUtc,
    #[sea_orm(indexed)]
    pub fk_neve: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::one_side::Entity",
        from = "Column::FkNeve",
        to = "super::one_side::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    OneSide,
}

impl Related<super::one_side::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OneSide.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
