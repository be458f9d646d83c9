use sea_orm::entity::prelude::*;

/// Task priority. Reference data, seeded at startup.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "priorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nom: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tache::Entity")]
    Taches,
}

impl Related<super::tache::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
