use sea_orm::entity::prelude::*;

/// Legacy auxiliary project↔task join table. The create path never writes it,
/// but project deletion must still sever it before the tasks go.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projet_tache")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub projet_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tache_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projet::Entity",
        from = "Column::ProjetId",
        to = "super::projet::Column::Id"
    )]
    Projet,
    #[sea_orm(
        belongs_to = "super::tache::Entity",
        from = "Column::TacheId",
        to = "super::tache::Column::Id"
    )]
    Tache,
}

impl Related<super::projet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projet.def()
    }
}

impl Related<super::tache::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tache.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
