use sea_orm::entity::prelude::*;

/// Join row recording which role a user holds within a project. Bulk-deleted
/// when its project is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "utilisateur_projet_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub utilisateur_id: i32,
    pub projet_id: i32,
    pub role_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::UtilisateurId",
        to = "super::utilisateur::Column::Id"
    )]
    Utilisateur,
    #[sea_orm(
        belongs_to = "super::projet::Entity",
        from = "Column::ProjetId",
        to = "super::projet::Column::Id"
    )]
    Projet,
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id"
    )]
    Role,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Utilisateur.def()
    }
}

impl Related<super::projet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projet.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
