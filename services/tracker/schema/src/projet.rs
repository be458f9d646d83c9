use sea_orm::entity::prelude::*;

/// Project record. `date_creation` is set once at creation and never
/// rewritten afterwards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nom: String,
    pub description: String,
    pub date_echeance: Option<chrono::NaiveDate>,
    pub date_creation: chrono::NaiveDate,
    pub createur_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::CreateurId",
        to = "super::utilisateur::Column::Id"
    )]
    Createur,
    #[sea_orm(has_many = "super::tache::Entity")]
    Taches,
    #[sea_orm(has_many = "super::utilisateur_projet_role::Entity")]
    UtilisateurProjetRoles,
}

impl Related<super::utilisateur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Createur.def()
    }
}

impl Related<super::tache::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taches.def()
    }
}

impl Related<super::utilisateur_projet_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UtilisateurProjetRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
