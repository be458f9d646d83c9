use sea_orm::entity::prelude::*;

/// Task record. `commanditaire` is the requester, `destinataire` the
/// assignee; both reference `utilisateur`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tache")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: String,
    pub description: Option<String>,
    pub etat: String,
    pub date_debut: chrono::DateTime<chrono::Utc>,
    pub date_fin: Option<chrono::DateTime<chrono::Utc>>,
    pub priorite_id: Option<i32>,
    pub commanditaire_id: i32,
    pub destinataire_id: i32,
    pub projet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::CommanditaireId",
        to = "super::utilisateur::Column::Id"
    )]
    Commanditaire,
    #[sea_orm(
        belongs_to = "super::utilisateur::Entity",
        from = "Column::DestinataireId",
        to = "super::utilisateur::Column::Id"
    )]
    Destinataire,
    #[sea_orm(
        belongs_to = "super::projet::Entity",
        from = "Column::ProjetId",
        to = "super::projet::Column::Id"
    )]
    Projet,
    #[sea_orm(
        belongs_to = "super::priorite::Entity",
        from = "Column::PrioriteId",
        to = "super::priorite::Column::Id"
    )]
    Priorite,
}

impl Related<super::projet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projet.def()
    }
}

impl Related<super::priorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Priorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
