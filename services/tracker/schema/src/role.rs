use sea_orm::entity::prelude::*;

/// Project role with its capability flags. Reference data, seeded at startup.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nom: String,
    pub ajouter_membre: bool,
    pub creer_tache: bool,
    pub assigne_tache: bool,
    pub maj_tache: bool,
    pub vue_tache: bool,
    pub vue_tableau_de_bord: bool,
    pub etre_notifie: bool,
    pub vue_historique_modifications: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::utilisateur_projet_role::Entity")]
    UtilisateurProjetRoles,
}

impl Related<super::utilisateur_projet_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UtilisateurProjetRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
