use sea_orm::entity::prelude::*;

/// Application user. `password` is stored as an opaque string and
/// `etat_connexion` is the only field "login" ever touches.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "utilisateur")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nom: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role_app: String,
    pub etat_connexion: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::projet::Entity")]
    Projets,
    #[sea_orm(has_many = "super::utilisateur_projet_role::Entity")]
    UtilisateurProjetRoles,
}

impl Related<super::projet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projets.def()
    }
}

impl Related<super::utilisateur_projet_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UtilisateurProjetRoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
