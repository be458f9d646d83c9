use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use pjm_tracker_schema::{priorite, projet, projet_tache, role, tache, utilisateur,
    utilisateur_projet_role};

use crate::domain::repository::{
    PrioriteRepository, ProjetRepository, RoleRepository, TacheRepository,
    UserRoleProjetRepository, UtilisateurRepository,
};
use crate::domain::types::{Priorite, Projet, Role, Tache, UserRoleProjet, Utilisateur};
use crate::error::TrackerServiceError;

// ── Utilisateur repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUtilisateurRepository {
    pub db: DatabaseConnection,
}

impl UtilisateurRepository for DbUtilisateurRepository {
    async fn find_all(&self) -> Result<Vec<Utilisateur>, TrackerServiceError> {
        let models = utilisateur::Entity::find()
            .all(&self.db)
            .await
            .context("list utilisateurs")?;
        Ok(models.into_iter().map(utilisateur_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Utilisateur>, TrackerServiceError> {
        let model = utilisateur::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find utilisateur by id")?;
        Ok(model.map(utilisateur_from_model))
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Utilisateur>, TrackerServiceError> {
        let model = utilisateur::Entity::find()
            .filter(utilisateur::Column::Nom.eq(nom))
            .one(&self.db)
            .await
            .context("find utilisateur by nom")?;
        Ok(model.map(utilisateur_from_model))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Utilisateur>, TrackerServiceError> {
        let model = utilisateur::Entity::find()
            .filter(utilisateur::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find utilisateur by email")?;
        Ok(model.map(utilisateur_from_model))
    }

    async fn create(&self, u: &Utilisateur) -> Result<i32, TrackerServiceError> {
        let inserted = utilisateur::ActiveModel {
            id: NotSet,
            nom: Set(u.nom.clone()),
            email: Set(u.email.clone()),
            password: Set(u.password.clone()),
            role_app: Set(u.role_app.clone()),
            etat_connexion: Set(u.etat_connexion),
        }
        .insert(&self.db)
        .await
        .context("create utilisateur")?;
        Ok(inserted.id)
    }

    async fn set_etat_connexion(
        &self,
        id: i32,
        connecte: bool,
    ) -> Result<(), TrackerServiceError> {
        utilisateur::ActiveModel {
            id: Set(id),
            etat_connexion: Set(connecte),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update etat_connexion")?;
        Ok(())
    }
}

fn utilisateur_from_model(model: utilisateur::Model) -> Utilisateur {
    Utilisateur {
        id: model.id,
        nom: model.nom,
        email: model.email,
        password: model.password,
        role_app: model.role_app,
        etat_connexion: model.etat_connexion,
    }
}

// ── Projet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProjetRepository {
    pub db: DatabaseConnection,
}

impl ProjetRepository for DbProjetRepository {
    async fn create(&self, p: &Projet) -> Result<i32, TrackerServiceError> {
        let inserted = projet::ActiveModel {
            id: NotSet,
            nom: Set(p.nom.clone()),
            description: Set(p.description.clone()),
            date_echeance: Set(p.date_echeance),
            date_creation: Set(p.date_creation),
            createur_id: Set(p.createur_id),
        }
        .insert(&self.db)
        .await
        .context("create projet")?;
        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Projet>, TrackerServiceError> {
        let model = projet::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find projet by id")?;
        Ok(model.map(projet_from_model))
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Projet>, TrackerServiceError> {
        let model = projet::Entity::find()
            .filter(projet::Column::Nom.eq(nom))
            .one(&self.db)
            .await
            .context("find projet by nom")?;
        Ok(model.map(projet_from_model))
    }

    async fn find_all(&self) -> Result<Vec<Projet>, TrackerServiceError> {
        let models = projet::Entity::find()
            .all(&self.db)
            .await
            .context("list projets")?;
        Ok(models.into_iter().map(projet_from_model).collect())
    }

    async fn delete(&self, id: i32) -> Result<(), TrackerServiceError> {
        projet::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete projet")?;
        Ok(())
    }

    async fn delete_projet_tache_relations(
        &self,
        projet_id: i32,
    ) -> Result<u64, TrackerServiceError> {
        let res = projet_tache::Entity::delete_many()
            .filter(projet_tache::Column::ProjetId.eq(projet_id))
            .exec(&self.db)
            .await
            .context("delete projet_tache relations")?;
        Ok(res.rows_affected)
    }
}

fn projet_from_model(model: projet::Model) -> Projet {
    Projet {
        id: model.id,
        nom: model.nom,
        description: model.description,
        date_echeance: model.date_echeance,
        date_creation: model.date_creation,
        createur_id: model.createur_id,
    }
}

// ── Tache repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTacheRepository {
    pub db: DatabaseConnection,
}

impl TacheRepository for DbTacheRepository {
    async fn create(&self, t: &Tache) -> Result<i32, TrackerServiceError> {
        let inserted = tache_to_active_model(t)
            .insert(&self.db)
            .await
            .context("create tache")?;
        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tache>, TrackerServiceError> {
        let model = tache::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find tache by id")?;
        Ok(model.map(tache_from_model))
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Tache>, TrackerServiceError> {
        let model = tache::Entity::find()
            .filter(tache::Column::Nom.eq(nom))
            .one(&self.db)
            .await
            .context("find tache by nom")?;
        Ok(model.map(tache_from_model))
    }

    async fn find_by_nom_in_projet(
        &self,
        projet_id: i32,
        nom: &str,
    ) -> Result<Option<Tache>, TrackerServiceError> {
        let model = tache::Entity::find()
            .filter(tache::Column::ProjetId.eq(projet_id))
            .filter(tache::Column::Nom.eq(nom))
            .one(&self.db)
            .await
            .context("find tache by nom in projet")?;
        Ok(model.map(tache_from_model))
    }

    async fn find_by_projet_id(
        &self,
        projet_id: i32,
    ) -> Result<Vec<Tache>, TrackerServiceError> {
        let models = tache::Entity::find()
            .filter(tache::Column::ProjetId.eq(projet_id))
            .all(&self.db)
            .await
            .context("list taches by projet")?;
        Ok(models.into_iter().map(tache_from_model).collect())
    }

    async fn update(&self, t: &Tache) -> Result<(), TrackerServiceError> {
        tache::ActiveModel {
            id: Set(t.id),
            ..tache_to_active_model(t)
        }
        .update(&self.db)
        .await
        .context("update tache")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let res = tache::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete tache")?;
        Ok(res.rows_affected > 0)
    }
}

fn tache_to_active_model(t: &Tache) -> tache::ActiveModel {
    tache::ActiveModel {
        id: NotSet,
        nom: Set(t.nom.clone()),
        description: Set(t.description.clone()),
        etat: Set(t.etat.clone()),
        date_debut: Set(t.date_debut),
        date_fin: Set(t.date_fin),
        priorite_id: Set(t.priorite_id),
        commanditaire_id: Set(t.commanditaire_id),
        destinataire_id: Set(t.destinataire_id),
        projet_id: Set(t.projet_id),
    }
}

fn tache_from_model(model: tache::Model) -> Tache {
    Tache {
        id: model.id,
        nom: model.nom,
        description: model.description,
        etat: model.etat,
        date_debut: model.date_debut,
        date_fin: model.date_fin,
        priorite_id: model.priorite_id,
        commanditaire_id: model.commanditaire_id,
        destinataire_id: model.destinataire_id,
        projet_id: model.projet_id,
    }
}

// ── Role repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Role>, TrackerServiceError> {
        let model = role::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find role by id")?;
        Ok(model.map(role_from_model))
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Role>, TrackerServiceError> {
        let model = role::Entity::find()
            .filter(role::Column::Nom.eq(nom))
            .one(&self.db)
            .await
            .context("find role by nom")?;
        Ok(model.map(role_from_model))
    }

    async fn create(&self, r: &Role) -> Result<i32, TrackerServiceError> {
        if let Some(existant) = self.find_by_nom(&r.nom).await? {
            return Ok(existant.id);
        }
        let inserted = role::ActiveModel {
            id: NotSet,
            nom: Set(r.nom.clone()),
            ajouter_membre: Set(r.ajouter_membre),
            creer_tache: Set(r.creer_tache),
            assigne_tache: Set(r.assigne_tache),
            maj_tache: Set(r.maj_tache),
            vue_tache: Set(r.vue_tache),
            vue_tableau_de_bord: Set(r.vue_tableau_de_bord),
            etre_notifie: Set(r.etre_notifie),
            vue_historique_modifications: Set(r.vue_historique_modifications),
        }
        .insert(&self.db)
        .await
        .context("create role")?;
        Ok(inserted.id)
    }
}

fn role_from_model(model: role::Model) -> Role {
    Role {
        id: model.id,
        nom: model.nom,
        ajouter_membre: model.ajouter_membre,
        creer_tache: model.creer_tache,
        assigne_tache: model.assigne_tache,
        maj_tache: model.maj_tache,
        vue_tache: model.vue_tache,
        vue_tableau_de_bord: model.vue_tableau_de_bord,
        etre_notifie: model.etre_notifie,
        vue_historique_modifications: model.vue_historique_modifications,
    }
}

// ── Priorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPrioriteRepository {
    pub db: DatabaseConnection,
}

impl PrioriteRepository for DbPrioriteRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Priorite>, TrackerServiceError> {
        let model = priorite::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find priorite by id")?;
        Ok(model.map(priorite_from_model))
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Priorite>, TrackerServiceError> {
        let model = priorite::Entity::find()
            .filter(priorite::Column::Nom.eq(nom))
            .one(&self.db)
            .await
            .context("find priorite by nom")?;
        Ok(model.map(priorite_from_model))
    }

    async fn create(&self, p: &Priorite) -> Result<i32, TrackerServiceError> {
        if let Some(existante) = self.find_by_nom(&p.nom).await? {
            return Ok(existante.id);
        }
        let inserted = priorite::ActiveModel {
            id: NotSet,
            nom: Set(p.nom.clone()),
        }
        .insert(&self.db)
        .await
        .context("create priorite")?;
        Ok(inserted.id)
    }
}

fn priorite_from_model(model: priorite::Model) -> Priorite {
    Priorite {
        id: model.id,
        nom: model.nom,
    }
}

// ── UserRoleProjet repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRoleProjetRepository {
    pub db: DatabaseConnection,
}

impl UserRoleProjetRepository for DbUserRoleProjetRepository {
    async fn create(&self, a: &UserRoleProjet) -> Result<i64, TrackerServiceError> {
        let inserted = utilisateur_projet_role::ActiveModel {
            id: NotSet,
            utilisateur_id: Set(a.utilisateur_id),
            projet_id: Set(a.projet_id),
            role_id: Set(a.role_id),
        }
        .insert(&self.db)
        .await
        .context("create affectation")?;
        Ok(inserted.id)
    }

    async fn find_all(&self) -> Result<Vec<UserRoleProjet>, TrackerServiceError> {
        let models = utilisateur_projet_role::Entity::find()
            .all(&self.db)
            .await
            .context("list affectations")?;
        Ok(models.into_iter().map(affectation_from_model).collect())
    }

    async fn find_by_projet_id(
        &self,
        projet_id: i32,
    ) -> Result<Vec<UserRoleProjet>, TrackerServiceError> {
        let models = utilisateur_projet_role::Entity::find()
            .filter(utilisateur_projet_role::Column::ProjetId.eq(projet_id))
            .all(&self.db)
            .await
            .context("list affectations by projet")?;
        Ok(models.into_iter().map(affectation_from_model).collect())
    }

    async fn delete_by_projet_id(&self, projet_id: i32) -> Result<u64, TrackerServiceError> {
        let res = utilisateur_projet_role::Entity::delete_many()
            .filter(utilisateur_projet_role::Column::ProjetId.eq(projet_id))
            .exec(&self.db)
            .await
            .context("delete affectations by projet")?;
        Ok(res.rows_affected)
    }
}

fn affectation_from_model(model: utilisateur_projet_role::Model) -> UserRoleProjet {
    UserRoleProjet {
        id: model.id,
        utilisateur_id: model.utilisateur_id,
        projet_id: model.projet_id,
        role_id: model.role_id,
    }
}
