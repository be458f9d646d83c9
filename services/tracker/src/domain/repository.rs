#![allow(async_fn_in_trait)]

use crate::domain::types::{Priorite, Projet, Role, Tache, UserRoleProjet, Utilisateur};
use crate::error::TrackerServiceError;

/// Repository for users. Not-found is `None`, never an error, at this layer.
pub trait UtilisateurRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Utilisateur>, TrackerServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Utilisateur>, TrackerServiceError>;
    async fn find_by_nom(&self, nom: &str) -> Result<Option<Utilisateur>, TrackerServiceError>;
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Utilisateur>, TrackerServiceError>;
    /// Plain insert; returns the new id. Idempotence-by-name lives in the use case.
    async fn create(&self, utilisateur: &Utilisateur) -> Result<i32, TrackerServiceError>;
    /// Persist the connection flag. The only user field updated in place.
    async fn set_etat_connexion(
        &self,
        id: i32,
        connecte: bool,
    ) -> Result<(), TrackerServiceError>;
}

/// Repository for projects.
pub trait ProjetRepository: Send + Sync {
    async fn create(&self, projet: &Projet) -> Result<i32, TrackerServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Projet>, TrackerServiceError>;
    async fn find_by_nom(&self, nom: &str) -> Result<Option<Projet>, TrackerServiceError>;
    async fn find_all(&self) -> Result<Vec<Projet>, TrackerServiceError>;
    async fn delete(&self, id: i32) -> Result<(), TrackerServiceError>;
    /// Sever the auxiliary projet↔tache join rows for one project.
    async fn delete_projet_tache_relations(
        &self,
        projet_id: i32,
    ) -> Result<u64, TrackerServiceError>;
}

/// Repository for tasks.
pub trait TacheRepository: Send + Sync {
    async fn create(&self, tache: &Tache) -> Result<i32, TrackerServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Tache>, TrackerServiceError>;
    async fn find_by_nom(&self, nom: &str) -> Result<Option<Tache>, TrackerServiceError>;
    /// Name uniqueness is scoped to one project.
    async fn find_by_nom_in_projet(
        &self,
        projet_id: i32,
        nom: &str,
    ) -> Result<Option<Tache>, TrackerServiceError>;
    async fn find_by_projet_id(
        &self,
        projet_id: i32,
    ) -> Result<Vec<Tache>, TrackerServiceError>;
    /// Full-row write used by the partial-merge update.
    async fn update(&self, tache: &Tache) -> Result<(), TrackerServiceError>;
    /// Delete by id. Returns `true` if a row existed and was removed.
    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError>;
}

/// Repository for roles. Reference data: seed-or-fetch creation only.
pub trait RoleRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Role>, TrackerServiceError>;
    async fn find_by_nom(&self, nom: &str) -> Result<Option<Role>, TrackerServiceError>;
    /// Returns the existing id when a role with the same name is present.
    async fn create(&self, role: &Role) -> Result<i32, TrackerServiceError>;
}

/// Repository for priorities. Reference data: seed-or-fetch creation only.
pub trait PrioriteRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Priorite>, TrackerServiceError>;
    async fn find_by_nom(&self, nom: &str) -> Result<Option<Priorite>, TrackerServiceError>;
    /// Returns the existing id when a priority with the same name is present.
    async fn create(&self, priorite: &Priorite) -> Result<i32, TrackerServiceError>;
}

/// Repository for user↔project role assignments.
pub trait UserRoleProjetRepository: Send + Sync {
    async fn create(&self, affectation: &UserRoleProjet) -> Result<i64, TrackerServiceError>;
    async fn find_all(&self) -> Result<Vec<UserRoleProjet>, TrackerServiceError>;
    async fn find_by_projet_id(
        &self,
        projet_id: i32,
    ) -> Result<Vec<UserRoleProjet>, TrackerServiceError>;
    /// Bulk delete scoped to one project. Returns the removed row count.
    async fn delete_by_projet_id(&self, projet_id: i32) -> Result<u64, TrackerServiceError>;
}
