use anyhow::anyhow;
use chrono::Utc;
use tracing::info;

use crate::domain::repository::{
    ProjetRepository, RoleRepository, TacheRepository, UserRoleProjetRepository,
    UtilisateurRepository,
};
use crate::domain::types::{Projet, ROLE_ADMINISTRATEUR, Role, UserRoleProjet, Utilisateur};
use crate::error::TrackerServiceError;

// ── CreateProjet ─────────────────────────────────────────────────────────────

pub struct CreateProjetInput {
    pub nom: String,
    pub description: String,
    pub date_echeance: Option<chrono::NaiveDate>,
    pub createur_id: i32,
}

/// Project creation binds the creator to `ADMINISTRATEUR` on the new project
/// immediately after the insert; every project has exactly one such row.
pub struct CreateProjetUseCase<
    U: UtilisateurRepository,
    P: ProjetRepository,
    R: RoleRepository,
    A: UserRoleProjetRepository,
> {
    pub utilisateurs: U,
    pub projets: P,
    pub roles: R,
    pub affectations: A,
}

impl<U, P, R, A> CreateProjetUseCase<U, P, R, A>
where
    U: UtilisateurRepository,
    P: ProjetRepository,
    R: RoleRepository,
    A: UserRoleProjetRepository,
{
    pub async fn execute(
        &self,
        input: CreateProjetInput,
    ) -> Result<(Utilisateur, Role, Projet), TrackerServiceError> {
        let createur = self
            .utilisateurs
            .find_by_id(input.createur_id)
            .await?
            .ok_or(TrackerServiceError::UnknownUser)?;

        if !createur.etat_connexion {
            return Err(TrackerServiceError::UserNotConnected);
        }

        if let Some(existant) = self.projets.find_by_nom(&input.nom).await? {
            return Err(TrackerServiceError::ProjectAlreadyExists(Box::new(
                (&existant).into(),
            )));
        }

        let role_admin = self
            .roles
            .find_by_nom(ROLE_ADMINISTRATEUR)
            .await?
            .ok_or_else(|| {
                TrackerServiceError::Internal(anyhow!("rôle ADMINISTRATEUR non initialisé"))
            })?;

        let projet = Projet {
            id: 0,
            nom: input.nom,
            description: input.description,
            date_echeance: input.date_echeance,
            date_creation: Utc::now().date_naive(),
            createur_id: createur.id,
        };
        let projet_id = self.projets.create(&projet).await?;
        let projet_cree = self
            .projets
            .find_by_id(projet_id)
            .await?
            .ok_or_else(|| TrackerServiceError::Internal(anyhow!("projet créé introuvable")))?;

        self.affectations
            .create(&UserRoleProjet {
                id: 0,
                utilisateur_id: createur.id,
                projet_id,
                role_id: role_admin.id,
            })
            .await?;

        Ok((createur, role_admin, projet_cree))
    }
}

// ── GetProjet ────────────────────────────────────────────────────────────────

pub struct GetProjetUseCase<P: ProjetRepository, U: UtilisateurRepository> {
    pub projets: P,
    pub utilisateurs: U,
}

impl<P: ProjetRepository, U: UtilisateurRepository> GetProjetUseCase<P, U> {
    pub async fn execute(&self, id: i32) -> Result<(Projet, Utilisateur), TrackerServiceError> {
        let projet = self
            .projets
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::ProjectNotFound)?;
        self.avec_createur(projet).await
    }

    pub async fn execute_par_nom(
        &self,
        nom: &str,
    ) -> Result<(Projet, Utilisateur), TrackerServiceError> {
        let projet = self
            .projets
            .find_by_nom(nom)
            .await?
            .ok_or(TrackerServiceError::ProjectNotFound)?;
        self.avec_createur(projet).await
    }

    async fn avec_createur(
        &self,
        projet: Projet,
    ) -> Result<(Projet, Utilisateur), TrackerServiceError> {
        let createur = self
            .utilisateurs
            .find_by_id(projet.createur_id)
            .await?
            .ok_or_else(|| {
                TrackerServiceError::Internal(anyhow!(
                    "créateur introuvable pour le projet {}",
                    projet.id
                ))
            })?;
        Ok((projet, createur))
    }
}

// ── ListProjets ──────────────────────────────────────────────────────────────

pub struct ListProjetsUseCase<P: ProjetRepository> {
    pub projets: P,
}

impl<P: ProjetRepository> ListProjetsUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Projet>, TrackerServiceError> {
        self.projets.find_all().await
    }
}

// ── ListMembresProjet ────────────────────────────────────────────────────────

pub struct ListMembresProjetUseCase<
    P: ProjetRepository,
    A: UserRoleProjetRepository,
    U: UtilisateurRepository,
    R: RoleRepository,
> {
    pub projets: P,
    pub affectations: A,
    pub utilisateurs: U,
    pub roles: R,
}

impl<P, A, U, R> ListMembresProjetUseCase<P, A, U, R>
where
    P: ProjetRepository,
    A: UserRoleProjetRepository,
    U: UtilisateurRepository,
    R: RoleRepository,
{
    #[allow(clippy::type_complexity)]
    pub async fn execute(
        &self,
        projet_id: i32,
    ) -> Result<(Projet, Vec<(UserRoleProjet, Utilisateur, Role)>), TrackerServiceError> {
        let projet = self
            .projets
            .find_by_id(projet_id)
            .await?
            .ok_or(TrackerServiceError::ProjectNotFound)?;

        let mut membres = Vec::new();
        for affectation in self.affectations.find_by_projet_id(projet_id).await? {
            let utilisateur = self
                .utilisateurs
                .find_by_id(affectation.utilisateur_id)
                .await?
                .ok_or_else(|| {
                    TrackerServiceError::Internal(anyhow!(
                        "utilisateur introuvable pour l'affectation {}",
                        affectation.id
                    ))
                })?;
            let role = self
                .roles
                .find_by_id(affectation.role_id)
                .await?
                .ok_or_else(|| {
                    TrackerServiceError::Internal(anyhow!(
                        "rôle introuvable pour l'affectation {}",
                        affectation.id
                    ))
                })?;
            membres.push((affectation, utilisateur, role));
        }
        Ok((projet, membres))
    }
}

// ── DeleteProjet (cascade) ───────────────────────────────────────────────────

/// Ordered, best-effort removal of a project and its dependents. Each step is
/// logged distinctly; a failing step surfaces immediately with its cause and
/// earlier steps are not compensated.
pub struct DeleteProjetUseCase<
    P: ProjetRepository,
    T: TacheRepository,
    A: UserRoleProjetRepository,
> {
    pub projets: P,
    pub taches: T,
    pub affectations: A,
}

impl<P, T, A> DeleteProjetUseCase<P, T, A>
where
    P: ProjetRepository,
    T: TacheRepository,
    A: UserRoleProjetRepository,
{
    pub async fn execute(&self, projet_id: i32) -> Result<(), TrackerServiceError> {
        if self.projets.find_by_id(projet_id).await?.is_none() {
            return Err(TrackerServiceError::ProjectNotFound);
        }

        self.executer_cascade(projet_id).await.map_err(|e| match e {
            TrackerServiceError::Internal(source) => TrackerServiceError::Internal(
                source.context("Erreur lors de la suppression"),
            ),
            autre => autre,
        })
    }

    async fn executer_cascade(&self, projet_id: i32) -> Result<(), TrackerServiceError> {
        info!(projet_id, "suppression du projet: début");

        let relations = self
            .projets
            .delete_projet_tache_relations(projet_id)
            .await?;
        info!(projet_id, relations, "étape 1: relations projet_tache supprimées");

        let taches = self.taches.find_by_projet_id(projet_id).await?;
        info!(projet_id, nb_taches = taches.len(), "étape 2: suppression des tâches");
        for tache in &taches {
            self.taches.delete(tache.id).await?;
        }

        let affectations = self.affectations.delete_by_projet_id(projet_id).await?;
        info!(projet_id, affectations, "étape 3: affectations de rôle supprimées");

        self.projets.delete(projet_id).await?;
        info!(projet_id, "étape 4: projet supprimé");
        Ok(())
    }
}
