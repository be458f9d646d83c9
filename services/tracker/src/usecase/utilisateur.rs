use crate::domain::repository::{RoleRepository, UtilisateurRepository};
use crate::domain::types::{ROLE_MEMBRE, Utilisateur};
use crate::dto::UtilisateurDto;
use crate::error::TrackerServiceError;

// ── CreateUtilisateur ────────────────────────────────────────────────────────

pub struct CreateUtilisateurInput {
    pub nom: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_app: Option<String>,
}

/// Creation is idempotent on the name: an existing user's id is returned
/// without error and without touching the stored row.
pub struct CreateUtilisateurUseCase<U: UtilisateurRepository, R: RoleRepository> {
    pub utilisateurs: U,
    pub roles: R,
}

impl<U: UtilisateurRepository, R: RoleRepository> CreateUtilisateurUseCase<U, R> {
    pub async fn execute(&self, input: CreateUtilisateurInput) -> Result<i32, TrackerServiceError> {
        let (Some(nom), Some(email)) = (input.nom, input.email) else {
            return Err(TrackerServiceError::MissingFields);
        };

        let role_app = match input.role_app {
            Some(role_demande) => {
                if self.roles.find_by_nom(&role_demande).await?.is_none() {
                    return Err(TrackerServiceError::UnknownRole);
                }
                role_demande
            }
            None => {
                if self.roles.find_by_nom(ROLE_MEMBRE).await?.is_none() {
                    return Err(TrackerServiceError::DefaultRoleMissing);
                }
                ROLE_MEMBRE.to_owned()
            }
        };

        if let Some(existant) = self.utilisateurs.find_by_nom(&nom).await? {
            return Ok(existant.id);
        }

        let utilisateur = Utilisateur {
            id: 0,
            nom,
            email,
            password: input.password.unwrap_or_default(),
            role_app,
            etat_connexion: false,
        };
        self.utilisateurs.create(&utilisateur).await
    }
}

// ── GetUtilisateur ───────────────────────────────────────────────────────────

pub struct GetUtilisateurUseCase<U: UtilisateurRepository> {
    pub utilisateurs: U,
}

impl<U: UtilisateurRepository> GetUtilisateurUseCase<U> {
    pub async fn execute(&self, id: i32) -> Result<Utilisateur, TrackerServiceError> {
        self.utilisateurs
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)
    }

    pub async fn execute_par_nom(&self, nom: &str) -> Result<Utilisateur, TrackerServiceError> {
        self.utilisateurs
            .find_by_nom(nom)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)
    }
}

// ── ListUtilisateurs ─────────────────────────────────────────────────────────

pub struct ListUtilisateursUseCase<U: UtilisateurRepository> {
    pub utilisateurs: U,
}

impl<U: UtilisateurRepository> ListUtilisateursUseCase<U> {
    pub async fn execute(&self) -> Result<Vec<Utilisateur>, TrackerServiceError> {
        self.utilisateurs.find_all().await
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Credential check against the stored opaque password; on success the
/// connection flag is persisted true. No token or session is produced.
pub struct LoginUseCase<U: UtilisateurRepository> {
    pub utilisateurs: U,
}

impl<U: UtilisateurRepository> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<Utilisateur, TrackerServiceError> {
        let (Some(email), Some(password)) = (input.email, input.password) else {
            return Err(TrackerServiceError::MissingCredentials);
        };

        let mut utilisateur = self
            .utilisateurs
            .find_by_email(&email)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)?;

        if utilisateur.password != password {
            return Err(TrackerServiceError::WrongPassword(email));
        }

        // Write only when the flag actually changes.
        if !utilisateur.etat_connexion {
            self.utilisateurs
                .set_etat_connexion(utilisateur.id, true)
                .await?;
            utilisateur.etat_connexion = true;
        }
        Ok(utilisateur)
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<U: UtilisateurRepository> {
    pub utilisateurs: U,
}

impl<U: UtilisateurRepository> LogoutUseCase<U> {
    pub async fn execute(
        &self,
        email: Option<String>,
    ) -> Result<Utilisateur, TrackerServiceError> {
        let email = email.ok_or(TrackerServiceError::UserNotFound)?;
        let mut utilisateur = self
            .utilisateurs
            .find_by_email(&email)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)?;

        if !utilisateur.etat_connexion {
            return Err(TrackerServiceError::AlreadyDisconnected(Box::new(
                UtilisateurDto::from(&utilisateur),
            )));
        }

        self.utilisateurs
            .set_etat_connexion(utilisateur.id, false)
            .await?;
        utilisateur.etat_connexion = false;
        Ok(utilisateur)
    }
}
