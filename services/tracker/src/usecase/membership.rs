use tracing::warn;

use crate::domain::repository::{
    ProjetRepository, RoleRepository, UserRoleProjetRepository, UtilisateurRepository,
};
use crate::domain::types::{Projet, ROLE_MEMBRE, Role, UserRoleProjet, Utilisateur};
use crate::error::TrackerServiceError;

pub struct AddUtilisateurAuProjetInput {
    pub projet_id: i32,
    pub nom_utilisateur: Option<String>,
    pub role_app: Option<String>,
}

/// Attach a user to a project under a role. An unknown requested role falls
/// back to `MEMBRE`; a missing `MEMBRE` row is a server-side failure.
pub struct AddUtilisateurAuProjetUseCase<
    P: ProjetRepository,
    U: UtilisateurRepository,
    R: RoleRepository,
    A: UserRoleProjetRepository,
> {
    pub projets: P,
    pub utilisateurs: U,
    pub roles: R,
    pub affectations: A,
}

impl<P, U, R, A> AddUtilisateurAuProjetUseCase<P, U, R, A>
where
    P: ProjetRepository,
    U: UtilisateurRepository,
    R: RoleRepository,
    A: UserRoleProjetRepository,
{
    pub async fn execute(
        &self,
        input: AddUtilisateurAuProjetInput,
    ) -> Result<(UserRoleProjet, Utilisateur, Role, Projet), TrackerServiceError> {
        let projet = self
            .projets
            .find_by_id(input.projet_id)
            .await?
            .ok_or(TrackerServiceError::MembershipTargetNotFound)?;

        let nom = input
            .nom_utilisateur
            .ok_or(TrackerServiceError::MembershipTargetNotFound)?;
        let utilisateur = self
            .utilisateurs
            .find_by_nom(&nom)
            .await?
            .ok_or(TrackerServiceError::MembershipTargetNotFound)?;

        let role = match input.role_app.as_deref() {
            Some(role_demande) if !role_demande.is_empty() => {
                match self.roles.find_by_nom(role_demande).await? {
                    Some(role) => Some(role),
                    None => {
                        warn!(role = role_demande, "rôle inconnu, repli sur MEMBRE");
                        None
                    }
                }
            }
            _ => None,
        };
        let role = match role {
            Some(role) => role,
            None => self
                .roles
                .find_by_nom(ROLE_MEMBRE)
                .await?
                .ok_or(TrackerServiceError::DefaultRoleMissing)?,
        };

        let affectation = UserRoleProjet {
            id: 0,
            utilisateur_id: utilisateur.id,
            projet_id: projet.id,
            role_id: role.id,
        };
        let id = self.affectations.create(&affectation).await?;

        Ok((
            UserRoleProjet { id, ..affectation },
            utilisateur,
            role,
            projet,
        ))
    }
}
