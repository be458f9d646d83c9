use tracing::info;

use crate::domain::repository::{PrioriteRepository, RoleRepository, UtilisateurRepository};
use crate::domain::types::{
    PRIORITE_FAIBLE, PRIORITE_HAUTE, PRIORITE_MOYENNE, Priorite, ROLE_ADMINISTRATEUR,
    ROLE_MEMBRE, ROLE_OBSERVATEUR, Role, Utilisateur,
};
use crate::error::TrackerServiceError;

/// Startup seeding of the closed role/priority vocabularies and the bootstrap
/// administrator account. Idempotent: rows already present are left alone and
/// repeated startups insert nothing.
pub struct SeedReferenceDataUseCase<
    R: RoleRepository,
    Pr: PrioriteRepository,
    U: UtilisateurRepository,
> {
    pub roles: R,
    pub priorites: Pr,
    pub utilisateurs: U,
}

impl<R, Pr, U> SeedReferenceDataUseCase<R, Pr, U>
where
    R: RoleRepository,
    Pr: PrioriteRepository,
    U: UtilisateurRepository,
{
    pub async fn execute(&self) -> Result<(), TrackerServiceError> {
        for nom in [PRIORITE_HAUTE, PRIORITE_MOYENNE, PRIORITE_FAIBLE] {
            self.inserer_priorite(nom).await?;
        }

        self.inserer_utilisateur_bootstrap().await?;

        self.inserer_role(
            ROLE_ADMINISTRATEUR,
            [true, true, true, true, true, true, true, true],
        )
        .await?;
        self.inserer_role(
            ROLE_MEMBRE,
            [false, true, false, true, true, true, true, true],
        )
        .await?;
        self.inserer_role(
            ROLE_OBSERVATEUR,
            [false, false, false, false, true, true, true, true],
        )
        .await?;

        Ok(())
    }

    async fn inserer_priorite(&self, nom: &str) -> Result<(), TrackerServiceError> {
        if self.priorites.find_by_nom(nom).await?.is_none() {
            self.priorites
                .create(&Priorite {
                    id: 0,
                    nom: nom.to_owned(),
                })
                .await?;
            info!(nom, "priorité insérée");
        }
        Ok(())
    }

    async fn inserer_role(&self, nom: &str, flags: [bool; 8]) -> Result<(), TrackerServiceError> {
        let [
            ajouter_membre,
            creer_tache,
            assigne_tache,
            maj_tache,
            vue_tache,
            vue_tableau_de_bord,
            etre_notifie,
            vue_historique_modifications,
        ] = flags;
        if self.roles.find_by_nom(nom).await?.is_none() {
            self.roles
                .create(&Role {
                    id: 0,
                    nom: nom.to_owned(),
                    ajouter_membre,
                    creer_tache,
                    assigne_tache,
                    maj_tache,
                    vue_tache,
                    vue_tableau_de_bord,
                    etre_notifie,
                    vue_historique_modifications,
                })
                .await?;
            info!(nom, "rôle inséré");
        }
        Ok(())
    }

    async fn inserer_utilisateur_bootstrap(&self) -> Result<(), TrackerServiceError> {
        if self.utilisateurs.find_by_nom("arthur").await?.is_none() {
            self.utilisateurs
                .create(&Utilisateur {
                    id: 0,
                    nom: "arthur".to_owned(),
                    email: "arthur@gmail.com".to_owned(),
                    password: "arthur".to_owned(),
                    role_app: ROLE_ADMINISTRATEUR.to_owned(),
                    etat_connexion: true,
                })
                .await?;
            info!("utilisateur bootstrap inséré");
        }
        Ok(())
    }
}
