use anyhow::anyhow;
use chrono::{DateTime, Utc};

use crate::domain::repository::{
    PrioriteRepository, ProjetRepository, TacheRepository, UtilisateurRepository,
};
use crate::domain::types::{PRIORITE_DEFAUT, Priorite, Tache, Utilisateur, etat_ou_defaut};
use crate::error::TrackerServiceError;

/// A task with its references resolved one level deep, ready for shaping
/// into a response DTO.
pub struct TacheDetails {
    pub tache: Tache,
    pub commanditaire: Utilisateur,
    pub destinataire: Utilisateur,
    pub priorite: Option<Priorite>,
}

async fn charger_details<U, Pr>(
    tache: Tache,
    utilisateurs: &U,
    priorites: &Pr,
) -> Result<TacheDetails, TrackerServiceError>
where
    U: UtilisateurRepository,
    Pr: PrioriteRepository,
{
    let commanditaire = utilisateurs
        .find_by_id(tache.commanditaire_id)
        .await?
        .ok_or_else(|| {
            TrackerServiceError::Internal(anyhow!(
                "commanditaire introuvable pour la tâche {}",
                tache.id
            ))
        })?;
    let destinataire = utilisateurs
        .find_by_id(tache.destinataire_id)
        .await?
        .ok_or_else(|| {
            TrackerServiceError::Internal(anyhow!(
                "destinataire introuvable pour la tâche {}",
                tache.id
            ))
        })?;
    let priorite = match tache.priorite_id {
        Some(priorite_id) => priorites.find_by_id(priorite_id).await?,
        None => None,
    };
    Ok(TacheDetails {
        tache,
        commanditaire,
        destinataire,
        priorite,
    })
}

// ── CreateTache ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct CreateTacheInput {
    pub nom: Option<String>,
    pub description: Option<String>,
    pub etat: Option<String>,
    pub date_debut: Option<DateTime<Utc>>,
    pub date_fin: Option<DateTime<Utc>>,
    pub priorite_id: Option<i32>,
    pub commanditaire_id: Option<i32>,
    pub destinataire_id: Option<i32>,
    pub projet_id: Option<i32>,
}

/// Project, requester and assignee must all resolve; the name must be unused
/// within the target project. `etat` defaults to `TODO`, `date_debut` to now.
pub struct CreateTacheUseCase<
    T: TacheRepository,
    P: ProjetRepository,
    U: UtilisateurRepository,
    Pr: PrioriteRepository,
> {
    pub taches: T,
    pub projets: P,
    pub utilisateurs: U,
    pub priorites: Pr,
}

impl<T, P, U, Pr> CreateTacheUseCase<T, P, U, Pr>
where
    T: TacheRepository,
    P: ProjetRepository,
    U: UtilisateurRepository,
    Pr: PrioriteRepository,
{
    pub async fn execute(
        &self,
        input: CreateTacheInput,
    ) -> Result<TacheDetails, TrackerServiceError> {
        let (Some(nom), Some(projet_id), Some(commanditaire_id), Some(destinataire_id)) = (
            input.nom,
            input.projet_id,
            input.commanditaire_id,
            input.destinataire_id,
        ) else {
            return Err(TrackerServiceError::TaskRequestInvalid);
        };

        if self.projets.find_by_id(projet_id).await?.is_none() {
            return Err(TrackerServiceError::TaskRequestInvalid);
        }
        let commanditaire = self
            .utilisateurs
            .find_by_id(commanditaire_id)
            .await?
            .ok_or(TrackerServiceError::TaskRequestInvalid)?;
        let destinataire = self
            .utilisateurs
            .find_by_id(destinataire_id)
            .await?
            .ok_or(TrackerServiceError::TaskRequestInvalid)?;

        if self
            .taches
            .find_by_nom_in_projet(projet_id, &nom)
            .await?
            .is_some()
        {
            return Err(TrackerServiceError::TaskRequestInvalid);
        }

        let priorite = match input.priorite_id {
            Some(priorite_id) => Some(self.resoudre_priorite(priorite_id).await?),
            None => None,
        };

        let tache = Tache {
            id: 0,
            nom,
            description: input.description,
            etat: etat_ou_defaut(input.etat.as_deref()),
            date_debut: input.date_debut.unwrap_or_else(Utc::now),
            date_fin: input.date_fin,
            priorite_id: priorite.as_ref().map(|p| p.id),
            commanditaire_id,
            destinataire_id,
            projet_id: Some(projet_id),
        };
        let id = self.taches.create(&tache).await?;

        Ok(TacheDetails {
            tache: Tache { id, ..tache },
            commanditaire,
            destinataire,
            priorite,
        })
    }

    async fn resoudre_priorite(
        &self,
        priorite_id: i32,
    ) -> Result<Priorite, TrackerServiceError> {
        resoudre_priorite_ou_defaut(&self.priorites, priorite_id).await
    }
}

/// An unknown priority reference falls back to the default priority looked up
/// by name, never a hardcoded numeric id.
async fn resoudre_priorite_ou_defaut<Pr: PrioriteRepository>(
    priorites: &Pr,
    priorite_id: i32,
) -> Result<Priorite, TrackerServiceError> {
    if let Some(priorite) = priorites.find_by_id(priorite_id).await? {
        return Ok(priorite);
    }
    priorites
        .find_by_nom(PRIORITE_DEFAUT)
        .await?
        .ok_or_else(|| {
            TrackerServiceError::Internal(anyhow!("priorité par défaut non initialisée"))
        })
}

// ── GetTache / ListTaches ────────────────────────────────────────────────────

pub struct GetTacheUseCase<T: TacheRepository, U: UtilisateurRepository, Pr: PrioriteRepository> {
    pub taches: T,
    pub utilisateurs: U,
    pub priorites: Pr,
}

impl<T, U, Pr> GetTacheUseCase<T, U, Pr>
where
    T: TacheRepository,
    U: UtilisateurRepository,
    Pr: PrioriteRepository,
{
    pub async fn execute(&self, id: i32) -> Result<TacheDetails, TrackerServiceError> {
        let tache = self
            .taches
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::TaskNotFound)?;
        charger_details(tache, &self.utilisateurs, &self.priorites).await
    }

    pub async fn execute_par_nom(&self, nom: &str) -> Result<TacheDetails, TrackerServiceError> {
        let tache = self
            .taches
            .find_by_nom(nom)
            .await?
            .ok_or(TrackerServiceError::TaskNotFound)?;
        charger_details(tache, &self.utilisateurs, &self.priorites).await
    }

    pub async fn execute_par_projet(
        &self,
        projet_id: i32,
    ) -> Result<Vec<TacheDetails>, TrackerServiceError> {
        let mut details = Vec::new();
        for tache in self.taches.find_by_projet_id(projet_id).await? {
            details.push(charger_details(tache, &self.utilisateurs, &self.priorites).await?);
        }
        Ok(details)
    }
}

// ── UpdateTache (partial merge) ──────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateTacheInput {
    pub id: Option<i32>,
    pub nom: Option<String>,
    pub description: Option<String>,
    pub etat: Option<String>,
    pub date_debut: Option<DateTime<Utc>>,
    pub date_fin: Option<DateTime<Utc>>,
    pub priorite_id: Option<i32>,
    pub commanditaire_id: Option<i32>,
    pub destinataire_id: Option<i32>,
    pub projet_id: Option<i32>,
}

/// Field-by-field merge: a field is written only when the incoming value is
/// present and differs from the stored one. An all-null patch leaves the row
/// untouched. PUT delegates to the same logic as PATCH.
pub struct UpdateTacheUseCase<
    T: TacheRepository,
    P: ProjetRepository,
    U: UtilisateurRepository,
    Pr: PrioriteRepository,
> {
    pub taches: T,
    pub projets: P,
    pub utilisateurs: U,
    pub priorites: Pr,
}

impl<T, P, U, Pr> UpdateTacheUseCase<T, P, U, Pr>
where
    T: TacheRepository,
    P: ProjetRepository,
    U: UtilisateurRepository,
    Pr: PrioriteRepository,
{
    pub async fn execute(
        &self,
        input: UpdateTacheInput,
    ) -> Result<TacheDetails, TrackerServiceError> {
        let id = input.id.ok_or(TrackerServiceError::TaskNotFound)?;
        let mut tache = self
            .taches
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::TaskNotFound)?;

        if let Some(commanditaire_id) = input.commanditaire_id {
            if self
                .utilisateurs
                .find_by_id(commanditaire_id)
                .await?
                .is_none()
            {
                return Err(TrackerServiceError::TaskRequestInvalid);
            }
            tache.commanditaire_id = commanditaire_id;
        }
        if let Some(destinataire_id) = input.destinataire_id {
            if self
                .utilisateurs
                .find_by_id(destinataire_id)
                .await?
                .is_none()
            {
                return Err(TrackerServiceError::TaskRequestInvalid);
            }
            tache.destinataire_id = destinataire_id;
        }
        if let Some(projet_id) = input.projet_id {
            if self.projets.find_by_id(projet_id).await?.is_none() {
                return Err(TrackerServiceError::TaskRequestInvalid);
            }
            tache.projet_id = Some(projet_id);
        }

        if let Some(nom) = input.nom {
            if nom != tache.nom {
                tache.nom = nom;
            }
        }
        if let Some(description) = input.description {
            if tache.description.as_deref() != Some(description.as_str()) {
                tache.description = Some(description);
            }
        }
        if let Some(etat) = input.etat {
            if etat != tache.etat {
                tache.etat = etat;
            }
        }
        if let Some(date_debut) = input.date_debut {
            tache.date_debut = date_debut;
        }
        if let Some(date_fin) = input.date_fin {
            tache.date_fin = Some(date_fin);
        }
        if let Some(priorite_id) = input.priorite_id {
            let priorite = resoudre_priorite_ou_defaut(&self.priorites, priorite_id).await?;
            tache.priorite_id = Some(priorite.id);
        }

        self.taches.update(&tache).await?;
        charger_details(tache, &self.utilisateurs, &self.priorites).await
    }
}

// ── DeleteTache ──────────────────────────────────────────────────────────────

pub struct DeleteTacheUseCase<T: TacheRepository> {
    pub taches: T,
}

impl<T: TacheRepository> DeleteTacheUseCase<T> {
    /// Returns whether a row was actually removed.
    pub async fn execute(&self, id: i32) -> Result<bool, TrackerServiceError> {
        if self.taches.find_by_id(id).await?.is_none() {
            return Err(TrackerServiceError::TaskNotFound);
        }
        self.taches.delete(id).await
    }
}
