//! Response DTOs. Entity graphs are flattened one level deep here; raw
//! persistent entities with back-references are never serialized directly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::types::{Priorite, Projet, Role, Tache, UserRoleProjet, Utilisateur};

/// Public view of a user. Excludes the password.
#[derive(Debug, Clone, Serialize)]
pub struct UtilisateurDto {
    pub id: i32,
    pub nom: String,
    pub email: String,
    pub role_app: String,
    pub etat_connexion: bool,
}

impl From<&Utilisateur> for UtilisateurDto {
    fn from(u: &Utilisateur) -> Self {
        Self {
            id: u.id,
            nom: u.nom.clone(),
            email: u.email.clone(),
            role_app: u.role_app.clone(),
            etat_connexion: u.etat_connexion,
        }
    }
}

/// Minimal user reference embedded in other DTOs.
#[derive(Debug, Clone, Serialize)]
pub struct UtilisateurLightDto {
    pub id: i32,
    pub nom: String,
}

impl From<&Utilisateur> for UtilisateurLightDto {
    fn from(u: &Utilisateur) -> Self {
        Self {
            id: u.id,
            nom: u.nom.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleDto {
    pub id: i32,
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

impl From<&Role> for RoleDto {
    fn from(r: &Role) -> Self {
        Self {
            id: r.id,
            nom: r.nom.clone(),
            ajouter_membre: r.ajouter_membre,
            creer_tache: r.creer_tache,
            assigne_tache: r.assigne_tache,
            maj_tache: r.maj_tache,
            vue_tache: r.vue_tache,
            vue_tableau_de_bord: r.vue_tableau_de_bord,
            etre_notifie: r.etre_notifie,
            vue_historique_modifications: r.vue_historique_modifications,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PrioriteDto {
    pub id: i32,
    pub nom: String,
}

impl From<&Priorite> for PrioriteDto {
    fn from(p: &Priorite) -> Self {
        Self {
            id: p.id,
            nom: p.nom.clone(),
        }
    }
}

/// Project summary used by the list endpoint and conflict payloads.
#[derive(Debug, Clone, Serialize)]
pub struct ProjetSummaryDto {
    pub id: i32,
    pub nom: String,
    pub description: String,
    pub date_echeance: Option<NaiveDate>,
    pub date_creation: NaiveDate,
}

impl From<&Projet> for ProjetSummaryDto {
    fn from(p: &Projet) -> Self {
        Self {
            id: p.id,
            nom: p.nom.clone(),
            description: p.description.clone(),
            date_echeance: p.date_echeance,
            date_creation: p.date_creation,
        }
    }
}

/// Full project view with its creator flattened one level.
#[derive(Debug, Clone, Serialize)]
pub struct ProjetDto {
    pub id: i32,
    pub nom: String,
    pub description: String,
    pub date_echeance: Option<NaiveDate>,
    pub date_creation: NaiveDate,
    pub createur: UtilisateurLightDto,
}

impl ProjetDto {
    pub fn new(projet: &Projet, createur: &Utilisateur) -> Self {
        Self {
            id: projet.id,
            nom: projet.nom.clone(),
            description: projet.description.clone(),
            date_echeance: projet.date_echeance,
            date_creation: projet.date_creation,
            createur: createur.into(),
        }
    }
}

/// Full task view with both user references and the priority flattened.
#[derive(Debug, Clone, Serialize)]
pub struct TacheDto {
    pub id: i32,
    pub nom: String,
    pub description: Option<String>,
    pub etat: String,
    #[serde(serialize_with = "pjm_core::serde::to_rfc3339_ms")]
    pub date_debut: DateTime<Utc>,
    #[serde(serialize_with = "pjm_core::serde::to_rfc3339_ms_opt")]
    pub date_fin: Option<DateTime<Utc>>,
    pub priorite: Option<PrioriteDto>,
    pub commanditaire: UtilisateurLightDto,
    pub destinataire: UtilisateurLightDto,
    pub projet_id: Option<i32>,
}

impl TacheDto {
    pub fn new(
        tache: &Tache,
        commanditaire: &Utilisateur,
        destinataire: &Utilisateur,
        priorite: Option<&Priorite>,
    ) -> Self {
        Self {
            id: tache.id,
            nom: tache.nom.clone(),
            description: tache.description.clone(),
            etat: tache.etat.clone(),
            date_debut: tache.date_debut,
            date_fin: tache.date_fin,
            priorite: priorite.map(Into::into),
            commanditaire: commanditaire.into(),
            destinataire: destinataire.into(),
            projet_id: tache.projet_id,
        }
    }
}

/// One membership row of a project, user and role flattened.
#[derive(Debug, Clone, Serialize)]
pub struct MembreProjetDto {
    pub id: i64,
    pub utilisateur: UtilisateurLightDto,
    pub role: RoleDto,
    pub projet: ProjetSummaryDto,
}

impl MembreProjetDto {
    pub fn new(
        affectation: &UserRoleProjet,
        utilisateur: &Utilisateur,
        role: &Role,
        projet: &Projet,
    ) -> Self {
        Self {
            id: affectation.id,
            utilisateur: utilisateur.into(),
            role: role.into(),
            projet: projet.into(),
        }
    }
}

/// Response of project creation: creator, admin role, and the new project.
#[derive(Debug, Clone, Serialize)]
pub struct UtilisateurProjetRoleDto {
    pub utilisateur: UtilisateurDto,
    pub role: RoleDto,
    pub projet: ProjetDto,
}
