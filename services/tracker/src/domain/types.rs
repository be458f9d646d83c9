use chrono::{DateTime, NaiveDate, Utc};

/// Canonical role names. Closed vocabulary, seeded at startup.
pub const ROLE_ADMINISTRATEUR: &str = "ADMINISTRATEUR";
pub const ROLE_MEMBRE: &str = "MEMBRE";
pub const ROLE_OBSERVATEUR: &str = "OBSERVATEUR";

/// Canonical priority names. Closed vocabulary, seeded at startup.
pub const PRIORITE_HAUTE: &str = "HAUTE";
pub const PRIORITE_MOYENNE: &str = "MOYENNE";
pub const PRIORITE_FAIBLE: &str = "FAIBLE";

/// Default task state and default priority applied when the caller's
/// priority reference does not resolve.
pub const ETAT_TODO: &str = "TODO";
pub const PRIORITE_DEFAUT: &str = PRIORITE_MOYENNE;

/// Application user. `etat_connexion` is the flag login/logout flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utilisateur {
    pub id: i32,
    pub nom: String,
    pub email: String,
    pub password: String,
    pub role_app: String,
    pub etat_connexion: bool,
}

/// Project, owned by its creator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projet {
    pub id: i32,
    pub nom: String,
    pub description: String,
    pub date_echeance: Option<NaiveDate>,
    pub date_creation: NaiveDate,
    pub createur_id: i32,
}

/// Task. `commanditaire` requested it, `destinataire` executes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tache {
    pub id: i32,
    pub nom: String,
    pub description: Option<String>,
    pub etat: String,
    pub date_debut: DateTime<Utc>,
    pub date_fin: Option<DateTime<Utc>>,
    pub priorite_id: Option<i32>,
    pub commanditaire_id: i32,
    pub destinataire_id: i32,
    pub projet_id: Option<i32>,
}

/// Project role and its capability flags. Immutable after seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
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

/// Task priority. Immutable after seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Priorite {
    pub id: i32,
    pub nom: String,
}

/// Join record: this user holds this role within this project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRoleProjet {
    pub id: i64,
    pub utilisateur_id: i32,
    pub projet_id: i32,
    pub role_id: i32,
}

/// Normalize a requested task state: empty or absent collapses to `TODO`.
pub fn etat_ou_defaut(etat: Option<&str>) -> String {
    match etat {
        Some(e) if !e.is_empty() => e.to_owned(),
        _ => ETAT_TODO.to_owned(),
    }
}
