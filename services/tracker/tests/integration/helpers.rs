use std::sync::{Arc, Mutex};

use pjm_tracker::domain::repository::{
    PrioriteRepository, ProjetRepository, RoleRepository, TacheRepository,
    UserRoleProjetRepository, UtilisateurRepository,
};
use pjm_tracker::domain::types::{
    PRIORITE_FAIBLE, PRIORITE_HAUTE, PRIORITE_MOYENNE, Priorite, Projet, ROLE_ADMINISTRATEUR,
    ROLE_MEMBRE, ROLE_OBSERVATEUR, Role, Tache, UserRoleProjet, Utilisateur,
};
use pjm_tracker::error::TrackerServiceError;

// ── MockUtilisateurRepo ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockUtilisateurRepo {
    pub utilisateurs: Arc<Mutex<Vec<Utilisateur>>>,
    prochain_id: Arc<Mutex<i32>>,
}

impl MockUtilisateurRepo {
    pub fn new(utilisateurs: Vec<Utilisateur>) -> Self {
        Self {
            prochain_id: Arc::new(Mutex::new(
                utilisateurs.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            )),
            utilisateurs: Arc::new(Mutex::new(utilisateurs)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl UtilisateurRepository for MockUtilisateurRepo {
    async fn find_all(&self) -> Result<Vec<Utilisateur>, TrackerServiceError> {
        Ok(self.utilisateurs.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Utilisateur>, TrackerServiceError> {
        Ok(self
            .utilisateurs
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Utilisateur>, TrackerServiceError> {
        Ok(self
            .utilisateurs
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.nom == nom)
            .cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Utilisateur>, TrackerServiceError> {
        Ok(self
            .utilisateurs
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, utilisateur: &Utilisateur) -> Result<i32, TrackerServiceError> {
        let mut prochain = self.prochain_id.lock().unwrap();
        let nouveau = Utilisateur {
            id: *prochain,
            ..utilisateur.clone()
        };
        *prochain += 1;
        let id = nouveau.id;
        self.utilisateurs.lock().unwrap().push(nouveau);
        Ok(id)
    }

    async fn set_etat_connexion(
        &self,
        id: i32,
        connecte: bool,
    ) -> Result<(), TrackerServiceError> {
        let mut liste = self.utilisateurs.lock().unwrap();
        if let Some(u) = liste.iter_mut().find(|u| u.id == id) {
            u.etat_connexion = connecte;
        }
        Ok(())
    }
}

// ── MockProjetRepo ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockProjetRepo {
    pub projets: Arc<Mutex<Vec<Projet>>>,
    /// Rows of the legacy projet↔tache join table: (projet_id, tache_id).
    pub relations: Arc<Mutex<Vec<(i32, i32)>>>,
    prochain_id: Arc<Mutex<i32>>,
}

impl MockProjetRepo {
    pub fn new(projets: Vec<Projet>) -> Self {
        Self {
            prochain_id: Arc::new(Mutex::new(
                projets.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            )),
            projets: Arc::new(Mutex::new(projets)),
            relations: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl ProjetRepository for MockProjetRepo {
    async fn create(&self, projet: &Projet) -> Result<i32, TrackerServiceError> {
        let mut prochain = self.prochain_id.lock().unwrap();
        let nouveau = Projet {
            id: *prochain,
            ..projet.clone()
        };
        *prochain += 1;
        let id = nouveau.id;
        self.projets.lock().unwrap().push(nouveau);
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Projet>, TrackerServiceError> {
        Ok(self
            .projets
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Projet>, TrackerServiceError> {
        Ok(self
            .projets
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.nom == nom)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Projet>, TrackerServiceError> {
        Ok(self.projets.lock().unwrap().clone())
    }

    async fn delete(&self, id: i32) -> Result<(), TrackerServiceError> {
        self.projets.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn delete_projet_tache_relations(
        &self,
        projet_id: i32,
    ) -> Result<u64, TrackerServiceError> {
        let mut relations = self.relations.lock().unwrap();
        let avant = relations.len();
        relations.retain(|(pid, _)| *pid != projet_id);
        Ok((avant - relations.len()) as u64)
    }
}

// ── MockTacheRepo ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockTacheRepo {
    pub taches: Arc<Mutex<Vec<Tache>>>,
    prochain_id: Arc<Mutex<i32>>,
}

impl MockTacheRepo {
    pub fn new(taches: Vec<Tache>) -> Self {
        Self {
            prochain_id: Arc::new(Mutex::new(
                taches.iter().map(|t| t.id).max().unwrap_or(0) + 1,
            )),
            taches: Arc::new(Mutex::new(taches)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl TacheRepository for MockTacheRepo {
    async fn create(&self, tache: &Tache) -> Result<i32, TrackerServiceError> {
        let mut prochain = self.prochain_id.lock().unwrap();
        let nouvelle = Tache {
            id: *prochain,
            ..tache.clone()
        };
        *prochain += 1;
        let id = nouvelle.id;
        self.taches.lock().unwrap().push(nouvelle);
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tache>, TrackerServiceError> {
        Ok(self
            .taches
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Tache>, TrackerServiceError> {
        Ok(self
            .taches
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.nom == nom)
            .cloned())
    }

    async fn find_by_nom_in_projet(
        &self,
        projet_id: i32,
        nom: &str,
    ) -> Result<Option<Tache>, TrackerServiceError> {
        Ok(self
            .taches
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.projet_id == Some(projet_id) && t.nom == nom)
            .cloned())
    }

    async fn find_by_projet_id(
        &self,
        projet_id: i32,
    ) -> Result<Vec<Tache>, TrackerServiceError> {
        Ok(self
            .taches
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.projet_id == Some(projet_id))
            .cloned()
            .collect())
    }

    async fn update(&self, tache: &Tache) -> Result<(), TrackerServiceError> {
        let mut liste = self.taches.lock().unwrap();
        if let Some(existante) = liste.iter_mut().find(|t| t.id == tache.id) {
            *existante = tache.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, TrackerServiceError> {
        let mut liste = self.taches.lock().unwrap();
        let avant = liste.len();
        liste.retain(|t| t.id != id);
        Ok(liste.len() < avant)
    }
}

// ── MockRoleRepo ─────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockRoleRepo {
    pub roles: Arc<Mutex<Vec<Role>>>,
    prochain_id: Arc<Mutex<i32>>,
}

impl MockRoleRepo {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            prochain_id: Arc::new(Mutex::new(
                roles.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            )),
            roles: Arc::new(Mutex::new(roles)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// The three canonical roles, ids 1–3.
    pub fn avec_vocabulaire() -> Self {
        Self::new(vec![
            role(1, ROLE_ADMINISTRATEUR),
            role(2, ROLE_MEMBRE),
            role(3, ROLE_OBSERVATEUR),
        ])
    }
}

impl RoleRepository for MockRoleRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Role>, TrackerServiceError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Role>, TrackerServiceError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.nom == nom)
            .cloned())
    }

    async fn create(&self, role: &Role) -> Result<i32, TrackerServiceError> {
        if let Some(existant) = self.find_by_nom(&role.nom).await? {
            return Ok(existant.id);
        }
        let mut prochain = self.prochain_id.lock().unwrap();
        let nouveau = Role {
            id: *prochain,
            ..role.clone()
        };
        *prochain += 1;
        let id = nouveau.id;
        self.roles.lock().unwrap().push(nouveau);
        Ok(id)
    }
}

// ── MockPrioriteRepo ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockPrioriteRepo {
    pub priorites: Arc<Mutex<Vec<Priorite>>>,
    prochain_id: Arc<Mutex<i32>>,
}

impl MockPrioriteRepo {
    pub fn new(priorites: Vec<Priorite>) -> Self {
        Self {
            prochain_id: Arc::new(Mutex::new(
                priorites.iter().map(|p| p.id).max().unwrap_or(0) + 1,
            )),
            priorites: Arc::new(Mutex::new(priorites)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// The three canonical priorities, ids 1–3.
    pub fn avec_vocabulaire() -> Self {
        Self::new(vec![
            Priorite {
                id: 1,
                nom: PRIORITE_HAUTE.into(),
            },
            Priorite {
                id: 2,
                nom: PRIORITE_MOYENNE.into(),
            },
            Priorite {
                id: 3,
                nom: PRIORITE_FAIBLE.into(),
            },
        ])
    }
}

impl PrioriteRepository for MockPrioriteRepo {
    async fn find_by_id(&self, id: i32) -> Result<Option<Priorite>, TrackerServiceError> {
        Ok(self
            .priorites
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_nom(&self, nom: &str) -> Result<Option<Priorite>, TrackerServiceError> {
        Ok(self
            .priorites
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.nom == nom)
            .cloned())
    }

    async fn create(&self, priorite: &Priorite) -> Result<i32, TrackerServiceError> {
        if let Some(existante) = self.find_by_nom(&priorite.nom).await? {
            return Ok(existante.id);
        }
        let mut prochain = self.prochain_id.lock().unwrap();
        let nouvelle = Priorite {
            id: *prochain,
            ..priorite.clone()
        };
        *prochain += 1;
        let id = nouvelle.id;
        self.priorites.lock().unwrap().push(nouvelle);
        Ok(id)
    }
}

// ── MockAffectationRepo ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockAffectationRepo {
    pub affectations: Arc<Mutex<Vec<UserRoleProjet>>>,
    prochain_id: Arc<Mutex<i64>>,
}

impl MockAffectationRepo {
    pub fn new(affectations: Vec<UserRoleProjet>) -> Self {
        Self {
            prochain_id: Arc::new(Mutex::new(
                affectations.iter().map(|a| a.id).max().unwrap_or(0) + 1,
            )),
            affectations: Arc::new(Mutex::new(affectations)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl UserRoleProjetRepository for MockAffectationRepo {
    async fn create(&self, affectation: &UserRoleProjet) -> Result<i64, TrackerServiceError> {
        let mut prochain = self.prochain_id.lock().unwrap();
        let nouvelle = UserRoleProjet {
            id: *prochain,
            ..affectation.clone()
        };
        *prochain += 1;
        let id = nouvelle.id;
        self.affectations.lock().unwrap().push(nouvelle);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<UserRoleProjet>, TrackerServiceError> {
        Ok(self.affectations.lock().unwrap().clone())
    }

    async fn find_by_projet_id(
        &self,
        projet_id: i32,
    ) -> Result<Vec<UserRoleProjet>, TrackerServiceError> {
        Ok(self
            .affectations
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.projet_id == projet_id)
            .cloned()
            .collect())
    }

    async fn delete_by_projet_id(&self, projet_id: i32) -> Result<u64, TrackerServiceError> {
        let mut liste = self.affectations.lock().unwrap();
        let avant = liste.len();
        liste.retain(|a| a.projet_id != projet_id);
        Ok((avant - liste.len()) as u64)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn role(id: i32, nom: &str) -> Role {
    Role {
        id,
        nom: nom.into(),
        ajouter_membre: nom == ROLE_ADMINISTRATEUR,
        creer_tache: nom != ROLE_OBSERVATEUR,
        assigne_tache: nom == ROLE_ADMINISTRATEUR,
        maj_tache: nom != ROLE_OBSERVATEUR,
        vue_tache: true,
        vue_tableau_de_bord: true,
        etre_notifie: true,
        vue_historique_modifications: true,
    }
}

pub fn utilisateur_connecte(id: i32, nom: &str, email: &str) -> Utilisateur {
    Utilisateur {
        id,
        nom: nom.into(),
        email: email.into(),
        password: nom.into(),
        role_app: ROLE_ADMINISTRATEUR.into(),
        etat_connexion: true,
    }
}

pub fn projet(id: i32, nom: &str, createur_id: i32) -> Projet {
    Projet {
        id,
        nom: nom.into(),
        description: format!("projet {nom}"),
        date_echeance: None,
        date_creation: chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        createur_id,
    }
}

pub fn tache(id: i32, nom: &str, projet_id: i32, utilisateur_id: i32) -> Tache {
    Tache {
        id,
        nom: nom.into(),
        description: Some(format!("tâche {nom}")),
        etat: "TODO".into(),
        date_debut: chrono::Utc::now(),
        date_fin: None,
        priorite_id: None,
        commanditaire_id: utilisateur_id,
        destinataire_id: utilisateur_id,
        projet_id: Some(projet_id),
    }
}
