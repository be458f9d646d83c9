use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbPrioriteRepository, DbProjetRepository, DbRoleRepository, DbTacheRepository,
    DbUserRoleProjetRepository, DbUtilisateurRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn utilisateur_repo(&self) -> DbUtilisateurRepository {
        DbUtilisateurRepository {
            db: self.db.clone(),
        }
    }

    pub fn projet_repo(&self) -> DbProjetRepository {
        DbProjetRepository {
            db: self.db.clone(),
        }
    }

    pub fn tache_repo(&self) -> DbTacheRepository {
        DbTacheRepository {
            db: self.db.clone(),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn priorite_repo(&self) -> DbPrioriteRepository {
        DbPrioriteRepository {
            db: self.db.clone(),
        }
    }

    pub fn affectation_repo(&self) -> DbUserRoleProjetRepository {
        DbUserRoleProjetRepository {
            db: self.db.clone(),
        }
    }
}
