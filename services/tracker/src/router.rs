use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use pjm_core::health::{healthz, readyz};
use pjm_core::middleware::request_id_layer;

use crate::handlers::{
    projet::{
        create_projet, delete_projet, get_all_projets, get_membres_projet, get_projet_by_id,
        get_projet_by_nom,
    },
    tache::{
        create_tache, delete_tache, get_tache_by_id, get_tache_by_nom, get_taches_by_projet,
        update_tache,
    },
    utilisateur::{
        add_utilisateur_au_projet, create_utilisateur, get_all_utilisateurs,
        get_utilisateur_by_id, get_utilisateur_by_nom, login, logout,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Projets
        .route("/api/projet/create", post(create_projet))
        .route("/api/projet/id/{id}", get(get_projet_by_id))
        .route("/api/projet/nom/{nom}", get(get_projet_by_nom))
        .route("/api/projet/users-roled/{id}", get(get_membres_projet))
        .route("/api/projet/delete/{id}", delete(delete_projet))
        .route("/api/projet/all", get(get_all_projets))
        // Taches
        .route("/api/tache/create", post(create_tache))
        .route("/api/tache/tache", get(get_tache_by_nom))
        .route("/api/tache/id/{id}", get(get_tache_by_id))
        .route("/api/tache/project/{id}", get(get_taches_by_projet))
        // PUT is an alias of PATCH, not a full replacement.
        .route("/api/tache/update", patch(update_tache).put(update_tache))
        .route("/api/tache/delete/{id}", delete(delete_tache))
        // Utilisateurs
        .route("/api/utilisateur/", get(get_all_utilisateurs))
        .route("/api/utilisateur/nom", get(get_utilisateur_by_nom))
        .route("/api/utilisateur/{id}", get(get_utilisateur_by_id))
        .route("/api/utilisateur/create", post(create_utilisateur))
        .route(
            "/api/utilisateur/add-user-to-project",
            post(add_utilisateur_au_projet),
        )
        .route("/api/utilisateur/login", patch(login))
        .route("/api/utilisateur/logout", patch(logout))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
