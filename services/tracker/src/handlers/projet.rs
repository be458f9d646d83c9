use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use pjm_core::response::ApiResponse;

use crate::domain::repository::UtilisateurRepository as _;
use crate::dto::{MembreProjetDto, ProjetDto, ProjetSummaryDto, UtilisateurProjetRoleDto};
use crate::error::TrackerServiceError;
use crate::state::AppState;
use crate::usecase::projet::{
    CreateProjetInput, CreateProjetUseCase, DeleteProjetUseCase, GetProjetUseCase,
    ListMembresProjetUseCase, ListProjetsUseCase,
};

// ── POST /api/projet/create ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProjetRequest {
    pub nom: String,
    pub description: Option<String>,
    /// Legacy field: creator referenced by name.
    pub createur: Option<String>,
    pub createur_id: Option<i32>,
    pub date_echeance: Option<NaiveDate>,
}

pub async fn create_projet(
    State(state): State<AppState>,
    Json(body): Json<CreateProjetRequest>,
) -> Result<Json<ApiResponse<UtilisateurProjetRoleDto>>, TrackerServiceError> {
    // Name-based creator references are an input adaptation only; storage
    // works with ids.
    let createur_id = match (body.createur_id, body.createur) {
        (Some(id), _) => id,
        (None, Some(nom)) => {
            state
                .utilisateur_repo()
                .find_by_nom(&nom)
                .await?
                .ok_or(TrackerServiceError::UnknownUser)?
                .id
        }
        (None, None) => return Err(TrackerServiceError::UnknownUser),
    };

    let usecase = CreateProjetUseCase {
        utilisateurs: state.utilisateur_repo(),
        projets: state.projet_repo(),
        roles: state.role_repo(),
        affectations: state.affectation_repo(),
    };
    let (utilisateur, role, projet) = usecase
        .execute(CreateProjetInput {
            nom: body.nom,
            description: body.description.unwrap_or_default(),
            date_echeance: body.date_echeance,
            createur_id,
        })
        .await?;

    let dto = UtilisateurProjetRoleDto {
        projet: ProjetDto::new(&projet, &utilisateur),
        role: (&role).into(),
        utilisateur: (&utilisateur).into(),
    };
    Ok(Json(ApiResponse::ok("Un projet a été créé", dto)))
}

// ── GET /api/projet/id/{id} ──────────────────────────────────────────────────

pub async fn get_projet_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ProjetDto>>, TrackerServiceError> {
    let usecase = GetProjetUseCase {
        projets: state.projet_repo(),
        utilisateurs: state.utilisateur_repo(),
    };
    let (projet, createur) = usecase.execute(id).await?;
    Ok(Json(ApiResponse::ok(
        "Projet a été trouvé",
        ProjetDto::new(&projet, &createur),
    )))
}

// ── GET /api/projet/nom/{nom} ────────────────────────────────────────────────

pub async fn get_projet_by_nom(
    State(state): State<AppState>,
    Path(nom): Path<String>,
) -> Result<Json<ApiResponse<ProjetDto>>, TrackerServiceError> {
    let usecase = GetProjetUseCase {
        projets: state.projet_repo(),
        utilisateurs: state.utilisateur_repo(),
    };
    let (projet, createur) = usecase.execute_par_nom(&nom).await?;
    Ok(Json(ApiResponse::ok(
        "Projet a été trouvé",
        ProjetDto::new(&projet, &createur),
    )))
}

// ── GET /api/projet/users-roled/{id} ─────────────────────────────────────────

pub async fn get_membres_projet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<MembreProjetDto>>>, TrackerServiceError> {
    let usecase = ListMembresProjetUseCase {
        projets: state.projet_repo(),
        affectations: state.affectation_repo(),
        utilisateurs: state.utilisateur_repo(),
        roles: state.role_repo(),
    };
    let (projet, membres) = usecase.execute(id).await?;
    let dtos = membres
        .iter()
        .map(|(affectation, utilisateur, role)| {
            MembreProjetDto::new(affectation, utilisateur, role, &projet)
        })
        .collect();
    Ok(Json(ApiResponse::ok("User Roled Projet Trouvé", dtos)))
}

// ── DELETE /api/projet/delete/{id} ───────────────────────────────────────────

pub async fn delete_projet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<serde_json::Value>>, TrackerServiceError> {
    let usecase = DeleteProjetUseCase {
        projets: state.projet_repo(),
        taches: state.tache_repo(),
        affectations: state.affectation_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(ApiResponse::ok_empty(
        "Projet, ses tâches et ses relations ont été supprimés",
    )))
}

// ── GET /api/projet/all ──────────────────────────────────────────────────────

pub async fn get_all_projets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProjetSummaryDto>>>, TrackerServiceError> {
    let usecase = ListProjetsUseCase {
        projets: state.projet_repo(),
    };
    let projets = usecase.execute().await?;
    let dtos = projets.iter().map(Into::into).collect();
    Ok(Json(ApiResponse::ok("Liste des projets", dtos)))
}
