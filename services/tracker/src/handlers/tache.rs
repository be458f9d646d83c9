use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use pjm_core::response::ApiResponse;

use crate::dto::TacheDto;
use crate::error::TrackerServiceError;
use crate::state::AppState;
use crate::usecase::tache::{
    CreateTacheInput, CreateTacheUseCase, DeleteTacheUseCase, GetTacheUseCase, TacheDetails,
    UpdateTacheInput, UpdateTacheUseCase,
};

/// Request body shared by create and update: every field optional, the merge
/// semantics decide what applies.
#[derive(Deserialize)]
pub struct TacheRequest {
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

fn to_dto(details: &TacheDetails) -> TacheDto {
    TacheDto::new(
        &details.tache,
        &details.commanditaire,
        &details.destinataire,
        details.priorite.as_ref(),
    )
}

// ── POST /api/tache/create ───────────────────────────────────────────────────

pub async fn create_tache(
    State(state): State<AppState>,
    Json(body): Json<TacheRequest>,
) -> Result<Json<ApiResponse<TacheDto>>, TrackerServiceError> {
    let usecase = CreateTacheUseCase {
        taches: state.tache_repo(),
        projets: state.projet_repo(),
        utilisateurs: state.utilisateur_repo(),
        priorites: state.priorite_repo(),
    };
    let details = usecase
        .execute(CreateTacheInput {
            nom: body.nom,
            description: body.description,
            etat: body.etat,
            date_debut: body.date_debut,
            date_fin: body.date_fin,
            priorite_id: body.priorite_id,
            commanditaire_id: body.commanditaire_id,
            destinataire_id: body.destinataire_id,
            projet_id: body.projet_id,
        })
        .await?;
    Ok(Json(ApiResponse::ok(
        "Tache bien créé dans un projet",
        to_dto(&details),
    )))
}

// ── GET /api/tache/tache?nom= ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct TacheParNomQuery {
    pub nom: Option<String>,
}

pub async fn get_tache_by_nom(
    State(state): State<AppState>,
    Query(query): Query<TacheParNomQuery>,
) -> Result<Json<ApiResponse<TacheDto>>, TrackerServiceError> {
    let nom = query.nom.ok_or(TrackerServiceError::TaskNotFound)?;
    let usecase = GetTacheUseCase {
        taches: state.tache_repo(),
        utilisateurs: state.utilisateur_repo(),
        priorites: state.priorite_repo(),
    };
    let details = usecase.execute_par_nom(&nom).await?;
    Ok(Json(ApiResponse::ok(
        "Tache bien trouvé dans un projet",
        to_dto(&details),
    )))
}

// ── GET /api/tache/id/{id} ───────────────────────────────────────────────────

pub async fn get_tache_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TacheDto>>, TrackerServiceError> {
    let usecase = GetTacheUseCase {
        taches: state.tache_repo(),
        utilisateurs: state.utilisateur_repo(),
        priorites: state.priorite_repo(),
    };
    let details = usecase.execute(id).await?;
    Ok(Json(ApiResponse::ok(
        "Tache bien trouvé dans un projet",
        to_dto(&details),
    )))
}

// ── GET /api/tache/project/{id} ──────────────────────────────────────────────

pub async fn get_taches_by_projet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<TacheDto>>>, TrackerServiceError> {
    let usecase = GetTacheUseCase {
        taches: state.tache_repo(),
        utilisateurs: state.utilisateur_repo(),
        priorites: state.priorite_repo(),
    };
    let details = usecase.execute_par_projet(id).await?;
    let dtos = details.iter().map(to_dto).collect();
    Ok(Json(ApiResponse::ok("Tâches du projet", dtos)))
}

// ── PATCH /api/tache/update (PUT is an alias) ────────────────────────────────

pub async fn update_tache(
    State(state): State<AppState>,
    Json(body): Json<TacheRequest>,
) -> Result<Json<ApiResponse<TacheDto>>, TrackerServiceError> {
    let usecase = UpdateTacheUseCase {
        taches: state.tache_repo(),
        projets: state.projet_repo(),
        utilisateurs: state.utilisateur_repo(),
        priorites: state.priorite_repo(),
    };
    let details = usecase
        .execute(UpdateTacheInput {
            id: body.id,
            nom: body.nom,
            description: body.description,
            etat: body.etat,
            date_debut: body.date_debut,
            date_fin: body.date_fin,
            priorite_id: body.priorite_id,
            commanditaire_id: body.commanditaire_id,
            destinataire_id: body.destinataire_id,
            projet_id: body.projet_id,
        })
        .await?;
    Ok(Json(ApiResponse::ok(
        "Tache bien mise à jour",
        to_dto(&details),
    )))
}

// ── DELETE /api/tache/delete/{id} ────────────────────────────────────────────

pub async fn delete_tache(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<bool>>, TrackerServiceError> {
    let usecase = DeleteTacheUseCase {
        taches: state.tache_repo(),
    };
    let supprimee = usecase.execute(id).await?;
    Ok(Json(ApiResponse::ok("Tache a été supprimée", supprimee)))
}
