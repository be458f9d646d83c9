use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use pjm_core::response::ApiResponse;

use crate::dto::{MembreProjetDto, UtilisateurDto};
use crate::error::TrackerServiceError;
use crate::state::AppState;
use crate::usecase::membership::{AddUtilisateurAuProjetInput, AddUtilisateurAuProjetUseCase};
use crate::usecase::utilisateur::{
    CreateUtilisateurInput, CreateUtilisateurUseCase, GetUtilisateurUseCase, ListUtilisateursUseCase,
    LoginInput, LoginUseCase, LogoutUseCase,
};

// ── GET /api/utilisateur/ ────────────────────────────────────────────────────

pub async fn get_all_utilisateurs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UtilisateurDto>>>, TrackerServiceError> {
    let usecase = ListUtilisateursUseCase {
        utilisateurs: state.utilisateur_repo(),
    };
    let utilisateurs = usecase.execute().await?;
    let dtos = utilisateurs.iter().map(Into::into).collect();
    Ok(Json(ApiResponse::ok("Liste des utilisateurs", dtos)))
}

// ── GET /api/utilisateur/{id} ────────────────────────────────────────────────

pub async fn get_utilisateur_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<UtilisateurDto>>, TrackerServiceError> {
    let usecase = GetUtilisateurUseCase {
        utilisateurs: state.utilisateur_repo(),
    };
    let utilisateur = usecase.execute(id).await?;
    Ok(Json(ApiResponse::ok(
        "Utilisateur trouvé",
        UtilisateurDto::from(&utilisateur),
    )))
}

// ── GET /api/utilisateur/nom?nom= ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UtilisateurParNomQuery {
    pub nom: Option<String>,
}

pub async fn get_utilisateur_by_nom(
    State(state): State<AppState>,
    Query(query): Query<UtilisateurParNomQuery>,
) -> Result<Json<ApiResponse<UtilisateurDto>>, TrackerServiceError> {
    let nom = query.nom.ok_or(TrackerServiceError::UserNotFound)?;
    let usecase = GetUtilisateurUseCase {
        utilisateurs: state.utilisateur_repo(),
    };
    let utilisateur = usecase.execute_par_nom(&nom).await?;
    Ok(Json(ApiResponse::ok(
        "Utilisateur trouvé",
        UtilisateurDto::from(&utilisateur),
    )))
}

// ── POST /api/utilisateur/create ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUtilisateurRequest {
    pub nom: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role_app: Option<String>,
}

pub async fn create_utilisateur(
    State(state): State<AppState>,
    Json(body): Json<CreateUtilisateurRequest>,
) -> Result<Json<ApiResponse<i32>>, TrackerServiceError> {
    let usecase = CreateUtilisateurUseCase {
        utilisateurs: state.utilisateur_repo(),
        roles: state.role_repo(),
    };
    let id = usecase
        .execute(CreateUtilisateurInput {
            nom: body.nom,
            email: body.email,
            password: body.password,
            role_app: body.role_app,
        })
        .await?;
    Ok(Json(ApiResponse::ok("Utilisateur créé", id)))
}

// ── POST /api/utilisateur/add-user-to-project?id={projetId} ──────────────────

#[derive(Deserialize)]
pub struct AddUtilisateurQuery {
    pub id: i32,
}

#[derive(Deserialize)]
pub struct AddUtilisateurRequest {
    pub nom: Option<String>,
    pub role_app: Option<String>,
}

pub async fn add_utilisateur_au_projet(
    State(state): State<AppState>,
    Query(query): Query<AddUtilisateurQuery>,
    Json(body): Json<AddUtilisateurRequest>,
) -> Result<Json<ApiResponse<MembreProjetDto>>, TrackerServiceError> {
    let usecase = AddUtilisateurAuProjetUseCase {
        projets: state.projet_repo(),
        utilisateurs: state.utilisateur_repo(),
        roles: state.role_repo(),
        affectations: state.affectation_repo(),
    };
    let (affectation, utilisateur, role, projet) = usecase
        .execute(AddUtilisateurAuProjetInput {
            projet_id: query.id,
            nom_utilisateur: body.nom,
            role_app: body.role_app,
        })
        .await?;
    Ok(Json(ApiResponse::ok(
        "Utilisateur Roled bien ajouté au projet",
        MembreProjetDto::new(&affectation, &utilisateur, &role, &projet),
    )))
}

// ── PATCH /api/utilisateur/login ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<ApiResponse<UtilisateurDto>>, TrackerServiceError> {
    let usecase = LoginUseCase {
        utilisateurs: state.utilisateur_repo(),
    };
    let utilisateur = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(ApiResponse::ok(
        "Utilisateur bien connecté",
        UtilisateurDto::from(&utilisateur),
    )))
}

// ── PATCH /api/utilisateur/logout ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LogoutRequest {
    pub email: Option<String>,
}

pub async fn logout(
    State(state): State<AppState>,
    Json(body): Json<LogoutRequest>,
) -> Result<Json<ApiResponse<UtilisateurDto>>, TrackerServiceError> {
    let usecase = LogoutUseCase {
        utilisateurs: state.utilisateur_repo(),
    };
    let utilisateur = usecase.execute(body.email).await?;
    Ok(Json(ApiResponse::ok(
        "Utilisateur bien déconnecté",
        UtilisateurDto::from(&utilisateur),
    )))
}
