use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use pjm_core::response::ApiResponse;

use crate::dto::{ProjetSummaryDto, UtilisateurDto};

/// Tracker service error variants. Every failure the API can surface rides
/// one of these; `IntoResponse` picks the status and wraps the envelope.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error("Nom et email sont obligatoires")]
    MissingFields,
    #[error("Le rôle spécifié n'existe pas")]
    UnknownRole,
    #[error("Le rôle 'MEMBRE' est introuvable")]
    DefaultRoleMissing,
    #[error("Utilisateur non trouvé")]
    UserNotFound,
    #[error("Utilisateur n'est pas connu ou le nom n'est pas le bon")]
    UnknownUser,
    #[error("Utilisateur n'est pas identifié")]
    UserNotConnected,
    #[error("Projet n'existe pas")]
    ProjectNotFound,
    #[error("Le projet existe déjà")]
    ProjectAlreadyExists(Box<ProjetSummaryDto>),
    #[error("Tache non reconnu ou n'existe pas")]
    TaskNotFound,
    #[error("Requette de Tache erronée ou existe deja")]
    TaskRequestInvalid,
    #[error("email & password manquant")]
    MissingCredentials,
    #[error("Hello {0}, votre mot de passe n'est pas bon")]
    WrongPassword(String),
    #[error("Déconnexion échouée, utilisateur déjà déconnecté")]
    AlreadyDisconnected(Box<UtilisateurDto>),
    #[error("Utilisateur ou projet non trouvé")]
    MembershipTargetNotFound,
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl TrackerServiceError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields
            | Self::UnknownRole
            | Self::UnknownUser
            | Self::UserNotConnected
            | Self::ProjectNotFound
            | Self::ProjectAlreadyExists(_)
            | Self::TaskNotFound
            | Self::TaskRequestInvalid
            | Self::MissingCredentials => StatusCode::BAD_REQUEST,
            Self::UserNotFound | Self::MembershipTargetNotFound => StatusCode::NOT_FOUND,
            Self::WrongPassword(_) => StatusCode::UNAUTHORIZED,
            Self::AlreadyDisconnected(_) => StatusCode::NOT_MODIFIED,
            Self::DefaultRoleMissing | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TrackerServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are expected client outcomes; only 500s get logged here.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        // The underlying cause is exposed in the message; existing clients
        // parse it. `{:#}` keeps the context chain.
        let message = match &self {
            Self::Internal(e) => format!("{e:#}"),
            other => other.to_string(),
        };
        let data = match &self {
            Self::ProjectAlreadyExists(projet) => Some(json!(projet)),
            Self::AlreadyDisconnected(utilisateur) => Some(json!(utilisateur)),
            _ => None,
        };
        let body = ApiResponse::<serde_json::Value>::err(message, data);
        (status, axum::Json(body)).into_response()
    }
}
