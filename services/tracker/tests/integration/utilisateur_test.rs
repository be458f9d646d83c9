use pjm_tracker::domain::types::{ROLE_ADMINISTRATEUR, ROLE_MEMBRE};
use pjm_tracker::error::TrackerServiceError;
use pjm_tracker::usecase::seed::SeedReferenceDataUseCase;
use pjm_tracker::usecase::utilisateur::{
    CreateUtilisateurInput, CreateUtilisateurUseCase, GetUtilisateurUseCase, LoginInput,
    LoginUseCase,
};

use crate::helpers::{MockPrioriteRepo, MockRoleRepo, MockUtilisateurRepo, utilisateur_connecte};

fn create_input(nom: &str, email: &str) -> CreateUtilisateurInput {
    CreateUtilisateurInput {
        nom: Some(nom.into()),
        email: Some(email.into()),
        password: Some("secret".into()),
        role_app: None,
    }
}

#[tokio::test]
async fn should_create_user_idempotently_by_name() {
    let usecase = CreateUtilisateurUseCase {
        utilisateurs: MockUtilisateurRepo::empty(),
        roles: MockRoleRepo::avec_vocabulaire(),
    };

    let premier = usecase
        .execute(create_input("bob", "bob@x.fr"))
        .await
        .unwrap();
    let second = usecase
        .execute(create_input("bob", "bob.autre@x.fr"))
        .await
        .unwrap();

    assert_eq!(premier, second);
    assert_eq!(usecase.utilisateurs.utilisateurs.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_default_role_app_to_membre() {
    let usecase = CreateUtilisateurUseCase {
        utilisateurs: MockUtilisateurRepo::empty(),
        roles: MockRoleRepo::avec_vocabulaire(),
    };
    let id = usecase
        .execute(create_input("claire", "claire@x.fr"))
        .await
        .unwrap();

    let lookup = GetUtilisateurUseCase {
        utilisateurs: usecase.utilisateurs.clone(),
    };
    let claire = lookup.execute(id).await.unwrap();
    assert_eq!(claire.role_app, ROLE_MEMBRE);
    assert!(!claire.etat_connexion);
}

#[tokio::test]
async fn should_fail_with_500_semantics_when_membre_role_is_absent() {
    let usecase = CreateUtilisateurUseCase {
        utilisateurs: MockUtilisateurRepo::empty(),
        roles: MockRoleRepo::empty(),
    };
    let result = usecase.execute(create_input("dora", "dora@x.fr")).await;
    assert!(matches!(
        result,
        Err(TrackerServiceError::DefaultRoleMissing)
    ));
}

#[tokio::test]
async fn should_reject_login_for_unknown_email() {
    let usecase = LoginUseCase {
        utilisateurs: MockUtilisateurRepo::empty(),
    };
    let result = usecase
        .execute(LoginInput {
            email: Some("fantome@x.fr".into()),
            password: Some("peu importe".into()),
        })
        .await;
    assert!(matches!(result, Err(TrackerServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_reject_login_without_credentials() {
    let usecase = LoginUseCase {
        utilisateurs: MockUtilisateurRepo::new(vec![utilisateur_connecte(
            1,
            "arthur",
            "arthur@gmail.com",
        )]),
    };
    let result = usecase
        .execute(LoginInput {
            email: Some("arthur@gmail.com".into()),
            password: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(TrackerServiceError::MissingCredentials)
    ));
}

#[tokio::test]
async fn should_seed_reference_data_idempotently() {
    let seed = SeedReferenceDataUseCase {
        roles: MockRoleRepo::empty(),
        priorites: MockPrioriteRepo::empty(),
        utilisateurs: MockUtilisateurRepo::empty(),
    };

    seed.execute().await.unwrap();
    seed.execute().await.unwrap();

    assert_eq!(seed.roles.roles.lock().unwrap().len(), 3);
    assert_eq!(seed.priorites.priorites.lock().unwrap().len(), 3);

    let utilisateurs = seed.utilisateurs.utilisateurs.lock().unwrap();
    assert_eq!(utilisateurs.len(), 1);
    assert_eq!(utilisateurs[0].nom, "arthur");
    assert_eq!(utilisateurs[0].role_app, ROLE_ADMINISTRATEUR);
    assert!(utilisateurs[0].etat_connexion);
}

#[tokio::test]
async fn should_seed_role_capability_matrix() {
    let seed = SeedReferenceDataUseCase {
        roles: MockRoleRepo::empty(),
        priorites: MockPrioriteRepo::empty(),
        utilisateurs: MockUtilisateurRepo::empty(),
    };
    seed.execute().await.unwrap();

    let roles = seed.roles.roles.lock().unwrap();
    let admin = roles.iter().find(|r| r.nom == "ADMINISTRATEUR").unwrap();
    assert!(admin.ajouter_membre && admin.assigne_tache);

    let membre = roles.iter().find(|r| r.nom == "MEMBRE").unwrap();
    assert!(!membre.ajouter_membre && !membre.assigne_tache);
    assert!(membre.creer_tache && membre.maj_tache);

    let observateur = roles.iter().find(|r| r.nom == "OBSERVATEUR").unwrap();
    assert!(!observateur.creer_tache && !observateur.maj_tache);
    assert!(observateur.vue_tache && observateur.vue_tableau_de_bord);
}
