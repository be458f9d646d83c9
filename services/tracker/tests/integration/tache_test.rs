use pjm_tracker::domain::types::PRIORITE_MOYENNE;
use pjm_tracker::error::TrackerServiceError;
use pjm_tracker::usecase::tache::{
    CreateTacheInput, CreateTacheUseCase, DeleteTacheUseCase, UpdateTacheInput, UpdateTacheUseCase,
};

use crate::helpers::{
    MockPrioriteRepo, MockProjetRepo, MockTacheRepo, MockUtilisateurRepo, projet, tache,
    utilisateur_connecte,
};

fn create_usecase(
    taches: MockTacheRepo,
) -> CreateTacheUseCase<MockTacheRepo, MockProjetRepo, MockUtilisateurRepo, MockPrioriteRepo> {
    CreateTacheUseCase {
        taches,
        projets: MockProjetRepo::new(vec![projet(1, "Launch", 1), projet(2, "Autre", 1)]),
        utilisateurs: MockUtilisateurRepo::new(vec![
            utilisateur_connecte(1, "arthur", "arthur@gmail.com"),
            utilisateur_connecte(2, "claire", "claire@x.fr"),
        ]),
        priorites: MockPrioriteRepo::avec_vocabulaire(),
    }
}

fn update_usecase(
    taches: MockTacheRepo,
) -> UpdateTacheUseCase<MockTacheRepo, MockProjetRepo, MockUtilisateurRepo, MockPrioriteRepo> {
    UpdateTacheUseCase {
        taches,
        projets: MockProjetRepo::new(vec![projet(1, "Launch", 1), projet(2, "Autre", 1)]),
        utilisateurs: MockUtilisateurRepo::new(vec![
            utilisateur_connecte(1, "arthur", "arthur@gmail.com"),
            utilisateur_connecte(2, "claire", "claire@x.fr"),
        ]),
        priorites: MockPrioriteRepo::avec_vocabulaire(),
    }
}

fn minimal_input(nom: &str, projet_id: i32) -> CreateTacheInput {
    CreateTacheInput {
        nom: Some(nom.into()),
        commanditaire_id: Some(1),
        destinataire_id: Some(2),
        projet_id: Some(projet_id),
        ..Default::default()
    }
}

#[tokio::test]
async fn should_default_etat_and_date_debut_on_creation() {
    let avant = chrono::Utc::now();
    let usecase = create_usecase(MockTacheRepo::empty());
    let details = usecase
        .execute(minimal_input("Design doc", 1))
        .await
        .unwrap();

    assert_eq!(details.tache.etat, "TODO");
    assert!(details.tache.date_debut >= avant);
    assert!(details.tache.date_fin.is_none());
    assert!(details.priorite.is_none());
    assert_eq!(details.commanditaire.nom, "arthur");
    assert_eq!(details.destinataire.nom, "claire");
}

#[tokio::test]
async fn should_fall_back_to_default_priority_for_unknown_priority_id() {
    let usecase = create_usecase(MockTacheRepo::empty());
    let details = usecase
        .execute(CreateTacheInput {
            priorite_id: Some(999),
            ..minimal_input("Design doc", 1)
        })
        .await
        .unwrap();

    let priorite = details.priorite.unwrap();
    assert_eq!(priorite.nom, PRIORITE_MOYENNE);
    assert_eq!(details.tache.priorite_id, Some(priorite.id));
}

#[tokio::test]
async fn should_scope_name_uniqueness_to_the_project() {
    let usecase = create_usecase(MockTacheRepo::empty());
    usecase
        .execute(minimal_input("Design doc", 1))
        .await
        .unwrap();

    // Same name in the same project is rejected…
    let doublon = usecase.execute(minimal_input("Design doc", 1)).await;
    assert!(matches!(
        doublon,
        Err(TrackerServiceError::TaskRequestInvalid)
    ));

    // …but the same name in another project is fine.
    usecase
        .execute(minimal_input("Design doc", 2))
        .await
        .unwrap();
    assert_eq!(usecase.taches.taches.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_reject_creation_with_unresolvable_references() {
    let usecase = create_usecase(MockTacheRepo::empty());

    let sans_projet = usecase
        .execute(CreateTacheInput {
            projet_id: Some(99),
            ..minimal_input("Design doc", 1)
        })
        .await;
    assert!(matches!(
        sans_projet,
        Err(TrackerServiceError::TaskRequestInvalid)
    ));

    let sans_destinataire = usecase
        .execute(CreateTacheInput {
            destinataire_id: Some(99),
            ..minimal_input("Design doc", 1)
        })
        .await;
    assert!(matches!(
        sans_destinataire,
        Err(TrackerServiceError::TaskRequestInvalid)
    ));

    let sans_nom = usecase
        .execute(CreateTacheInput {
            nom: None,
            ..minimal_input("Design doc", 1)
        })
        .await;
    assert!(matches!(
        sans_nom,
        Err(TrackerServiceError::TaskRequestInvalid)
    ));
}

#[tokio::test]
async fn should_merge_only_the_provided_fields() {
    let existante = tache(1, "Design doc", 1, 1);
    let usecase = update_usecase(MockTacheRepo::new(vec![existante.clone()]));

    let details = usecase
        .execute(UpdateTacheInput {
            id: Some(1),
            etat: Some("DONE".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(details.tache.etat, "DONE");
    assert_eq!(details.tache.nom, existante.nom);
    assert_eq!(details.tache.description, existante.description);
    assert_eq!(details.tache.date_debut, existante.date_debut);
    assert_eq!(details.tache.date_fin, existante.date_fin);
    assert_eq!(details.tache.commanditaire_id, existante.commanditaire_id);
    assert_eq!(details.tache.destinataire_id, existante.destinataire_id);
    assert_eq!(details.tache.priorite_id, existante.priorite_id);
}

#[tokio::test]
async fn should_leave_task_unchanged_on_all_null_update() {
    let existante = tache(1, "Design doc", 1, 1);
    let usecase = update_usecase(MockTacheRepo::new(vec![existante.clone()]));

    let details = usecase
        .execute(UpdateTacheInput {
            id: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(details.tache, existante);
    assert_eq!(usecase.taches.taches.lock().unwrap()[0], existante);
}

#[tokio::test]
async fn should_reject_update_of_unknown_task() {
    let usecase = update_usecase(MockTacheRepo::empty());
    let result = usecase
        .execute(UpdateTacheInput {
            id: Some(42),
            etat: Some("DONE".into()),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(TrackerServiceError::TaskNotFound)));
}

#[tokio::test]
async fn should_reject_update_with_unknown_assignee() {
    let usecase = update_usecase(MockTacheRepo::new(vec![tache(1, "Design doc", 1, 1)]));
    let result = usecase
        .execute(UpdateTacheInput {
            id: Some(1),
            destinataire_id: Some(99),
            ..Default::default()
        })
        .await;
    assert!(matches!(
        result,
        Err(TrackerServiceError::TaskRequestInvalid)
    ));
}

#[tokio::test]
async fn should_fall_back_to_default_priority_on_update() {
    let usecase = update_usecase(MockTacheRepo::new(vec![tache(1, "Design doc", 1, 1)]));
    let details = usecase
        .execute(UpdateTacheInput {
            id: Some(1),
            priorite_id: Some(999),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(details.priorite.unwrap().nom, PRIORITE_MOYENNE);
}

#[tokio::test]
async fn should_report_deletion_result_as_boolean() {
    let usecase = DeleteTacheUseCase {
        taches: MockTacheRepo::new(vec![tache(1, "Design doc", 1, 1)]),
    };

    assert!(usecase.execute(1).await.unwrap());
    assert!(usecase.taches.taches.lock().unwrap().is_empty());

    let absent = usecase.execute(1).await;
    assert!(matches!(absent, Err(TrackerServiceError::TaskNotFound)));
}
