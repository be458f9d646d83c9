use sea_orm_migration::prelude::*;

mod m20250901_000001_create_utilisateur;
mod m20250901_000002_create_role;
mod m20250901_000003_create_priorite;
mod m20250901_000004_create_projet;
mod m20250901_000005_create_tache;
mod m20250901_000006_create_utilisateur_projet_role;
mod m20250901_000007_create_projet_tache;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_utilisateur::Migration),
            Box::new(m20250901_000002_create_role::Migration),
            Box::new(m20250901_000003_create_priorite::Migration),
            Box::new(m20250901_000004_create_projet::Migration),
            Box::new(m20250901_000005_create_tache::Migration),
            Box::new(m20250901_000006_create_utilisateur_projet_role::Migration),
            Box::new(m20250901_000007_create_projet_tache::Migration),
        ]
    }
}
