use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UtilisateurProjetRole::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UtilisateurProjetRole::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UtilisateurProjetRole::UtilisateurId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UtilisateurProjetRole::ProjetId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UtilisateurProjetRole::RoleId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                UtilisateurProjetRole::Table,
                                UtilisateurProjetRole::UtilisateurId,
                            )
                            .to(Utilisateur::Table, Utilisateur::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                UtilisateurProjetRole::Table,
                                UtilisateurProjetRole::ProjetId,
                            )
                            .to(Projet::Table, Projet::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                UtilisateurProjetRole::Table,
                                UtilisateurProjetRole::RoleId,
                            )
                            .to(Role::Table, Role::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(UtilisateurProjetRole::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum UtilisateurProjetRole {
    Table,
    Id,
    UtilisateurId,
    ProjetId,
    RoleId,
}

#[derive(Iden)]
enum Utilisateur {
    Table,
    Id,
}

#[derive(Iden)]
enum Projet {
    Table,
    Id,
}

#[derive(Iden)]
enum Role {
    Table,
    Id,
}
