use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projet::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projet::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Projet::Nom)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Projet::Description).string().not_null())
                    .col(ColumnDef::new(Projet::DateEcheance).date())
                    .col(ColumnDef::new(Projet::DateCreation).date().not_null())
                    .col(ColumnDef::new(Projet::CreateurId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Projet::Table, Projet::CreateurId)
                            .to(Utilisateur::Table, Utilisateur::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projet::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Projet {
    Table,
    Id,
    Nom,
    Description,
    DateEcheance,
    DateCreation,
    CreateurId,
}

#[derive(Iden)]
enum Utilisateur {
    Table,
    Id,
}
