use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjetTache::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjetTache::ProjetId).integer().not_null())
                    .col(ColumnDef::new(ProjetTache::TacheId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(ProjetTache::ProjetId)
                            .col(ProjetTache::TacheId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProjetTache::Table, ProjetTache::ProjetId)
                            .to(Projet::Table, Projet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProjetTache::Table, ProjetTache::TacheId)
                            .to(Tache::Table, Tache::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjetTache::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProjetTache {
    Table,
    ProjetId,
    TacheId,
}

#[derive(Iden)]
enum Projet {
    Table,
    Id,
}

#[derive(Iden)]
enum Tache {
    Table,
    Id,
}
