use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tache::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tache::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tache::Nom).string().not_null())
                    .col(ColumnDef::new(Tache::Description).string())
                    .col(
                        ColumnDef::new(Tache::Etat)
                            .string()
                            .not_null()
                            .default("TODO"),
                    )
                    .col(
                        ColumnDef::new(Tache::DateDebut)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Tache::DateFin).timestamp_with_time_zone())
                    .col(ColumnDef::new(Tache::PrioriteId).integer())
                    .col(ColumnDef::new(Tache::CommanditaireId).integer().not_null())
                    .col(ColumnDef::new(Tache::DestinataireId).integer().not_null())
                    .col(ColumnDef::new(Tache::ProjetId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tache::Table, Tache::PrioriteId)
                            .to(Priorite::Table, Priorite::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tache::Table, Tache::CommanditaireId)
                            .to(Utilisateur::Table, Utilisateur::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tache::Table, Tache::DestinataireId)
                            .to(Utilisateur::Table, Utilisateur::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tache::Table, Tache::ProjetId)
                            .to(Projet::Table, Projet::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tache::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Tache {
    Table,
    Id,
    Nom,
    Description,
    Etat,
    DateDebut,
    DateFin,
    PrioriteId,
    CommanditaireId,
    DestinataireId,
    ProjetId,
}

#[derive(Iden)]
enum Priorite {
    Table,
    Id,
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
