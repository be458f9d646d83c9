use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Role::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Role::Nom).string().not_null().unique_key())
                    .col(ColumnDef::new(Role::AjouterMembre).boolean().not_null())
                    .col(ColumnDef::new(Role::CreerTache).boolean().not_null())
                    .col(ColumnDef::new(Role::AssigneTache).boolean().not_null())
                    .col(ColumnDef::new(Role::MajTache).boolean().not_null())
                    .col(ColumnDef::new(Role::VueTache).boolean().not_null())
                    .col(
                        ColumnDef::new(Role::VueTableauDeBord)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Role::EtreNotifie).boolean().not_null())
                    .col(
                        ColumnDef::new(Role::VueHistoriqueModifications)
                            .boolean()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Role {
    Table,
    Id,
    Nom,
    AjouterMembre,
    CreerTache,
    AssigneTache,
    MajTache,
    VueTache,
    VueTableauDeBord,
    EtreNotifie,
    VueHistoriqueModifications,
}
