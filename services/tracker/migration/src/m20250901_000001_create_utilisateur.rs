use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Utilisateur::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Utilisateur::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Utilisateur::Nom)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Utilisateur::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Utilisateur::Password).string().not_null())
                    .col(ColumnDef::new(Utilisateur::RoleApp).string().not_null())
                    .col(
                        ColumnDef::new(Utilisateur::EtatConnexion)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Utilisateur::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Utilisateur {
    Table,
    Id,
    Nom,
    Email,
    Password,
    RoleApp,
    EtatConnexion,
}
