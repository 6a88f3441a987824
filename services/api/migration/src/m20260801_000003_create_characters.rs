use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Characters::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Characters::Strength)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Characters::SpeciesId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Characters::Table, Characters::SpeciesId)
                            .to(Species::Table, Species::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Characters {
    Table,
    Id,
    Name,
    Strength,
    SpeciesId,
}

#[derive(Iden)]
enum Species {
    Table,
    Id,
}
