use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Login).string_len(64).not_null().unique_key())
                    .col(ColumnDef::new(Users::Password).string_len(256).not_null())
                    .col(ColumnDef::new(Users::Active).boolean().not_null())
                    .col(ColumnDef::new(Users::Uniquifier).string_len(256).not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_login")
                    .table(Users::Table)
                    .col(Users::Login)
                    .to_owned(),
            )
            .await?;

        // Create roles table
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roles::Name).string_len(30).not_null().unique_key())
                    .col(ColumnDef::new(Roles::Description).string_len(512))
                    .to_owned(),
            )
            .await?;

        // Create roles_users join table
        manager
            .create_table(
                Table::create()
                    .table(RolesUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RolesUsers::UserId).integer().not_null())
                    .col(ColumnDef::new(RolesUsers::RoleId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(RolesUsers::UserId)
                            .col(RolesUsers::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_users_user_id")
                            .from(RolesUsers::Table, RolesUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_roles_users_role_id")
                            .from(RolesUsers::Table, RolesUsers::RoleId)
                            .to(Roles::Table, Roles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create stoplists table
        manager
            .create_table(
                Table::create()
                    .table(Stoplists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stoplists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stoplists::Code).integer().not_null())
                    .col(ColumnDef::new(Stoplists::Number).big_integer().not_null().unique_key())
                    .col(ColumnDef::new(Stoplists::Reason1).boolean().not_null().default(false))
                    .col(ColumnDef::new(Stoplists::Reason2).boolean().not_null().default(false))
                    .col(ColumnDef::new(Stoplists::Reason3).boolean().not_null().default(false))
                    .col(ColumnDef::new(Stoplists::Reason4).boolean().not_null().default(false))
                    .col(ColumnDef::new(Stoplists::CreatedOn).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Stoplists::UpdatedOn).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Stoplists::User).string_len(30))
                    .to_owned(),
            )
            .await?;

        // Create stoplists_log table
        //
        // stoplist_id is a plain integer reference, not a foreign key:
        // log rows must survive deletion of the entry they describe.
        manager
            .create_table(
                Table::create()
                    .table(StoplistsLog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StoplistsLog::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StoplistsLog::CreatedOn).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(StoplistsLog::StoplistId).integer().not_null())
                    .col(ColumnDef::new(StoplistsLog::User).string_len(64).not_null())
                    .col(ColumnDef::new(StoplistsLog::Type).string_len(30).not_null())
                    .col(ColumnDef::new(StoplistsLog::Data).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_stoplists_log_stoplist_id")
                    .table(StoplistsLog::Table)
                    .col(StoplistsLog::StoplistId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoplistsLog::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stoplists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RolesUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Login,
    Password,
    Active,
    Uniquifier,
}

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum RolesUsers {
    Table,
    UserId,
    RoleId,
}

#[derive(DeriveIden)]
enum Stoplists {
    Table,
    Id,
    Code,
    Number,
    Reason1,
    Reason2,
    Reason3,
    Reason4,
    CreatedOn,
    UpdatedOn,
    User,
}

#[derive(DeriveIden)]
enum StoplistsLog {
    Table,
    Id,
    CreatedOn,
    StoplistId,
    User,
    Type,
    Data,
}
