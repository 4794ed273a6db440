//! Storage handle owning the database connection.
//!
//! Wraps a single sea-orm [`DatabaseConnection`] shared by every request
//! handler and exposes the two operations the router needs: inserting a
//! profile and pinging the database for health checks. The table schema is
//! ensured once at startup.

pub mod profile;

use sea_orm::sea_query::{ColumnDef, Table};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr,
    DeriveIden, Set,
};

/// Identifiers for the schema-ensure statement.
#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    Name,
    Age,
    Profession,
}

/// Handle to the relational database.
///
/// Cloning is cheap; all clones share the same underlying connection.
#[derive(Clone)]
pub struct Storage {
    db: DatabaseConnection,
}

impl Storage {
    /// Opens a connection to the database at `url`.
    ///
    /// A single connection is shared by all requests; concurrent queries
    /// queue on it inside the driver.
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url);
        options.max_connections(1);
        let db = Database::connect(options).await?;
        Ok(Self { db })
    }

    /// Creates the `profiles` table if it does not already exist.
    ///
    /// Safe to run on every startup; existing rows are left untouched.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let stmt = Table::create()
            .table(Profiles::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Profiles::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Profiles::Name).string_len(100).not_null())
            .col(ColumnDef::new(Profiles::Age).integer().not_null())
            .col(
                ColumnDef::new(Profiles::Profession)
                    .string_len(100)
                    .not_null(),
            )
            .to_owned();

        let backend = self.db.get_database_backend();
        self.db.execute(backend.build(&stmt)).await?;
        Ok(())
    }

    /// Inserts a profile and returns the stored row with its generated id.
    pub async fn insert_profile(
        &self,
        name: String,
        age: i32,
        profession: String,
    ) -> Result<profile::Model, DbErr> {
        let row = profile::ActiveModel {
            name: Set(name),
            age: Set(age),
            profession: Set(profession),
            ..Default::default()
        };
        row.insert(&self.db).await
    }

    /// Checks that the database connection is alive.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }

    /// Direct access to the underlying connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Closes the underlying connection. Queries on any clone fail afterwards.
    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}
