//! PostgreSQL implementation of the snapshot store.

use async_trait::async_trait;
use sea_query::{Expr, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use sqlx::{PgPool, Row};
use tracing::debug;
use uuid::Uuid;

use crate::codec;
use crate::model::SiteSnapshot;
use crate::storage::conflict::is_version_conflict;
use crate::storage::schema::{Snapshots, CREATE_SNAPSHOTS_TABLE_POSTGRES};
use crate::storage::{Result, SnapshotStore};

/// PostgreSQL implementation of SnapshotStore.
pub struct PostgresSnapshotStore {
    pool: PgPool,
}

impl PostgresSnapshotStore {
    /// Create a new PostgreSQL snapshot store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Initialize the database schema.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_SNAPSHOTS_TABLE_POSTGRES)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for PostgresSnapshotStore {
    async fn find_latest(
        &self,
        site_id: Uuid,
        before_version: Option<u64>,
    ) -> Result<Option<SiteSnapshot>> {
        let (sql, values) = Query::select()
            .column(Snapshots::Version)
            .column(Snapshots::Owner)
            .column(Snapshots::Blob)
            .column(Snapshots::Deleted)
            .from(Snapshots::Table)
            .and_where(Expr::col(Snapshots::SiteId).eq(site_id))
            .and_where_option(
                before_version.map(|v| Expr::col(Snapshots::Version).lt(v as i64)),
            )
            .order_by(Snapshots::Version, Order::Desc)
            .limit(1)
            .build_sqlx(PostgresQueryBuilder);

        let row = sqlx::query_with(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let version: i64 = row.get("version");
                let owner: Uuid = row.get("owner");
                let blob: Vec<u8> = row.get("blob");
                let deleted: bool = row.get("deleted");

                let state = codec::decode_state(&blob)?;

                Ok(Some(SiteSnapshot {
                    site_id,
                    version: version as u64,
                    owner,
                    state,
                    deleted,
                }))
            }
            None => Ok(None),
        }
    }

    async fn persist(&self, snapshot: &SiteSnapshot) -> Result<bool> {
        let blob = codec::encode_state(&snapshot.state)?;

        let (sql, values) = Query::insert()
            .into_table(Snapshots::Table)
            .columns([
                Snapshots::SiteId,
                Snapshots::Version,
                Snapshots::Owner,
                Snapshots::Blob,
                Snapshots::Deleted,
            ])
            .values_panic([
                snapshot.site_id.into(),
                (snapshot.version as i64).into(),
                snapshot.owner.into(),
                blob.into(),
                snapshot.deleted.into(),
            ])
            .build_sqlx(PostgresQueryBuilder);

        match sqlx::query_with(&sql, values).execute(&self.pool).await {
            Ok(_) => Ok(true),
            Err(err) if is_version_conflict(&err) => {
                debug!(
                    "Snapshot for site {} at version {} already persisted; keeping existing row",
                    snapshot.site_id, snapshot.version
                );
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}
