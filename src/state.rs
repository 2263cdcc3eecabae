use crate::jwt::Jwt;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, TransactionTrait};
use std::{env, sync::Arc};
use tracing::log::LevelFilter;

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + TransactionTrait + Clone + Send + Sync;

    fn db(&self) -> &Self::Db;
    fn jwt(&self) -> &Jwt;
}

pub struct State {
    database: DbConn,
    jwt: Jwt,
}

impl State {
    pub async fn new() -> anyhow::Result<Arc<Self>> {
        let secret = env::var("JWT_SECRET").inspect_err(|_| error!("JWT_SECRET is not set"))?;
        let database = connect_database().await?;

        Ok(Self::with_database(database, Jwt::new(secret.as_bytes())))
    }

    pub fn with_database(conn: DbConn, jwt: Jwt) -> Arc<Self> {
        Arc::new(Self {
            database: conn,
            jwt,
        })
    }
}

pub async fn connect_database() -> anyhow::Result<DbConn> {
    info!("Trying to connect to database");

    let url = env::var("DATABASE_URL").inspect_err(|_| error!("DATABASE_URL is not set"))?;
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging_level(LevelFilter::Debug);

    let db = Database::connect(opts)
        .await
        .inspect_err(|error| error!("failed to connect to database: {error}"))?;

    info!("Connected to database");

    Ok(db)
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn jwt(&self) -> &Jwt {
        &self.jwt
    }
}
