use super::{request::RequestBuilder, user::User};
use attendance_backend::{
    jwt::{Claims, Jwt},
    store::{NewUser, UserStore},
    State,
};
use chrono::Duration;
use entity::{users::Role, Subject};
use migration::MigratorTrait;
use reqwest::Client;
use sea_orm::{ConnectOptions, Database, DbConn};
use std::{
    net::SocketAddr,
    sync::atomic::{AtomicU64, Ordering},
};
use tokio::net::TcpListener;

pub const TEST_SECRET: &[u8] = b"attendance-backend-test-secret";

static USER_NUM: AtomicU64 = AtomicU64::new(0);

async fn setup_database() -> DbConn {
    // every connection to `sqlite::memory:` opens its own database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts).await.unwrap();

    migration::Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    db
}

async fn setup_backend(db: DbConn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let state = State::with_database(db, Jwt::new(TEST_SECRET));

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        attendance_backend::run(listener, state).await.unwrap();
    });

    addr
}

/// Database only, for exercising the stores directly.
#[allow(unused)]
pub async fn database() -> DbConn {
    setup_database().await
}

#[allow(unused)]
pub async fn setup() -> Env {
    let db = setup_database().await;
    let addr = setup_backend(db.clone()).await;

    Env {
        addr,
        client: Client::new(),
        db,
        jwt: Jwt::new(TEST_SECRET),
    }
}

#[derive(Clone)]
pub struct Env {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DbConn,
    pub jwt: Jwt,
}

#[allow(unused)]
impl Env {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.get(self.url(path)))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.post(self.url(path)))
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.put(self.url(path)))
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        RequestBuilder::new(self.client.delete(self.url(path)))
    }

    async fn create_user(&self, user: NewUser) -> User {
        let user = UserStore::new(&self.db).create(user).await.unwrap();
        let claims = Claims::new(user.id, user.role, Duration::hours(1));
        let token = self.jwt.encode(&claims).unwrap();

        User {
            id: user.id,
            usn: user.usn,
            token,
        }
    }

    pub async fn create_student(&self) -> User {
        let num = USER_NUM.fetch_add(1, Ordering::Relaxed);

        self.create_user(NewUser {
            name: format!("Student {num}"),
            email: format!("student{num}@test.edu"),
            role: Role::Student,
            usn: Some(format!("1TS{num:05}")),
            section: Some("A".to_owned()),
            semester: Some(5),
            subject: None,
        })
        .await
    }

    pub async fn create_teacher(&self) -> User {
        let num = USER_NUM.fetch_add(1, Ordering::Relaxed);

        self.create_user(NewUser {
            name: format!("Teacher {num}"),
            email: format!("teacher{num}@test.edu"),
            role: Role::Teacher,
            usn: None,
            section: None,
            semester: None,
            subject: Some(Subject::DataScience),
        })
        .await
    }
}
