use uuid::Uuid;

/// A seeded user and a bearer token minted for them.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub usn: Option<String>,
    pub token: String,
}
