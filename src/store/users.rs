use crate::{
    error::{self, DatabaseError, Result},
    utils::set_option,
};
use chrono::Utc;
use entity::{
    assessments::constraints::FK_ASSESSMENTS_CREATED_BY,
    attendance::constraints::FK_ATTENDANCE_MARKED_BY,
    users::{self, constraints::*, Role},
    Subject,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub usn: Option<String>,
    pub section: Option<String>,
    pub semester: Option<i16>,
    pub subject: Option<Subject>,
}

#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub usn: Option<Option<String>>,
    pub section: Option<Option<String>>,
    pub semester: Option<Option<i16>>,
    pub subject: Option<Option<Subject>>,
}

impl UserChanges {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.usn.is_none()
            && self.section.is_none()
            && self.semester.is_none()
            && self.subject.is_none()
    }
}

pub struct UserStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(&self, id: Uuid) -> Result<users::Model> {
        users::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(error::USER_NOT_FOUND)
    }

    pub async fn find_student(&self, id: Uuid) -> Result<users::Model> {
        users::Entity::find_student(id)
            .one(self.db)
            .await?
            .ok_or(error::STUDENT_NOT_FOUND)
    }

    pub async fn find_student_by_usn(&self, usn: &str) -> Result<users::Model> {
        users::Entity::find_by_usn(usn)
            .one(self.db)
            .await?
            .ok_or(error::STUDENT_NOT_FOUND)
    }

    /// Students, optionally only the one with `usn`.
    pub async fn list_students(&self, usn: Option<&str>) -> Result<Vec<users::Model>> {
        let mut query = users::Entity::find_students();

        if let Some(usn) = usn {
            query = query.filter(users::Column::Usn.eq(usn));
        }

        Ok(query
            .order_by_asc(users::Column::Name)
            .all(self.db)
            .await?)
    }

    pub async fn student_ids(&self) -> Result<Vec<Uuid>> {
        Ok(users::Entity::find_students()
            .select_only()
            .column(users::Column::Id)
            .order_by_asc(users::Column::Name)
            .into_tuple::<Uuid>()
            .all(self.db)
            .await?)
    }

    pub async fn create(&self, user: NewUser) -> Result<users::Model> {
        let email_taken = users::Entity::find()
            .filter(users::Column::Email.eq(&user.email))
            .one(self.db)
            .await?
            .is_some();

        if email_taken {
            return Err(error::USER_ALREADY_EXISTS);
        }

        if let Some(usn) = &user.usn {
            if users::Entity::find()
                .filter(users::Column::Usn.eq(usn))
                .one(self.db)
                .await?
                .is_some()
            {
                return Err(error::USN_ALREADY_EXISTS);
            }
        }

        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(user.email),
            role: Set(user.role),
            usn: Set(user.usn),
            section: Set(user.section),
            semester: Set(user.semester),
            subject: Set(user.subject),
            created_at: Set(Utc::now()),
        };

        user.insert(self.db).await.map_err(map_unique_violation)
    }

    pub async fn update(&self, id: Uuid, changes: UserChanges) -> Result<users::Model> {
        let existing = self.find(id).await?;

        if changes.is_empty() {
            return Ok(existing);
        }

        let user = users::ActiveModel {
            id: Set(id),
            name: set_option(changes.name),
            email: set_option(changes.email),
            role: set_option(changes.role),
            usn: set_option(changes.usn),
            section: set_option(changes.section),
            semester: set_option(changes.semester),
            subject: set_option(changes.subject),
            ..Default::default()
        };

        user.update(self.db).await.map_err(map_unique_violation)
    }

    pub async fn delete(&self, id: Uuid) -> Result {
        let res = match users::Entity::delete_by_id(id).exec(self.db).await {
            Err(err)
                if err.foreign_key_violation(FK_ATTENDANCE_MARKED_BY)
                    || err.foreign_key_violation(FK_ASSESSMENTS_CREATED_BY) =>
            {
                return Err(error::USER_IN_USE);
            }
            res => res?,
        };

        if res.rows_affected == 0 {
            return Err(error::USER_NOT_FOUND);
        }

        Ok(())
    }
}

fn map_unique_violation(err: sea_orm::DbErr) -> error::Error<'static> {
    if err.unique_violation(UC_USERS_USN) {
        error::USN_ALREADY_EXISTS
    } else if err.unique_violation(UC_USERS_EMAIL) {
        error::USER_ALREADY_EXISTS
    } else {
        err.into()
    }
}
