use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i32,          // assigned by the database
    pub username: String,
    pub email: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{UserId:{:>2} | UserName:{:>15} | Email:{:>15}}}",
            self.id, self.username, self.email
        )
    }
}
