use uuid::Uuid;

use crate::domain::user::entities::{Role, UserStatus};

pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub diet: Option<Vec<String>>,
}

/// Admin-side changes to another account.
pub struct UpdateUserInput {
    pub user_id: Uuid,
    pub status: Option<UserStatus>,
    pub role: Option<Role>,
}
