use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{project_user::Membership, user::User};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignUserRequest {
    pub user_id: i64,
}

// Element of a project's `projectUsers` list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUserResponse {
    pub id: i64,
    pub user: User,
    pub assigned_at: DateTime<Utc>,
}

impl From<Membership> for ProjectUserResponse {
    fn from(membership: Membership) -> Self {
        ProjectUserResponse {
            id: membership.id,
            user: User {
                id: membership.user_id,
                username: membership.username,
            },
            assigned_at: membership.assigned_at,
        }
    }
}
