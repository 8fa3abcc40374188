use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    user::entities::Role,
};

/// Turns a policy decision into `Forbidden` when it denies access.
pub fn ensure_policy(
    decision: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match decision {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

pub struct RolePolicy;

impl RolePolicy {
    pub fn has_one_of_roles(identity: &Identity, roles: &[Role]) -> Result<bool, CoreError> {
        Ok(roles.iter().any(|role| identity.has_role(*role)))
    }

    pub fn is_admin(identity: &Identity) -> Result<bool, CoreError> {
        Self::has_one_of_roles(identity, &[Role::Admin])
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "cook@example.com".to_string(),
            name: "Cook".to_string(),
            role,
        }
    }

    #[test]
    fn denied_policy_becomes_forbidden() {
        let result = ensure_policy(RolePolicy::is_admin(&identity(Role::User)), "admins only");
        assert_eq!(result, Err(CoreError::Forbidden("admins only".to_string())));
    }

    #[test]
    fn any_listed_role_is_enough() {
        let chef = identity(Role::Chef);
        assert_eq!(
            RolePolicy::has_one_of_roles(&chef, &[Role::Admin, Role::Chef]),
            Ok(true)
        );
        assert!(ensure_policy(RolePolicy::is_admin(&identity(Role::Admin)), "x").is_ok());
    }
}
