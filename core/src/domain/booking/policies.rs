use crate::domain::{
    authentication::value_objects::Identity,
    booking::entities::ChefBookingRequest,
    chef::entities::ChefProfile,
    common::{entities::app_errors::CoreError, policies::RolePolicy},
};

/// Admins may touch any booking, the client their own, the chef the ones addressed to them.
pub fn can_manage_booking(
    identity: &Identity,
    booking: &ChefBookingRequest,
    chef: Option<&ChefProfile>,
) -> Result<bool, CoreError> {
    if RolePolicy::is_admin(identity)? {
        return Ok(true);
    }

    if booking.user_id == identity.id() {
        return Ok(true);
    }

    Ok(chef.is_some_and(|chef| chef.id == booking.chef_id && chef.user_id == Some(identity.id())))
}
