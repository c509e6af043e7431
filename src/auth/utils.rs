use crate::{
    errors::{AppError, AppResult, DeniedIdentity},
    models::domain::Identity,
};

pub const ADMIN_ROLE: &str = "admin";

/// Admin status has two stored representations, the legacy `isAdmin` flag and
/// the `role` string. Either one grants access.
pub fn has_admin_access(is_admin: bool, role: &str) -> bool {
    is_admin || role == ADMIN_ROLE
}

pub fn require_admin(identity: &Identity) -> AppResult<()> {
    if has_admin_access(identity.is_admin, &identity.role) {
        return Ok(());
    }

    log::warn!(
        "User denied admin access: id={} isAdmin={} role={}",
        identity.id.to_hex(),
        identity.is_admin,
        identity.role
    );

    Err(AppError::Forbidden(DeniedIdentity {
        id: identity.id.to_hex(),
        is_admin: identity.is_admin,
        role: identity.role.clone(),
    }))
}
