use crate::api::auth::BearerAuth;
use crate::services::TokenService;
use crate::types::internal::Operator;

/// Authorization failures, mapped to each API's own error enum at the call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authz {
    Unauthorized,
    Forbidden,
}

/// Resolve the acting operator from a bearer token
pub fn operator_from(token_service: &TokenService, auth: &BearerAuth) -> Result<Operator, Authz> {
    let claims = token_service
        .validate(&auth.0.token)
        .map_err(|_| Authz::Unauthorized)?;
    Ok(Operator::new(claims.sub, claims.roles))
}

/// Resolve the operator and require the staff or admin role
pub fn require_staff(token_service: &TokenService, auth: &BearerAuth) -> Result<Operator, Authz> {
    let operator = operator_from(token_service, auth)?;
    if !operator.is_staff() {
        return Err(Authz::Forbidden);
    }
    Ok(operator)
}

/// Resolve the operator and require the admin role
pub fn require_admin(token_service: &TokenService, auth: &BearerAuth) -> Result<Operator, Authz> {
    let operator = operator_from(token_service, auth)?;
    if !operator.is_admin() {
        return Err(Authz::Forbidden);
    }
    Ok(operator)
}
