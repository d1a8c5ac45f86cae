use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use super::jwt::{bearer_token, validate_token};

/// Capability a route requires plus the key its tokens are signed with.
#[derive(Clone)]
pub struct CapabilityGate {
    pub capability: String,
    pub secret: Arc<String>,
}

impl CapabilityGate {
    pub fn new(capability: impl Into<String>, secret: Arc<String>) -> Self {
        Self {
            capability: capability.into(),
            secret,
        }
    }
}

/// Middleware that requires a valid JWT carrying the gate's capability
pub async fn require_capability(
    State(gate): State<CapabilityGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = bearer_token(req.headers()).ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = validate_token(token, &gate.secret).map_err(|e| {
        tracing::debug!("Rejected token: {:#}", e);
        StatusCode::UNAUTHORIZED
    })?;

    if !claims.has_capability(&gate.capability) {
        tracing::warn!(
            "User '{}' lacks capability '{}' for {}",
            claims.username,
            gate.capability,
            req.uri().path()
        );
        return Err(StatusCode::FORBIDDEN);
    }

    // Add claims to request extensions for use in handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
