use crate::OutcomeResolver;

use sih_core::IdentityRequest;

/// External identity authority.
///
/// `begin` hands the request over and returns immediately; the authority
/// reports back through the resolver exactly once. Dropping the resolver
/// unresolved abandons the session.
pub trait IdentityAuthority: Send + Sync {
    fn begin(&self, request: IdentityRequest, resolver: OutcomeResolver);
}
