pub mod authorization_session;
pub mod error;
pub mod flow_config;
pub mod identity_authority;
pub mod registration_notifier;
pub mod sign_in_dispatcher;
pub mod sign_in_flow;

pub use authorization_session::{AuthorizationSession, OutcomeResolver};
pub use error::{Result, SignInError};
pub use flow_config::FlowConfig;
pub use identity_authority::IdentityAuthority;
pub use registration_notifier::{RegistrationNotifier, RegistrationSignal};
pub use sign_in_dispatcher::{SignInDispatcher, SignInOutcome};
pub use sign_in_flow::SignInFlow;

#[cfg(test)]
mod tests;
