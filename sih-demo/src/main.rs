mod error;
mod logger;
mod offline_backend;
mod scripted_authority;

use crate::offline_backend::OfflineBackend;
use crate::scripted_authority::ScriptedAuthority;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use sih_client::RegistrationClient;
use sih_core::{CredentialStore, IdentityRequest, RegistrationBackend, UserIdentity};
use sih_keychain::SqliteKeychain;
use sih_session::{FlowConfig, RegistrationNotifier, SignInFlow, SignInOutcome};

const DEMO_IDENTIFIER: &str = "demo-user-001";

/// Walks one sign-in handshake end to end, standing in for the original
/// two-screen UI.
#[derive(Parser)]
#[command(name = "sih-demo", about = "Sign-in handshake demo", version)]
struct Args {
    /// Keychain database path; in-memory when omitted
    #[arg(long)]
    database: Option<PathBuf>,

    /// Registration backend URL; registrations are accepted locally when omitted
    #[arg(long)]
    backend_url: Option<String>,

    /// Seconds to wait for the authority before giving up
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Forget the local record first, forcing a first-time sign-in
    #[arg(long)]
    reset: bool,

    /// Simulate the user dismissing the authorization prompt
    #[arg(long)]
    cancel: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logger::initialize(parse_level(&args.log_level), true)?;

    let keychain = match &args.database {
        Some(path) => SqliteKeychain::open(path).await?,
        None => SqliteKeychain::open_in_memory().await?,
    };
    let store: Arc<dyn CredentialStore> = Arc::new(keychain);

    if args.reset {
        store.remove(DEMO_IDENTIFIER).await?;
        log::info!("Cleared local record for '{}'", DEMO_IDENTIFIER);
    }

    let backend: Arc<dyn RegistrationBackend> = match &args.backend_url {
        Some(url) => Arc::new(RegistrationClient::new(url)),
        None => Arc::new(OfflineBackend),
    };

    // The authority sends profile fields on the very first authorization
    // and the bare identifier afterwards.
    let identity = if args.cancel {
        None
    } else if store.lookup(DEMO_IDENTIFIER).await?.is_some() {
        Some(UserIdentity::returning(
            DEMO_IDENTIFIER,
            b"demo-token".to_vec(),
            b"demo-code".to_vec(),
        ))
    } else {
        Some(UserIdentity::first_authorization(
            DEMO_IDENTIFIER,
            "Ray Wenderlich",
            "ray@example.com",
            b"demo-token".to_vec(),
            b"demo-code".to_vec(),
        ))
    };
    let authority = ScriptedAuthority::new(identity, Duration::from_millis(250));

    let flow = SignInFlow::new(
        store,
        backend,
        FlowConfig {
            authority_timeout_secs: args.timeout_secs,
        },
    );
    let (notifier, signal) = RegistrationNotifier::channel();

    let result = flow
        .sign_in(&authority, IdentityRequest::with_profile_claims(), notifier)
        .await;

    match signal.wait().await {
        Some(success) => log::info!("Completion signal: {}", success),
        None => log::info!("Session ended before dispatch; no completion signal"),
    }

    match result? {
        SignInOutcome::Registered(record) => {
            log::info!(
                "Registered new account for {} <{}>",
                record.full_name,
                record.email
            );
        }
        SignInOutcome::Resumed(record) => log::info!("Welcome back, {}", record.full_name),
        SignInOutcome::Ignored => log::info!("Password credential ignored"),
    }

    Ok(())
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
