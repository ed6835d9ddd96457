pub mod error;
pub mod commands;
pub mod session;

pub use commands::Command;
pub use error::CommandError;
pub use session::{App, Reply};

/// Install the global subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "proposal_app=info,proposal_session=debug,proposal_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
