use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobmatch::auth::AccessGate;
use jobmatch::config::{Command, Config};
use jobmatch::models::candidate::Roster;
use jobmatch::models::job::{JobId, JobPosting, NewJobPosting};
use jobmatch::routes;
use jobmatch::state::AppState;
use jobmatch::store::JobStore;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jobmatch=info,tower_http=info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_json);

    let roster = Roster::load(&config.candidates).with_context(|| {
        format!("loading candidate roster from {}", config.candidates.display())
    })?;

    match config.resolved_command() {
        Command::Serve { listen_addr } => {
            let password = config
                .access_password
                .as_deref()
                .context("serve requires --access-password or ACCESS_PASSWORD")?;
            let state = AppState::new(JobStore::new(), roster, AccessGate::new(password));
            let app = routes::app(state);

            let listener = tokio::net::TcpListener::bind(&listen_addr)
                .await
                .with_context(|| format!("binding {listen_addr}"))?;
            tracing::info!("Listening on {listen_addr}");
            axum::serve(listener, app).await?;
        }
        Command::Match { role, education } => {
            let posting = JobPosting::from_new(
                NewJobPosting {
                    role,
                    education,
                    ..Default::default()
                },
                JobId::new(),
                chrono::Utc::now(),
            );
            for case_id in &roster.matches_for(&posting) {
                println!("{case_id}");
            }
        }
    }

    Ok(())
}
