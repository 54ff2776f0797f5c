use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "jobmatch", about = "Job board matching postings against a candidate roster")]
pub struct Config {
    /// Candidate roster JSON file
    #[arg(long, env = "CANDIDATES_PATH")]
    pub candidates: PathBuf,

    /// Shared password for the board and the API; required by `serve`
    #[arg(long, env = "ACCESS_PASSWORD", hide_env_values = true)]
    pub access_password: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the web server (default when no subcommand given)
    Serve {
        /// Listen address
        #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
        listen_addr: String,
    },
    /// Print the case numbers matching a role and education
    Match {
        #[arg(long)]
        role: String,

        #[arg(long, default_value = "")]
        education: String,
    },
}

impl Config {
    /// Resolve the command, defaulting to Serve if none specified.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_match_subcommand_without_password() {
        let config = Config::try_parse_from([
            "jobmatch",
            "--candidates",
            "roster.json",
            "match",
            "--role",
            "Kock",
        ])
        .expect("valid arguments");

        assert_eq!(config.candidates, PathBuf::from("roster.json"));
        assert_eq!(
            config.resolved_command(),
            Command::Match {
                role: "Kock".to_string(),
                education: String::new(),
            }
        );
    }

    #[test]
    fn serve_takes_listen_addr() {
        let config = Config::try_parse_from([
            "jobmatch",
            "--candidates",
            "roster.json",
            "--access-password",
            "demo123",
            "serve",
            "--listen-addr",
            "127.0.0.1:9000",
        ])
        .expect("valid arguments");

        assert_eq!(config.access_password.as_deref(), Some("demo123"));
        assert_eq!(
            config.resolved_command(),
            Command::Serve {
                listen_addr: "127.0.0.1:9000".to_string(),
            }
        );
    }
}
