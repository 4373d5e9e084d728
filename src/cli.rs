//! Command-line flags for the server binary.
//!
//! Flags take precedence over values loaded from the environment.

use clap::Parser;

use crate::config::{Config, LogFormat, NotFoundMode};

/// Useful-links REST service.
#[derive(Debug, Parser)]
#[command(name = "links-uteis")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bind address, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub listen: Option<String>,

    /// Log output format
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Answer missing links with an empty 200 (`empty`) or a 404 (`status`)
    #[arg(long)]
    pub not_found_mode: Option<NotFoundMode>,

    /// Start with an empty registry instead of the default links
    #[arg(long)]
    pub no_seed: bool,
}

impl Cli {
    /// Overlays the flags that were given onto `config`.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        if let Some(mode) = self.not_found_mode {
            config.not_found_mode = mode;
        }
        if self.no_seed {
            config.seed_links = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["links-uteis"]).unwrap();
        let config = cli.apply(Config::default());

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.not_found_mode, NotFoundMode::Empty);
        assert!(config.seed_links);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "links-uteis",
            "--listen",
            "127.0.0.1:9999",
            "--log-format",
            "json",
            "--not-found-mode",
            "status",
            "--no-seed",
        ])
        .unwrap();

        let config = cli.apply(Config::default());

        assert_eq!(config.listen_addr, "127.0.0.1:9999");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.not_found_mode, NotFoundMode::Status);
        assert!(!config.seed_links);
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let result = Cli::try_parse_from(["links-uteis", "--not-found-mode", "teapot"]);
        assert!(result.is_err());
    }
}
