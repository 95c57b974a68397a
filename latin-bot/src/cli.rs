//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "latin-bot")]
#[command(about = "Latin <-> English dictionary bot for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Look one word up in both directions and print the result.
    Lookup {
        word: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["latin-bot", "run", "--token", "abc"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert_eq!(token.as_deref(), Some("abc")),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["latin-bot", "lookup", "rosa"]).unwrap();
        match cli.command {
            Commands::Lookup { word } => assert_eq!(word, "rosa"),
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_lookup_requires_word() {
        assert!(Cli::try_parse_from(["latin-bot", "lookup"]).is_err());
    }
}
