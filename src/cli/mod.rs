use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "games-hub")]
#[command(author, version, about = "Browse and play web games from a static catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog URL or path, overrides the configured one for this run
    #[arg(short, long, global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the GUI (default)
    Gui,

    /// Print the games matching a search
    List {
        /// Case-insensitive text to look for in titles and descriptions
        query: Option<String>,
    },

    /// Show status and configuration
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_gui() {
        let cli = Cli::try_parse_from(["games-hub"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_list_with_query_and_catalog_override() {
        let cli =
            Cli::try_parse_from(["games-hub", "list", "chess", "--catalog", "games.json"]).unwrap();
        assert_eq!(cli.catalog.as_deref(), Some("games.json"));
        match cli.command {
            Some(Commands::List { query }) => assert_eq!(query.as_deref(), Some("chess")),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["games-hub", "install", "chess"]).is_err());
    }
}
