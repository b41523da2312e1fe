use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2026-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pocket", bin_name = "pocket", version = get_version())]
#[command(about = "Store and organize your code snippets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the snippet collection (defaults to $POCKET_HOME, then the
    /// platform data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new snippet
    #[command(alias = "n")]
    Add {
        /// Title of the snippet
        title: String,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,

        /// Language tag (e.g. python, rust); unknown tags become plaintext
        #[arg(short, long)]
        language: Option<String>,

        /// The code itself (otherwise read from stdin or written in $EDITOR)
        #[arg(short, long, conflicts_with = "file")]
        code: Option<String>,

        /// Read the code from a file
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// List snippets, newest first
    #[command(alias = "ls")]
    List {
        /// Only show snippets whose title, description or language contains this
        query: Option<String>,
    },

    /// Search snippets by title, description or language
    Search { query: String },

    /// Show one or more snippets in full
    #[command(alias = "v")]
    View {
        /// Positions or id prefixes (e.g. 1 3 0f8fad5b)
        #[arg(required = true, num_args = 1..)]
        refs: Vec<String>,
    },

    /// Delete one or more snippets
    #[command(alias = "rm")]
    Delete {
        /// Positions or id prefixes (e.g. 1 3 0f8fad5b)
        #[arg(required = true, num_args = 1..)]
        refs: Vec<String>,
    },

    /// Save snippets as files named after their title and language
    Export {
        /// Positions or id prefixes (e.g. 1 3 0f8fad5b)
        #[arg(required = true, num_args = 1..)]
        refs: Vec<String>,

        /// Output directory (defaults to the configured export-dir, then the current one)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Copy a snippet's code to the clipboard
    #[command(alias = "cp")]
    Copy {
        /// Position or id prefix
        reference: String,
    },

    /// List supported languages and their file extensions
    Languages,

    /// Print the location of the snippet store
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, default-language, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start an interactive session
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_options() {
        let cli = Cli::try_parse_from([
            "pocket", "add", "Hello", "-l", "python", "-c", "print(1)", "-d", "greeting",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                language,
                code,
                description,
                file,
            }) => {
                assert_eq!(title, "Hello");
                assert_eq!(language.as_deref(), Some("python"));
                assert_eq!(code.as_deref(), Some("print(1)"));
                assert_eq!(description.as_deref(), Some("greeting"));
                assert!(file.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn code_and_file_conflict() {
        let res = Cli::try_parse_from(["pocket", "add", "T", "-c", "x", "-f", "a.py"]);
        assert!(res.is_err());
    }

    #[test]
    fn aliases_and_global_flags() {
        let cli = Cli::try_parse_from(["pocket", "rm", "1", "2", "--data-dir", "/tmp/p"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete { ref refs }) if refs.len() == 2));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/p")));

        let cli = Cli::try_parse_from(["pocket", "-v", "ls", "rust"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::List { query: Some(_) })));
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["pocket"]).unwrap();
        assert!(cli.command.is_none());
    }
}
