//! Command-line parsing
//!
//! Turns `web-explorer [command] [args...]` into a [`Command`].

use crate::session::SearchMode;

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the window (no arguments)
    Gui,
    /// Run one search and print it: search [--mode <mode>] <query...>
    Search { query: String, mode: SearchMode },
    /// Show help: help
    Help,
    /// Anything we could not make sense of, with a reason
    Invalid(String),
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Self {
        let Some(cmd) = args.first() else {
            return Command::Gui;
        };

        match cmd.as_str() {
            "search" | "s" => Self::parse_search(&args[1..]),
            "help" | "--help" | "-h" => Command::Help,
            other => Command::Invalid(format!("Unknown command: {}", other)),
        }
    }

    fn parse_search(args: &[String]) -> Self {
        let mut mode = SearchMode::default();
        let mut words: Vec<&str> = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--mode" | "-m" => {
                    let Some(value) = iter.next() else {
                        return Command::Invalid("Missing value for --mode".to_string());
                    };
                    match SearchMode::parse(value) {
                        Some(parsed) => mode = parsed,
                        None => return Command::Invalid(format!("Unknown mode: {}", value)),
                    }
                }
                word => words.push(word),
            }
        }

        let query = words.join(" ");
        if query.trim().is_empty() {
            return Command::Invalid("Usage: web-explorer search [--mode <mode>] <query>".to_string());
        }

        Command::Search { query, mode }
    }

    /// Get help text for all commands
    pub fn help_text() -> &'static str {
        r#"AI Web Explorer - grounded answers with cited sources

Usage: web-explorer [command]

Commands:
  (none)                               Open the explorer window
  search [--mode <mode>] <query...>    Run one search and print the result
  help                                 Show this help message

Modes: all (default), ai, videos

Environment:
  API_KEY                  Gemini API key (required; GEMINI_API_KEY also accepted)
  WEB_EXPLORER_MODEL       Model override
  WEB_EXPLORER_BASE_URL    API endpoint override
  RUST_LOG                 Log filter, e.g. RUST_LOG=web_explorer=debug"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(Command::parse(&[]), Command::Gui);
    }

    #[test]
    fn test_parse_search() {
        match Command::parse(&args(&["search", "who", "wrote", "dune"])) {
            Command::Search { query, mode } => {
                assert_eq!(query, "who wrote dune");
                assert_eq!(mode, SearchMode::All);
            }
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_with_mode() {
        match Command::parse(&args(&["search", "--mode", "videos", "cats"])) {
            Command::Search { query, mode } => {
                assert_eq!(query, "cats");
                assert_eq!(mode, SearchMode::Videos);
            }
            other => panic!("Expected Search, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_errors() {
        assert!(matches!(
            Command::parse(&args(&["search"])),
            Command::Invalid(_)
        ));
        assert!(matches!(
            Command::parse(&args(&["search", "--mode"])),
            Command::Invalid(_)
        ));
        assert!(matches!(
            Command::parse(&args(&["search", "-m", "images", "x"])),
            Command::Invalid(_)
        ));
    }

    #[test]
    fn test_parse_help_and_unknown() {
        assert_eq!(Command::parse(&args(&["--help"])), Command::Help);
        assert_eq!(
            Command::parse(&args(&["launch"])),
            Command::Invalid("Unknown command: launch".to_string())
        );
    }
}
