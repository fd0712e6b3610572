//! CLI argument definitions for `themekit`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "themekit",
    version,
    about = "Pick a color theme, dark mode and font, and keep the choice across runs",
    long_about = "Pick a color theme, dark mode and font for a site.\n\n\
                  The selection is stored in the user config directory and \
                  restored on the next run. `themekit css` prints the CSS \
                  custom properties for the current selection."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Selection file to use instead of the one in the config directory.
    #[arg(long = "state-file", value_name = "PATH", global = true)]
    pub state_file: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List available themes.
    Themes,

    /// List available fonts.
    Fonts,

    /// Show the current selection and its resolved colors.
    Show(ShowArgs),

    /// Switch to another theme.
    Use {
        /// Theme id, as listed by `themekit themes`.
        #[arg(value_name = "THEME")]
        theme: String,
    },

    /// Toggle dark mode, or set it with --on/--off.
    Dark(DarkArgs),

    /// Switch to another font.
    Font {
        /// Font id, as listed by `themekit fonts`.
        #[arg(value_name = "FONT")]
        font: String,
    },

    /// Print CSS custom properties for the current selection.
    Css,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ShowFormatArg,
}

#[derive(Args)]
pub struct DarkArgs {
    /// Turn dark mode on.
    #[arg(long = "on", conflicts_with = "off")]
    pub on: bool,

    /// Turn dark mode off.
    #[arg(long = "off")]
    pub off: bool,
}

impl DarkArgs {
    /// Requested state, or `None` to toggle.
    pub fn requested(&self) -> Option<bool> {
        match (self.on, self.off) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShowFormatArg {
    Text,
    Json,
    Css,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn dark_flags_conflict() {
        let result = Cli::try_parse_from(["themekit", "dark", "--on", "--off"]);
        assert!(result.is_err());
    }

    #[test]
    fn dark_without_flags_toggles() {
        let cli = Cli::try_parse_from(["themekit", "dark"]).unwrap();
        let Command::Dark(args) = cli.command else {
            panic!("expected dark command");
        };
        assert_eq!(args.requested(), None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["themekit", "use", "ocean-blue", "--state-file", "sel.toml"])
                .unwrap();
        assert_eq!(cli.state_file, Some(PathBuf::from("sel.toml")));
        assert!(matches!(cli.command, Command::Use { ref theme } if theme == "ocean-blue"));
    }
}
