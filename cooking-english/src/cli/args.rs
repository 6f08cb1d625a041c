//! CLI argument definitions.
//!
//! Every option has a default, so running the binary with no arguments
//! builds `content/` into `docs/`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::build::BuildOptions;
use crate::observability::LogFormat;
use cooking_english_pages::{EscapeMode, RenderOptions};

/// Build the 30-day cooking-English site from lesson JSON.
#[derive(Parser, Debug)]
#[command(name = "cooking-english", author, version, about)]
pub struct Cli {
    /// Directory holding `day{N}.json` lesson documents.
    #[arg(long, default_value = "content", env = "COOKING_ENGLISH_CONTENT")]
    pub content: PathBuf,

    /// Directory the HTML pages are written to.
    #[arg(long, default_value = "docs", env = "COOKING_ENGLISH_OUTPUT")]
    pub output: PathBuf,

    /// Insert lesson text without HTML escaping (authored content only).
    #[arg(long, env = "COOKING_ENGLISH_TRUSTED_CONTENT")]
    pub trusted_content: bool,

    /// Fail a day whose content has validation issues instead of warning.
    #[arg(long, env = "COOKING_ENGLISH_STRICT")]
    pub strict: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "COOKING_ENGLISH_COLOR")]
    pub color: ColorChoice,

    /// Diagnostic log format.
    #[arg(long, default_value = "human", env = "COOKING_ENGLISH_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Converts parsed arguments into build options.
    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            content_dir: self.content.clone(),
            output_dir: self.output.clone(),
            render: RenderOptions {
                escape: if self.trusted_content {
                    EscapeMode::Trusted
                } else {
                    EscapeMode::Escaped
                },
            },
            strict: self.strict,
            quiet: self.quiet,
        }
    }
}

/// Color output choice.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["cooking-english"]).unwrap();
        assert_eq!(cli.content, PathBuf::from("content"));
        assert_eq!(cli.output, PathBuf::from("docs"));
        assert!(!cli.trusted_content);
        assert!(!cli.strict);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.log_format, LogFormat::Human);
    }

    #[test]
    fn default_build_escapes_content() {
        let cli = Cli::try_parse_from(["cooking-english"]).unwrap();
        assert_eq!(cli.build_options().render.escape, EscapeMode::Escaped);
    }

    #[test]
    fn trusted_content_flag() {
        let cli = Cli::try_parse_from(["cooking-english", "--trusted-content", "--strict"]).unwrap();
        let options = cli.build_options();
        assert_eq!(options.render.escape, EscapeMode::Trusted);
        assert!(options.strict);
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["cooking-english", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn custom_directories() {
        let cli = Cli::try_parse_from([
            "cooking-english",
            "--content",
            "lessons",
            "--output",
            "site",
            "--log-format",
            "json",
        ])
        .unwrap();
        let options = cli.build_options();
        assert_eq!(options.content_dir, PathBuf::from("lessons"));
        assert_eq!(options.output_dir, PathBuf::from("site"));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["cooking-english", "extra"]).is_err());
    }
}
