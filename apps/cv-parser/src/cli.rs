//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_OUTPUT_PATH;

/// Extract a structured candidate record from a PDF resume.
#[derive(Debug, Parser)]
#[command(name = "cv-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Resume to parse (PDF)
    pub input: PathBuf,

    /// Where to write the JSON record
    #[arg(short, long, env = "CV_OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Print the record without writing the output file
    #[arg(long)]
    pub no_save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_input_and_output() {
        let cli = Cli::try_parse_from(["cv-parser", "resume.pdf", "-o", "out.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("resume.pdf"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert!(!cli.no_save);
    }

    #[test]
    fn test_no_save_flag() {
        let cli = Cli::try_parse_from(["cv-parser", "resume.pdf", "--no-save"]).unwrap();
        assert!(cli.no_save);
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["cv-parser"]).is_err());
    }
}
