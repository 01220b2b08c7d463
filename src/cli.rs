//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Analyze Azure resources to identify those created through the portal (click-ops).
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "clickops-detector",
    version,
    after_help = "Examples:\n  clickops-detector                       # interactive subscription selection\n  clickops-detector --output results.csv  # also export results to CSV"
)]
pub struct Args {
    /// Export results to the specified CSV file (e.g. results.csv)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_output_flag() {
        let args = Args::try_parse_from(["clickops-detector", "--output", "results.csv"])
            .expect("valid args");
        assert_eq!(args.output, Some(PathBuf::from("results.csv")));

        let args = Args::try_parse_from(["clickops-detector"]).expect("no args");
        assert!(args.output.is_none());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["clickops-detector", "--cache"]).is_err());
    }
}
