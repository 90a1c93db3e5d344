use clap::Parser;
use std::path::PathBuf;

/// Parses a directory argument into a `PathBuf`, accepting the empty string
/// (which denotes the current working directory). clap's built-in `PathBuf`
/// value parser rejects empty values, so the `""` default is parsed here.
fn parse_out_dir(value: &str) -> Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}

/// A simple utility for downloading NationStates nation and region dumps.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// NS nation or email address for API identification
    #[arg(short = 'u', long = "user-agent", value_name = "AGENT")]
    pub user_agent: String,

    /// Download the nation dump
    #[arg(short = 'n', long)]
    pub nations: bool,

    /// Download the region dump
    #[arg(short = 'r', long)]
    pub regions: bool,

    /// Output directory for the nation dump
    #[arg(short = 'N', long = "out-dir-nations", value_name = "DIR", default_value = "", value_parser = parse_out_dir)]
    pub out_dir_nations: PathBuf,

    /// Output directory for the region dump
    #[arg(short = 'R', long = "out-dir-regions", value_name = "DIR", default_value = "", value_parser = parse_out_dir)]
    pub out_dir_regions: PathBuf,

    /// Decompress the gzip archives to xml files
    #[arg(short = 'd', long)]
    pub decompress: bool,

    /// Perform a test run without downloading anything; creates blank output files
    #[arg(short = 'D', long)]
    pub dry_run: bool,
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn user_agent_is_required() {
        let result = CliArgs::try_parse_from(["nsdump", "--nations"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_are_off_and_cwd() {
        let args = CliArgs::try_parse_from(["nsdump", "-u", "Testlandia"]).unwrap();
        assert_eq!("Testlandia", args.user_agent);
        assert!(!args.nations);
        assert!(!args.regions);
        assert!(!args.decompress);
        assert!(!args.dry_run);
        assert_eq!(Path::new(""), args.out_dir_nations);
        assert_eq!(Path::new(""), args.out_dir_regions);
    }

    #[test]
    fn long_flags() {
        let args = CliArgs::try_parse_from([
            "nsdump",
            "--user-agent",
            "admin@example.org",
            "--nations",
            "--regions",
            "--out-dir-nations",
            "/data/nations",
            "--out-dir-regions",
            "/data/regions",
            "--decompress",
            "--dry-run",
        ])
        .unwrap();
        assert!(args.nations);
        assert!(args.regions);
        assert!(args.decompress);
        assert!(args.dry_run);
        assert_eq!(Path::new("/data/nations"), args.out_dir_nations);
        assert_eq!(Path::new("/data/regions"), args.out_dir_regions);
    }

    #[test]
    fn short_aliases() {
        let args = CliArgs::try_parse_from([
            "nsdump", "-u", "Testlandia", "-n", "-r", "-N", "out", "-R", "out", "-d", "-D",
        ])
        .unwrap();
        assert!(args.nations && args.regions && args.decompress && args.dry_run);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let result = CliArgs::try_parse_from(["nsdump", "-u", "Testlandia", "--resume"]);
        assert!(result.is_err());
    }
}
