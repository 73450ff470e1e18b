use anyhow::Context as _;
use camino::Utf8PathBuf;
use clap::{Args, Parser};
use commalint_db::SpacingConfig;

#[derive(Parser)]
#[command(version, about = "Checks the whitespace around commas")]
pub(crate) enum Options {
    /// Report comma spacing problems in the given files.
    Check(CheckArgs),
}

#[derive(Args)]
pub(crate) struct CheckArgs {
    #[arg(required = true)]
    pub(crate) paths: Vec<Utf8PathBuf>,

    /// Rewrite the files with every available fix applied.
    #[arg(long)]
    pub(crate) fix: bool,

    /// JSON file with the rule options, e.g. `{ "before": false, "after": true }`.
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<Utf8PathBuf>,

    /// Require a space before each comma.
    #[arg(long)]
    pub(crate) before: bool,

    /// Forbid whitespace after each comma.
    #[arg(long)]
    pub(crate) no_after: bool,

    /// Skip the after-check for a comma that starts its line.
    #[arg(long)]
    pub(crate) ignore_if_first_token_of_line: bool,
}

impl CheckArgs {
    /// The options file, if any, with the command-line flags applied on top.
    pub(crate) fn config(&self) -> anyhow::Result<SpacingConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{path}`"))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("invalid configuration in `{path}`"))?
            }
            None => SpacingConfig::default(),
        };

        if self.before {
            config.require_space_before = true;
        }
        if self.no_after {
            config.require_space_after = false;
        }
        if self.ignore_if_first_token_of_line {
            config.exempt_line_leading_separator = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_args(args: &[&str]) -> CheckArgs {
        let Options::Check(args) =
            Options::try_parse_from(["commalint", "check"].iter().chain(args)).unwrap();
        args
    }

    #[test]
    fn flags_override_defaults() {
        let args = check_args(&["a.js", "b.js", "--before", "--no-after"]);

        assert_eq!(args.paths, [Utf8PathBuf::from("a.js"), Utf8PathBuf::from("b.js")]);
        assert!(!args.fix);
        assert_eq!(
            args.config().unwrap(),
            SpacingConfig {
                require_space_before: true,
                require_space_after: false,
                exempt_line_leading_separator: false,
            }
        );
    }

    #[test]
    fn no_flags_is_default() {
        let args = check_args(&["a.js", "--fix"]);

        assert!(args.fix);
        assert_eq!(args.config().unwrap(), SpacingConfig::default());
    }

    #[test]
    fn paths_are_required() {
        assert!(Options::try_parse_from(["commalint", "check"]).is_err());
    }

    #[test]
    fn missing_config_file() {
        let args = check_args(&["a.js", "--config", "does/not/exist.json"]);
        let error = args.config().unwrap_err();

        assert!(error.to_string().contains("does/not/exist.json"), "{error:#}");
    }
}
