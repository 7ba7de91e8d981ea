//! Command-line surface
//!
//! Three flags: `--help`, `--version`, `-d/--debug`. Debug only raises log
//! verbosity, it never changes simulation behavior. Any other parse
//! failure falls back to the default configuration instead of aborting;
//! a bad invocation still launches the game.

use clap::error::ErrorKind;
use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "flee", version, about = "Outrun the horde in a bounded arena")]
pub struct Args {
    /// Run with verbose debug logging on stderr
    #[arg(short = 'd', long)]
    pub debug: bool,
}

/// Parse the process arguments, falling back to defaults on failure.
pub fn parse_or_default() -> Args {
    resolve(Args::try_parse())
}

fn resolve(parsed: Result<Args, clap::Error>) -> Args {
    match parsed {
        Ok(args) => args,
        // Help and version are not failures; print and leave.
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            err.exit()
        }
        Err(_) => Args::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag() {
        let args = resolve(Args::try_parse_from(["flee", "--debug"]));
        assert!(args.debug);
        let args = resolve(Args::try_parse_from(["flee", "-d"]));
        assert!(args.debug);
    }

    #[test]
    fn test_no_flags_defaults() {
        let args = resolve(Args::try_parse_from(["flee"]));
        assert!(!args.debug);
    }

    #[test]
    fn test_bad_arguments_fall_back_to_defaults() {
        let args = resolve(Args::try_parse_from(["flee", "--bogus"]));
        assert!(!args.debug);
        let args = resolve(Args::try_parse_from(["flee", "extra", "positional"]));
        assert!(!args.debug);
    }
}
