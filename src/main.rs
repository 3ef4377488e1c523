// SPDX-License-Identifier: MPL-2.0
use podium::app::{self, paths, Boot, Flags};
use podium::logging::{self, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Podium - speaker showcase

USAGE:
  podium [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --lang <LOCALE>      Interface language (e.g. en-US, fr)
      --content <FILE>     Content manifest to show instead of the built-in one
      --config-dir <DIR>   Directory holding settings.toml
      --reduce-motion      Disable carousel animations
  -v, --verbose            More logging (-vv for trace)

KEYS:
  F5, Ctrl+R               Reload content
  Left, Right              Previous / next video
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let mut verbosity: u8 = 0;
    if args.contains("-vv") {
        verbosity = 2;
    }
    while args.contains(["-v", "--verbose"]) {
        verbosity = verbosity.saturating_add(1);
    }
    logging::init_logging(&LogConfig::from_verbosity(verbosity));

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };
    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());

    let boot = match Boot::prepare(flags) {
        Ok(boot) => boot,
        Err(err) => {
            tracing::error!(%err, "could not prepare the page");
            return ExitCode::FAILURE;
        }
    };

    match app::run(boot) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        content: args.opt_value_from_str::<_, PathBuf>("--content")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        reduce_motion: args.contains("--reduce-motion"),
    })
}
