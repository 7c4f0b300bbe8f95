// SPDX-License-Identifier: MPL-2.0
use aoi_panel::app::{self, Flags};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: aoi_panel [OPTIONS] [LAYERS_JSON]

Options:
  --lang <ID>          Interface language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --token <TOKEN>      Backend access token
  --imagery <URL>      Custom imagery tile URL handed to the editors
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        token: args.opt_value_from_str("--token")?,
        imagery: args.opt_value_from_str("--imagery")?,
        layers_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };
    Ok(Some(flags))
}

fn main() -> ExitCode {
    app::telemetry::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "aoi_panel exited with an error");
            ExitCode::FAILURE
        }
    }
}
