// SPDX-License-Identifier: MPL-2.0
use pinch_lens::app::{self, paths, Flags};

const HELP: &str = "\
pinch_lens - zoomable image viewer

USAGE:
  pinch_lens [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  PINCH_LENS_CONFIG_DIR  Config directory when --config-dir is not given
  RUST_LOG               Log filter (default: info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = read_option(&mut args, "--lang");
    let config_dir = read_option(&mut args, "--config-dir");

    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_override(config_dir);

    app::run(Flags { lang, file_path })
}

/// Reads an optional `--key value` pair, logging and ignoring malformed input.
fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            log::warn!("ignoring {key}: {error}");
            None
        }
    }
}
