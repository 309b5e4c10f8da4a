// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use iced_folio::app::{self, paths, Flags};
use log::LevelFilter;

const HELP: &str = "\
iced_folio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <id>         Interface language (e.g. en-US, fr)
  --config-dir <dir>  Directory holding settings.toml
  --content <file>    Portfolio TOML file to display
  -h, --help          Print this help
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("iced_folio", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            log::warn!("Ignoring --lang: {err}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("Ignoring --config-dir: {err}");
            None
        }),
        content: args.opt_value_from_str("--content").unwrap_or_else(|err| {
            log::warn!("Ignoring --content: {err}");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    log::info!(
        "Starting iced_folio (lang: {:?}, config dir: {:?})",
        flags.lang,
        paths::get_app_config_dir()
    );

    app::run(flags)
}
