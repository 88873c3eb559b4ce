// SPDX-License-Identifier: MPL-2.0
use iced_quiz::app::{self, Flags};

const HELP: &str = "\
IcedQuiz

USAGE:
  iced_quiz [OPTIONS]

OPTIONS:
  --lang <LOCALE>         UI and speech language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --questions <FILE>      Question file in TOML format
  --i18n-dir <DIR>        Directory with extra Fluent .ftl files
  -h, --help              Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        questions: args.opt_value_from_str("--questions")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {:?}", rest);
    }
    Ok(Some(flags))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    if let Err(err) = app::run(flags) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
