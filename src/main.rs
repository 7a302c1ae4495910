use smartcalc::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();
    log::info!("starting SmartCalc {}", env!("CARGO_PKG_VERSION"));

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        i18n_dir: args.opt_value_from_str("--i18n-dir").unwrap_or(None),
    };

    app::run(flags)
}
