use std::io;

fn main() {
    // An invalid config is reported by the command itself; logging falls back to defaults.
    let level = advisor_cli::config::load_with_sources()
        .map(|resolved| resolved.config.log_level)
        .unwrap_or_else(|_| advisor_cli::config::Config::default().log_level);
    advisor_cli::logging::init_logging(&level);

    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = advisor_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
