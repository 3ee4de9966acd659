use basic_maths::{commands::execute, config::Config, output::report::print_report};

fn main() -> anyhow::Result<()> {
    let config = match Config::parse(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => match err.downcast::<clap::Error>() {
            Ok(clap_err) => clap_err.exit(),
            Err(err) => return Err(err),
        },
    };

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    print_report(&execute(&config.command));

    Ok(())
}
