use anyhow::Result;
use boothkit::cli::{self, Command};
use boothkit::{init_logging, Config, SettingsPersistence, BUILD_DATE, VERSION};

fn main() -> Result<()> {
    init_logging()?;

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {:#}\n\n{}", e, cli::USAGE);
            std::process::exit(2);
        }
    };

    match command {
        Command::Help => println!("{}", cli::USAGE),
        Command::Version => println!("boothkit {} (built {})", VERSION, BUILD_DATE),
        Command::Export(args) => {
            let config = match SettingsPersistence::load_default_location() {
                Ok(persistence) => persistence.config().clone(),
                Err(e) => {
                    tracing::warn!("Using default settings: {}", e);
                    Config::default()
                }
            };
            cli::run_export(&args, &config)?;
        }
    }

    Ok(())
}
