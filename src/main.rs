use std::path::{Path, PathBuf};

use clap::{crate_description, Parser, Subcommand};
use log::info;
use user_color::{
    config::Config, constants::CONFIG_FILE_NAME, generate_random_color,
    utils::set_global_log_level, JsonFileStore, UserColorProvider,
};

#[derive(Parser)]
#[clap(author, version, about = crate_description!(), long_about = None)]
struct Args {
    /// Path to the configuration file. The sample configuration is used when it doesn't exist
    #[clap(long, parse(from_os_str), default_value = CONFIG_FILE_NAME)]
    config: PathBuf,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a sample configuration file with all the values pre-filled
    CreateSampleConfig {
        /// Create the configuration file even if it already exists
        #[clap(long, takes_value = false)]
        force: bool,
    },
    /// Print the user's color, making one up and saving it if there is none yet
    Get,
    /// Print freshly generated colors without saving them
    Random {
        /// How many colors to print, one per line
        #[clap(long, default_value_t = 1)]
        count: usize,
    },
}

macro_rules! clean_panic {
    ($message:literal$(,)? $($arg:expr),*) => {
        {
            use std::process;
            eprintln!($message, $($arg),*);
            process::exit(1);
        }
    }
}

fn create_sample_config(config_path: &Path, force: bool) {
    if config_path.exists() && !force {
        clean_panic!(
            "`{:?}` already exists! To overwrite it, add a `--force` flag.",
            config_path
        );
    }
    Config::sample().save(config_path).unwrap_or_else(|error| {
        clean_panic!("Couldn't write `{:?}`! Details: {}", config_path, error);
    });
}

fn load_config(config_path: &Path) -> Config {
    let config = Config::load_or_sample(config_path).unwrap_or_else(|error| {
        clean_panic!(
            "Couldn't use `{:?}`! Fix it or recreate it using `user-color \
            create-sample-config --force`. Details: {}",
            config_path,
            error
        );
    });
    set_global_log_level(&config.log_level);
    config
}

fn main() {
    let args = Args::parse();

    match args.command {
        Command::CreateSampleConfig { force } => create_sample_config(&args.config, force),
        Command::Get => {
            let config = load_config(&args.config);
            info!("Using {:?} as the store", config.store_path);
            let mut provider =
                UserColorProvider::with_key(JsonFileStore::new(&config.store_path), config.key);
            let color = provider.get_user_color().unwrap_or_else(|error| {
                clean_panic!(
                    "Couldn't get the user's color from `{}`! Details: {}",
                    config.store_path,
                    error
                );
            });
            println!("{}", color);
        }
        Command::Random { count } => {
            for _ in 0..count {
                println!("{}", generate_random_color());
            }
        }
    }
}
