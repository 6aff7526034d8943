//! Photos CLI application entry point
//!
//! Loads the library (seeding it on first run), logs the user in, runs one
//! command and saves the library on the way out.
//!
//! # Usage
//!
//! ```bash
//! # List your albums
//! photos -u stock albums
//!
//! # Add a photo with tags
//! photos -u bob add Trip ~/pics/beach.jpg -c "Beach" -t person=alice -t location=nice
//!
//! # Search all albums and keep the results
//! photos -u bob search --from 01/01/2024 --to 03/01/2024 --person alice --save-as "Alice 2024"
//!
//! # Send a photo to another user's inbox
//! photos -u bob send ~/pics/beach.jpg carol --album Trip
//!
//! # Admin: manage users
//! photos -u admin admin create-user carol
//! ```
//!
//! # Configuration
//!
//! On first run, photos will prompt for initial setup. Configuration is stored in
//! the user's config directory (`~/.config/photos/config.toml` on Linux).

use dialoguer::{Password, theme::ColorfulTheme};
use photos::{
    PhotosError,
    cli::{AdminCommands, Cli, Commands, ConfigCommands},
    commands::{self, transfer::TransferKind},
    config::PhotosConfig,
    db::{self, BootstrapOptions, Backend},
    model::FsResources,
};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt};

type Result<T> = std::result::Result<T, PhotosError>;

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt_password(prompt: &str) -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PhotosError::InvalidInput(format!("Failed to read password: {e}")))
}

fn handle_config_command(
    mut config: PhotosConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    const KEYS: &str = "data_dir, backend, stock_dir, quiet";

    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                PhotosError::InvalidInput("Invalid format. Use: photos config set key=value".into())
            })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "data_dir" => config.data_dir = value.into(),
                "stock_dir" => config.stock_dir = value.into(),
                "backend" => {
                    config.backend = value
                        .parse::<Backend>()
                        .map_err(PhotosError::InvalidInput)?;
                }
                "quiet" => {
                    config.quiet = value.parse::<bool>().map_err(|_| {
                        PhotosError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                }
                _ => {
                    return Err(PhotosError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: {KEYS}"
                    )));
                }
            }
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "data_dir" => println!("{}", config.data_dir.display()),
            "stock_dir" => println!("{}", config.stock_dir.display()),
            "backend" => println!("{:?}", config.backend),
            "quiet" => println!("{}", config.quiet),
            _ => {
                return Err(PhotosError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {KEYS}"
                )));
            }
        },
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| PhotosError::InvalidInput(format!("Failed to render config: {e}")))?;
            print!("{rendered}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let mut config = PhotosConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;

    if let Commands::Config { command } = &cli.command {
        return handle_config_command(config, command, quiet);
    }

    if let Some(dir) = &cli.data_dir {
        config.data_dir.clone_from(dir);
    }
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }
    if let Some(dir) = &cli.stock_dir {
        config.stock_dir.clone_from(dir);
    }
    debug!(?config, "effective configuration");

    let resources = FsResources;
    let store = db::open_store(config.backend, &config.data_dir)?;
    let options = BootstrapOptions {
        stock_dir: config.stock_dir.clone(),
    };
    let mut library = db::load_or_bootstrap(store.as_ref(), &options, &resources)?;

    let username = cli
        .user
        .clone()
        .ok_or_else(|| PhotosError::InvalidInput("Specify a user with --user".into()))?;
    let password = match &cli.password {
        Some(password) => password.clone(),
        None => prompt_password("Password")?,
    };
    let user = commands::account::login(&library, &username, &password)?;
    if matches!(cli.command, Commands::Admin { .. }) {
        commands::account::require_admin(&library, &user)?;
    } else {
        commands::account::require_regular_user(&library, &user)?;
    }

    match &cli.command {
        Commands::Albums => commands::albums::list(&library, &user, quiet)?,
        Commands::Album { command } => {
            commands::albums::execute(&mut library, &user, command, quiet)?;
        }
        Commands::Photos { container } => {
            let container = commands::require_container(container)?;
            commands::albums::photos(&library, &user, &container, quiet)?;
        }
        Commands::Add { album, file, caption, tags } => {
            commands::photo::add(
                &mut library,
                &user,
                album,
                file,
                caption.as_deref(),
                tags,
                &resources,
                quiet,
            )?;
        }
        Commands::Remove { file, container } => {
            let container = commands::require_container(container)?;
            commands::photo::remove(&mut library, &user, &container, file, &resources, quiet)?;
        }
        Commands::Caption { file, caption } => {
            commands::photo::caption(&mut library, file, caption, &resources, quiet)?;
        }
        Commands::Tag { file, name, value } => {
            commands::photo::tag(&mut library, file, name, value, &resources, quiet)?;
        }
        Commands::Untag { file, name, value } => {
            commands::photo::untag(&mut library, file, name, value, &resources, quiet)?;
        }
        Commands::Edit { file, caption, rows } => {
            commands::photo::edit(&mut library, file, caption, rows, &resources, quiet)?;
        }
        Commands::Sort { order, container } => {
            let container = commands::require_container(container)?;
            commands::albums::sort(&mut library, &user, &container, (*order).into(), quiet)?;
        }
        Commands::Search(args) => commands::search::execute(&mut library, &user, args, quiet)?,
        Commands::Copy { file, target, source } => {
            let source = commands::require_container(source)?;
            commands::transfer::execute(
                &mut library,
                &user,
                TransferKind::Copy,
                &source,
                file,
                target,
                &resources,
                quiet,
            )?;
        }
        Commands::Move { file, target, source } => {
            let source = commands::require_container(source)?;
            commands::transfer::execute(
                &mut library,
                &user,
                TransferKind::Move,
                &source,
                file,
                target,
                &resources,
                quiet,
            )?;
        }
        Commands::Send { file, recipient, source } => {
            let source = commands::require_container(source)?;
            commands::transfer::execute(
                &mut library,
                &user,
                TransferKind::Send,
                &source,
                file,
                recipient,
                &resources,
                quiet,
            )?;
        }
        Commands::View { container, file, next, previous } => {
            let container = commands::require_container(container)?;
            commands::view::execute(
                &library,
                &user,
                &container,
                file.as_deref(),
                *next,
                *previous,
                &resources,
            )?;
        }
        Commands::Admin { command } => {
            let new_password = match command {
                AdminCommands::CreateUser {
                    new_password: Some(password),
                    ..
                } => Some(password.clone()),
                AdminCommands::CreateUser {
                    new_password: None, ..
                } => Some(prompt_password("New user's password")?),
                _ => None,
            };
            let new_password = new_password.as_deref();
            commands::account::execute(&mut library, &user, command, new_password, quiet)?;
        }
        Commands::Config { .. } => {}
    }

    db::save_library(store.as_ref(), &mut library)?;
    Ok(())
}
