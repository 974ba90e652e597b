use anyhow::{Context, Result};
use leafmark_config::Config;
use leafmark_engine::io;
use std::{env, path::PathBuf, process};

mod render;

fn load_config() -> Config {
    let config_path = Config::config_path();
    match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::debug!("No config at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            log::warn!("Failed to load config file: {e}");
            log::warn!("Falling back to default settings");
            Config::default()
        }
    }
}

fn run(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let config = load_config();

    let source = io::read_source(&input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let html = render::render_page(&source, &config)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    let output = output.or_else(|| {
        config
            .output_dir
            .as_deref()
            .map(|dir| io::output_path_for(&input, dir))
    });

    match output {
        Some(path) => {
            io::write_html(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Created {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let (input, output) = match args.len() {
        2 => (PathBuf::from(&args[1]), None),
        3 => (PathBuf::from(&args[1]), Some(PathBuf::from(&args[2]))),
        _ => {
            eprintln!("Usage: {} <input.md> [output.html]", args[0]);
            eprintln!(
                "Without an output path, pages go to output_dir from {} or to stdout",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    if let Err(e) = run(input, output) {
        log::error!("{e:#}");
        process::exit(1);
    }
}
