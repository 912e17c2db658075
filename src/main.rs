mod config;
mod error;
mod file_utils;
mod manifest;
mod sort_key;

use config::ManifestConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env().init();

    let config = ManifestConfig::default();
    let current_dir = std::env::current_dir()?;

    let count = manifest::generate(&current_dir, &config)?;
    println!(
        "Success! {} files indexed in {}",
        count,
        config.output_file.display()
    );

    Ok(())
}
