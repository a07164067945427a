//! Path Resampler.
//!
//! Tastet einen per Kommandozeile angegebenen Bézier-Pfad ab und gibt die
//! gleichmäßig verteilten Punkte samt Segment-Bereichen als JSON aus.

use anyhow::Result;
use path_resampler::cli::CliRequest;
use path_resampler::SamplerOptions;

fn main() -> Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Path Resampler v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SamplerOptions::config_path();
        let options = SamplerOptions::load_from_file(&config_path);

        let request = CliRequest::parse(std::env::args().skip(1))?;
        let json = request.run(&options)?;
        println!("{}", json);
        Ok(())
    }
}
