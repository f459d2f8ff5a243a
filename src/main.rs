use clap::Parser;
use moodtune::core::config::{self, CliOverrides, MoodTuneConfig};
use moodtune::core::launch::LaunchParams;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "moodtune", about = "Playlists that match your mood")]
struct Args {
    /// Backend base URL
    #[arg(long)]
    backend_url: Option<String>,

    /// URL the client was opened with; its access_token query parameter is captured
    #[arg(long)]
    launch_url: Option<String>,

    /// Access token to use instead of one from the launch URL
    #[arg(long)]
    access_token: Option<String>,

    /// Only accept exact #RRGGBB mood colors when picking text contrast
    #[arg(long)]
    strict_colors: bool,

    /// Print redirect URLs instead of opening a browser
    #[arg(long)]
    no_browser: bool,

    /// Log level for moodtune.log
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to moodtune.log in current directory.
    // The logger itself passes everything; the active level is set through
    // log::set_max_level so the config file can still change it.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("moodtune.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(level_filter(
        args.log_level.as_deref().unwrap_or(config::DEFAULT_LOG_LEVEL),
    ));

    let loaded = config::load_config();
    if let Err(e) = &loaded {
        log::warn!("Ignoring config file: {}", e);
    }
    let cli = CliOverrides {
        backend_url: args.backend_url,
        access_token: args.access_token,
        strict_colors: args.strict_colors,
        no_browser: args.no_browser,
        log_level: args.log_level,
    };
    let resolved = match &loaded {
        Ok(file_config) => config::resolve(file_config, &cli),
        Err(_) => config::resolve(&MoodTuneConfig::default(), &cli),
    };
    log::set_max_level(level_filter(&resolved.log_level));
    log::info!("MoodTune starting up with backend: {}", resolved.backend_url);

    // Launch URL token first, then --access-token / MOODTUNE_ACCESS_TOKEN
    let launch = match args.launch_url.as_deref().map(LaunchParams::from_url) {
        Some(Ok(params)) => params,
        Some(Err(e)) => {
            log::warn!("{}", e);
            LaunchParams::default()
        }
        None => LaunchParams::default(),
    }
    .or_access_token(resolved.access_token.clone());
    log::debug!("Access token captured: {}", launch.access_token.is_some());

    moodtune::tui::run(resolved, launch)
}

/// Parses a level name, falling back to debug for anything unrecognized.
fn level_filter(name: &str) -> LevelFilter {
    name.parse::<LevelFilter>().unwrap_or(LevelFilter::Debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter("info"), LevelFilter::Info);
        assert_eq!(level_filter("TRACE"), LevelFilter::Trace);
        assert_eq!(level_filter("loud"), LevelFilter::Debug);
        assert_eq!(level_filter(config::DEFAULT_LOG_LEVEL), LevelFilter::Debug);
    }
}
