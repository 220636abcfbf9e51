use microservices_atlas_config::{Config, Origin};
use microservices_atlas_dioxus::ui::{Site, SiteRoot};
use microservices_atlas_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    log_builder(env_logger::Env::default()).init();

    log::info!("microservices-atlas starting up!");

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "microservices-atlas".to_string());
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() > 1 {
        eprintln!("Usage: {program_name} [content-folder-path]");
        process::exit(1);
    }
    let argument = args.first().map(PathBuf::from);

    let config_path = Config::config_path();
    let resolved = match Config::resolve(argument) {
        Ok(Some(resolved)) => resolved,
        Ok(None) => {
            eprintln!("Error: No content path provided and no config file found");
            eprintln!("Usage: {program_name} <content-folder-path>");
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            log::error!("Config::resolve() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program_name} <content-folder-path>");
            process::exit(1);
        }
    };

    let content_path = resolved.config.content_path;
    log::info!("Using content path {}", content_path.display());

    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = match resolved.origin {
            Origin::ConfigFile(path) => format!(" from config file '{}'", path.display()),
            Origin::Argument => String::new(),
        };
        eprintln!(
            "Error: Content path '{}'{source} is invalid: {e}",
            content_path.display()
        );
        process::exit(1);
    }

    // Load errors are shown in the window rather than on stderr
    let library = io::load_library(&content_path).map_err(|e| {
        log::error!("Failed to load content: {e}");
        e.to_string()
    });

    let site = Site {
        content_path,
        library,
        start_page: resolved.config.start_page,
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(site)
        .launch(SiteRoot);
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("microservices-atlas")
        .with_always_on_top(false);

    Config::default().with_window(window)
}

/// `info` unless the filter variable of `env` (normally `RUST_LOG`) says otherwise
fn log_builder(env: env_logger::Env) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info_and_follows_env() {
        let env = || env_logger::Env::new().filter("ATLAS_TEST_LOG_FILTER");

        assert_eq!(log_builder(env()).build().filter(), LevelFilter::Info);

        unsafe {
            env::set_var("ATLAS_TEST_LOG_FILTER", "debug");
        }
        assert_eq!(log_builder(env()).build().filter(), LevelFilter::Debug);

        unsafe {
            env::remove_var("ATLAS_TEST_LOG_FILTER");
        }
    }
}
