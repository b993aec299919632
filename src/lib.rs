//! `cpp_builder` is a Rust library and command-line tool that replaces the
//! per-assignment Python build script used in the graphics course. It picks the
//! right `g++` flags for the host platform (Linux, macOS, or Windows/MinGW),
//! prints the full compile command so it can be re-run by hand, executes the
//! compiler, and exits 0 on success or 1 on any failure.
//!
//! ## Features
//! - Platform-specific compiler profiles (defines, include paths, libraries).
//! - Echoes the exact command line before running it.
//! - Invokes g++ with discrete arguments instead of a shell string.
//! - Binary exit code suitable for shell chaining (`cpp_builder && ./prog`).
//!
//! ## Usage (CLI)
//! ```bash
//! # From the assignment directory (the one containing src/ and include/)
//! cpp_builder
//! # Inspect another platform's command line without compiling
//! cpp_builder --platform Windows --dry-run
//! ```

pub mod app_config;
pub mod builder;
pub mod utils;

use app_config::AppConfig;
use builder::command::{CompileCommand, PlatformProfile};
use builder::gcc_runner::GccRunner;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Compilation failed: {0}")]
    Compilation(String),
    #[error("Command execution failed: {0}")]
    Command(String),
}

pub fn run() -> Result<(), Error> {
    // Ensure logger is initialized. If main.rs also does it, this is fine.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init().ok();

    let config = AppConfig::new();

    let platform_id = config
        .platform
        .clone()
        .unwrap_or_else(|| builder::host_platform().to_string());

    log::info!(
        "Building assignment at {:?} for platform {}",
        config.project_path, platform_id
    );
    log::debug!("Using configuration: {:?}", config);

    if !config.project_path.exists() || !config.project_path.is_dir() {
        return Err(Error::Config(format!(
            "Project path {:?} does not exist or is not a directory.",
            config.project_path
        )));
    }

    // An unrecognized platform is not an error: fall back to the default
    // compiler and output name with no platform-specific flags.
    let (platform_label, mut profile) = match builder::detect_platform_handler(&platform_id) {
        Some(handler) => (handler.platform_name().to_string(), handler.profile()),
        None => {
            log::warn!(
                "Unrecognized platform {:?}; using the default compiler with no platform-specific flags.",
                platform_id
            );
            (platform_id.clone(), PlatformProfile::fallback())
        }
    };

    if let Some(name) = &config.output_name {
        profile.output_name = name.clone();
    }

    let sources =
        utils::file_system::find_source_files(&config.project_path).map_err(Error::Config)?;
    log::debug!("Found {} source file(s): {:?}", sources.len(), sources);

    let command = CompileCommand::new(profile, sources);

    // The command echo is program output, not diagnostics: it goes to stdout
    // so the user can copy it and re-run the compilation by hand.
    GccRunner::announce(&platform_label, &command);

    if config.dry_run {
        log::info!("Dry run requested; not invoking the compiler.");
        return Ok(());
    }

    let runner = GccRunner::new();
    let exit_code = runner
        .compile(&command, &config.project_path)
        .map_err(Error::Command)?;

    if exit_code != 0 {
        return Err(Error::Compilation(
            "compiler exited with a nonzero status (see its diagnostics above)".to_string(),
        ));
    }

    log::info!(
        "Compilation finished. Executable written to {:?}",
        command.output_path(&config.project_path)
    );

    Ok(())
}
