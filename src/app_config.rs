use clap::Parser;
use std::path::PathBuf;

/// All flags have defaults: running `cpp_builder` with no arguments from the
/// assignment directory behaves exactly like the old `python3 build.py`.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Path to the assignment directory (the one containing src/ and include/)
    #[clap(short, long, value_parser, default_value = ".")]
    pub project_path: PathBuf,

    /// Override the detected host platform (Linux, Darwin, Windows)
    #[clap(long)]
    pub platform: Option<String>,

    /// Override the profile's output executable name
    #[clap(long)]
    pub output_name: Option<String>,

    /// Print the compile command without running the compiler
    #[clap(long)]
    pub dry_run: bool,
}

impl AppConfig {
    pub fn new() -> Self {
        AppConfig::parse()
    }
}
