//! The `builder` module contains the core logic for the tool: the per-platform
//! compiler profiles, the synthesis of the g++ command line, and the runner
//! that executes it and reports success or failure.

pub mod command;
pub mod gcc_runner;

pub mod linux_handler;
pub mod mac_handler;
pub mod windows_handler;

use command::PlatformProfile;

/// A trait representing the compiler configuration for one platform.
///
/// Each supported platform (Linux, macOS, Windows/MinGW) has an implementation
/// of this trait that recognizes the platform identifier and supplies the
/// matching set of compiler flags.
pub trait PlatformHandler {
    /// Returns the canonical name of the platform this handler manages.
    fn platform_name(&self) -> &'static str;

    /// Detects whether the given platform identifier belongs to this handler.
    fn detect(&self, platform_id: &str) -> bool;

    /// Returns the compiler profile for this platform.
    fn profile(&self) -> PlatformProfile;
}

use linux_handler::LinuxHandler;
use mac_handler::MacHandler;
use windows_handler::WindowsHandler;

/// Get all available platform handlers
pub fn get_all_handlers() -> Vec<Box<dyn PlatformHandler>> {
    vec![
        Box::new(LinuxHandler::new()),
        Box::new(MacHandler::new()),
        Box::new(WindowsHandler::new()),
    ]
}

/// Find the handler that recognizes the given platform identifier.
///
/// Returns `None` for an unrecognized platform; the caller degrades to the
/// default profile rather than failing.
pub fn detect_platform_handler(platform_id: &str) -> Option<Box<dyn PlatformHandler>> {
    get_all_handlers()
        .into_iter()
        .find(|handler| handler.detect(platform_id))
}

/// The host platform identifier, normalized to the names the handlers
/// recognize (`uname -s` style, as the original script saw them).
pub fn host_platform() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        other => other,
    }
}
