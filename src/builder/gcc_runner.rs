use std::path::Path;

use super::command::CompileCommand;
use crate::utils::command_runner::{self, exit_code_for, run_compiler};

pub struct GccRunner;

impl GccRunner {
    pub fn new() -> Self {
        GccRunner
    }

    /// Echo the platform and the full command line to stdout before running
    /// it, framed the way the old build script did. The printed line is the
    /// exact command a user can paste into a terminal to repeat the build.
    pub fn announce(platform_label: &str, command: &CompileCommand) {
        println!("============v (Command running on terminal) v===========================");
        println!("Compiling on: {}", platform_label);
        println!("{}", command.shell_line());
        println!("========================================================================");
    }

    /// Run the compiler for the given command, blocking until it finishes.
    ///
    /// The compiler's stdout/stderr are inherited so its diagnostics reach the
    /// user's terminal untouched. Returns the derived exit code: 0 if the
    /// compiler exited with status 0, 1 for anything else (including signal
    /// termination).
    pub fn compile(&self, command: &CompileCommand, project_path: &Path) -> Result<i32, String> {
        let (program, args) = command.argv();

        if !command_runner::is_command_in_path(&program) {
            return Err(format!(
                "{} not found in PATH. Please ensure a C++ toolchain is installed.",
                program
            ));
        }

        let status = run_compiler(&program, &args, Some(project_path))?;
        let exit_code = exit_code_for(status.code());

        if exit_code == 0 {
            log::info!("{} exited successfully.", program);
        } else {
            log::error!("{} failed with status: {}", program, status);
        }

        Ok(exit_code)
    }
}
