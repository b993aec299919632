use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Run the compiler with discrete arguments and wait for it to finish.
///
/// stdout/stderr are inherited: compiler diagnostics go straight to the user's
/// terminal without being captured or transformed.
pub fn run_compiler(
    program: &str,
    args: &[String],
    current_dir: Option<&Path>,
) -> Result<ExitStatus, String> {
    log::debug!(
        "Running command: {} {} (in {:?})",
        program,
        args.join(" "),
        current_dir.unwrap_or_else(|| Path::new("."))
    );

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }

    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    cmd.status().map_err(|e| {
        format!(
            "Failed to execute command '{}': {}. Is it installed and in your PATH?",
            program, e
        )
    })
}

/// Map a subprocess status code to the tool's own exit code: 0 stays 0,
/// anything else (including `None`, i.e. killed by a signal) becomes 1.
pub fn exit_code_for(status_code: Option<i32>) -> i32 {
    match status_code {
        Some(0) => 0,
        _ => 1,
    }
}

pub fn is_command_in_path(command_name: &str) -> bool {
    match Command::new(command_name)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(_) => true,
        Err(e) => {
            if let std::io::ErrorKind::NotFound = e.kind() {
                log::warn!("Command '{}' not found in PATH.", command_name);
                false
            } else {
                // The command might exist but not support --version; assume it
                // exists if the error is anything other than NotFound.
                log::debug!(
                    "Command '{}' check resulted in error (assuming it exists): {}",
                    command_name, e
                );
                true
            }
        }
    }
}
