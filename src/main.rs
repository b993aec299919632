use cpp_builder::Error;

fn main() {
    if let Err(e) = cpp_builder::run() {
        log::error!("Build failed: {}", e);
        match e {
            Error::Io(io_err) => eprintln!("Error: A file system I/O error occurred: {}", io_err),
            Error::Config(msg) => eprintln!("Error: Configuration issue: {}", msg),
            Error::Compilation(msg) => eprintln!("Error: {}", msg),
            Error::Command(msg) => eprintln!("Error: External command execution failed: {}", msg),
        }
        std::process::exit(1);
    }
}
