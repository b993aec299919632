use std::path::Path;

/// The fixed source glob, kept for the echoed command line. Execution expands
/// it to discrete file paths instead of handing it to a shell.
pub const SOURCE_GLOB: &str = "./src/*.cpp";

const DEFAULT_COMPILER: &str = "g++ -g -std=c++17";
const DEFAULT_OUTPUT_NAME: &str = "prog";

/// The set of compiler flags associated with one platform.
///
/// All fields are plain strings and any of them may be empty; no validation or
/// quoting is applied to their contents.
#[derive(Debug, Clone)]
pub struct PlatformProfile {
    pub compiler_invocation: String,
    pub preprocessor_defines: String,
    pub include_paths: String,
    pub linked_libraries: String,
    pub output_name: String,
}

impl PlatformProfile {
    /// Profile used when the platform identifier is not recognized: the
    /// default compiler and output name with every supplementary field empty.
    pub fn fallback() -> Self {
        PlatformProfile {
            compiler_invocation: DEFAULT_COMPILER.to_string(),
            preprocessor_defines: String::new(),
            include_paths: String::new(),
            linked_libraries: String::new(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

/// A fully synthesized compile command: a profile plus the enumerated source
/// files it will build.
#[derive(Debug, Clone)]
pub struct CompileCommand {
    profile: PlatformProfile,
    sources: Vec<String>,
}

impl CompileCommand {
    pub fn new(profile: PlatformProfile, sources: Vec<String>) -> Self {
        CompileCommand { profile, sources }
    }

    pub fn output_name(&self) -> &str {
        &self.profile.output_name
    }

    /// The command as one shell line, joined in the fixed field order the old
    /// build script used. The spacing artifacts (a double space after the
    /// output name, a trailing space when there are no libraries) are kept so
    /// the echoed line stays byte-identical to what the script printed.
    pub fn shell_line(&self) -> String {
        format!(
            "{} {} -o {}  {} {} {}",
            self.profile.compiler_invocation,
            self.profile.preprocessor_defines,
            self.profile.output_name,
            self.profile.include_paths,
            SOURCE_GLOB,
            self.profile.linked_libraries,
        )
    }

    /// The command as a program name plus discrete arguments, for execution
    /// without a shell. Each profile field is split on whitespace; empty
    /// fields contribute no tokens. The enumerated source files stand in for
    /// the glob, in the same position it held on the shell line.
    pub fn argv(&self) -> (String, Vec<String>) {
        let mut compiler_tokens = self.profile.compiler_invocation.split_whitespace();
        let program = compiler_tokens.next().unwrap_or("g++").to_string();

        let mut args: Vec<String> = compiler_tokens.map(str::to_string).collect();
        args.extend(self.profile.preprocessor_defines.split_whitespace().map(str::to_string));
        args.push("-o".to_string());
        args.push(self.profile.output_name.clone());
        args.extend(self.profile.include_paths.split_whitespace().map(str::to_string));
        args.extend(self.sources.iter().cloned());
        args.extend(self.profile.linked_libraries.split_whitespace().map(str::to_string));

        (program, args)
    }

    /// Path of the executable this command produces, relative to the
    /// directory the compiler runs in.
    pub fn output_path(&self, project_path: &Path) -> std::path::PathBuf {
        project_path.join(&self.profile.output_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::linux_handler::LinuxHandler;
    use crate::builder::mac_handler::MacHandler;
    use crate::builder::windows_handler::WindowsHandler;
    use crate::builder::PlatformHandler;

    fn command_for(profile: PlatformProfile) -> CompileCommand {
        CompileCommand::new(profile, vec!["./src/main.cpp".to_string()])
    }

    #[test]
    fn linux_shell_line_matches_legacy_script() {
        let cmd = command_for(LinuxHandler::new().profile());
        assert_eq!(
            cmd.shell_line(),
            "g++ -g -std=c++17 -D LINUX -o prog  -I ./include/ -I ./../../common/thirdparty/glm/ ./src/*.cpp "
        );
    }

    #[test]
    fn windows_profile_names_exe_and_links_mingw_after_sources() {
        let profile = WindowsHandler::new().profile();
        // No debug flag on Windows.
        assert!(!profile.compiler_invocation.contains("-g "));

        let cmd = command_for(profile);
        assert_eq!(cmd.output_name(), "prog.exe");
        assert!(cmd.shell_line().ends_with("./src/*.cpp -lmingw32 -mwindows"));
    }

    #[test]
    fn mac_profile_includes_sdl_framework_headers() {
        let profile = MacHandler::new().profile();
        assert!(profile.include_paths.contains("-I ./include/"));
        assert!(profile
            .include_paths
            .contains("-I/Library/Frameworks/SDL2.framework/Headers"));
    }

    #[test]
    fn fallback_profile_keeps_default_compiler_and_output() {
        let profile = PlatformProfile::fallback();
        assert_eq!(profile.compiler_invocation, "g++ -g -std=c++17");
        assert_eq!(profile.output_name, "prog");
        assert!(profile.preprocessor_defines.is_empty());
        assert!(profile.include_paths.is_empty());
        assert!(profile.linked_libraries.is_empty());

        let line = command_for(profile).shell_line();
        assert!(line.starts_with("g++ -g -std=c++17"));
        assert!(line.contains("-o prog"));
    }

    #[test]
    fn argv_splits_fields_into_discrete_tokens() {
        let (program, args) = command_for(LinuxHandler::new().profile()).argv();
        assert_eq!(program, "g++");
        assert_eq!(
            args,
            vec![
                "-g",
                "-std=c++17",
                "-D",
                "LINUX",
                "-o",
                "prog",
                "-I",
                "./include/",
                "-I",
                "./../../common/thirdparty/glm/",
                "./src/main.cpp",
            ]
        );
    }

    #[test]
    fn argv_empty_fields_contribute_no_tokens() {
        let cmd = CompileCommand::new(
            PlatformProfile::fallback(),
            vec!["./src/a.cpp".to_string(), "./src/b.cpp".to_string()],
        );
        let (program, args) = cmd.argv();
        assert_eq!(program, "g++");
        assert_eq!(
            args,
            vec!["-g", "-std=c++17", "-o", "prog", "./src/a.cpp", "./src/b.cpp"]
        );
    }

    #[test]
    fn windows_argv_puts_libraries_after_sources() {
        let cmd = CompileCommand::new(
            WindowsHandler::new().profile(),
            vec!["./src/main.cpp".to_string()],
        );
        let (_, args) = cmd.argv();
        let src_pos = args.iter().position(|a| a == "./src/main.cpp").unwrap();
        let lib_pos = args.iter().position(|a| a == "-lmingw32").unwrap();
        assert!(lib_pos > src_pos);
        assert_eq!(args.last().map(String::as_str), Some("-mwindows"));
    }
}
