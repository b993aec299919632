use super::command::PlatformProfile;
use super::PlatformHandler;

pub struct MacHandler;

impl MacHandler {
    pub fn new() -> Self {
        MacHandler
    }
}

impl PlatformHandler for MacHandler {
    fn platform_name(&self) -> &'static str {
        // uname -s reports macOS as Darwin.
        "Darwin"
    }

    fn detect(&self, platform_id: &str) -> bool {
        platform_id.eq_ignore_ascii_case("darwin")
            || platform_id.eq_ignore_ascii_case("macos")
            || platform_id.eq_ignore_ascii_case("mac")
    }

    fn profile(&self) -> PlatformProfile {
        PlatformProfile {
            compiler_invocation: "g++ -g -std=c++17".to_string(),
            preprocessor_defines: "-D MAC".to_string(),
            // SDL2 headers come from the framework install, not Homebrew.
            include_paths:
                "-I ./include/ -I/Library/Frameworks/SDL2.framework/Headers -I./../../common/thirdparty/old/glm"
                    .to_string(),
            linked_libraries: String::new(),
            output_name: "prog".to_string(),
        }
    }
}
