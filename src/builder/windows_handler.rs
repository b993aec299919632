use super::command::PlatformProfile;
use super::PlatformHandler;

pub struct WindowsHandler;

impl WindowsHandler {
    pub fn new() -> Self {
        WindowsHandler
    }
}

impl PlatformHandler for WindowsHandler {
    fn platform_name(&self) -> &'static str {
        "Windows"
    }

    fn detect(&self, platform_id: &str) -> bool {
        platform_id.eq_ignore_ascii_case("windows")
    }

    fn profile(&self) -> PlatformProfile {
        PlatformProfile {
            // No debug flag on Windows.
            compiler_invocation: "g++ -std=c++17".to_string(),
            preprocessor_defines: "-D MINGW -static-libgcc -static-libstdc++".to_string(),
            include_paths: "-I./include/ -I./../../common/thirdparty/old/glm/".to_string(),
            linked_libraries: "-lmingw32 -mwindows".to_string(),
            output_name: "prog.exe".to_string(),
        }
    }
}
