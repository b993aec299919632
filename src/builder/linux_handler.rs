use super::command::PlatformProfile;
use super::PlatformHandler;

pub struct LinuxHandler;

impl LinuxHandler {
    pub fn new() -> Self {
        LinuxHandler
    }
}

impl PlatformHandler for LinuxHandler {
    fn platform_name(&self) -> &'static str {
        "Linux"
    }

    fn detect(&self, platform_id: &str) -> bool {
        platform_id.eq_ignore_ascii_case("linux")
    }

    fn profile(&self) -> PlatformProfile {
        PlatformProfile {
            compiler_invocation: "g++ -g -std=c++17".to_string(),
            // -D is a #define sent to the preprocessor
            preprocessor_defines: "-D LINUX".to_string(),
            include_paths: "-I ./include/ -I ./../../common/thirdparty/glm/".to_string(),
            linked_libraries: String::new(),
            output_name: "prog".to_string(),
        }
    }
}
