/// Returns the `os/arch` pair of the running build, e.g. `linux/x86_64`.
pub fn detect_platform() -> String {
    format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH)
}
