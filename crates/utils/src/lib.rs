mod get_mpsver_config;
mod get_mpsver_dir;
mod host_os_arch;
mod read_build_properties;

pub use get_mpsver_config::get_mpsver_config;
pub use get_mpsver_dir::get_mpsver_dir;
pub use host_os_arch::{host_os_arch, jvm_os_arch};
pub use read_build_properties::read_build_properties;
