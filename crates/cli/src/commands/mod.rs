mod config;
mod launch_config;
mod resolve;
mod versions;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use launch_config::LaunchConfigArgs;
pub use launch_config::handle_launch_config;
pub use resolve::ResolveArgs;
pub use resolve::handle_resolve;
pub use versions::VersionsArgs;
pub use versions::handle_versions;
