mod env_vars;
mod load_config;

pub use load_config::{load_or_create_config, LoadConfig};

pub use env_vars::{expand_path, normalize_path_for_os, parse_unix_env_vars, parse_windows_env_vars};
