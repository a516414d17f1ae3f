use lazy_static::lazy_static;
use std::path::PathBuf;

lazy_static! {
    pub static ref CONFIG_DIR: PathBuf = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("factorials");
}
