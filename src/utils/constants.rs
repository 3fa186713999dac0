pub mod env {
    pub const BIND_ADDR_ENV_VAR: &str = "BIND_ADDR";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";
    pub const REQUEST_TIMEOUT_SECS_ENV_VAR: &str = "REQUEST_TIMEOUT_SECS";
    pub const SESSION_KEY_ENV_VAR: &str = "SESSION_KEY";
}

pub const SESSION_COOKIE_NAME: &str = "session";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub const DEFAULT_CONFIG_PATH: &str = "configs/apiserver.toml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Private cookies need 512 bits of key material.
pub const SESSION_KEY_MIN_BYTES: usize = 64;

pub mod db {
    use std::time::Duration;

    pub const MAX_CONNECTIONS: u32 = 5;
    pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);
}

pub mod test {
    use std::time::Duration;

    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
}
