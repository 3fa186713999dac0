mod data_stores;
mod error;
mod password_hash;
mod user;

pub use data_stores::*;
pub use error::*;
pub use password_hash::*;
pub use user::*;
