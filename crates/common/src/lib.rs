pub mod utils;
pub mod env;
