pub mod color_map;
pub mod config;
pub mod errors;
pub mod logo;
mod runner;
pub mod seq;

use crate::errors::LogoError;

pub fn run() -> Result<(), LogoError> {
    runner::run()
}
