pub mod command;
pub mod render;
pub mod run;

pub use run::run_app;

use crate::errors::AppError;
use std::io::{self, Write};

pub fn confirm_action(action: &str) -> Result<(), AppError> {
    println!("\nAre you sure you want to {}? (y/n)", action);
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

// INPUT FUNCTIONS
pub fn get_input_to_lower() -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase())
}
