pub mod cli;
pub mod printer;
pub mod summary;
pub mod utils;
