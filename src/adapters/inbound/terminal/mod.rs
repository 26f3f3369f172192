pub mod client;
mod interaction;
mod utils;
