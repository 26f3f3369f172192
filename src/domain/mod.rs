pub mod alias;
pub mod app;
pub mod continent;
pub mod country;
pub mod functions;
pub mod geography;
pub mod guess;
pub mod index;
pub mod resolve;
pub mod universe;
pub mod utils;
