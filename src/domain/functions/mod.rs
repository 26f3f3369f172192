pub mod check;
pub mod game;
pub mod help;
