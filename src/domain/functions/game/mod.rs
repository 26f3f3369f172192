pub mod give_up;
pub mod guess;
pub mod map;
pub mod play;
pub mod state;
