pub mod play;
pub mod score;
