pub mod export;
pub mod health;
pub mod moods;
pub mod stats;
