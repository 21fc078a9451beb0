pub mod estimate;
pub mod health;
