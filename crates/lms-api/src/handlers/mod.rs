pub mod features;
pub mod health;
pub mod insights;
pub mod recommendations;
