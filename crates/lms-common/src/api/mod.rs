pub mod features;
pub mod insights;
pub mod recommendation;
