pub mod ranker;
pub mod similarity;

pub use ranker::{RankedCourse, rank_courses, recommendation_reason, select_candidates};
pub use similarity::cosine_similarity;
