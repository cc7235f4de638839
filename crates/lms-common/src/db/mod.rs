pub mod activity;
pub mod career_paths;
pub mod courses;
pub mod learners;
pub mod migrations;
pub mod pool;
pub mod store;
pub mod util;

pub use activity::{fetch_activity_counts, fetch_completed_course_domains, fetch_enrolled_course_ids};
pub use career_paths::fetch_career_path_by_domain;
pub use courses::{fetch_course, fetch_published_courses};
pub use learners::fetch_learner;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPoolError, PgPool, create_pool_from_url};
pub use store::PgStore;
