use tracing::instrument;

use crate::catalog::CareerDomain;
use crate::db::util::timed_query_opt;
use crate::db::PgPool;
use crate::store::StoreError;
use crate::CareerPath;

const CAREER_PATH_BY_DOMAIN_SQL: &str = "SELECT \
        cp.id, \
        cp.title, \
        COALESCE( \
            (SELECT array_agg(s.name ORDER BY cps.position, s.name) \
             FROM lms.career_path_skills cps \
             JOIN lms.skills s ON s.id = cps.skill_id \
             WHERE cps.career_path_id = cp.id), \
            '{}' \
        ) AS required_skills \
    FROM lms.career_paths cp \
    WHERE cp.domain = $1 \
    ORDER BY cp.id \
    LIMIT 1";

#[instrument(skip(pool))]
pub async fn fetch_career_path_by_domain(
    pool: &PgPool,
    domain: CareerDomain,
) -> Result<Option<CareerPath>, StoreError> {
    let client = pool.get().await?;
    let domain_text = domain.as_ref();

    let row = timed_query_opt(
        &client,
        CAREER_PATH_BY_DOMAIN_SQL,
        &[&domain_text],
        "fetch_career_path_by_domain",
    )
    .await?;

    Ok(row.map(|row| CareerPath {
        id: row.get("id"),
        title: row.get("title"),
        domain: Some(domain),
        required_skills: row.get("required_skills"),
    }))
}
