use crate::utils::list_query;
use crate::utils::pagination::{Paginated, Pagination};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct CareerApplication {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub education_qualification: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub resume_url: String,
    pub resume_file_name: String,
    pub resume_file_size: i64,
    pub resume_file_type: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SEARCH_COLUMNS: &[&str] = &["name", "email", "phone", "position"];

pub struct CreateApplicationPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub education_qualification: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub resume_url: String,
    pub resume_file_name: String,
    pub resume_file_size: i64,
    pub resume_file_type: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateApplicationPayload,
) -> Result<CareerApplication, Error> {
    sqlx::query_as::<_, CareerApplication>(
        "
        INSERT INTO careers_applications (
            id, name, email, phone, position, education_qualification, gender, address,
            resume_url, resume_file_name, resume_file_size, resume_file_type
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.phone)
    .bind(payload.position)
    .bind(payload.education_qualification)
    .bind(payload.gender)
    .bind(payload.address)
    .bind(payload.resume_url)
    .bind(payload.resume_file_name)
    .bind(payload.resume_file_size)
    .bind(payload.resume_file_type)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating career application: {}", err);
        Error::UnexpectedError
    })
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub search: Option<String>,
    pub position: Option<String>,
    pub gender: Option<String>,
    pub date_filter: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn apply_filters(qb: &mut QueryBuilder<Postgres>, filters: &Filters, now: NaiveDateTime) {
    list_query::push_search(qb, filters.search.as_deref(), SEARCH_COLUMNS);
    list_query::push_eq(qb, "position", filters.position.as_deref());
    list_query::push_eq(qb, "gender", filters.gender.as_deref());
    list_query::push_date_window(
        qb,
        "created_at",
        list_query::date_window(
            filters.date_filter.as_deref(),
            filters.start_date.as_deref(),
            filters.end_date.as_deref(),
            now,
        ),
    );
}

pub async fn find_many(
    pool: &PgPool,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<CareerApplication>, Error> {
    let now = Utc::now().naive_utc();

    let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM careers_applications WHERE TRUE");
    apply_filters(&mut qb, &filters, now);
    qb.push(" ORDER BY created_at DESC LIMIT ");
    qb.push_bind(pagination.limit as i64);
    qb.push(" OFFSET ");
    qb.push_bind(pagination.offset());

    let applications: Vec<CareerApplication> =
        qb.build_query_as().fetch_all(pool).await.map_err(|err| {
            tracing::error!("Error occurred while fetching career applications: {}", err);
            Error::UnexpectedError
        })?;

    let mut count_qb =
        QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM careers_applications WHERE TRUE");
    apply_filters(&mut count_qb, &filters, now);
    let total: i64 = count_qb
        .build_query_scalar()
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting career applications: {}", err);
            Error::UnexpectedError
        })?;

    Ok(Paginated::new(
        applications,
        total as u32,
        pagination.page,
        pagination.limit,
    ))
}
