use crate::utils::list_query;
use crate::utils::pagination::{Paginated, Pagination};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SEARCH_COLUMNS: &[&str] = &["name", "email", "phone"];

pub struct CreateContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateContactPayload,
) -> Result<Contact, Error> {
    sqlx::query_as::<_, Contact>(
        "
        INSERT INTO contacts (id, name, email, phone, subject, message)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.phone)
    .bind(payload.subject)
    .bind(payload.message)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating contact: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Contact>, Error> {
    sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching contact: {}", err);
            Error::UnexpectedError
        })
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub search: Option<String>,
    pub date_filter: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn apply_filters(qb: &mut QueryBuilder<Postgres>, filters: &Filters, now: NaiveDateTime) {
    list_query::push_search(qb, filters.search.as_deref(), SEARCH_COLUMNS);
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
) -> Result<Paginated<Contact>, Error> {
    let now = Utc::now().naive_utc();

    let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM contacts WHERE TRUE");
    apply_filters(&mut qb, &filters, now);
    qb.push(" ORDER BY created_at DESC LIMIT ");
    qb.push_bind(pagination.limit as i64);
    qb.push(" OFFSET ");
    qb.push_bind(pagination.offset());

    let contacts: Vec<Contact> = qb.build_query_as().fetch_all(pool).await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many contacts: {}", err);
        Error::UnexpectedError
    })?;

    let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM contacts WHERE TRUE");
    apply_filters(&mut count_qb, &filters, now);
    let total: i64 = count_qb
        .build_query_scalar()
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting contacts: {}", err);
            Error::UnexpectedError
        })?;

    Ok(Paginated::new(
        contacts,
        total as u32,
        pagination.page,
        pagination.limit,
    ))
}
