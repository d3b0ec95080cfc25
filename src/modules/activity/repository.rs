use crate::utils::list_query;
use crate::utils::pagination::{Paginated, Pagination};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use ulid::Ulid;

pub const ACTIVITY_TYPES: &[&str] = &["badminton", "kidz-gym", "school-activities"];
pub const STATUSES: &[&str] = &["new", "in_progress", "resolved", "closed"];

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub activity_type: String,
    pub message: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub const SORT_FIELDS: &[&str] = &[
    "created_at",
    "updated_at",
    "name",
    "email",
    "activity_type",
    "status",
];
pub const DEFAULT_SORT: &str = "created_at";

const SEARCH_COLUMNS: &[&str] = &["name", "email", "phone", "message"];

pub struct CreateActivityPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub activity_type: String,
    pub message: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateActivityPayload,
) -> Result<Activity, Error> {
    sqlx::query_as::<_, Activity>(
        "
        INSERT INTO after_school_activities (id, name, email, phone, activity_type, message)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.phone)
    .bind(payload.activity_type)
    .bind(payload.message)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating activity enquiry: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Activity>, Error> {
    sqlx::query_as::<_, Activity>("SELECT * FROM after_school_activities WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching activity enquiry: {}", err);
            Error::UnexpectedError
        })
}

pub struct UpdateActivityPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub activity_type: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateActivityPayload,
) -> Result<Option<Activity>, Error> {
    sqlx::query_as::<_, Activity>(
        "
        UPDATE after_school_activities SET
            name = COALESCE($2, name),
            email = COALESCE($3, email),
            phone = COALESCE($4, phone),
            activity_type = COALESCE($5, activity_type),
            message = COALESCE($6, message),
            status = COALESCE($7, status),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.email)
    .bind(payload.phone)
    .bind(payload.activity_type)
    .bind(payload.message)
    .bind(payload.status)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating activity enquiry: {}", err);
        Error::UnexpectedError
    })
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub search: Option<String>,
    pub activity_type: Option<String>,
    pub status: Option<String>,
    pub date_filter: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

fn apply_filters(qb: &mut QueryBuilder<Postgres>, filters: &Filters, now: NaiveDateTime) {
    list_query::push_search(qb, filters.search.as_deref(), SEARCH_COLUMNS);
    list_query::push_eq(qb, "activity_type", filters.activity_type.as_deref());
    list_query::push_eq(qb, "status", filters.status.as_deref());
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
) -> Result<Paginated<Activity>, Error> {
    let now = Utc::now().naive_utc();

    let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM after_school_activities WHERE TRUE");
    apply_filters(&mut qb, &filters, now);

    let sort = list_query::resolve_sort(filters.sort_by.as_deref(), SORT_FIELDS, DEFAULT_SORT);
    let order = list_query::resolve_order(filters.sort_order.as_deref());
    qb.push(format!(" ORDER BY {} {}", sort, order));
    qb.push(" LIMIT ");
    qb.push_bind(pagination.limit as i64);
    qb.push(" OFFSET ");
    qb.push_bind(pagination.offset());

    let activities: Vec<Activity> = qb.build_query_as().fetch_all(pool).await.map_err(|err| {
        tracing::error!("Error occurred while fetching activity enquiries: {}", err);
        Error::UnexpectedError
    })?;

    let mut count_qb =
        QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM after_school_activities WHERE TRUE");
    apply_filters(&mut count_qb, &filters, now);
    let total: i64 = count_qb
        .build_query_scalar()
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting activity enquiries: {}", err);
            Error::UnexpectedError
        })?;

    Ok(Paginated::new(
        activities,
        total as u32,
        pagination.page,
        pagination.limit,
    ))
}
