use crate::utils::list_query;
use crate::utils::pagination::{Paginated, Pagination};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct ChatbotUser {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct ChatbotMessage {
    pub id: String,
    pub phone: String,
    pub message: String,
    pub response: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

const SEARCH_COLUMNS: &[&str] = &["name", "phone"];

pub struct CreateUserPayload {
    pub name: String,
    pub phone: String,
}

pub async fn create_user<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateUserPayload,
) -> Result<ChatbotUser, Error> {
    sqlx::query_as::<_, ChatbotUser>(
        "
        INSERT INTO chatbot_users (id, name, phone)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.phone)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while registering chatbot user: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_user_by_phone<'e, E: PgExecutor<'e>>(
    e: E,
    phone: String,
) -> Result<Option<ChatbotUser>, Error> {
    sqlx::query_as::<_, ChatbotUser>("SELECT * FROM chatbot_users WHERE phone = $1")
        .bind(phone)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching chatbot user: {}", err);
            Error::UnexpectedError
        })
}

pub struct CreateMessagePayload {
    pub phone: String,
    pub message: String,
    pub response: String,
}

pub async fn create_message<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateMessagePayload,
) -> Result<ChatbotMessage, Error> {
    sqlx::query_as::<_, ChatbotMessage>(
        "
        INSERT INTO chatbot_messages (id, phone, message, response)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.phone)
    .bind(payload.message)
    .bind(payload.response)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while saving chatbot message: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_messages_by_phone<'e, E: PgExecutor<'e>>(
    e: E,
    phone: String,
) -> Result<Vec<ChatbotMessage>, Error> {
    sqlx::query_as::<_, ChatbotMessage>(
        "SELECT * FROM chatbot_messages WHERE phone = $1 ORDER BY created_at ASC",
    )
    .bind(phone)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching chatbot messages: {}", err);
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

pub async fn find_many_users(
    pool: &PgPool,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<ChatbotUser>, Error> {
    let now = Utc::now().naive_utc();

    let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM chatbot_users WHERE TRUE");
    apply_filters(&mut qb, &filters, now);
    qb.push(" ORDER BY created_at DESC LIMIT ");
    qb.push_bind(pagination.limit as i64);
    qb.push(" OFFSET ");
    qb.push_bind(pagination.offset());

    let users: Vec<ChatbotUser> = qb.build_query_as().fetch_all(pool).await.map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch many chatbot users: {}",
            err
        );
        Error::UnexpectedError
    })?;

    let mut count_qb =
        QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM chatbot_users WHERE TRUE");
    apply_filters(&mut count_qb, &filters, now);
    let total: i64 = count_qb
        .build_query_scalar()
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting chatbot users: {}", err);
            Error::UnexpectedError
        })?;

    Ok(Paginated::new(
        users,
        total as u32,
        pagination.page,
        pagination.limit,
    ))
}
