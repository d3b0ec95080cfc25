use crate::utils::list_query;
use crate::utils::pagination::{Paginated, Pagination};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Lead {
    pub id: String,
    pub application_no: String,
    pub father_name: String,
    pub father_phone: String,
    pub father_email: Option<String>,
    pub father_occupation: Option<String>,
    pub father_annual_income: Option<String>,
    pub mother_name: Option<String>,
    pub mother_phone: Option<String>,
    pub mother_email: Option<String>,
    pub mother_occupation: Option<String>,
    pub mother_annual_income: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_email: Option<String>,
    pub guardian_relationship: Option<String>,
    pub guardian_occupation: Option<String>,
    pub guardian_annual_income: Option<String>,
    pub campaign: Option<String>,
    pub source: Option<String>,
    pub sub_source: Option<String>,
    pub project: Option<String>,
    pub whatsapp_no: Option<String>,
    pub status: String,
    pub stage: String,
    pub payment_status: String,
    pub added_by: String,
    pub created_by_user_id: Option<String>,
    pub whatsapp_verified: bool,
    pub verification_token: Option<String>,
    pub verified_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Child {
    pub id: String,
    pub lead_id: String,
    pub name: String,
    pub grade: Option<String>,
    pub intake_year: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub blood_group: Option<String>,
    pub previous_school: Option<String>,
    pub reason_for_quitting: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct StatusHistoryEntry {
    pub id: String,
    pub lead_id: String,
    pub new_status: String,
    pub changed_by: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct ChildSummary {
    pub id: String,
    pub name: String,
    pub grade: Option<String>,
}

#[derive(Serialize)]
pub struct LeadWithChildren {
    #[serde(flatten)]
    pub lead: Lead,
    pub children: Vec<Child>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    DuplicateActivePhone,
}

pub const SORT_FIELDS: &[&str] = &[
    "created_at",
    "updated_at",
    "father_name",
    "application_no",
    "status",
    "stage",
];
pub const DEFAULT_SORT: &str = "created_at";

const SEARCH_COLUMNS: &[&str] = &[
    "father_name",
    "father_phone",
    "application_no",
    "father_email",
    "mother_name",
    "mother_phone",
];

pub struct ContactBlock {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub relationship: Option<String>,
    pub occupation: Option<String>,
    pub annual_income: Option<String>,
}

pub struct CreateLeadPayload {
    pub father_name: String,
    pub father_phone: String,
    pub father_email: Option<String>,
    pub father_occupation: Option<String>,
    pub father_annual_income: Option<String>,
    pub mother: ContactBlock,
    pub guardian: ContactBlock,
    pub campaign: Option<String>,
    pub source: Option<String>,
    pub sub_source: Option<String>,
    pub added_by: String,
    pub created_by_user_id: Option<String>,
    pub verification_token: String,
    pub verified_at: NaiveDateTime,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateLeadPayload) -> Result<Lead, Error> {
    sqlx::query_as::<_, Lead>(
        "
        INSERT INTO leads (
            id,
            father_name, father_phone, father_email, father_occupation, father_annual_income,
            mother_name, mother_phone, mother_email, mother_occupation, mother_annual_income,
            guardian_name, guardian_phone, guardian_email, guardian_relationship,
            guardian_occupation, guardian_annual_income,
            campaign, source, sub_source, project, whatsapp_no,
            added_by, created_by_user_id,
            whatsapp_verified, verification_token, verified_at,
            status, stage, payment_status
        )
        VALUES (
            $1,
            $2, $3, $4, $5, $6,
            $7, $8, $9, $10, $11,
            $12, $13, $14, $15, $16, $17,
            $18, $19, $20, $18, $3,
            $21, $22,
            TRUE, $23, $24,
            'Active', 'New', 'Pending'
        )
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.father_name)
    .bind(payload.father_phone)
    .bind(payload.father_email)
    .bind(payload.father_occupation)
    .bind(payload.father_annual_income)
    .bind(payload.mother.name)
    .bind(payload.mother.phone)
    .bind(payload.mother.email)
    .bind(payload.mother.occupation)
    .bind(payload.mother.annual_income)
    .bind(payload.guardian.name)
    .bind(payload.guardian.phone)
    .bind(payload.guardian.email)
    .bind(payload.guardian.relationship)
    .bind(payload.guardian.occupation)
    .bind(payload.guardian.annual_income)
    .bind(payload.campaign)
    .bind(payload.source)
    .bind(payload.sub_source)
    .bind(payload.added_by)
    .bind(payload.created_by_user_id)
    .bind(payload.verification_token)
    .bind(payload.verified_at)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if err
            .as_database_error()
            .map(|db_err| db_err.is_unique_violation())
            .unwrap_or(false)
        {
            return Error::DuplicateActivePhone;
        }
        tracing::error!("Error occurred while creating lead: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Lead>, Error> {
    sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching lead with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Duplicate-lead guard: substring match of the normalized phone across all
/// three contact blocks, restricted to Active leads, most recent first.
/// Best effort only; the partial unique index on the leads table is the real
/// guard against the check-then-insert race.
pub async fn find_active_by_phone<'e, E: PgExecutor<'e>>(
    e: E,
    clean_phone: String,
) -> Result<Option<Lead>, Error> {
    sqlx::query_as::<_, Lead>(
        "
        SELECT * FROM leads
        WHERE status = 'Active'
          AND (father_phone ILIKE $1 OR mother_phone ILIKE $1 OR guardian_phone ILIKE $1)
        ORDER BY created_at DESC
        LIMIT 1
        ",
    )
    .bind(format!("%{}%", clean_phone))
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while checking for duplicate lead: {}", err);
        Error::UnexpectedError
    })
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub stage: Option<String>,
    pub campaign: Option<String>,
    pub source: Option<String>,
    pub added_by: Option<String>,
    pub verified: Option<String>,
    pub project: Option<String>,
    pub intake_year: Option<String>,
    pub grade: Option<String>,
    pub date_filter: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl Filters {
    fn has_child_filter(&self) -> bool {
        let present = |value: &Option<String>| {
            value.as_deref().map(|v| !v.is_empty()).unwrap_or(false)
        };
        present(&self.grade) || present(&self.intake_year)
    }
}

fn apply_filters(qb: &mut QueryBuilder<Postgres>, filters: &Filters, now: NaiveDateTime) {
    list_query::push_search(qb, filters.search.as_deref(), SEARCH_COLUMNS);
    list_query::push_eq(qb, "leads.status", filters.status.as_deref());
    list_query::push_eq(qb, "leads.stage", filters.stage.as_deref());
    list_query::push_eq(qb, "leads.campaign", filters.campaign.as_deref());
    list_query::push_eq(qb, "leads.source", filters.source.as_deref());
    list_query::push_eq(qb, "leads.added_by", filters.added_by.as_deref());
    list_query::push_eq(qb, "leads.project", filters.project.as_deref());
    list_query::push_bool_eq(qb, "leads.whatsapp_verified", filters.verified.as_deref());
    list_query::push_date_window(
        qb,
        "leads.created_at",
        list_query::date_window(
            filters.date_filter.as_deref(),
            filters.start_date.as_deref(),
            filters.end_date.as_deref(),
            now,
        ),
    );

    // Child-scoped filters switch the fetch to inner-join semantics: only
    // leads with at least one matching child survive.
    if filters.has_child_filter() {
        qb.push(" AND EXISTS (SELECT 1 FROM children WHERE children.lead_id = leads.id");
        list_query::push_eq(qb, "children.grade", filters.grade.as_deref());
        list_query::push_eq(qb, "children.intake_year", filters.intake_year.as_deref());
        qb.push(")");
    }
}

pub async fn find_many(
    pool: &PgPool,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<LeadWithChildren>, Error> {
    let now = Utc::now().naive_utc();

    let mut qb = QueryBuilder::<Postgres>::new("SELECT leads.* FROM leads WHERE TRUE");
    apply_filters(&mut qb, &filters, now);

    let sort = list_query::resolve_sort(filters.sort_by.as_deref(), SORT_FIELDS, DEFAULT_SORT);
    let order = list_query::resolve_order(filters.sort_order.as_deref());
    qb.push(format!(" ORDER BY leads.{} {}", sort, order));
    qb.push(" LIMIT ");
    qb.push_bind(pagination.limit as i64);
    qb.push(" OFFSET ");
    qb.push_bind(pagination.offset());

    let leads: Vec<Lead> = qb.build_query_as().fetch_all(pool).await.map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many leads: {}", err);
        Error::UnexpectedError
    })?;

    let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM leads WHERE TRUE");
    apply_filters(&mut count_qb, &filters, now);
    let total: i64 = count_qb
        .build_query_scalar()
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting leads: {}", err);
            Error::UnexpectedError
        })?;

    let lead_ids: Vec<String> = leads.iter().map(|lead| lead.id.clone()).collect();
    let children = find_children_for_leads(pool, lead_ids).await?;

    let mut children_by_lead: HashMap<String, Vec<Child>> = HashMap::new();
    for child in children {
        children_by_lead
            .entry(child.lead_id.clone())
            .or_default()
            .push(child);
    }

    let items = leads
        .into_iter()
        .map(|lead| {
            let children = children_by_lead.remove(&lead.id).unwrap_or_default();
            LeadWithChildren { lead, children }
        })
        .collect();

    Ok(Paginated::new(
        items,
        total as u32,
        pagination.page,
        pagination.limit,
    ))
}

pub struct UpdateLeadPayload {
    pub father_name: Option<String>,
    pub father_phone: Option<String>,
    pub father_email: Option<String>,
    pub father_occupation: Option<String>,
    pub father_annual_income: Option<String>,
    pub mother: ContactBlock,
    pub guardian: ContactBlock,
    pub campaign: Option<String>,
    pub source: Option<String>,
    pub sub_source: Option<String>,
    pub status: Option<String>,
    pub stage: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateLeadPayload,
) -> Result<Option<Lead>, Error> {
    sqlx::query_as::<_, Lead>(
        "
        UPDATE leads SET
            father_name = COALESCE($2, father_name),
            father_phone = COALESCE($3, father_phone),
            father_email = COALESCE($4, father_email),
            father_occupation = COALESCE($5, father_occupation),
            father_annual_income = COALESCE($6, father_annual_income),
            mother_name = COALESCE($7, mother_name),
            mother_phone = COALESCE($8, mother_phone),
            mother_email = COALESCE($9, mother_email),
            mother_occupation = COALESCE($10, mother_occupation),
            mother_annual_income = COALESCE($11, mother_annual_income),
            guardian_name = COALESCE($12, guardian_name),
            guardian_phone = COALESCE($13, guardian_phone),
            guardian_email = COALESCE($14, guardian_email),
            guardian_relationship = COALESCE($15, guardian_relationship),
            guardian_occupation = COALESCE($16, guardian_occupation),
            guardian_annual_income = COALESCE($17, guardian_annual_income),
            campaign = COALESCE($18, campaign),
            source = COALESCE($19, source),
            sub_source = COALESCE($20, sub_source),
            project = COALESCE($18, project),
            status = COALESCE($21, status),
            stage = COALESCE($22, stage),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(payload.father_name)
    .bind(payload.father_phone)
    .bind(payload.father_email)
    .bind(payload.father_occupation)
    .bind(payload.father_annual_income)
    .bind(payload.mother.name)
    .bind(payload.mother.phone)
    .bind(payload.mother.email)
    .bind(payload.mother.occupation)
    .bind(payload.mother.annual_income)
    .bind(payload.guardian.name)
    .bind(payload.guardian.phone)
    .bind(payload.guardian.email)
    .bind(payload.guardian.relationship)
    .bind(payload.guardian.occupation)
    .bind(payload.guardian.annual_income)
    .bind(payload.campaign)
    .bind(payload.source)
    .bind(payload.sub_source)
    .bind(payload.status)
    .bind(payload.stage)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating lead {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub struct CreateChildPayload {
    pub name: String,
    pub grade: Option<String>,
    pub intake_year: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub blood_group: Option<String>,
    pub previous_school: Option<String>,
    pub reason_for_quitting: Option<String>,
}

pub async fn create_child<'e, E: PgExecutor<'e>>(
    e: E,
    lead_id: String,
    payload: CreateChildPayload,
) -> Result<Child, Error> {
    sqlx::query_as::<_, Child>(
        "
        INSERT INTO children (
            id, lead_id, name, grade, intake_year, date_of_birth, gender,
            address, blood_group, previous_school, reason_for_quitting
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(lead_id)
    .bind(payload.name)
    .bind(payload.grade)
    .bind(payload.intake_year)
    .bind(payload.date_of_birth)
    .bind(payload.gender)
    .bind(payload.address)
    .bind(payload.blood_group)
    .bind(payload.previous_school)
    .bind(payload.reason_for_quitting)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating child record: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_children_by_lead_id<'e, E: PgExecutor<'e>>(
    e: E,
    lead_id: String,
) -> Result<Vec<Child>, Error> {
    sqlx::query_as::<_, Child>(
        "SELECT * FROM children WHERE lead_id = $1 ORDER BY created_at",
    )
    .bind(lead_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching children for lead: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_child_summaries_by_lead_id<'e, E: PgExecutor<'e>>(
    e: E,
    lead_id: String,
) -> Result<Vec<ChildSummary>, Error> {
    sqlx::query_as::<_, ChildSummary>(
        "SELECT id, name, grade FROM children WHERE lead_id = $1 ORDER BY created_at",
    )
    .bind(lead_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching child summaries: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_children_for_leads<'e, E: PgExecutor<'e>>(
    e: E,
    lead_ids: Vec<String>,
) -> Result<Vec<Child>, Error> {
    if lead_ids.is_empty() {
        return Ok(vec![]);
    }

    sqlx::query_as::<_, Child>(
        "SELECT * FROM children WHERE lead_id = ANY($1) ORDER BY created_at",
    )
    .bind(lead_ids)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching children for leads: {}", err);
        Error::UnexpectedError
    })
}

pub async fn delete_children_by_lead_id<'e, E: PgExecutor<'e>>(
    e: E,
    lead_id: String,
) -> Result<(), Error> {
    sqlx::query("DELETE FROM children WHERE lead_id = $1")
        .bind(lead_id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting children for lead: {}", err);
            Error::UnexpectedError
        })
}

pub async fn append_status_history<'e, E: PgExecutor<'e>>(
    e: E,
    lead_id: String,
    new_status: String,
    changed_by: String,
    notes: Option<String>,
) -> Result<(), Error> {
    sqlx::query(
        "
        INSERT INTO lead_status_history (id, lead_id, new_status, changed_by, notes)
        VALUES ($1, $2, $3, $4, $5)
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(lead_id)
    .bind(new_status)
    .bind(changed_by)
    .bind(notes)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while appending lead status history: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_history_by_lead_id<'e, E: PgExecutor<'e>>(
    e: E,
    lead_id: String,
) -> Result<Vec<StatusHistoryEntry>, Error> {
    sqlx::query_as::<_, StatusHistoryEntry>(
        "SELECT * FROM lead_status_history WHERE lead_id = $1 ORDER BY created_at DESC",
    )
    .bind(lead_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching lead status history: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn child_filter_switches_to_exists_predicate() {
        let filters = Filters {
            grade: Some("Grade 3".to_string()),
            ..Filters::default()
        };
        let mut qb = QueryBuilder::<Postgres>::new("SELECT leads.* FROM leads WHERE TRUE");
        apply_filters(&mut qb, &filters, now());
        let sql = qb.into_sql();
        assert!(sql.contains("EXISTS (SELECT 1 FROM children"));
        assert!(sql.contains("children.grade = $1"));
    }

    #[test]
    fn no_child_filter_keeps_plain_fetch() {
        let filters = Filters {
            status: Some("Active".to_string()),
            ..Filters::default()
        };
        let mut qb = QueryBuilder::<Postgres>::new("SELECT leads.* FROM leads WHERE TRUE");
        apply_filters(&mut qb, &filters, now());
        let sql = qb.into_sql();
        assert!(!sql.contains("EXISTS"));
        assert!(sql.contains("leads.status = $1"));
    }

    #[test]
    fn empty_child_filter_is_ignored() {
        let filters = Filters {
            grade: Some("".to_string()),
            ..Filters::default()
        };
        let mut qb = QueryBuilder::<Postgres>::new("SELECT leads.* FROM leads WHERE TRUE");
        apply_filters(&mut qb, &filters, now());
        assert!(!qb.into_sql().contains("EXISTS"));
    }
}
