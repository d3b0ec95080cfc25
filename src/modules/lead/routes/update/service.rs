use super::types::{request, response};
use crate::{modules::lead::repository, types::Context};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    id: String,
    payload: request::Payload,
) -> response::Response {
    let data = payload.lead_data;

    let lead = repository::update_by_id(
        &ctx.db_conn.pool,
        id.clone(),
        repository::UpdateLeadPayload {
            father_name: data.father_name,
            father_phone: data.father_phone,
            father_email: data.father_email,
            father_occupation: data.father_occupation,
            father_annual_income: data.father_annual_income,
            mother: repository::ContactBlock {
                name: data.mother_name,
                phone: data.mother_phone,
                email: data.mother_email,
                relationship: None,
                occupation: data.mother_occupation,
                annual_income: data.mother_annual_income,
            },
            guardian: repository::ContactBlock {
                name: data.guardian_name,
                phone: data.guardian_phone,
                email: data.guardian_email,
                relationship: data.guardian_relationship,
                occupation: data.guardian_occupation,
                annual_income: data.guardian_annual_income,
            },
            campaign: data.campaign,
            source: data.source,
            sub_source: data.sub_source,
            status: data.status,
            stage: data.stage,
        },
    )
    .await
    .map_err(|_| response::Error::UnexpectedError)?
    .ok_or(response::Error::LeadNotFound)?;

    // Destructive child resync: all rows for the lead are replaced, not
    // diffed. Insert failures are logged and the update still succeeds.
    repository::delete_children_by_lead_id(&ctx.db_conn.pool, id.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    for child in payload.children {
        if repository::create_child(
            &ctx.db_conn.pool,
            id.clone(),
            repository::CreateChildPayload {
                name: child.name,
                grade: child.grade,
                intake_year: child.intake_year,
                date_of_birth: child.date_of_birth,
                gender: child.gender,
                address: child.address,
                blood_group: child.blood_group,
                previous_school: child.previous_school,
                reason_for_quitting: child.reason_for_quitting,
            },
        )
        .await
        .is_err()
        {
            tracing::error!("Child resync insert failed for lead {}", id);
        }
    }

    if repository::append_status_history(
        &ctx.db_conn.pool,
        id.clone(),
        lead.status.clone(),
        payload.added_by,
        Some("Lead updated via Dashboard inline edit".to_string()),
    )
    .await
    .is_err()
    {
        tracing::error!("Status history insert failed for lead {}", id);
    }

    Ok(response::Success::LeadUpdated(Box::new(lead)))
}
