use super::types::{request, response};
use crate::{
    modules::{lead::repository, otp::token},
    types::Context,
    utils::phone,
};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

fn to_contact_block(block: Option<request::ParentBlock>) -> repository::ContactBlock {
    let block = block.unwrap_or_default();
    repository::ContactBlock {
        name: block.name,
        phone: block.phone,
        email: block.email,
        relationship: block.relationship,
        occupation: block.occupation,
        annual_income: block.annual_income,
    }
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidatePayload(errors)
    })?;

    let now = Utc::now();

    let claims = token::decode(&payload.verification_token, now).map_err(|err| match err {
        token::Error::InvalidToken => response::Error::InvalidToken,
        token::Error::Expired => response::Error::TokenExpired,
    })?;

    // The verified party must be the lead's primary contact.
    let lead_phone = phone::normalize(&payload.lead_data.father.phone);
    if claims.phone != lead_phone {
        return Err(response::Error::PhoneMismatch);
    }

    if let Some(existing) = repository::find_active_by_phone(&ctx.db_conn.pool, lead_phone.clone())
        .await
        .map_err(|_| response::Error::UnexpectedError)?
    {
        return Err(response::Error::DuplicateLead(Some(existing)));
    }

    let father = payload.lead_data.father;
    let project = payload.lead_data.project.unwrap_or_default();

    let lead = repository::create(
        &ctx.db_conn.pool,
        repository::CreateLeadPayload {
            father_name: father.name,
            father_phone: father.phone,
            father_email: father.email,
            father_occupation: father.occupation,
            father_annual_income: father.annual_income,
            mother: to_contact_block(payload.lead_data.mother),
            guardian: to_contact_block(payload.lead_data.guardian),
            campaign: project.campaign,
            source: project.source,
            sub_source: project.sub_source,
            added_by: payload.added_by.clone(),
            created_by_user_id: payload.user_id,
            verification_token: payload.verification_token,
            verified_at: now.naive_utc(),
        },
    )
    .await
    .map_err(|err| match err {
        // The partial unique index caught a race the check above missed.
        repository::Error::DuplicateActivePhone => response::Error::DuplicateLead(None),
        repository::Error::UnexpectedError => response::Error::UnexpectedError,
    })?;

    // Children are best-effort: a failed insert leaves the lead in place and
    // is logged rather than surfaced. Known inconsistency window.
    let mut created_children = Vec::with_capacity(payload.children.len());
    for child in payload.children {
        match repository::create_child(
            &ctx.db_conn.pool,
            lead.id.clone(),
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
        {
            Ok(created) => created_children.push(created),
            Err(_) => tracing::error!("Child insert failed for lead {}", lead.id),
        }
    }

    if repository::append_status_history(
        &ctx.db_conn.pool,
        lead.id.clone(),
        "New".to_string(),
        payload.added_by,
        Some("Lead created with WhatsApp verification".to_string()),
    )
    .await
    .is_err()
    {
        tracing::error!("Status history insert failed for lead {}", lead.id);
    }

    Ok(response::Success::LeadCreated(Box::new(response::Created {
        lead,
        children: created_children,
    })))
}
