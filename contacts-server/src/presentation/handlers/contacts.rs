use std::collections::HashMap;

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use error_response::ServerResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::contact::{Contact, CreateContactRequest};
use crate::presentation::AppState;
use crate::presentation::extract::{ContactId, ValidatedJson};
use crate::presentation::middleware::auth::WriteAccess;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateContactDto {
    #[validate(
        required(message = "must be present"),
        length(min = 1, max = 100, message = "must be 1..100 chars")
    )]
    pub(crate) name: Option<String>,
    #[validate(
        required(message = "must be present"),
        email(message = "must be a valid email address")
    )]
    pub(crate) email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ContactDto {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ListContactsResponseDto {
    pub(crate) contacts: Vec<ContactDto>,
    pub(crate) total: usize,
}

/// Field name to message. Empty object when the error has no field detail.
#[derive(Debug, Serialize, ToSchema)]
#[allow(dead_code)]
pub(crate) struct FieldErrorsDto(pub(crate) HashMap<String, String>);

impl From<Contact> for ContactDto {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            created_at: contact.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "Contacts listed", body = ListContactsResponseDto)
    )
)]
pub(crate) async fn list_contacts(
    State(state): State<AppState>,
) -> ServerResult<(StatusCode, Json<ListContactsResponseDto>)> {
    let contacts = state.contact_service.list_contacts().await?;
    let total = contacts.len();

    Ok((
        StatusCode::OK,
        Json(ListContactsResponseDto {
            contacts: contacts.into_iter().map(ContactDto::from).collect(),
            total,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(
        ("id" = u64, Path, description = "Contact id")
    ),
    responses(
        (status = 200, description = "Contact found", body = ContactDto),
        (status = 400, description = "Malformed id", body = FieldErrorsDto),
        (status = 404, description = "Contact not found", body = FieldErrorsDto)
    )
)]
pub(crate) async fn get_contact(
    State(state): State<AppState>,
    ContactId(id): ContactId,
) -> ServerResult<(StatusCode, Json<ContactDto>)> {
    let contact = state.contact_service.get_contact(id).await?;

    Ok((StatusCode::OK, Json(ContactDto::from(contact))))
}

#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    security(
        ("bearer_auth" = [])
    ),
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact created", body = ContactDto),
        (status = 200, description = "Invalid fields; the body lists them", body = FieldErrorsDto),
        (status = 400, description = "Unreadable or oversized body", body = FieldErrorsDto),
        (status = 401, description = "Missing or invalid token", body = FieldErrorsDto),
        (status = 403, description = "Read-only token", body = FieldErrorsDto)
    )
)]
pub(crate) async fn create_contact(
    State(state): State<AppState>,
    _access: WriteAccess,
    ValidatedJson(dto): ValidatedJson<CreateContactDto>,
) -> ServerResult<(StatusCode, Json<ContactDto>)> {
    let req = CreateContactRequest {
        name: dto.name.unwrap_or_default(),
        email: dto.email.unwrap_or_default(),
    };

    let contact = state.contact_service.create_contact(req).await?;
    Ok((StatusCode::CREATED, Json(ContactDto::from(contact))))
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    security(
        ("bearer_auth" = [])
    ),
    params(
        ("id" = u64, Path, description = "Contact id")
    ),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 400, description = "Malformed id", body = FieldErrorsDto),
        (status = 401, description = "Missing or invalid token", body = FieldErrorsDto),
        (status = 403, description = "Read-only token", body = FieldErrorsDto),
        (status = 404, description = "Contact not found", body = FieldErrorsDto)
    )
)]
pub(crate) async fn delete_contact(
    State(state): State<AppState>,
    _access: WriteAccess,
    ContactId(id): ContactId,
) -> ServerResult<StatusCode> {
    state.contact_service.delete_contact(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
