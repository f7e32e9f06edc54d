use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::handlers::contacts::{
    ContactDto, CreateContactDto, FieldErrorsDto, ListContactsResponseDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::contacts::list_contacts,
        crate::presentation::handlers::contacts::get_contact,
        crate::presentation::handlers::contacts::create_contact,
        crate::presentation::handlers::contacts::delete_contact
    ),
    components(
        schemas(
            CreateContactDto,
            ContactDto,
            ListContactsResponseDto,
            FieldErrorsDto
        )
    ),
    tags(
        (name = "contacts", description = "Contact endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
        openapi.components = Some(components);
    }
}
