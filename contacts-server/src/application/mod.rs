pub(crate) mod contact_service;
