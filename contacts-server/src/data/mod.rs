pub(crate) mod contact_repository;
pub(crate) mod repositories;
