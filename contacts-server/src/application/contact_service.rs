use tracing::info;

use crate::data::contact_repository::{ContactRepository, NewContact};
use crate::domain::contact::{Contact, CreateContactRequest};
use crate::domain::error::DomainError;

pub(crate) struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn create_contact(
        &self,
        req: CreateContactRequest,
    ) -> Result<Contact, DomainError> {
        let req = req.validate()?;

        let contact = self
            .repo
            .create_contact(NewContact {
                name: req.name,
                email: req.email,
            })
            .await?;
        info!(contact_id = contact.id, "contact created");
        Ok(contact)
    }

    pub(crate) async fn get_contact(&self, id: u64) -> Result<Contact, DomainError> {
        self.repo
            .get_contact(id)
            .await?
            .ok_or(DomainError::NotFound(id))
    }

    pub(crate) async fn list_contacts(&self) -> Result<Vec<Contact>, DomainError> {
        self.repo.list_contacts().await
    }

    pub(crate) async fn delete_contact(&self, id: u64) -> Result<(), DomainError> {
        if !self.repo.delete_contact(id).await? {
            return Err(DomainError::NotFound(id));
        }
        info!(contact_id = id, "contact deleted");
        Ok(())
    }
}
