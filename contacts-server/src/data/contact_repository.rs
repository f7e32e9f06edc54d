use async_trait::async_trait;

use crate::domain::contact::Contact;
use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct NewContact {
    pub(crate) name: String,
    pub(crate) email: String,
}

#[async_trait]
pub(crate) trait ContactRepository: Send + Sync {
    async fn create_contact(&self, input: NewContact) -> Result<Contact, DomainError>;
    async fn get_contact(&self, id: u64) -> Result<Option<Contact>, DomainError>;
    async fn list_contacts(&self) -> Result<Vec<Contact>, DomainError>;
    async fn delete_contact(&self, id: u64) -> Result<bool, DomainError>;
}
