use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::data::contact_repository::{ContactRepository, NewContact};
use crate::domain::contact::Contact;
use crate::domain::error::DomainError;

#[derive(Debug, Default)]
struct Store {
    next_id: u64,
    contacts: BTreeMap<u64, Contact>,
}

/// Contacts kept in process memory, ordered by id.
#[derive(Debug, Default)]
pub(crate) struct InMemoryContactRepository {
    store: RwLock<Store>,
}

impl InMemoryContactRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create_contact(&self, input: NewContact) -> Result<Contact, DomainError> {
        let mut store = self.store.write().await;

        // emails are unique, compared after normalization
        if store
            .contacts
            .values()
            .any(|contact| contact.email == input.email)
        {
            return Err(DomainError::AlreadyExists(input.email));
        }

        store.next_id += 1;
        let contact = Contact {
            id: store.next_id,
            name: input.name,
            email: input.email,
            created_at: Utc::now(),
        };
        store.contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn get_contact(&self, id: u64) -> Result<Option<Contact>, DomainError> {
        Ok(self.store.read().await.contacts.get(&id).cloned())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, DomainError> {
        Ok(self.store.read().await.contacts.values().cloned().collect())
    }

    async fn delete_contact(&self, id: u64) -> Result<bool, DomainError> {
        Ok(self.store.write().await.contacts.remove(&id).is_some())
    }
}
