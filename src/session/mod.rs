//! Who is currently logged in.
//!
//! Pages never touch cookies directly; they read and write the identity through
//! [`SessionStore`], which lets tests swap in [`MemorySession`].

pub mod cookie;
pub mod memory;

pub use cookie::CookieSession;
pub use memory::MemorySession;

/// The actor a session belongs to. Landlord and tenant identities are mutually
/// exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Landlord(i64),
    Tenant(String),
}

pub trait SessionStore {
    fn landlord_id(&self) -> Option<i64>;
    fn tenant_token(&self) -> Option<String>;

    /// Store the landlord identity, replacing any tenant identity.
    fn set_landlord_id(&mut self, landlord_id: i64);
    /// Store the tenant identity, replacing any landlord identity.
    fn set_tenant_token(&mut self, token: &str);
    fn clear(&mut self);

    fn identity(&self) -> Identity {
        if let Some(id) = self.landlord_id() {
            Identity::Landlord(id)
        } else if let Some(token) = self.tenant_token() {
            Identity::Tenant(token)
        } else {
            Identity::Anonymous
        }
    }
}
