use super::SessionStore;

/// Process-local session used by page tests and non-HTTP callers.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    landlord_id: Option<i64>,
    tenant_token: Option<String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn landlord(landlord_id: i64) -> Self {
        Self {
            landlord_id: Some(landlord_id),
            tenant_token: None,
        }
    }
}

impl SessionStore for MemorySession {
    fn landlord_id(&self) -> Option<i64> {
        self.landlord_id
    }

    fn tenant_token(&self) -> Option<String> {
        self.tenant_token.clone()
    }

    fn set_landlord_id(&mut self, landlord_id: i64) {
        self.landlord_id = Some(landlord_id);
        self.tenant_token = None;
    }

    fn set_tenant_token(&mut self, token: &str) {
        self.tenant_token = Some(token.to_string());
        self.landlord_id = None;
    }

    fn clear(&mut self) {
        self.landlord_id = None;
        self.tenant_token = None;
    }
}
