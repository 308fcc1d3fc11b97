use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use super::SessionStore;
use crate::state::SharedState;

pub const LANDLORD_COOKIE: &str = "landlord_id";
pub const TENANT_COOKIE: &str = "tenant_token";

/// Session backed by browser cookies.
///
/// The landlord id lives for one week; the tenant token has no expiry.
/// Changes are collected in the jar and must be returned with the response
/// via [`CookieSession::into_jar`].
pub struct CookieSession {
    jar: CookieJar,
    secure: bool,
}

impl CookieSession {
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }

    fn put(&mut self, cookie: Cookie<'static>) {
        let jar = std::mem::replace(&mut self.jar, CookieJar::new());
        self.jar = jar.add(cookie);
    }

    fn expire(&mut self, name: &'static str) {
        self.put(
            Cookie::build((name, ""))
                .path("/")
                .max_age(time::Duration::ZERO)
                .build(),
        );
    }
}

impl SessionStore for CookieSession {
    fn landlord_id(&self) -> Option<i64> {
        self.jar
            .get(LANDLORD_COOKIE)
            .and_then(|c| c.value().trim().parse().ok())
    }

    fn tenant_token(&self) -> Option<String> {
        self.jar
            .get(TENANT_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|token| !token.is_empty())
    }

    fn set_landlord_id(&mut self, landlord_id: i64) {
        self.expire(TENANT_COOKIE);
        let cookie = Cookie::build((LANDLORD_COOKIE, landlord_id.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(7))
            .build();
        self.put(cookie);
    }

    fn set_tenant_token(&mut self, token: &str) {
        self.expire(LANDLORD_COOKIE);
        let cookie = Cookie::build((TENANT_COOKIE, token.to_string()))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .permanent()
            .build();
        self.put(cookie);
    }

    fn clear(&mut self) {
        self.expire(LANDLORD_COOKIE);
        self.expire(TENANT_COOKIE);
    }
}

impl FromRequestParts<SharedState> for CookieSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(CookieSession::new(jar, state.config.secure_cookies))
    }
}
