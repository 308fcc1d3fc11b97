use serde::Deserialize;

use super::{FormError, is_blank};
use crate::api::{Credentials, Signup};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FormError> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err("Please enter your email and password.".into());
        }
        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<Signup, FormError> {
        if is_blank(&self.name) || is_blank(&self.email) || self.password.is_empty() {
            return Err("Please fill in your name, email and password.".into());
        }
        Ok(Signup {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}
