//! Tenant entity, email validation, and the tenant-with-property projection

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{optional_text, reference_id, required_text, ValidationError};

const MAX_NAME_LEN: usize = 200;
const MAX_EMAIL_LEN: usize = 254;
const MAX_PHONE_LEN: usize = 50;

/// Loose shape check: something@something.tld, no whitespace
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email, trimming surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use propdash_server::models::Email;
    ///
    /// assert!(Email::new("john.doe@example.com").is_ok());
    /// assert!(Email::new("john.doe").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let email = required_text("email", s, MAX_EMAIL_LEN)?;

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@domain.tld",
            });
        }

        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A person who may rent a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Tenant {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Unassigned tenants have no property
    pub property_id: Option<i64>,
}

/// Tenant row joined with the name of its property (LEFT JOIN)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TenantWithProperty {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub tenant: Tenant,
    pub property_name: Option<String>,
}

/// Validated input for inserting a tenant
#[derive(Debug, Clone, PartialEq)]
pub struct NewTenant {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub property_id: Option<i64>,
}

impl NewTenant {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
        property_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: required_text("first_name", first_name, MAX_NAME_LEN)?,
            last_name: required_text("last_name", last_name, MAX_NAME_LEN)?,
            email: Email::new(email)?,
            phone: optional_text("phone", phone, MAX_PHONE_LEN)?,
            property_id: property_id
                .map(|id| reference_id("property_id", id))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        assert!(Email::new("jane.smith@example.com").is_ok());
        assert!(Email::new("a+b@sub.domain.io").is_ok());
        assert_eq!(Email::new("  x@y.co ").unwrap().as_str(), "x@y.co");
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(matches!(
            Email::new("no-at-sign.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Email::new("two@@example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Email::new("spaces in@example.com"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(Email::new(""), Err(ValidationError::Empty { .. })));
    }

    #[test]
    fn new_tenant_allows_unassigned() {
        let t = NewTenant::new("John", "Doe", "john.doe@example.com", None, None).unwrap();
        assert_eq!(t.property_id, None);
        assert_eq!(t.phone, None);
    }

    #[test]
    fn new_tenant_rejects_bad_property_id() {
        assert!(matches!(
            NewTenant::new("John", "Doe", "john.doe@example.com", None, Some(0)),
            Err(ValidationError::OutOfRange { field: "property_id", .. })
        ));
    }

    #[test]
    fn projection_flattens_tenant_fields() {
        let row = TenantWithProperty {
            tenant: Tenant {
                id: 1,
                first_name: "John".into(),
                last_name: "Doe".into(),
                email: "john.doe@example.com".into(),
                phone: None,
                property_id: None,
            },
            property_name: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["first_name"], "John");
        assert!(json["property_name"].is_null());
        assert!(json.get("tenant").is_none());
    }
}
