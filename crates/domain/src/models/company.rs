//! Company domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::validate_not_blank;
use uuid::Uuid;
use validator::Validate;

/// A client company whose tickets are scoped by the authorization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for the company-creation dialog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateCompanyRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_company_request_validation() {
        let request = CreateCompanyRequest {
            name: "Acme Ltda".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_company_request_rejects_blank_name() {
        let request = CreateCompanyRequest {
            name: "  ".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateCompanyRequest {
            name: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_company_request_rejects_long_name() {
        let request = CreateCompanyRequest {
            name: "x".repeat(101),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_company_serialization() {
        use fake::{faker::company::en::CompanyName, Fake};

        let name: String = CompanyName().fake();
        let company = Company {
            id: Uuid::new_v4(),
            name: name.clone(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&company).unwrap();
        assert!(json.contains("\"name\""));
        assert!(json.contains("created_at"));

        let parsed: Company = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, name);
    }
}
