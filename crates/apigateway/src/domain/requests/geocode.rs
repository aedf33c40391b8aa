use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct GeocodeQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_address_is_rejected() {
        let query = GeocodeQuery {
            address: String::new(),
        };

        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("address"));
    }

    #[test]
    fn any_text_is_accepted() {
        let query = GeocodeQuery {
            address: "Bonifacio High Street, Taguig".into(),
        };

        assert!(query.validate().is_ok());
    }
}
