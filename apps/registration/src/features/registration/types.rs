use super::validate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity document kinds accepted at check-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    Dni,
    Nie,
    Passport,
}

impl DocumentType {
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Dni => "DNI",
            DocumentType::Nie => "NIE",
            DocumentType::Passport => "Passport",
        }
    }

    pub fn value(self) -> &'static str {
        self.label()
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "DNI" => Some(DocumentType::Dni),
            "NIE" => Some(DocumentType::Nie),
            "Passport" => Some(DocumentType::Passport),
            _ => None,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DocumentType::Dni => "Ej: 12345678Z",
            DocumentType::Nie => "Ej: X1234567L",
            DocumentType::Passport => "Ej: AA123456",
        }
    }

    fn document_error(self) -> &'static str {
        match self {
            DocumentType::Dni => "That is not a valid DNI number.",
            DocumentType::Nie => "That is not a valid NIE number.",
            DocumentType::Passport => "That is not a valid passport number.",
        }
    }

    fn is_valid_number(self, value: &str) -> bool {
        match self {
            DocumentType::Dni => validate::valid_dni(value),
            DocumentType::Nie => validate::valid_nie(value),
            DocumentType::Passport => validate::valid_passport(value),
        }
    }
}

/// Everything the guest types into the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub phone: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            document_type: DocumentType::Dni,
            document_number: String::new(),
            phone: String::new(),
            email: String::new(),
            check_in: String::new(),
            check_out: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub full_name: Option<String>,
    pub document_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub check_out: Option<String>,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.document_number.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.check_out.is_none()
    }
}

impl RegistrationDraft {
    pub fn validate(&self) -> RegistrationErrors {
        let mut errors = RegistrationErrors::default();

        if self.full_name.trim().is_empty() {
            errors.full_name = Some("Your full name is required.".to_string());
        }
        if !self.document_type.is_valid_number(&self.document_number) {
            errors.document_number = Some(self.document_type.document_error().to_string());
        }
        if !validate::valid_phone(&self.phone) {
            errors.phone = Some("Enter a phone number with country prefix.".to_string());
        }
        if !validate::valid_email(&self.email) {
            errors.email = Some("Enter a valid email address.".to_string());
        }

        let check_in = parse_date(&self.check_in);
        let check_out = parse_date(&self.check_out);
        match (check_in, check_out) {
            (Some(arrival), Some(departure)) if departure > arrival => {}
            _ => {
                errors.check_out =
                    Some("Select a stay with check-out after check-in.".to_string());
            }
        }

        errors
    }

    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name.trim().to_string(),
            document_type: self.document_type,
            document_number: self.document_number.trim().to_uppercase(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            check_in_date: self.check_in.clone(),
            check_out_date: self.check_out.clone(),
        }
    }
}

/// Payload posted to the external registration API.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub document_type: DocumentType,
    pub document_number: String,
    pub phone: String,
    pub email: String,
    pub check_in_date: String,
    pub check_out_date: String,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::{DocumentType, RegistrationDraft};

    fn complete_draft() -> RegistrationDraft {
        RegistrationDraft {
            full_name: "Ana García".to_string(),
            document_type: DocumentType::Dni,
            document_number: "12345678Z".to_string(),
            phone: "+34 612 345 678".to_string(),
            email: "ana@example.com".to_string(),
            check_in: "2026-08-07".to_string(),
            check_out: "2026-08-09".to_string(),
        }
    }

    #[test]
    fn complete_draft_validates_clean() {
        assert!(complete_draft().validate().is_empty());
    }

    #[test]
    fn document_number_is_checked_against_its_type() {
        let mut draft = complete_draft();
        draft.document_number = "X1234567L".to_string();
        assert!(draft.validate().document_number.is_some());

        draft.document_type = DocumentType::Nie;
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn stay_must_be_at_least_one_night() {
        let mut draft = complete_draft();
        draft.check_out = draft.check_in.clone();
        assert!(draft.validate().check_out.is_some());
    }

    #[test]
    fn request_normalizes_and_serializes_camel_case() {
        let mut draft = complete_draft();
        draft.document_number = " 12345678z ".to_string();
        let request = draft.to_request();
        assert_eq!(request.document_number, "12345678Z");

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"documentType\":\"DNI\""));
        assert!(json.contains("\"checkInDate\":\"2026-08-07\""));
    }
}
