use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Contact information for a lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./lead.ts")]
pub struct Contact {
    /// Full name of the person.
    pub name: String,
    /// Email address the proposal link is sent to.
    pub email: String,
    /// Phone number, if provided.
    pub phone: Option<String>,
}

impl Contact {
    pub fn new(name: String, email: String, phone: Option<String>) -> Self {
        Contact { name, email, phone }
    }

    /// Get formatted contact string for back-office display.
    pub fn formatted(&self) -> String {
        let mut parts = vec![self.name.clone(), self.email.clone()];

        if let Some(ref phone) = self.phone {
            parts.push(phone.clone());
        }

        parts.join(", ")
    }
}

/// A lead captured through the consumption form.
///
/// The web layer persists this record next to the estimation result; the
/// estimator itself only reads the consumption figures and the location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./lead.ts")]
pub struct Lead {
    /// The id of the lead.
    pub id: String,
    /// Contact details.
    pub contact: Contact,
    /// Free-text location as submitted in the form.
    pub location: String,
    /// Monthly electricity consumption in kWh, as submitted.
    pub monthly_consumption_kwh: f64,
    /// Average monthly bill in USD, 0 when unknown.
    pub average_monthly_bill: f64,
}

impl Lead {
    pub fn new(
        id: String,
        contact: Contact,
        location: String,
        monthly_consumption_kwh: f64,
        average_monthly_bill: f64,
    ) -> Self {
        Lead {
            id,
            contact,
            location,
            monthly_consumption_kwh,
            average_monthly_bill,
        }
    }

    /// Create a lead with minimal information from the short form.
    pub fn minimal(id: String, email: String, monthly_consumption_kwh: f64) -> Self {
        let contact = Contact::new(String::new(), email, None);

        Lead {
            id,
            contact,
            location: String::new(),
            monthly_consumption_kwh,
            average_monthly_bill: 0.0,
        }
    }

    /// Get full display string for the lead.
    pub fn display(&self) -> String {
        format!(
            "{} ({}): {} kWh/month",
            self.contact.name, self.location, self.monthly_consumption_kwh
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_formatted() {
        let with_phone = Contact::new(
            "Ana Rios".to_string(),
            "ana@example.com".to_string(),
            Some("+507 6000-0000".to_string()),
        );
        assert_eq!(
            with_phone.formatted(),
            "Ana Rios, ana@example.com, +507 6000-0000"
        );

        let without_phone = Contact::new("Ana Rios".to_string(), "ana@example.com".to_string(), None);
        assert_eq!(without_phone.formatted(), "Ana Rios, ana@example.com");
    }

    #[test]
    fn test_lead_minimal() {
        let lead = Lead::minimal("lead-1".to_string(), "ana@example.com".to_string(), 350.0);
        assert_eq!(lead.contact.email, "ana@example.com");
        assert_eq!(lead.average_monthly_bill, 0.0);
        assert!(lead.location.is_empty());
    }
}
