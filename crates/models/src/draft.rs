use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

use crate::flags::PaymentMethod;

/// Custom error type for an incomplete or inconsistent booking draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Step 3 was submitted before step 2 captured the guest's contact details
    MissingContact,
    /// A required field arrived empty
    EmptyField(&'static str),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::MissingContact => write!(f, "Contact details have not been provided yet"),
            Self::EmptyField(field) => write!(f, "Required field is empty: {field}"),
        }
    }
}

/// Fields collected by the first wizard step: the room and the stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayFields {
    pub room_slug: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub number_of_adults: u32,
    pub number_of_children: u32,
    pub special_requests: Option<String>,
}

/// Fields collected by the second wizard step: who is booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub nationality_id: Option<Uuid>,
}

impl ContactFields {
    fn validate(&self) -> Result<(), DraftError> {
        if self.first_name.trim().is_empty() {
            return Err(DraftError::EmptyField("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(DraftError::EmptyField("last_name"));
        }
        if self.email.trim().is_empty() {
            return Err(DraftError::EmptyField("email"));
        }
        if self.phone.trim().is_empty() {
            return Err(DraftError::EmptyField("phone"));
        }

        Ok(())
    }
}

/// The in-progress booking accumulated across wizard steps. Each step folds
/// its fields in; nothing is persisted until the draft is finalized and
/// committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub stay: StayFields,
    pub contact: Option<ContactFields>,
}

impl BookingDraft {
    /// Step 1: only presence is enforced here; date rules are checked at
    /// commit time against the current day.
    pub fn begin(stay: StayFields) -> Self {
        Self {
            stay,
            contact: None,
        }
    }

    /// Step 2: merge the guest's contact details into the draft
    pub fn with_contact(mut self, contact: ContactFields) -> Result<Self, DraftError> {
        contact.validate()?;
        self.contact = Some(contact);
        Ok(self)
    }

    /// Step 3: the draft is complete once both earlier steps have been
    /// captured and a payment method is chosen
    pub fn finalize(self, payment_method: PaymentMethod) -> Result<CompletedDraft, DraftError> {
        let contact = self.contact.ok_or(DraftError::MissingContact)?;

        Ok(CompletedDraft {
            stay: self.stay,
            contact,
            payment_method,
        })
    }
}

/// Everything the commit step needs, guaranteed present by construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedDraft {
    pub stay: StayFields,
    pub contact: ContactFields,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay() -> StayFields {
        StayFields {
            room_slug: "sea-view-double".to_string(),
            arrival_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            departure_date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            number_of_adults: 2,
            number_of_children: 0,
            special_requests: None,
        }
    }

    fn contact() -> ContactFields {
        ContactFields {
            first_name: "Lina".to_string(),
            last_name: "Haddad".to_string(),
            email: "lina@example.com".to_string(),
            phone: "+96170000000".to_string(),
            nationality_id: None,
        }
    }

    #[test]
    fn test_three_step_merge() {
        let draft = BookingDraft::begin(stay())
            .with_contact(contact())
            .unwrap();
        let completed = draft.finalize(PaymentMethod::CreditCard).unwrap();

        assert_eq!(completed.stay.room_slug, "sea-view-double");
        assert_eq!(completed.contact.email, "lina@example.com");
        assert_eq!(completed.payment_method, PaymentMethod::CreditCard);
    }

    #[test]
    fn test_finalize_requires_contact_step() {
        let draft = BookingDraft::begin(stay());
        assert_eq!(
            draft.finalize(PaymentMethod::Cash),
            Err(DraftError::MissingContact)
        );
    }

    #[test]
    fn test_contact_fields_must_be_present() {
        let mut missing_email = contact();
        missing_email.email = "  ".to_string();

        let result = BookingDraft::begin(stay()).with_contact(missing_email);
        assert_eq!(result, Err(DraftError::EmptyField("email")));
    }

    #[test]
    fn test_contact_step_can_be_resubmitted() {
        let first = contact();
        let mut second = contact();
        second.phone = "+96171111111".to_string();

        let draft = BookingDraft::begin(stay())
            .with_contact(first)
            .unwrap()
            .with_contact(second.clone())
            .unwrap();

        assert_eq!(draft.contact, Some(second));
    }
}
