use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use strum::EnumIter;

/// Availability/promotion state of a room type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum RoomFlag {
    Available,
    NotAvailable,
    Vip,
    MostRequested,
}

impl RoomFlag {
    /// The code persisted in the database and exposed over the API
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::NotAvailable => "not_available",
            Self::Vip => "vip",
            Self::MostRequested => "most_requested",
        }
    }
}

impl Display for RoomFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for RoomFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "not_available" => Ok(Self::NotAvailable),
            "vip" => Ok(Self::Vip),
            "most_requested" => Ok(Self::MostRequested),
            _ => Err(format!("Unknown room flag: {s}")),
        }
    }
}

/// Lifecycle state of a payment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(format!("Unknown payment status: {s}")),
        }
    }
}

/// How the guest chose to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    BankTransfer,
    Online,
}

impl PaymentMethod {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::CreditCard => "credit_card",
            Self::BankTransfer => "bank_transfer",
            Self::Online => "online",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "credit_card" => Ok(Self::CreditCard),
            "bank_transfer" => Ok(Self::BankTransfer),
            "online" => Ok(Self::Online),
            _ => Err(format!("Unknown payment method: {s}")),
        }
    }
}

/// Topic of an inbound contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum SubjectFlag {
    BookingInquiry,
    SportsClub,
    Complaint,
    Suggestion,
    Other,
}

impl SubjectFlag {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::BookingInquiry => "booking_inquiry",
            Self::SportsClub => "sports_club",
            Self::Complaint => "complaint",
            Self::Suggestion => "suggestion",
            Self::Other => "other",
        }
    }
}

impl Display for SubjectFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for SubjectFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booking_inquiry" => Ok(Self::BookingInquiry),
            "sports_club" => Ok(Self::SportsClub),
            "complaint" => Ok(Self::Complaint),
            "suggestion" => Ok(Self::Suggestion),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown contact subject: {s}")),
        }
    }
}

/// Maps a flag enum onto a plain string column holding its fixed code
#[cfg(feature = "database")]
macro_rules! impl_string_column {
    ($ty:ty) => {
        impl From<$ty> for sea_orm::Value {
            fn from(flag: $ty) -> Self {
                sea_orm::Value::String(Some(Box::new(flag.as_code().to_string())))
            }
        }

        impl sea_orm::TryGetable for $ty {
            fn try_get_by<I: sea_orm::ColIdx>(
                res: &sea_orm::QueryResult,
                index: I,
            ) -> Result<Self, sea_orm::TryGetError> {
                let val: String = res.try_get_by(index)?;

                val.as_str()
                    .parse()
                    .map_err(|e: String| sea_orm::TryGetError::DbErr(sea_orm::DbErr::Type(e)))
            }
        }

        impl sea_orm::sea_query::ValueType for $ty {
            fn try_from(v: sea_orm::Value) -> Result<Self, sea_orm::sea_query::ValueTypeErr> {
                match v {
                    sea_orm::Value::String(Some(s)) => {
                        s.as_str().parse().map_err(|_| sea_orm::sea_query::ValueTypeErr)
                    }
                    _ => Err(sea_orm::sea_query::ValueTypeErr),
                }
            }

            fn type_name() -> String {
                stringify!($ty).to_string()
            }

            fn array_type() -> sea_orm::sea_query::ArrayType {
                sea_orm::sea_query::ArrayType::String
            }

            fn column_type() -> sea_orm::sea_query::ColumnType {
                sea_orm::sea_query::ColumnType::Text
            }
        }

        impl sea_orm::sea_query::Nullable for $ty {
            fn null() -> sea_orm::Value {
                sea_orm::Value::String(None)
            }
        }
    };
}

#[cfg(feature = "database")]
impl_string_column!(RoomFlag);
#[cfg(feature = "database")]
impl_string_column!(PaymentStatus);
#[cfg(feature = "database")]
impl_string_column!(PaymentMethod);
#[cfg(feature = "database")]
impl_string_column!(SubjectFlag);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_room_flag_round_trip() {
        for flag in RoomFlag::iter() {
            let code = flag.to_string();
            assert_eq!(code.parse::<RoomFlag>().unwrap(), flag);
        }
    }

    #[test]
    fn test_payment_status_round_trip() {
        for status in PaymentStatus::iter() {
            let code = status.to_string();
            assert_eq!(code.parse::<PaymentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_payment_method_round_trip() {
        for method in PaymentMethod::iter() {
            let code = method.to_string();
            assert_eq!(code.parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_subject_flag_round_trip() {
        for subject in SubjectFlag::iter() {
            let code = subject.to_string();
            assert_eq!(code.parse::<SubjectFlag>().unwrap(), subject);
        }
    }

    #[test]
    fn test_exact_codes() {
        assert_eq!(RoomFlag::MostRequested.as_code(), "most_requested");
        assert_eq!(RoomFlag::NotAvailable.as_code(), "not_available");
        assert_eq!(PaymentMethod::CreditCard.as_code(), "credit_card");
        assert_eq!(PaymentMethod::BankTransfer.as_code(), "bank_transfer");
        assert_eq!(PaymentStatus::Refunded.as_code(), "refunded");
        assert_eq!(SubjectFlag::BookingInquiry.as_code(), "booking_inquiry");
    }

    #[test]
    fn test_serde_uses_the_codes() {
        assert_eq!(
            serde_json::to_value(PaymentMethod::BankTransfer).unwrap(),
            serde_json::json!("bank_transfer")
        );
        assert_eq!(
            serde_json::from_str::<RoomFlag>("\"most_requested\"").unwrap(),
            RoomFlag::MostRequested
        );
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert!("VIP".parse::<RoomFlag>().is_err());
        assert!("paid".parse::<PaymentStatus>().is_err());
        assert!("".parse::<PaymentMethod>().is_err());
        assert!("spam".parse::<SubjectFlag>().is_err());
    }
}
