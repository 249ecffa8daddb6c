use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Maps the status spellings found in stored records onto one variant.
    /// Unrecognised text is treated as `Pending` so it never blocks a vehicle.
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "confirmed" | "подтверждена" | "подтвержден" => Self::Confirmed,
            "completed" | "завершена" | "завершен" => Self::Completed,
            "cancelled" | "canceled" | "отменена" | "отменен" => Self::Cancelled,
            "pending" | "ожидает" | "новая" => Self::Pending,
            _ => {
                tracing::warn!(status = raw, "unknown reservation status, treating as pending");
                Self::Pending
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}
