use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accommodation offered by the albergue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Shared,
    Private,
}

impl RoomType {
    pub fn label(self) -> &'static str {
        match self {
            RoomType::Shared => "Shared Room",
            RoomType::Private => "Private Room",
        }
    }

    /// Beds available per reservation of this type.
    pub fn max_guests(self) -> u32 {
        match self {
            RoomType::Shared => 8,
            RoomType::Private => 2,
        }
    }

    /// Price per guest and night, in euro cents.
    pub fn nightly_rate_cents(self) -> i64 {
        match self {
            RoomType::Shared => 1_200,
            RoomType::Private => 2_500,
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "shared" => Some(RoomType::Shared),
            "private" => Some(RoomType::Private),
            _ => None,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            RoomType::Shared => "shared",
            RoomType::Private => "private",
        }
    }
}

/// What the visitor has filled in so far. Dates stay as the raw `YYYY-MM-DD`
/// strings the date inputs produce; parsing happens at validation time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingDraft {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub room_type: RoomType,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            check_in: String::new(),
            check_out: String::new(),
            guests: 1,
            room_type: RoomType::Shared,
        }
    }
}

/// Per-field validation outcome for the booking form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingErrors {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<String>,
}

impl BookingErrors {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none() && self.check_out.is_none() && self.guests.is_none()
    }
}

impl BookingDraft {
    pub fn validate(&self) -> BookingErrors {
        let mut errors = BookingErrors::default();

        let check_in = parse_date(&self.check_in);
        let check_out = parse_date(&self.check_out);

        if check_in.is_none() {
            errors.check_in = Some("Select a check-in date.".to_string());
        }
        if check_out.is_none() {
            errors.check_out = Some("Select a check-out date.".to_string());
        }
        if let (Some(arrival), Some(departure)) = (check_in, check_out) {
            if departure <= arrival {
                errors.check_out = Some("Check-out must be after check-in.".to_string());
            }
        }

        if self.guests == 0 {
            errors.guests = Some("At least one guest is required.".to_string());
        } else if self.guests > self.room_type.max_guests() {
            errors.guests = Some(format!(
                "A {} takes at most {} guests.",
                self.room_type.label().to_lowercase(),
                self.room_type.max_guests()
            ));
        }

        errors
    }

    /// Nights between check-in and check-out, when both parse and are ordered.
    pub fn nights(&self) -> Option<i64> {
        let arrival = parse_date(&self.check_in)?;
        let departure = parse_date(&self.check_out)?;
        let nights = (departure - arrival).num_days();
        (nights >= 1).then_some(nights)
    }

    /// Total price in euro cents for the whole stay.
    pub fn total_cents(&self) -> Option<i64> {
        let nights = self.nights()?;
        Some(nights * i64::from(self.guests) * self.room_type.nightly_rate_cents())
    }

    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            check_in_date: self.check_in.clone(),
            check_out_date: self.check_out.clone(),
            guests: self.guests,
            room_type: self.room_type,
        }
    }
}

/// Payload posted to the external booking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub check_in_date: String,
    pub check_out_date: String,
    pub guests: u32,
    pub room_type: RoomType,
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Formats euro cents the Spanish way: `.` thousands, `,` decimals.
pub fn format_eur(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let euros = cents / 100;
    let fraction = cents % 100;

    let digits = euros.to_string();
    let mut grouped = String::new();
    for (index, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        grouped.push(digit);
        if remaining > 1 && remaining % 3 == 1 {
            grouped.push('.');
        }
    }

    format!("{sign}{grouped},{fraction:02} €")
}

#[cfg(test)]
mod tests {
    use super::{format_eur, BookingDraft, BookingRequest, RoomType};

    fn draft(check_in: &str, check_out: &str, guests: u32, room_type: RoomType) -> BookingDraft {
        BookingDraft {
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            guests,
            room_type,
        }
    }

    #[test]
    fn nights_counts_whole_days() {
        let draft = draft("2026-08-07", "2026-08-10", 2, RoomType::Shared);
        assert_eq!(draft.nights(), Some(3));
    }

    #[test]
    fn nights_rejects_unordered_or_unparsable_dates() {
        assert_eq!(draft("2026-08-10", "2026-08-07", 1, RoomType::Shared).nights(), None);
        assert_eq!(draft("2026-08-07", "2026-08-07", 1, RoomType::Shared).nights(), None);
        assert_eq!(draft("soon", "2026-08-07", 1, RoomType::Shared).nights(), None);
    }

    #[test]
    fn total_multiplies_nights_guests_and_rate() {
        let draft = draft("2026-08-07", "2026-08-09", 2, RoomType::Shared);
        // 2 nights x 2 guests x 12.00
        assert_eq!(draft.total_cents(), Some(4_800));
    }

    #[test]
    fn validate_flags_each_field() {
        let draft = draft("", "2026-08-10", 0, RoomType::Private);
        let errors = draft.validate();
        assert!(errors.check_in.is_some());
        assert!(errors.guests.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn validate_caps_guests_by_room_type() {
        let private = draft("2026-08-07", "2026-08-10", 3, RoomType::Private);
        let errors = private.validate();
        assert!(errors.guests.is_some());

        let draft = draft("2026-08-07", "2026-08-10", 3, RoomType::Shared);
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn request_serializes_camel_case() {
        let json = serde_json::to_string(
            &draft("2026-08-07", "2026-08-10", 2, RoomType::Private).to_request(),
        )
        .unwrap();
        assert!(json.contains("\"checkInDate\":\"2026-08-07\""));
        assert!(json.contains("\"roomType\":\"private\""));

        let back: BookingRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.guests, 2);
    }

    #[test]
    fn format_eur_groups_and_pads() {
        assert_eq!(format_eur(0), "0,00 €");
        assert_eq!(format_eur(4_800), "48,00 €");
        assert_eq!(format_eur(1_234_567), "12.345,67 €");
        assert_eq!(format_eur(-150), "-1,50 €");
    }
}
