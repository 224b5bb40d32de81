use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

use crate::{Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// std duration

/// Durations are textual scalars in their `Debug` form (`"1.5s"`, `"25ns"`).
impl Reflect for Duration {
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("core::time::Duration")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("Duration")
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(Cow::Owned(format!("{self:?}")))
    }
}

// -----------------------------------------------------------------------------
// chrono

/// Zoned date/times are textual scalars in RFC 3339 form.
impl<Tz: TimeZone> Reflect for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn type_path(&self) -> Cow<'static, str> {
        Cow::Borrowed("chrono::DateTime")
    }

    fn type_ident(&self) -> Cow<'static, str> {
        Cow::Borrowed("DateTime")
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Text(Cow::Owned(self.to_rfc3339()))
    }
}

macro_rules! impl_reflect_chrono_display {
    ($($ty:ident => $path:literal),* $(,)?) => {$(
        /// Textual scalar in its `Display` (ISO 8601) form.
        impl Reflect for $ty {
            fn type_path(&self) -> Cow<'static, str> {
                Cow::Borrowed($path)
            }

            fn type_ident(&self) -> Cow<'static, str> {
                Cow::Borrowed(stringify!($ty))
            }

            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Text(Cow::Owned(self.to_string()))
            }
        }
    )*};
}

impl_reflect_chrono_display! {
    NaiveDate => "chrono::NaiveDate",
    NaiveDateTime => "chrono::NaiveDateTime",
    NaiveTime => "chrono::NaiveTime",
    TimeDelta => "chrono::TimeDelta",
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn datetime_is_rfc3339_text() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let ReflectRef::Text(text) = instant.reflect_ref() else {
            panic!("date/times reflect as text");
        };
        assert_eq!(text, "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn naive_date_is_iso_text() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let ReflectRef::Text(text) = date.reflect_ref() else {
            panic!("dates reflect as text");
        };
        assert_eq!(text, "2024-05-01");
    }

    #[test]
    fn std_duration_is_text() {
        let duration = Duration::from_millis(1500);
        let ReflectRef::Text(text) = duration.reflect_ref() else {
            panic!("durations reflect as text");
        };
        assert_eq!(text, "1.5s");
    }
}
