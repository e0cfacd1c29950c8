//! Site-wide constants. Everything that points outside the app lives here so
//! swapping the booking provider or contact address is a one-line change.

pub const BOOKING_URL: &str = "https://calendly.com/arganalytics/strategy-call";
pub const CONTACT_EMAIL: &str = "hello@arganalytics.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/company/arg-analytics";
