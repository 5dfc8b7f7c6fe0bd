/// Placeholder token asking for a field to be derived from context.
pub const SENTINEL: &str = "!";

pub const DEFAULT_OFFSET: &str = "+1h";
pub const DEFAULT_TIMEZONE: &str = "-04:00";

pub const DEFAULT_CALENDAR_HOME: &str = "/dav.php/calendars";
pub const DEFAULT_CALENDAR: &str = "personal";

pub const UID_DOMAIN: &str = "caladd";
