pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod text;
pub(crate) mod timezone;

pub(crate) use date::parse_timestamp;
pub(crate) use debug::{debug_enabled, debug_log, set_debug, warn};
pub(crate) use text::{truncate_chars, truncate_with};
pub(crate) use timezone::Timezone;
