use crate::json::JSON;
use crate::timezones::TzConverter;

impl JSON for TzConverter {}
