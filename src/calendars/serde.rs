use crate::calendars::HolidaySet;
use crate::json::JSON;

impl JSON for HolidaySet {}
