use crate::json::JSON;
use crate::timeinfo::{TimeField, TimeInfoExtractor, TimeInfoSpec};

impl JSON for TimeField {}
impl JSON for TimeInfoSpec {}
impl JSON for TimeInfoExtractor {}
