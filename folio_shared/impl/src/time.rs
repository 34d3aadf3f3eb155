use chrono::{DateTime, Utc};
use folio_shared_contracts::time::TimeService;

#[derive(Debug, Clone, Copy)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
