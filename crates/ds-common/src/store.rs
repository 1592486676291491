//! In-memory report repository.
//!
//! Replaces the original dashboard's mutable component-state array with an
//! explicit create/list/get/delete interface. Records live only for the
//! lifetime of the store; there is no server-side persistence.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::model::{Report, ReportFormat, ReportType};

/// In-memory list of report descriptors, newest first.
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: Vec<Report>,
    next_id: u64,
}

impl ReportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with existing records.
    ///
    /// The next assigned id is one past the highest seeded id.
    pub fn with_reports(reports: Vec<Report>) -> Self {
        let next_id = reports.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self { reports, next_id }
    }

    /// Create a new report descriptor, stamped with the current time.
    ///
    /// The record is inserted at the front of the list.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        report_type: ReportType,
        report_format: ReportFormat,
    ) -> Report {
        let report = Report {
            id: self.next_id,
            title: title.into(),
            report_type,
            report_format,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.reports.insert(0, report.clone());
        report
    }

    /// All reports, newest first.
    pub fn list(&self) -> &[Report] {
        &self.reports
    }

    /// Look up a report by id.
    pub fn get(&self, id: u64) -> Result<&Report> {
        self.reports
            .iter()
            .find(|r| r.id == id)
            .ok_or(Error::ReportNotFound { id })
    }

    /// Remove a report by id.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let before = self.reports.len();
        self.reports.retain(|r| r.id != id);
        if self.reports.len() == before {
            return Err(Error::ReportNotFound { id });
        }
        Ok(())
    }

    /// Number of stored reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = ReportStore::new();
        let a = store.create("First", ReportType::Daily, ReportFormat::Json);
        let b = store.create("Second", ReportType::Monthly, ReportFormat::Xml);

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_is_newest_first() {
        let mut store = ReportStore::new();
        store.create("First", ReportType::Daily, ReportFormat::Json);
        store.create("Second", ReportType::Daily, ReportFormat::Json);

        let titles: Vec<_> = store.list().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn test_get_and_delete() {
        let mut store = ReportStore::new();
        let report = store.create("Only", ReportType::Custom, ReportFormat::Pdf);

        assert_eq!(store.get(report.id).unwrap().title, "Only");
        store.delete(report.id).unwrap();
        assert!(store.is_empty());

        match store.get(report.id) {
            Err(Error::ReportNotFound { id }) => assert_eq!(id, report.id),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(store.delete(report.id).is_err());
    }

    #[test]
    fn test_with_reports_continues_ids() {
        let mut store = ReportStore::with_reports(crate::demo::reports());
        let next = store.create("New", ReportType::Daily, ReportFormat::Json);
        assert_eq!(next.id, 4);
    }
}
