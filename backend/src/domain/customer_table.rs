//! Customer table filtering, search, and pagination.
//!
//! Pure presentation-agnostic logic behind the dashboard's customer list:
//! the UI hands over the full batch plus the active filter and a page
//! number, and gets back one clamped page of matches. No UI framework
//! concerns live here.

use serde::{Deserialize, Serialize};

use shared::{CustomerPage, CustomerStatus, Kindergarten, Region};

/// Configuration for customer table display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerTableConfig {
    pub page_size: usize,
}

impl Default for CustomerTableConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}

/// Active table filter. An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerFilter {
    pub region: Option<Region>,
    pub status: Option<CustomerStatus>,
    /// Case-insensitive substring matched against name, suburb, and id.
    pub search: String,
}

impl CustomerFilter {
    fn matches(&self, record: &Kindergarten) -> bool {
        if let Some(region) = self.region {
            if record.region != region {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let hit = record.name.to_lowercase().contains(&needle)
                || record.suburb.to_lowercase().contains(&needle)
                || record.id.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Customer table service that handles filtering and pagination
#[derive(Debug, Clone, Default)]
pub struct CustomerTableService {
    config: CustomerTableConfig,
}

impl CustomerTableService {
    /// Create a service with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CustomerTableConfig) -> Self {
        Self { config }
    }

    /// All records matching the filter, in batch order.
    pub fn filter<'a>(
        &self,
        records: &'a [Kindergarten],
        filter: &CustomerFilter,
    ) -> Vec<&'a Kindergarten> {
        records.iter().filter(|k| filter.matches(k)).collect()
    }

    /// One page of the filtered records.
    ///
    /// `page` is 1-based and clamped into `[1, page_count]`; an empty match
    /// set yields page 1 of 0 with no customers.
    pub fn page(
        &self,
        records: &[Kindergarten],
        filter: &CustomerFilter,
        page: usize,
    ) -> CustomerPage {
        let matches = self.filter(records, filter);
        let total_matches = matches.len();
        let page_count = total_matches.div_ceil(self.config.page_size);

        let page = page.clamp(1, page_count.max(1));
        let start = (page - 1) * self.config.page_size;
        let customers: Vec<Kindergarten> = matches
            .into_iter()
            .skip(start)
            .take(self.config.page_size)
            .cloned()
            .collect();

        CustomerPage {
            customers,
            total_matches,
            page,
            page_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::generate_kindergartens;

    fn batch() -> Vec<Kindergarten> {
        generate_kindergartens(2700, 4).unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let records = batch();
        let service = CustomerTableService::new();
        let matches = service.filter(&records, &CustomerFilter::default());
        assert_eq!(matches.len(), records.len());
    }

    #[test]
    fn test_region_filter() {
        let records = batch();
        let service = CustomerTableService::new();
        let filter = CustomerFilter {
            region: Some(Region::Qld),
            ..Default::default()
        };
        let matches = service.filter(&records, &filter);
        assert!(!matches.is_empty());
        assert!(matches.iter().all(|k| k.region == Region::Qld));
        let expected = records.iter().filter(|k| k.region == Region::Qld).count();
        assert_eq!(matches.len(), expected);
    }

    #[test]
    fn test_status_filter() {
        let records = batch();
        let service = CustomerTableService::new();
        let filter = CustomerFilter {
            status: Some(CustomerStatus::Closed),
            ..Default::default()
        };
        let matches = service.filter(&records, &filter);
        assert_eq!(matches.len(), 200);
    }

    #[test]
    fn test_search_matches_name_suburb_and_id() {
        let records = batch();
        let service = CustomerTableService::new();

        let by_id = service.filter(
            &records,
            &CustomerFilter {
                search: "au-000042".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id, "AU-000042");

        let by_suburb = service.filter(
            &records,
            &CustomerFilter {
                search: "  Bondi ".to_string(),
                ..Default::default()
            },
        );
        assert!(!by_suburb.is_empty());
        assert!(by_suburb
            .iter()
            .all(|k| k.suburb == "Bondi" || k.name.to_lowercase().contains("bondi")));
    }

    #[test]
    fn test_filters_combine() {
        let records = batch();
        let service = CustomerTableService::new();
        let filter = CustomerFilter {
            region: Some(Region::Nsw),
            status: Some(CustomerStatus::Contacted),
            search: String::new(),
        };
        for record in service.filter(&records, &filter) {
            assert_eq!(record.region, Region::Nsw);
            assert_eq!(record.status, CustomerStatus::Contacted);
        }
    }

    #[test]
    fn test_pagination_slices_in_order() {
        let records = batch();
        let service = CustomerTableService::new();
        let filter = CustomerFilter::default();

        let first = service.page(&records, &filter, 1);
        assert_eq!(first.page, 1);
        assert_eq!(first.customers.len(), 20);
        assert_eq!(first.total_matches, 2700);
        assert_eq!(first.page_count, 135);
        assert_eq!(first.customers[0].id, "AU-000001");

        let second = service.page(&records, &filter, 2);
        assert_eq!(second.customers[0].id, "AU-000021");
    }

    #[test]
    fn test_page_is_clamped() {
        let records = batch();
        let service = CustomerTableService::new();
        let filter = CustomerFilter::default();

        let below = service.page(&records, &filter, 0);
        assert_eq!(below.page, 1);

        let above = service.page(&records, &filter, 9999);
        assert_eq!(above.page, above.page_count);
        assert!(!above.customers.is_empty());
    }

    #[test]
    fn test_empty_match_set() {
        let records = batch();
        let service = CustomerTableService::new();
        let filter = CustomerFilter {
            search: "no such kindergarten anywhere".to_string(),
            ..Default::default()
        };
        let page = service.page(&records, &filter, 3);
        assert_eq!(page.total_matches, 0);
        assert_eq!(page.page_count, 0);
        assert_eq!(page.page, 1);
        assert!(page.customers.is_empty());
    }

    #[test]
    fn test_custom_page_size() {
        let records = batch();
        let service = CustomerTableService::with_config(CustomerTableConfig { page_size: 50 });
        let page = service.page(&records, &CustomerFilter::default(), 1);
        assert_eq!(page.customers.len(), 50);
        assert_eq!(page.page_count, 54);
    }
}
