use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{Reader, StringRecord, Writer};
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use shared::{Category, CustomerStatus, Kindergarten, Rating, Region, SourceChannel, Tag};

/// Column order of the exchange format.
const HEADERS: [&str; 17] = [
    "id",
    "name",
    "region",
    "suburb",
    "address",
    "phone",
    "email",
    "website",
    "category",
    "rating",
    "capacity",
    "approved_date",
    "status",
    "source_channel",
    "tags",
    "last_contact_date",
    "notes",
];

const TAG_SEPARATOR: char = ';';

/// CSV-backed repository for one customer batch file.
#[derive(Debug, Clone)]
pub struct KindergartenRepository {
    path: PathBuf,
}

/// Resolved column positions; a column missing from the header simply
/// yields the field's default for every row.
struct ColumnIndex {
    positions: [Option<usize>; HEADERS.len()],
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = [None; HEADERS.len()];
        for (slot, name) in HEADERS.iter().enumerate() {
            positions[slot] = headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name));
        }
        Self { positions }
    }

    fn get<'a>(&self, record: &'a StringRecord, column: &str) -> &'a str {
        let slot = HEADERS.iter().position(|h| *h == column).unwrap();
        self.positions[slot]
            .and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
    }
}

impl KindergartenRepository {
    /// Create a repository over a batch file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the batch, substituting per-field defaults for anything the
    /// schema does not recognize. A malformed field never rejects its row,
    /// and an unreadable row never rejects the batch.
    pub fn load(&self) -> Result<Vec<Kindergarten>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open batch file {}", self.path.display()))?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let columns = ColumnIndex::from_headers(
            csv_reader
                .headers()
                .context("Failed to read CSV header row")?,
        );

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!("Skipping unreadable CSV row: {}", e);
                    continue;
                }
            };
            records.push(self.parse_row(&columns, &row));
        }

        info!(
            "Loaded {} customer records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Write the batch out with the full header set.
    pub fn save(&self, records: &[Kindergarten]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create batch file {}", self.path.display()))?;
        let mut csv_writer = Writer::from_writer(BufWriter::new(file));

        csv_writer.write_record(HEADERS)?;
        for record in records {
            let capacity = record.capacity.to_string();
            let tags = record
                .tags
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(&TAG_SEPARATOR.to_string());
            csv_writer.write_record([
                record.id.as_str(),
                record.name.as_str(),
                record.region.as_code(),
                record.suburb.as_str(),
                record.address.as_str(),
                record.phone.as_str(),
                record.email.as_str(),
                record.website.as_str(),
                record.category.as_str(),
                record.rating.as_str(),
                capacity.as_str(),
                record.approved_date.as_str(),
                record.status.as_str(),
                record.source_channel.map(|s| s.as_str()).unwrap_or(""),
                tags.as_str(),
                record.last_contact_date.as_deref().unwrap_or(""),
                record.notes.as_str(),
            ])?;
        }
        csv_writer.flush()?;

        info!(
            "Saved {} customer records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn parse_row(&self, columns: &ColumnIndex, row: &StringRecord) -> Kindergarten {
        let id = columns.get(row, "id").to_string();

        let region_token = columns.get(row, "region");
        let region = Region::parse_or_default(region_token);
        if !region_token.is_empty() && Region::parse(region_token).is_none() {
            warn!(
                "Record {}: unrecognized region {:?}, substituting {}",
                id,
                region_token,
                region.as_code()
            );
        }

        let capacity_token = columns.get(row, "capacity");
        let capacity = capacity_token.parse::<u32>().unwrap_or_else(|_| {
            if !capacity_token.is_empty() {
                warn!(
                    "Record {}: unparseable capacity {:?}, substituting 0",
                    id, capacity_token
                );
            }
            0
        });

        let tags_token = columns.get(row, "tags");
        let tag_parts: Vec<Tag> = tags_token
            .split(TAG_SEPARATOR)
            .filter_map(Tag::parse)
            .collect();
        // Normalize to vocabulary order without duplicates.
        let tags: Vec<Tag> = Tag::ALL
            .into_iter()
            .filter(|t| tag_parts.contains(t))
            .collect();

        Kindergarten {
            name: columns.get(row, "name").to_string(),
            region,
            suburb: columns.get(row, "suburb").to_string(),
            address: columns.get(row, "address").to_string(),
            phone: columns.get(row, "phone").to_string(),
            email: columns.get(row, "email").to_string(),
            website: columns.get(row, "website").to_string(),
            category: Category::parse_or_default(columns.get(row, "category")),
            rating: Rating::parse_or_default(columns.get(row, "rating")),
            capacity,
            approved_date: self.normalize_date(&id, columns.get(row, "approved_date")),
            status: CustomerStatus::parse_or_default(columns.get(row, "status")),
            source_channel: SourceChannel::parse(columns.get(row, "source_channel")),
            tags,
            last_contact_date: {
                let date = self.normalize_date(&id, columns.get(row, "last_contact_date"));
                if date.is_empty() {
                    None
                } else {
                    Some(date)
                }
            },
            notes: columns.get(row, "notes").to_string(),
            id,
        }
    }

    /// Keep a date only if it is a well-formed `YYYY-MM-DD` value; blank
    /// anything else rather than carrying junk into the schema.
    fn normalize_date(&self, id: &str, token: &str) -> String {
        if token.is_empty() {
            return String::new();
        }
        match NaiveDate::parse_from_str(token, "%Y-%m-%d") {
            Ok(_) => token.to_string(),
            Err(_) => {
                warn!("Record {}: malformed date {:?}, blanking it", id, token);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generator::generate_kindergartens;
    use std::io::Write as _;

    fn repository_in(dir: &tempfile::TempDir) -> KindergartenRepository {
        KindergartenRepository::new(dir.path().join("kindergartens.csv"))
    }

    fn write_raw(repository: &KindergartenRepository, contents: &str) {
        let mut file = File::create(repository.path()).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[test]
    fn test_save_then_load_round_trips_a_generated_batch() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);

        let records = generate_kindergartens(2700, 9).unwrap();
        repository.save(&records).unwrap();
        let loaded = repository.load().unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_unrecognized_enums_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);
        write_raw(
            &repository,
            "id,name,region,suburb,address,phone,email,website,category,rating,capacity,approved_date,status,source_channel,tags,last_contact_date,notes\n\
             AU-000001,Test Centre,ZZZ,Nowhere,1 Fake St,00,x@y.z,,Space Camp,Stellar,junk,not-a-date,mysterious,Carrier Pigeon,Montessori;Basketweaving,2024-13-99,\n",
        );

        let records = repository.load().unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.region, Region::Nsw);
        assert_eq!(record.category, Category::LongDayCare);
        assert_eq!(record.rating, Rating::Meeting);
        assert_eq!(record.status, CustomerStatus::NotContacted);
        assert_eq!(record.source_channel, None);
        assert_eq!(record.capacity, 0);
        assert_eq!(record.approved_date, "");
        assert_eq!(record.last_contact_date, None);
        assert_eq!(record.tags, vec![Tag::Montessori]);
    }

    #[test]
    fn test_missing_columns_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);
        write_raw(
            &repository,
            "id,name,region\nAU-000001,Partial Centre,VIC\n",
        );

        let records = repository.load().unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, "AU-000001");
        assert_eq!(record.name, "Partial Centre");
        assert_eq!(record.region, Region::Vic);
        assert_eq!(record.website, "");
        assert_eq!(record.capacity, 0);
        assert_eq!(record.status, CustomerStatus::NotContacted);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_tags_are_deduplicated_and_reordered() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);
        write_raw(
            &repository,
            "id,name,region,tags\nAU-000001,Tagged Centre,QLD,Reggio; Newly Opened ;Reggio\n",
        );

        let records = repository.load().unwrap();
        assert_eq!(records[0].tags, vec![Tag::NewlyOpened, Tag::Reggio]);
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);
        write_raw(
            &repository,
            "ID,Name,REGION,Status\nAU-000007,Shouty Centre,tas,closed\n",
        );

        let records = repository.load().unwrap();
        let record = &records[0];
        assert_eq!(record.id, "AU-000007");
        assert_eq!(record.region, Region::Tas);
        assert_eq!(record.status, CustomerStatus::Closed);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repository = repository_in(&dir);
        assert!(repository.load().is_err());
    }
}
