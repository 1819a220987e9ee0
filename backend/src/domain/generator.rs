//! Deterministic synthetic customer batch generation.
//!
//! A batch is a pure function of `(count, seed)`: the same inputs produce a
//! field-for-field identical sequence of records on every run and platform.
//! That only holds because every sampling step draws from the stream in a
//! fixed order, which is a contract, not an implementation detail:
//!
//! 1. The status vector (200 closed, 500 interested, 2000 contacted, the
//!    remainder not contacted) is built and shuffled before any per-record
//!    sampling.
//! 2. Per record: region → suburb → name prefix → name suffix → category →
//!    rating → capacity → approved date (year, month, day) → status from
//!    the vector → source channel and last-contact date (contacted records
//!    only) → one draw per vocabulary tag → street number → street name →
//!    phone digits → website presence → email digit suffix → email domain
//!    → notes phrase (closed records only).
//!
//! Batching, reordering, or skipping draws shifts every later value in the
//! stream and silently changes every seeded batch.

use log::{debug, info};

use crate::domain::rng::{shuffle, uniform_choice, weighted_choice, SeededRng};
use shared::{Category, CustomerStatus, Kindergarten, Rating, Region, SourceChannel, Tag};

/// Batch size used by the dashboard's initial load.
pub const DEFAULT_RECORD_COUNT: usize = 17_000;
/// Seed used by the dashboard's initial load; refreshing bumps it.
pub const DEFAULT_SEED: u64 = 12_345;

const CLOSED_COUNT: usize = 200;
const INTERESTED_COUNT: usize = 500;
const CONTACTED_COUNT: usize = 2_000;

/// Smallest batch that can hold the fixed status counts.
pub const MIN_RECORD_COUNT: usize = CLOSED_COUNT + INTERESTED_COUNT + CONTACTED_COUNT;

/// Region sampling profile: population-based weight plus the closed suburb
/// list records in that region draw from.
struct RegionProfile {
    region: Region,
    weight: f64,
    suburbs: &'static [&'static str],
}

const REGION_PROFILES: [RegionProfile; 8] = [
    RegionProfile {
        region: Region::Nsw,
        weight: 0.32,
        suburbs: &[
            "Sydney", "Parramatta", "Liverpool", "Blacktown", "Penrith", "Newcastle",
            "Wollongong", "Chatswood", "Bondi", "Manly", "Hornsby", "Bankstown",
            "Campbelltown", "Ryde", "Burwood", "Strathfield", "Hurstville", "Kogarah",
            "Cronulla", "Dee Why",
        ],
    },
    RegionProfile {
        region: Region::Vic,
        weight: 0.26,
        suburbs: &[
            "Melbourne", "Geelong", "Ballarat", "Bendigo", "Frankston", "Dandenong",
            "Box Hill", "Glen Waverley", "Doncaster", "Ringwood", "Brighton", "St Kilda",
            "Carlton", "Footscray", "Werribee", "Sunbury", "Craigieburn", "Epping",
            "Mornington", "Pakenham",
        ],
    },
    RegionProfile {
        region: Region::Qld,
        weight: 0.20,
        suburbs: &[
            "Brisbane", "Gold Coast", "Sunshine Coast", "Cairns", "Townsville",
            "Toowoomba", "Rockhampton", "Mackay", "Bundaberg", "Hervey Bay", "Ipswich",
            "Logan", "Redcliffe", "Caboolture", "Nambour", "Caloundra", "Southport",
            "Surfers Paradise", "Robina", "Nerang",
        ],
    },
    RegionProfile {
        region: Region::Wa,
        weight: 0.10,
        suburbs: &[
            "Perth", "Fremantle", "Joondalup", "Mandurah", "Rockingham", "Bunbury",
            "Albany", "Geraldton", "Kalgoorlie", "Broome", "Subiaco", "Nedlands",
            "Claremont", "Cottesloe", "Scarborough", "Morley", "Midland", "Armadale",
            "Cannington", "Victoria Park",
        ],
    },
    RegionProfile {
        region: Region::Sa,
        weight: 0.07,
        suburbs: &[
            "Adelaide", "Mount Gambier", "Whyalla", "Murray Bridge", "Port Augusta",
            "Port Lincoln", "Victor Harbor", "Gawler", "Salisbury", "Elizabeth",
            "Modbury", "Marion", "Unley", "Norwood", "Burnside", "Mitcham", "Glenelg",
            "Semaphore", "Henley Beach", "Brighton",
        ],
    },
    RegionProfile {
        region: Region::Tas,
        weight: 0.025,
        suburbs: &[
            "Hobart", "Launceston", "Devonport", "Burnie", "Kingston", "Sandy Bay",
            "Glenorchy", "Moonah", "New Town", "Lindisfarne", "Bellerive", "Rosny",
            "Howrah", "Mowbray", "Newnham", "Ravenswood", "Legana", "Perth", "Longford",
            "George Town",
        ],
    },
    RegionProfile {
        region: Region::Act,
        weight: 0.02,
        suburbs: &[
            "Canberra", "Belconnen", "Woden", "Tuggeranong", "Gungahlin", "Civic",
            "Braddon", "Kingston", "Manuka", "Deakin", "Curtin", "Weston", "Kambah",
            "Ngunnawal", "Harrison", "Franklin", "Casey", "Amaroo", "Bonner", "Coombs",
        ],
    },
    RegionProfile {
        region: Region::Nt,
        weight: 0.015,
        suburbs: &[
            "Darwin", "Alice Springs", "Katherine", "Palmerston", "Casuarina",
            "Nightcliff", "Fannie Bay", "Stuart Park", "Parap", "Rapid Creek", "Millner",
            "Malak", "Karama", "Wulagi", "Leanyer", "Brinkin", "Muirhead", "Lyons",
            "Moulden", "Gray",
        ],
    },
];

const CATEGORY_WEIGHTS: [f64; 4] = [0.55, 0.20, 0.15, 0.10];
const RATING_WEIGHTS: [f64; 3] = [0.25, 0.55, 0.20];

const NAME_PREFIXES: [&str; 30] = [
    "Little", "Bright", "Happy", "Sunshine", "Rainbow", "Golden", "Tiny", "Growing",
    "Curious", "Creative", "Learning", "Discovery", "Adventure", "Wonder", "Magic",
    "Star", "Garden", "Village", "Community", "Family", "Kids", "Children's", "Early",
    "First", "Step", "Future", "Dream", "Joy", "Play", "Fun",
];

const NAME_SUFFIXES: [&str; 20] = [
    "Academy", "Learning Centre", "Early Learning", "Childcare", "Kindergarten",
    "Preschool", "Child Care Centre", "Early Education", "Kids Club", "Learning Hub",
    "Development Centre", "Education Centre", "Play School", "Nursery", "Day Care",
    "Learning Academy", "Education Hub", "Children's Centre", "Kids Academy",
    "Learning Space",
];

const STREET_NAMES: [&str; 10] = [
    "Main", "High", "Park", "Station", "Church", "School", "Garden", "Lake", "River",
    "Hill",
];

const EMAIL_DOMAINS: [&str; 5] = [
    "gmail.com", "outlook.com", "childcare.edu.au", "education.net.au", "hotmail.com",
];

const CLOSED_NOTES: [&str; 4] = [
    "Premium customer",
    "Repeat purchaser",
    "Large order customer",
    "Stable partnership",
];

/// Generation cannot fail for any seed; the only precondition is that the
/// batch is large enough to hold the fixed status counts.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(
        "cannot generate {requested} records: the fixed status counts require at least {minimum}"
    )]
    CountTooSmall { requested: usize, minimum: usize },
}

/// Generate a deterministic batch of `count` customer records from `seed`.
///
/// Records are returned in generation order with ids `AU-000001` through
/// `AU-<count>`. Requires `count >= MIN_RECORD_COUNT`.
pub fn generate_kindergartens(
    count: usize,
    seed: u64,
) -> Result<Vec<Kindergarten>, GenerateError> {
    if count < MIN_RECORD_COUNT {
        return Err(GenerateError::CountTooSmall {
            requested: count,
            minimum: MIN_RECORD_COUNT,
        });
    }

    info!("Generating {} customer records with seed {}", count, seed);

    let mut rng = SeededRng::new(seed);
    let statuses = build_status_vector(count, &mut rng);

    let region_weights: Vec<f64> = REGION_PROFILES.iter().map(|p| p.weight).collect();

    let mut records = Vec::with_capacity(count);
    for (index, status) in statuses.into_iter().enumerate() {
        records.push(synthesize_record(index, status, &region_weights, &mut rng));
    }

    debug!("Generated {} records", records.len());
    Ok(records)
}

/// Lay out the fixed status counts, then shuffle them across the whole
/// batch so the stages are scattered over the id range.
fn build_status_vector(count: usize, rng: &mut SeededRng) -> Vec<CustomerStatus> {
    let mut statuses = Vec::with_capacity(count);
    statuses.extend(std::iter::repeat(CustomerStatus::Closed).take(CLOSED_COUNT));
    statuses.extend(std::iter::repeat(CustomerStatus::Interested).take(INTERESTED_COUNT));
    statuses.extend(std::iter::repeat(CustomerStatus::Contacted).take(CONTACTED_COUNT));
    statuses.extend(
        std::iter::repeat(CustomerStatus::NotContacted).take(count - MIN_RECORD_COUNT),
    );
    shuffle(&mut statuses, rng);
    statuses
}

fn synthesize_record(
    index: usize,
    status: CustomerStatus,
    region_weights: &[f64],
    rng: &mut SeededRng,
) -> Kindergarten {
    let profile = weighted_choice(&REGION_PROFILES, region_weights, rng);
    let suburb = *uniform_choice(profile.suburbs, rng);
    let prefix = *uniform_choice(&NAME_PREFIXES, rng);
    let name_suffix = *uniform_choice(&NAME_SUFFIXES, rng);
    let name = format!("{} {} {}", prefix, suburb, name_suffix);

    let category = *weighted_choice(&Category::ALL, &CATEGORY_WEIGHTS, rng);
    let rating = *weighted_choice(&Rating::ALL, &RATING_WEIGHTS, rng);
    let capacity = (rng.next_index(150) + 20) as u32;
    let approved_date = synth_date(2005, 2024, rng);

    let (source_channel, last_contact_date) = if status.is_contacted() {
        let channel = *uniform_choice(&SourceChannel::ALL, rng);
        (Some(channel), Some(synth_date(2023, 2025, rng)))
    } else {
        (None, None)
    };

    let mut tags = Vec::new();
    for tag in Tag::ALL {
        if rng.next_f64() < 0.2 {
            tags.push(tag);
        }
    }

    let street_number = rng.next_index(500) + 1;
    let street = *uniform_choice(&STREET_NAMES, rng);
    let address = format!(
        "{} {} Street, {}, {}",
        street_number,
        street,
        suburb,
        profile.region.as_code()
    );

    let phone = synth_phone(profile.region, rng);

    let website = if rng.next_f64() > 0.3 {
        format!("https://www.{}.com.au", slugify(&name))
    } else {
        String::new()
    };

    let email = synth_email(&name, rng);

    let notes = if status == CustomerStatus::Closed {
        uniform_choice(&CLOSED_NOTES, rng).to_string()
    } else {
        String::new()
    };

    Kindergarten {
        id: format!("AU-{:06}", index + 1),
        name,
        region: profile.region,
        suburb: suburb.to_string(),
        address,
        phone,
        email,
        website,
        category,
        rating,
        capacity,
        approved_date,
        status,
        source_channel,
        tags,
        last_contact_date,
        notes,
    }
}

/// Synthesize a `YYYY-MM-DD` date: year uniform in `[start_year, end_year]`,
/// month in `[1, 12]`, day in `[1, 28]`. Consumes exactly three draws, in
/// that order.
fn synth_date(start_year: u32, end_year: u32, rng: &mut SeededRng) -> String {
    let year = start_year + rng.next_index((end_year - start_year + 1) as usize) as u32;
    let month = rng.next_index(12) + 1;
    let day = rng.next_index(28) + 1;
    format!("{}-{:02}-{:02}", year, month, day)
}

/// Eight local digits behind the region's fixed area code, formatted as
/// `0X XXXX XXXX`.
fn synth_phone(region: Region, rng: &mut SeededRng) -> String {
    let number = 10_000_000 + rng.next_index(90_000_000);
    let digits = number.to_string();
    format!("{} {} {}", area_code(region), &digits[..4], &digits[4..])
}

/// Email local part: slugified name capped at 20 characters plus a two-digit
/// suffix draw, then a uniform domain draw.
fn synth_email(name: &str, rng: &mut SeededRng) -> String {
    let mut local = slugify(name);
    local.truncate(20);
    let suffix = rng.next_index(100);
    let domain = *uniform_choice(&EMAIL_DOMAINS, rng);
    format!("{}{}@{}", local, suffix, domain)
}

/// Lowercase and strip everything outside `[a-z0-9]`.
fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn area_code(region: Region) -> &'static str {
    match region {
        Region::Nsw | Region::Act => "02",
        Region::Vic | Region::Tas => "03",
        Region::Qld => "07",
        Region::Wa | Region::Sa | Region::Nt => "08",
    }
}
