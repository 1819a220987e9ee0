use serde::{Deserialize, Serialize};
use std::fmt;

/// Australian state or territory a customer record belongs to.
///
/// Each region carries a fixed sampling weight, a display name, and a phone
/// area code; the set is closed and `Nsw` is the documented fallback for
/// unrecognized external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Act,
    Nt,
}

impl Region {
    /// All regions in canonical (descending-weight) order.
    pub const ALL: [Region; 8] = [
        Region::Nsw,
        Region::Vic,
        Region::Qld,
        Region::Wa,
        Region::Sa,
        Region::Tas,
        Region::Act,
        Region::Nt,
    ];

    /// Short region code, e.g. "NSW".
    pub fn as_code(&self) -> &'static str {
        match self {
            Region::Nsw => "NSW",
            Region::Vic => "VIC",
            Region::Qld => "QLD",
            Region::Wa => "WA",
            Region::Sa => "SA",
            Region::Tas => "TAS",
            Region::Act => "ACT",
            Region::Nt => "NT",
        }
    }

    /// Human-readable region name for chart labels.
    pub fn full_name(&self) -> &'static str {
        match self {
            Region::Nsw => "New South Wales",
            Region::Vic => "Victoria",
            Region::Qld => "Queensland",
            Region::Wa => "Western Australia",
            Region::Sa => "South Australia",
            Region::Tas => "Tasmania",
            Region::Act => "Australian Capital Territory",
            Region::Nt => "Northern Territory",
        }
    }

    /// Parse a region code, case-insensitively. Returns `None` for anything
    /// outside the closed set.
    pub fn parse(code: &str) -> Option<Region> {
        let code = code.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_code().eq_ignore_ascii_case(code))
    }

    /// Parse a region code, substituting the default for unrecognized input.
    pub fn parse_or_default(code: &str) -> Region {
        Region::parse(code).unwrap_or_default()
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::Nsw
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Service category of a kindergarten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Long Day Care")]
    LongDayCare,
    #[serde(rename = "Family Day Care")]
    FamilyDayCare,
    Preschool,
    #[serde(rename = "OSHC")]
    Oshc,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::LongDayCare,
        Category::FamilyDayCare,
        Category::Preschool,
        Category::Oshc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LongDayCare => "Long Day Care",
            Category::FamilyDayCare => "Family Day Care",
            Category::Preschool => "Preschool",
            Category::Oshc => "OSHC",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }

    /// Parse a category label, substituting the default for unrecognized input.
    pub fn parse_or_default(s: &str) -> Category {
        Category::parse(s).unwrap_or_default()
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::LongDayCare
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality rating under the national framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Exceeding,
    Meeting,
    #[serde(rename = "Working Towards")]
    WorkingTowards,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::Exceeding, Rating::Meeting, Rating::WorkingTowards];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Exceeding => "Exceeding",
            Rating::Meeting => "Meeting",
            Rating::WorkingTowards => "Working Towards",
        }
    }

    pub fn parse(s: &str) -> Option<Rating> {
        let s = s.trim();
        Rating::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
    }

    /// Parse a rating label, substituting the default for unrecognized input.
    pub fn parse_or_default(s: &str) -> Rating {
        Rating::parse(s).unwrap_or_default()
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::Meeting
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sales pipeline stage of a customer record.
///
/// The four stages are ordered: every `Closed` record was `Interested`,
/// every `Interested` record was `Contacted`, and so on. `NotContacted` is
/// the documented fallback for unrecognized external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    NotContacted,
    Contacted,
    Interested,
    Closed,
}

impl CustomerStatus {
    /// All stages in pipeline order.
    pub const ALL: [CustomerStatus; 4] = [
        CustomerStatus::NotContacted,
        CustomerStatus::Contacted,
        CustomerStatus::Interested,
        CustomerStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::NotContacted => "not_contacted",
            CustomerStatus::Contacted => "contacted",
            CustomerStatus::Interested => "interested",
            CustomerStatus::Closed => "closed",
        }
    }

    /// Human-readable stage label.
    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::NotContacted => "Not contacted",
            CustomerStatus::Contacted => "Contacted",
            CustomerStatus::Interested => "Interested",
            CustomerStatus::Closed => "Closed",
        }
    }

    /// Whether this record has been reached at least once.
    pub fn is_contacted(&self) -> bool {
        !matches!(self, CustomerStatus::NotContacted)
    }

    pub fn parse(s: &str) -> Option<CustomerStatus> {
        let s = s.trim();
        CustomerStatus::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s) || c.label().eq_ignore_ascii_case(s))
    }

    /// Parse a stage token, substituting the default for unrecognized input.
    pub fn parse_or_default(s: &str) -> CustomerStatus {
        CustomerStatus::parse(s).unwrap_or_default()
    }
}

impl Default for CustomerStatus {
    fn default() -> Self {
        CustomerStatus::NotContacted
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Acquisition channel recorded for a contacted-or-further customer.
///
/// Always `None` while a record is `NotContacted`; unrecognized or empty
/// external input also maps to `None` rather than rejecting the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceChannel {
    Alibaba,
    #[serde(rename = "Independent Site")]
    IndependentSite,
    #[serde(rename = "Google Outreach")]
    GoogleOutreach,
    LinkedIn,
    #[serde(rename = "Trade Show")]
    TradeShow,
    Referral,
}

impl SourceChannel {
    pub const ALL: [SourceChannel; 6] = [
        SourceChannel::Alibaba,
        SourceChannel::IndependentSite,
        SourceChannel::GoogleOutreach,
        SourceChannel::LinkedIn,
        SourceChannel::TradeShow,
        SourceChannel::Referral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceChannel::Alibaba => "Alibaba",
            SourceChannel::IndependentSite => "Independent Site",
            SourceChannel::GoogleOutreach => "Google Outreach",
            SourceChannel::LinkedIn => "LinkedIn",
            SourceChannel::TradeShow => "Trade Show",
            SourceChannel::Referral => "Referral",
        }
    }

    pub fn parse(s: &str) -> Option<SourceChannel> {
        let s = s.trim();
        SourceChannel::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for SourceChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive tag from the fixed tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "Newly Opened")]
    NewlyOpened,
    #[serde(rename = "Chain Brand")]
    ChainBrand,
    Montessori,
    Reggio,
}

impl Tag {
    /// The tag vocabulary, in the order tags appear on records.
    pub const ALL: [Tag; 4] = [Tag::NewlyOpened, Tag::ChainBrand, Tag::Montessori, Tag::Reggio];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::NewlyOpened => "Newly Opened",
            Tag::ChainBrand => "Chain Brand",
            Tag::Montessori => "Montessori",
            Tag::Reggio => "Reggio",
        }
    }

    pub fn parse(s: &str) -> Option<Tag> {
        let s = s.trim();
        Tag::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kindergarten customer record.
///
/// This is the externally visible schema: any data source feeding the
/// presentation layer (generated batches or an imported spreadsheet export)
/// produces records of this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kindergarten {
    /// Stable identifier in the format `AU-######`.
    pub id: String,
    pub name: String,
    pub region: Region,
    pub suburb: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Empty string when the customer has no website.
    pub website: String,
    pub category: Category,
    pub rating: Rating,
    /// Licensed capacity in places.
    pub capacity: u32,
    /// Licensing approval date (YYYY-MM-DD).
    pub approved_date: String,
    pub status: CustomerStatus,
    /// Set exactly when `status` is contacted-or-further.
    pub source_channel: Option<SourceChannel>,
    /// Tags in vocabulary order, no duplicates.
    pub tags: Vec<Tag>,
    /// Date of the most recent contact (YYYY-MM-DD); set exactly when
    /// `status` is contacted-or-further.
    pub last_contact_date: Option<String>,
    /// Non-empty exactly for closed customers.
    pub notes: String,
}

impl Kindergarten {
    /// Whether this record has been reached at least once.
    pub fn is_contacted(&self) -> bool {
        self.status.is_contacted()
    }
}

/// Per-region record count for the region bar chart, sorted by the
/// aggregator in descending count order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: Region,
    pub count: usize,
    pub full_name: String,
}

/// Stage of the sales funnel view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStageKind {
    AllCustomers,
    Contacted,
    Interested,
    Closed,
}

impl FunnelStageKind {
    pub fn label(&self) -> &'static str {
        match self {
            FunnelStageKind::AllCustomers => "All customers",
            FunnelStageKind::Contacted => "Contacted",
            FunnelStageKind::Interested => "Interested",
            FunnelStageKind::Closed => "Closed",
        }
    }
}

/// One entry of the four-stage funnel; stage membership is nested, so
/// counts never increase from one stage to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: FunnelStageKind,
    pub count: usize,
}

/// Headline counts for the dashboard metric cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total: usize,
    pub closed: usize,
    pub interested: usize,
    pub not_contacted: usize,
}

/// One page of the filtered customer table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPage {
    pub customers: Vec<Kindergarten>,
    /// Number of records matching the filter, across all pages.
    pub total_matches: usize,
    /// 1-based page number after clamping.
    pub page: usize,
    pub page_count: usize,
}
