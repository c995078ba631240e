//! Profile screen: fetch profiles for a symbol universe and keep the small-cap,
//! non-financial, North American companies.
//!
//! [`filter_and_merge`] runs the fixed screen. [`filter_and_merge_with`] takes a
//! [`Screen`] for other thresholds or a different policy for malformed profiles.

use crate::client::Fmp;
use crate::error::{Error, Result};
use crate::fetch::fetch_symbol_profile;
use crate::frame::Frame;
use crate::model::SymbolProfile;
use crate::report::Observer;
use crate::request::Request;

/// Progress label of the profile pass
pub const PROFILE_LABEL: &str = "Fetching and Filtering Data";

/// Market caps at or above this are excluded.
pub const MAX_MARKET_CAP: f64 = 1_000_000_000.0;

/// Sectors excluded by the default screen
pub const EXCLUDED_SECTORS: [&str; 3] = ["Financial Services", "Utilities - Regulated", "Utilities"];

/// Industries excluded by the default screen
pub const EXCLUDED_INDUSTRIES: [&str; 4] = ["Bank", "Insurance", "Mortgage", "REIT"];

/// Company names containing this (any case) are excluded.
pub const EXCLUDED_NAME_FRAGMENT: &str = "Depositary";

/// Countries admitted by the default screen
pub const COUNTRIES: [&str; 2] = ["US", "CA"];

/// Conjunction of predicates a profile must satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenCriteria {
    /// Exclusive upper bound on `mktCap`
    pub max_market_cap: f64,
    /// Exact `sector` values to reject
    pub excluded_sectors: Vec<String>,
    /// Exact `industry` values to reject
    pub excluded_industries: Vec<String>,
    /// Case-insensitive `companyName` fragments to reject
    pub excluded_name_fragments: Vec<String>,
    /// Exact `country` values to accept
    pub countries: Vec<String>,
}

impl Default for ScreenCriteria {
    fn default() -> Self {
        fn owned(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            max_market_cap: MAX_MARKET_CAP,
            excluded_sectors: owned(&EXCLUDED_SECTORS),
            excluded_industries: owned(&EXCLUDED_INDUSTRIES),
            excluded_name_fragments: owned(&[EXCLUDED_NAME_FRAGMENT]),
            countries: owned(&COUNTRIES),
        }
    }
}

impl ScreenCriteria {
    /// `true` if `profile` passes every predicate.
    pub fn passes(&self, profile: &SymbolProfile) -> bool {
        let name = profile.company_name.to_lowercase();

        profile.mkt_cap < self.max_market_cap
            && !self.excluded_sectors.contains(&profile.sector)
            && !self.excluded_industries.contains(&profile.industry)
            && !self
                .excluded_name_fragments
                .iter()
                .any(|fragment| name.contains(&fragment.to_lowercase()))
            && self.countries.contains(&profile.country)
    }
}

/// What to do with a profile that lacks a screened field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedRow {
    /// Fail the whole run with the field error
    #[default]
    Abort,
    /// Drop the row and keep going
    Skip,
}

/// Screen configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    /// Predicates
    pub criteria: ScreenCriteria,
    /// Malformed-row policy
    pub on_malformed: MalformedRow,
}

impl Screen {
    /// Screen with the given predicates and the default policy.
    pub fn new(criteria: ScreenCriteria) -> Self {
        Self {
            criteria,
            on_malformed: MalformedRow::Abort,
        }
    }

    /// Set the malformed-row policy.
    pub fn on_malformed(mut self, policy: MalformedRow) -> Self {
        self.on_malformed = policy;
        self
    }

    /// Keep the rows of `profiles` that pass the screen, in order.
    ///
    /// # Errors
    ///
    /// With [`MalformedRow::Abort`], the first row missing a screened field.
    pub fn apply(&self, profiles: &Frame) -> Result<Frame> {
        let mut mask = Vec::with_capacity(profiles.height());

        for (i, row) in profiles.rows().iter().enumerate() {
            let keep = match SymbolProfile::from_record(i, row) {
                Ok(profile) => self.criteria.passes(&profile),
                Err(e) if self.on_malformed == MalformedRow::Skip => {
                    tracing::warn!(row = i, error = %e, "skipping malformed profile");
                    false
                }
                Err(e) => return Err(e),
            };
            mask.push(keep);
        }

        let mut mask = mask.into_iter();
        Ok(profiles.filter(|_| mask.next().unwrap_or(false)))
    }
}

/// Fetch the profile of every symbol, in order, dropping the ones the API refused.
pub async fn fetch_profiles<C: Request, S: AsRef<str>>(
    client: &Fmp<C>,
    symbols: &[S],
    observer: &impl Observer,
) -> Result<Frame> {
    observer.begin(PROFILE_LABEL, symbols.len());
    let fetched = async {
        let mut profiles = Frame::new();
        for symbol in symbols {
            if let Some(profile) = fetch_symbol_profile(client, symbol.as_ref(), observer).await? {
                profiles.push(profile);
            }
            observer.advance();
        }
        Ok::<_, Error>(profiles)
    }
    .await;
    observer.finish();
    let profiles = fetched?;

    tracing::debug!(requested = symbols.len(), fetched = profiles.height(), "profiles fetched");
    Ok(profiles)
}

/// Fetch profiles for `symbols` and apply the default screen.
///
/// Output rows follow the order of `symbols`. A symbol whose profile could not be fetched
/// is left out; a profile missing a screened field fails the run.
pub async fn filter_and_merge<C: Request, S: AsRef<str>>(
    client: &Fmp<C>,
    symbols: &[S],
    observer: &impl Observer,
) -> Result<Frame> {
    filter_and_merge_with(client, symbols, &Screen::default(), observer).await
}

/// Fetch profiles for `symbols` and apply `screen`.
pub async fn filter_and_merge_with<C: Request, S: AsRef<str>>(
    client: &Fmp<C>,
    symbols: &[S],
    screen: &Screen,
    observer: &impl Observer,
) -> Result<Frame> {
    let profiles = fetch_profiles(client, symbols, observer).await?;
    let screened = screen.apply(&profiles)?;

    tracing::info!(profiles = profiles.height(), kept = screened.height(), "profile screen applied");
    Ok(screened)
}
