//! Life-expectancy estimator
//!
//! An additive score over a per-country reference table and personal
//! risk factors, plus a normally distributed perturbation drawn from a
//! caller-supplied noise source.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use crate::error::LookupError;

/// Hard ceiling on total life expectancy, in years
pub const MAX_LIFE_EXPECTANCY: f64 = 120.0;

const DEFAULT_HEALTHCARE_QUALITY: f64 = 50.0;
const DEFAULT_POLLUTION_LEVEL: f64 = 30.0;
const DERIVED_OBESITY_SCALE: f64 = 0.1;

// ── Reference data ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Male" | "male" => Ok(Gender::Male),
            "Female" | "female" => Ok(Gender::Female),
            other => Err(LookupError::UnknownGender(other.to_string())),
        }
    }
}

/// One row of the country table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    /// Base life expectancy for men; absent when the table has no `Males` column
    pub males: Option<f64>,
    pub females: Option<f64>,
    pub healthcare_quality: f64,
    pub pollution_level: f64,
    pub obesity_rate: f64,
}

impl CountryRecord {
    /// Gender-specific base expectancy
    pub fn base_for(&self, gender: Gender) -> Result<f64, LookupError> {
        match gender {
            Gender::Male => self.males.ok_or(LookupError::MissingColumn("Males")),
            Gender::Female => self.females.ok_or(LookupError::MissingColumn("Females")),
        }
    }
}

/// Read-only country reference table, keyed by trimmed country name
#[derive(Clone, Debug, Default)]
pub struct CountryTable {
    records: HashMap<String, CountryRecord>,
}

impl CountryTable {
    /// Parse a whitespace-delimited table with a header row.
    ///
    /// Double-quoted fields may contain spaces. Required columns:
    /// `Country` and at least one of `Males`/`Females`. Optional
    /// `HealthcareQuality`, `PollutionLevel` and `ObesityRate` fall back
    /// to 50, 30 and 10% of the mean base expectancy.
    pub fn parse(text: &str) -> Result<Self, LookupError> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let header = match lines.next() {
            Some((_, line)) => split_fields(line),
            None => return Err(LookupError::MissingColumn("Country")),
        };
        let column = |name: &str| header.iter().position(|h| h == name);

        let country_col = column("Country").ok_or(LookupError::MissingColumn("Country"))?;
        let males_col = column("Males");
        let females_col = column("Females");
        if males_col.is_none() && females_col.is_none() {
            return Err(LookupError::MissingColumn("Males"));
        }
        let healthcare_col = column("HealthcareQuality");
        let pollution_col = column("PollutionLevel");
        let obesity_col = column("ObesityRate");

        let mut records = HashMap::new();
        for (index, line) in lines {
            let line_no = index + 1;
            let fields = split_fields(line);
            if fields.len() != header.len() {
                return Err(LookupError::MalformedRow {
                    line: line_no,
                    reason: format!("expected {} fields, found {}", header.len(), fields.len()),
                });
            }

            let number = |col: Option<usize>| -> Result<Option<f64>, LookupError> {
                col.map(|c| {
                    fields[c].parse::<f64>().map_err(|_| LookupError::MalformedRow {
                        line: line_no,
                        reason: format!("'{}' in column {} is not a number", fields[c], header[c]),
                    })
                })
                .transpose()
            };

            let males = number(males_col)?;
            let females = number(females_col)?;
            let derived_obesity = match (males, females) {
                (Some(m), Some(f)) => (m + f) / 2.0 * DERIVED_OBESITY_SCALE,
                (Some(v), None) | (None, Some(v)) => v * DERIVED_OBESITY_SCALE,
                (None, None) => 0.0,
            };

            let record = CountryRecord {
                country: fields[country_col].clone(),
                males,
                females,
                healthcare_quality: number(healthcare_col)?.unwrap_or(DEFAULT_HEALTHCARE_QUALITY),
                pollution_level: number(pollution_col)?.unwrap_or(DEFAULT_POLLUTION_LEVEL),
                obesity_rate: number(obesity_col)?.unwrap_or(derived_obesity),
            };
            match records.entry(record.country.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                Entry::Occupied(_) => {
                    log::warn!("line {}: duplicate country '{}' ignored, first row kept", line_no, record.country);
                }
            }
        }

        log::info!("loaded {} countries into reference table", records.len());
        Ok(Self { records })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    pub fn get(&self, country: &str) -> Result<&CountryRecord, LookupError> {
        let key = country.trim();
        self.records
            .get(key)
            .ok_or_else(|| LookupError::CountryNotFound(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Country names in alphabetical order
    pub fn countries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Split on whitespace, keeping double-quoted runs together and
/// dropping the quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_field = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_field = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_field {
                    fields.push(std::mem::take(&mut current).trim().to_string());
                    in_field = false;
                }
            }
            c => {
                current.push(c);
                in_field = true;
            }
        }
    }
    if in_field {
        fields.push(current.trim().to_string());
    }
    fields
}

// ── Personal profile ─────────────────────────────────────────────────

/// Frequency scale for smoking, drinking and exercise
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Never,
    Occasionally,
    Regularly,
}

impl Frequency {
    pub fn level(self) -> f64 {
        match self {
            Frequency::Never => 0.0,
            Frequency::Occasionally => 1.0,
            Frequency::Regularly => 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Diabetes,
    Hypertension,
    HeartDisease,
}

impl FromStr for Condition {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "diabetes" => Ok(Condition::Diabetes),
            "hypertension" => Ok(Condition::Hypertension),
            "heart_disease" => Ok(Condition::HeartDisease),
            other => Err(LookupError::UnknownCondition(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifeProfile {
    pub age: f64,
    /// Annual income in USD
    pub income: f64,
    pub smoking: Frequency,
    pub drinking: Frequency,
    pub exercise: Frequency,
    pub country: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: Gender,
    #[serde(default)]
    pub medical_history: Vec<Condition>,
}

impl LifeProfile {
    /// Body-mass index, 0 when height is not positive
    pub fn bmi(&self) -> f64 {
        if self.height_cm > 0.0 {
            let metres = self.height_cm / 100.0;
            self.weight_kg / (metres * metres)
        } else {
            0.0
        }
    }

    fn has(&self, condition: Condition) -> bool {
        self.medical_history.contains(&condition)
    }
}

// ── Noise ────────────────────────────────────────────────────────────

/// Source of the random perturbation added to every estimate
pub trait NoiseSource {
    fn sample(&mut self) -> f64;
}

/// Constant perturbation, for reproducible estimates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

/// Normal noise with mean 0
#[derive(Clone, Debug)]
pub struct GaussianNoise<R> {
    rng: R,
    normal: Normal<f64>,
}

impl<R: Rng> GaussianNoise<R> {
    /// Fails when `std_dev` is negative or NaN
    pub fn new(rng: R, std_dev: f64) -> Result<Self, LookupError> {
        Ok(Self { rng, normal: Normal::new(0.0, std_dev)? })
    }
}

impl<R: Rng> NoiseSource for GaussianNoise<R> {
    fn sample(&mut self) -> f64 {
        self.normal.sample(&mut self.rng)
    }
}

// ── Estimator ────────────────────────────────────────────────────────

/// Coefficients of the additive model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Reference point of the age term: max(0, base_offset - age)
    pub base_offset: f64,
    /// Income term is (ln(income) - income_pivot) * income_weight
    pub income_pivot: f64,
    pub income_weight: f64,
    pub smoking_penalty: f64,
    pub drinking_penalty: f64,
    pub exercise_bonus: f64,
    pub ideal_bmi: f64,
    pub bmi_weight: f64,
    pub healthcare_weight: f64,
    pub pollution_weight: f64,
    pub obesity_weight: f64,
    pub diabetes_penalty: f64,
    pub hypertension_penalty: f64,
    pub heart_disease_penalty: f64,
    pub female_adjustment: f64,
    /// Standard deviation of the perturbation
    pub noise_std_dev: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_offset: -20.0,
            income_pivot: 10.0,
            income_weight: 0.5,
            smoking_penalty: 10.0,
            drinking_penalty: 7.0,
            exercise_bonus: 2.0,
            ideal_bmi: 22.0,
            bmi_weight: 0.2,
            healthcare_weight: 0.3,
            pollution_weight: 0.5,
            obesity_weight: 0.4,
            diabetes_penalty: 10.0,
            hypertension_penalty: 8.0,
            heart_disease_penalty: 15.0,
            female_adjustment: 3.0,
            noise_std_dev: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LifeExpectancy {
    pub remaining: f64,
    pub total: f64,
}

#[derive(Clone, Debug, Default)]
pub struct LifeExpectancyCalculator {
    table: CountryTable,
    config: EstimatorConfig,
}

impl LifeExpectancyCalculator {
    pub fn new(table: CountryTable) -> Self {
        Self { table, config: EstimatorConfig::default() }
    }

    pub fn with_config(table: CountryTable, config: EstimatorConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &CountryTable {
        &self.table
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate with the configured Gaussian noise drawn from `rng`
    pub fn calculate<R: Rng>(&self, profile: &LifeProfile, rng: &mut R) -> Result<LifeExpectancy, LookupError> {
        let mut noise = GaussianNoise::new(rng, self.config.noise_std_dev)?;
        self.calculate_with(profile, &mut noise)
    }

    /// Estimate with an explicit noise source
    pub fn calculate_with<N: NoiseSource>(&self, profile: &LifeProfile, noise: &mut N) -> Result<LifeExpectancy, LookupError> {
        let record = self.table.get(&profile.country)?;
        let region = record.base_for(profile.gender)?;
        let c = &self.config;

        let age_term = (c.base_offset - profile.age).max(0.0);
        let income_term = (profile.income.max(1.0).ln() - c.income_pivot) * c.income_weight;
        let habits = -c.smoking_penalty * profile.smoking.level()
            - c.drinking_penalty * profile.drinking.level()
            + c.exercise_bonus * profile.exercise.level();
        let bmi_term = -c.bmi_weight * (profile.bmi() - c.ideal_bmi).powi(2);
        let environment = record.healthcare_quality * c.healthcare_weight
            - record.pollution_level * c.pollution_weight
            - record.obesity_rate * c.obesity_weight;

        let mut chronic = 0.0;
        if profile.has(Condition::Diabetes) {
            chronic -= c.diabetes_penalty;
        }
        if profile.has(Condition::Hypertension) {
            chronic -= c.hypertension_penalty;
        }
        if profile.has(Condition::HeartDisease) {
            chronic -= c.heart_disease_penalty;
        }

        let gender_term = match profile.gender {
            Gender::Male => 0.0,
            Gender::Female => c.female_adjustment,
        };

        let estimate = age_term
            + income_term
            + habits
            + region
            + bmi_term
            + environment
            + chronic
            + gender_term
            + noise.sample();

        let total = (profile.age + estimate).min(MAX_LIFE_EXPECTANCY);
        Ok(LifeExpectancy {
            remaining: (total - profile.age).max(0.0),
            total,
        })
    }
}
