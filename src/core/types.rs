use serde::Serialize;

use super::error::ProjectionError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Low,
    Mid,
    High,
}

impl Scenario {
    /// Sign applied to the rate variance for this scenario.
    pub fn rate_offset_sign(self) -> f64 {
        match self {
            Scenario::Low => -1.0,
            Scenario::Mid => 0.0,
            Scenario::High => 1.0,
        }
    }
}

/// Parameters for a single projection run. Rates are in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioParameters {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
    pub monthly_addition: f64,
    pub annual_addition_increase_percent: f64,
}

impl ScenarioParameters {
    pub fn with_rate(self, annual_rate_percent: f64) -> Self {
        Self {
            annual_rate_percent,
            ..self
        }
    }
}

/// The six fields a caller supplies for a three-scenario calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
    pub monthly_addition: f64,
    pub annual_addition_increase_percent: f64,
    pub rate_variance_percent: f64,
}

impl ProjectionInputs {
    pub fn base_parameters(&self) -> ScenarioParameters {
        ScenarioParameters {
            principal: self.principal,
            annual_rate_percent: self.annual_rate_percent,
            years: self.years,
            monthly_addition: self.monthly_addition,
            annual_addition_increase_percent: self.annual_addition_increase_percent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationLimits {
    pub max_rate_variance_percent: f64,
    pub max_years: u32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_rate_variance_percent: 100.0,
            max_years: 500,
        }
    }
}

impl ValidationLimits {
    pub fn validate(&self, inputs: &ProjectionInputs) -> Result<(), ProjectionError> {
        require_finite("principal", inputs.principal)?;
        require_finite("annual_rate_percent", inputs.annual_rate_percent)?;
        require_finite("monthly_addition", inputs.monthly_addition)?;
        require_finite(
            "annual_addition_increase_percent",
            inputs.annual_addition_increase_percent,
        )?;
        require_finite("rate_variance_percent", inputs.rate_variance_percent)?;

        if inputs.principal <= 0.0 {
            return Err(ProjectionError::invalid("principal", "must be greater than 0"));
        }
        if inputs.years == 0 {
            return Err(ProjectionError::invalid("years", "must be a positive integer"));
        }
        if inputs.years > self.max_years {
            return Err(ProjectionError::invalid(
                "years",
                format!("must be at most {}", self.max_years),
            ));
        }
        if inputs.monthly_addition < 0.0 {
            return Err(ProjectionError::invalid(
                "monthly_addition",
                "must be 0 or greater",
            ));
        }
        if inputs.annual_addition_increase_percent < 0.0 {
            return Err(ProjectionError::invalid(
                "annual_addition_increase_percent",
                "must be 0 or greater",
            ));
        }
        if !(0.0..=self.max_rate_variance_percent).contains(&inputs.rate_variance_percent) {
            return Err(ProjectionError::invalid(
                "rate_variance_percent",
                format!("must be between 0 and {}", self.max_rate_variance_percent),
            ));
        }
        Ok(())
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::invalid(field, "must be a finite number"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: u32,
    pub starting_balance: f64,
    pub monthly_addition: f64,
    pub interest_earned: f64,
    pub ending_balance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectionResult {
    pub records: Vec<YearRecord>,
}

impl ProjectionResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Headline output: the last year's ending balance.
    pub fn final_balance(&self) -> Option<f64> {
        self.records.last().map(|r| r.ending_balance)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    pub annual_rate_percent: f64,
    pub result: ProjectionResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarianceProjection {
    pub rate_variance_percent: f64,
    pub low: ScenarioProjection,
    pub mid: ScenarioProjection,
    pub high: ScenarioProjection,
}

impl VarianceProjection {
    pub fn get(&self, scenario: Scenario) -> &ScenarioProjection {
        match scenario {
            Scenario::Low => &self.low,
            Scenario::Mid => &self.mid,
            Scenario::High => &self.high,
        }
    }

    /// Low, mid and high in that order.
    pub fn scenarios(&self) -> [&ScenarioProjection; 3] {
        [&self.low, &self.mid, &self.high]
    }
}
