//! Measured outcome of a statement

use crate::domain::extensions::Extensions;

/// Score of an attempt
///
/// `scaled` is expected in -1.0..=1.0 and `raw` between `min` and `max`; the
/// model carries whatever the producer recorded. Equality treats NaN as equal
/// to NaN so every score equals itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    scaled: Option<f64>,
    raw: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl Score {
    pub fn new(scaled: Option<f64>, raw: Option<f64>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            scaled,
            raw,
            min,
            max,
        }
    }

    pub fn scaled(&self) -> Option<f64> {
        self.scaled
    }

    pub fn raw(&self) -> Option<f64> {
        self.raw
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn with_scaled(&self, scaled: Option<f64>) -> Self {
        Self { scaled, ..*self }
    }

    pub fn with_raw(&self, raw: Option<f64>) -> Self {
        Self { raw, ..*self }
    }

    pub fn with_min(&self, min: Option<f64>) -> Self {
        Self { min, ..*self }
    }

    pub fn with_max(&self, max: Option<f64>) -> Self {
        Self { max, ..*self }
    }
}

fn same_value(left: Option<f64>, right: Option<f64>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l == r || (l.is_nan() && r.is_nan()),
        (None, None) => true,
        _ => false,
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        same_value(self.scaled, other.scaled)
            && same_value(self.raw, other.raw)
            && same_value(self.min, other.min)
            && same_value(self.max, other.max)
    }
}

/// The xAPI "result" of a statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementResult {
    score: Option<Score>,
    success: Option<bool>,
    completion: Option<bool>,
    response: Option<String>,
    duration: Option<String>,
    extensions: Option<Extensions>,
}

impl StatementResult {
    pub fn new(
        score: Option<Score>,
        success: Option<bool>,
        completion: Option<bool>,
        response: Option<String>,
        duration: Option<String>,
        extensions: Option<Extensions>,
    ) -> Self {
        Self {
            score,
            success,
            completion,
            response,
            duration,
            extensions,
        }
    }

    pub fn score(&self) -> Option<&Score> {
        self.score.as_ref()
    }

    pub fn success(&self) -> Option<bool> {
        self.success
    }

    pub fn completion(&self) -> Option<bool> {
        self.completion
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// ISO 8601 duration, e.g. `PT1H0M0S`
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn extensions(&self) -> Option<&Extensions> {
        self.extensions.as_ref()
    }

    pub fn with_score(&self, score: Option<Score>) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }

    pub fn with_success(&self, success: Option<bool>) -> Self {
        Self {
            success,
            ..self.clone()
        }
    }

    pub fn with_completion(&self, completion: Option<bool>) -> Self {
        Self {
            completion,
            ..self.clone()
        }
    }

    pub fn with_response(&self, response: Option<String>) -> Self {
        Self {
            response,
            ..self.clone()
        }
    }

    pub fn with_duration(&self, duration: Option<String>) -> Self {
        Self {
            duration,
            ..self.clone()
        }
    }

    pub fn with_extensions(&self, extensions: Option<Extensions>) -> Self {
        Self {
            extensions,
            ..self.clone()
        }
    }
}
