//! Per-sensor measurement statistics.

use std::collections::BTreeMap;
use std::fmt;

use quill_hal::Counts;
use serde::{Deserialize, Serialize};

/// Qualitative label for a sensor's measured distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateLabel {
    /// Probability of 0 above 0.9.
    DefiniteZero,
    /// Probability of 0 below 0.1.
    DefiniteOne,
    /// Probability of 0 within [0.4, 0.6].
    Superposition,
    /// Anything else.
    Mixed,
}

impl StateLabel {
    /// Classify a distribution from its probability of measuring 0.
    ///
    /// Thresholds are fixed constants, not configurable.
    pub fn from_prob_zero(prob_zero: f64) -> Self {
        if prob_zero > 0.9 {
            StateLabel::DefiniteZero
        } else if prob_zero < 0.1 {
            StateLabel::DefiniteOne
        } else if (0.4..=0.6).contains(&prob_zero) {
            StateLabel::Superposition
        } else {
            StateLabel::Mixed
        }
    }
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StateLabel::DefiniteZero => "Definite 0 state",
            StateLabel::DefiniteOne => "Definite 1 state",
            StateLabel::Superposition => "Superposition state",
            StateLabel::Mixed => "Mixed state",
        };
        f.write_str(label)
    }
}

/// Probability split observed at one sensor bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Probability of measuring 0.
    pub prob_zero: f64,
    /// Probability of measuring 1.
    pub prob_one: f64,
}

impl SensorReading {
    /// Qualitative label for this reading.
    pub fn label(&self) -> StateLabel {
        StateLabel::from_prob_zero(self.prob_zero)
    }
}

/// Statistics for every sensor bucket, keyed by bit position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorReport {
    readings: BTreeMap<usize, SensorReading>,
}

impl SensorReport {
    /// Whether the report holds no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Number of sensor buckets.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Reading for bucket `sensor`, if present.
    pub fn get(&self, sensor: usize) -> Option<&SensorReading> {
        self.readings.get(&sensor)
    }

    /// Iterate over `(bucket, reading)` pairs in ascending bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &SensorReading)> {
        self.readings.iter().map(|(&k, v)| (k, v))
    }
}

impl fmt::Display for SensorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.readings.is_empty() {
            return writeln!(f, "No measurements available");
        }

        writeln!(f, "Measurement Results:")?;
        writeln!(f, "{}", "-".repeat(20))?;
        for (sensor, reading) in self.iter() {
            writeln!(f)?;
            writeln!(f, "Sensor {sensor}:")?;
            writeln!(f, "State |0>: {:.3}", reading.prob_zero)?;
            writeln!(f, "State |1>: {:.3}", reading.prob_one)?;
            writeln!(f, "Analysis: {}", reading.label())?;
            writeln!(f, "{}", "-".repeat(20))?;
        }
        Ok(())
    }
}

/// Demultiplex bitstring counts into per-position sensor statistics.
///
/// Bit position, not drawn-sensor identity, is the aggregation key:
/// character `i` of every bitstring accumulates into bucket `i`,
/// regardless of how many sensors are actually on the diagram.
/// Characters other than '0'/'1' are ignored. An empty or zero-total
/// count set yields an empty report.
pub fn aggregate(counts: &Counts) -> SensorReport {
    let total = counts.total();
    if total == 0 {
        return SensorReport::default();
    }

    let mut buckets: BTreeMap<usize, (f64, f64)> = BTreeMap::new();
    for (bitstring, count) in counts.iter() {
        let probability = count as f64 / total as f64;
        for (position, bit) in bitstring.chars().enumerate() {
            let bucket = buckets.entry(position).or_insert((0.0, 0.0));
            match bit {
                '0' => bucket.0 += probability,
                '1' => bucket.1 += probability,
                _ => {}
            }
        }
    }

    SensorReport {
        readings: buckets
            .into_iter()
            .map(|(position, (zero, one))| {
                (
                    position,
                    SensorReading {
                        prob_zero: zero,
                        prob_one: one,
                    },
                )
            })
            .collect(),
    }
}
