use serde::{Deserialize, Serialize};

use bottlekeep_core::ValueObject;

/// Milliliters per fluid ounce. Converted values are truncated, not rounded.
const ML_PER_FL_OZ: f64 = 29.5735;

/// Volume of a bottle, either metric (ml) or non-metric (fl oz).
///
/// The value object does not validate its size; negative values are the
/// input layer's problem to reject.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerSize {
    is_metric: bool,
    size: i64,
}

impl ContainerSize {
    pub fn new(is_metric: bool, size: i64) -> Self {
        Self { is_metric, size }
    }

    pub fn is_metric(&self) -> bool {
        self.is_metric
    }

    /// Raw size in ml (if metric) or fl oz (if non-metric).
    pub fn size(&self) -> i64 {
        self.size
    }

    /// Size in milliliters, converting fl oz with the truncating factor.
    pub fn size_in_ml(&self) -> i64 {
        if self.is_metric {
            self.size
        } else {
            (self.size as f64 * ML_PER_FL_OZ) as i64
        }
    }

    /// Display form in ml, annotated with the original value when converted.
    pub fn size_with_units(&self) -> String {
        if self.is_metric {
            format!("{} ml", self.size)
        } else {
            format!("{} ml (converted from {} fl oz)", self.size_in_ml(), self.size)
        }
    }

    pub fn set_is_metric(&mut self, metric: bool) {
        self.is_metric = metric;
    }

    /// Replace the size. With `convert_to_metric` set, a non-metric value is
    /// converted to ml and the unit flag flips to metric.
    pub fn set_size(&mut self, new_size: i64, convert_to_metric: bool) {
        self.size = new_size;
        if convert_to_metric && !self.is_metric {
            self.size = (self.size as f64 * ML_PER_FL_OZ) as i64;
            self.is_metric = true;
        }
    }
}

impl ValueObject for ContainerSize {}

impl core::fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.size_with_units())
    }
}
