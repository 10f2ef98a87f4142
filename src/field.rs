//! Cron field expansion
//!
//! Turns the compact syntax of one cron field into the explicit, sorted set
//! of integers it denotes. Exactly one shape applies per field, tried in
//! this order:
//!
//! - `*` - every value in the field's bounds
//! - `base/step` - every `step`-th value; `base` is `*`, `a-b` or a bare
//!   start value that runs to the field's maximum
//! - `a-b` - inclusive range
//! - `a,b,c` - list of bare values, deduplicated and sorted
//! - `a` - single value

use crate::error::{FieldError, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Name and inclusive bounds of one cron field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
}

impl FieldSpec {
    pub const MINUTE: FieldSpec = FieldSpec::new("minute", 0, 59);
    pub const HOUR: FieldSpec = FieldSpec::new("hour", 0, 23);
    pub const DAY_OF_MONTH: FieldSpec = FieldSpec::new("day of month", 1, 31);
    pub const MONTH: FieldSpec = FieldSpec::new("month", 1, 12);
    /// 0 = Sunday
    pub const DAY_OF_WEEK: FieldSpec = FieldSpec::new("day of week", 0, 6);

    /// All five fields in expression order
    pub const ALL: [FieldSpec; 5] = [
        FieldSpec::MINUTE,
        FieldSpec::HOUR,
        FieldSpec::DAY_OF_MONTH,
        FieldSpec::MONTH,
        FieldSpec::DAY_OF_WEEK,
    ];

    pub const fn new(name: &'static str, min: u32, max: u32) -> Self {
        Self { name, min, max }
    }

    /// Whether `value` lies within this field's bounds
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Expand `raw` against this field's bounds
    ///
    /// ```
    /// use a3s_cron_expand::FieldSpec;
    ///
    /// let hours = FieldSpec::HOUR.expand("9-17/4").unwrap();
    /// assert_eq!(hours.into_iter().collect::<Vec<_>>(), vec![9, 13, 17]);
    /// ```
    pub fn expand(&self, raw: &str) -> Result<BTreeSet<u32>> {
        expand(raw, self.min, self.max, self.name)
    }
}

/// Expand one cron field into the set of values it matches
///
/// `min` and `max` are inclusive; `field` names the field in error messages.
/// The returned set is never empty.
///
/// # Examples
///
/// ```
/// use a3s_cron_expand::expand;
///
/// let minutes = expand("*/15", 0, 59, "minute").unwrap();
/// assert_eq!(minutes.into_iter().collect::<Vec<_>>(), vec![0, 15, 30, 45]);
///
/// let err = expand("60", 0, 59, "minute").unwrap_err();
/// assert_eq!(err.to_string(), "value 60 in minute is out of range (0-59)");
/// ```
pub fn expand(raw: &str, min: u32, max: u32, field: &str) -> Result<BTreeSet<u32>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Empty {
            field: field.to_string(),
        });
    }

    if min > max {
        return Err(FieldError::EmptyResult {
            field: field.to_string(),
        });
    }

    let bounds = Bounds { field, min, max };
    let values = if raw == "*" {
        (min..=max).collect()
    } else if raw.contains('/') {
        bounds.step(raw)?
    } else if raw.contains('-') {
        let (start, end) = bounds.range(raw)?;
        (start..=end).collect()
    } else if raw.contains(',') {
        bounds.list(raw)?
    } else {
        BTreeSet::from([bounds.value(raw)?])
    };

    // Unreachable once bounds are ordered; a hit here means a grammar bug.
    if values.is_empty() {
        return Err(FieldError::EmptyResult {
            field: field.to_string(),
        });
    }

    debug!(field, count = values.len(), "Expanded cron field '{}'", raw);
    Ok(values)
}

/// Parse an unsigned decimal token; values too large for `u64` saturate
fn parse_digits(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.parse().unwrap_or(u64::MAX))
}

struct Bounds<'a> {
    field: &'a str,
    min: u32,
    max: u32,
}

impl Bounds<'_> {
    fn malformed(&self, value: &str, reason: &str) -> FieldError {
        FieldError::Malformed {
            field: self.field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Parse one bare integer and check it against the bounds
    fn value(&self, token: &str) -> Result<u32> {
        let token = token.trim();
        let value = parse_digits(token).ok_or_else(|| FieldError::NotANumber {
            field: self.field.to_string(),
            value: token.to_string(),
        })?;

        if value < u64::from(self.min) || value > u64::from(self.max) {
            return Err(FieldError::OutOfRange {
                field: self.field.to_string(),
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value as u32)
    }

    /// Parse `a-b` into its inclusive endpoints
    fn range(&self, token: &str) -> Result<(u32, u32)> {
        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() != 2 {
            return Err(self.malformed(token, "expected exactly one '-'"));
        }

        let start = self.value(parts[0])?;
        let end = self.value(parts[1])?;
        if start > end {
            return Err(FieldError::RangeOrder {
                field: self.field.to_string(),
                start,
                end,
            });
        }
        Ok((start, end))
    }

    /// Expand `base/step`
    fn step(&self, token: &str) -> Result<BTreeSet<u32>> {
        let parts: Vec<&str> = token.split('/').collect();
        if parts.len() != 2 {
            return Err(self.malformed(token, "expected exactly one '/'"));
        }
        let (base, step_str) = (parts[0].trim(), parts[1].trim());

        let step = parse_digits(step_str)
            .filter(|s| *s > 0)
            .ok_or_else(|| FieldError::InvalidStep {
                field: self.field.to_string(),
                value: step_str.to_string(),
            })?;

        let (start, end) = if base == "*" {
            (self.min, self.max)
        } else if base.contains('-') {
            self.range(base)?
        } else {
            (self.value(base)?, self.max)
        };

        let span = end - start;
        if step > u64::from(span) {
            return Err(FieldError::StepTooLarge {
                field: self.field.to_string(),
                step,
                span,
            });
        }

        Ok((start..=end).step_by(step as usize).collect())
    }

    /// Expand `a,b,c`; elements must be bare integers
    fn list(&self, token: &str) -> Result<BTreeSet<u32>> {
        token
            .split(',')
            .map(|part| {
                if part.trim().is_empty() {
                    Err(self.malformed(token, "empty list element"))
                } else {
                    self.value(part)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(raw: &str) -> Result<Vec<u32>> {
        FieldSpec::MINUTE.expand(raw).map(|v| v.into_iter().collect())
    }

    #[test]
    fn test_wildcard_covers_bounds() {
        for spec in FieldSpec::ALL {
            let values: Vec<u32> = spec.expand("*").unwrap().into_iter().collect();
            let expected: Vec<u32> = (spec.min..=spec.max).collect();
            assert_eq!(values, expected, "{}", spec.name);
        }
    }

    #[test]
    fn test_single_value() {
        assert_eq!(minutes("7").unwrap(), vec![7]);
        assert_eq!(minutes(" 0 ").unwrap(), vec![0]);
        assert_eq!(minutes("59").unwrap(), vec![59]);
    }

    #[test]
    fn test_every_valid_range_is_inclusive_run() {
        let spec = FieldSpec::HOUR;
        for a in spec.min..=spec.max {
            for b in a..=spec.max {
                let values: Vec<u32> = spec
                    .expand(&format!("{}-{}", a, b))
                    .unwrap()
                    .into_iter()
                    .collect();
                assert_eq!(values, (a..=b).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_list_dedup_and_sort() {
        assert_eq!(minutes("5,1,5,3").unwrap(), vec![1, 3, 5]);
        assert_eq!(
            FieldSpec::DAY_OF_MONTH.expand("1,15").unwrap(),
            BTreeSet::from([1, 15])
        );
    }

    #[test]
    fn test_step_from_wildcard() {
        assert_eq!(minutes("*/15").unwrap(), vec![0, 15, 30, 45]);
        assert_eq!(
            FieldSpec::DAY_OF_MONTH.expand("*/10").unwrap(),
            BTreeSet::from([1, 11, 21, 31])
        );
    }

    #[test]
    fn test_step_from_range() {
        assert_eq!(minutes("10-30/5").unwrap(), vec![10, 15, 20, 25, 30]);
        assert_eq!(minutes("0-30/10").unwrap(), vec![0, 10, 20, 30]);
        assert_eq!(minutes("10-20/3").unwrap(), vec![10, 13, 16, 19]);
    }

    #[test]
    fn test_step_from_bare_start_runs_to_max() {
        assert_eq!(minutes("50/3").unwrap(), vec![50, 53, 56, 59]);
        assert_eq!(
            FieldSpec::DAY_OF_WEEK.expand("1/2").unwrap(),
            BTreeSet::from([1, 3, 5])
        );
    }

    #[test]
    fn test_step_equal_to_span() {
        assert_eq!(minutes("*/59").unwrap(), vec![0, 59]);
        assert_eq!(minutes("10-20/10").unwrap(), vec![10, 20]);
    }

    #[test]
    fn test_results_stay_within_bounds() {
        let inputs = ["*", "*/7", "3-9", "4/5", "1,2,3", "2-20/6"];
        for spec in FieldSpec::ALL {
            for raw in inputs {
                if let Ok(values) = spec.expand(raw) {
                    assert!(!values.is_empty());
                    assert!(values.iter().all(|v| spec.contains(*v)), "{} {}", spec.name, raw);
                }
            }
        }
    }

    #[test]
    fn test_empty_field() {
        assert!(matches!(minutes(""), Err(FieldError::Empty { .. })));
        assert!(matches!(minutes("   "), Err(FieldError::Empty { .. })));
    }

    #[test]
    fn test_out_of_range_reports_value_and_bounds() {
        let err = minutes("60").unwrap_err();
        assert_eq!(
            err,
            FieldError::OutOfRange {
                field: "minute".into(),
                value: 60,
                min: 0,
                max: 59,
            }
        );
        assert!(err.to_string().contains("60"));
        assert!(err.to_string().contains("0-59"));

        assert!(matches!(
            FieldSpec::MONTH.expand("0"),
            Err(FieldError::OutOfRange { value: 0, min: 1, max: 12, .. })
        ));
        assert!(matches!(
            FieldSpec::DAY_OF_WEEK.expand("1-7"),
            Err(FieldError::OutOfRange { value: 7, .. })
        ));
        assert!(matches!(
            minutes("1,2,99"),
            Err(FieldError::OutOfRange { value: 99, .. })
        ));
    }

    #[test]
    fn test_not_a_number() {
        assert!(matches!(minutes("abc"), Err(FieldError::NotANumber { .. })));
        assert!(matches!(minutes("1,*"), Err(FieldError::NotANumber { .. })));
        assert!(matches!(minutes("a-5"), Err(FieldError::NotANumber { .. })));
        assert!(matches!(minutes("-5"), Err(FieldError::NotANumber { .. })));
        assert!(matches!(minutes("x/5"), Err(FieldError::NotANumber { .. })));
        assert!(matches!(minutes("+5"), Err(FieldError::NotANumber { .. })));
        assert!(matches!(minutes("1,+2"), Err(FieldError::NotANumber { .. })));
        assert!(matches!(minutes("5 5"), Err(FieldError::NotANumber { .. })));
    }

    #[test]
    fn test_range_order() {
        assert_eq!(
            minutes("10-5").unwrap_err(),
            FieldError::RangeOrder {
                field: "minute".into(),
                start: 10,
                end: 5,
            }
        );
        assert!(matches!(
            minutes("30-10/5"),
            Err(FieldError::RangeOrder { .. })
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(minutes("*/5/2"), Err(FieldError::Malformed { .. })));
        assert!(matches!(minutes("1-2-3"), Err(FieldError::Malformed { .. })));
        assert!(matches!(minutes("1,,2"), Err(FieldError::Malformed { .. })));
        assert!(matches!(minutes("1,2,"), Err(FieldError::Malformed { .. })));
    }

    #[test]
    fn test_invalid_step() {
        for raw in ["*/0", "*/-1", "*/x", "*/", "0-30/0", "*/+5", "*/00"] {
            assert!(
                matches!(minutes(raw), Err(FieldError::InvalidStep { .. })),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_step_too_large() {
        assert_eq!(
            minutes("*/60").unwrap_err(),
            FieldError::StepTooLarge {
                field: "minute".into(),
                step: 60,
                span: 59,
            }
        );
        assert!(matches!(
            minutes("10-15/6"),
            Err(FieldError::StepTooLarge { step: 6, span: 5, .. })
        ));
        assert!(matches!(
            minutes("59/1"),
            Err(FieldError::StepTooLarge { span: 0, .. })
        ));
    }

    #[test]
    fn test_oversized_value_is_out_of_range() {
        assert_eq!(
            minutes("4294967296").unwrap_err(),
            FieldError::OutOfRange {
                field: "minute".into(),
                value: 4_294_967_296,
                min: 0,
                max: 59,
            }
        );
        assert!(matches!(
            minutes("99999999999999999999999"),
            Err(FieldError::OutOfRange { value: u64::MAX, .. })
        ));
        assert!(matches!(
            minutes("0-4294967296"),
            Err(FieldError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_oversized_step_is_too_large() {
        assert_eq!(
            minutes("*/4294967296").unwrap_err(),
            FieldError::StepTooLarge {
                field: "minute".into(),
                step: 4_294_967_296,
                span: 59,
            }
        );
    }

    #[test]
    fn test_inverted_bounds_yield_empty_result() {
        for raw in ["*", "*/1", "3", "1-2", "1,2", "2/1"] {
            assert_eq!(
                expand(raw, 5, 1, "custom").unwrap_err(),
                FieldError::EmptyResult {
                    field: "custom".into()
                },
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_errors_carry_field_name() {
        let err = FieldSpec::DAY_OF_MONTH.expand("32").unwrap_err();
        assert_eq!(err.field(), "day of month");
    }
}
