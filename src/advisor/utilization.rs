use serde::Serialize;

/// Utilization buckets shared by cargo and fuel reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilizationBucket {
    Empty,
    Low,
    Moderate,
    High,
    Full,
}

#[derive(Debug, Clone, Serialize)]
pub struct UtilizationReport {
    pub bucket: UtilizationBucket,
    pub percent: f64,
    pub message: &'static str,
}

/// Classify a used/capacity pair into a utilization bucket.
///
/// Zero capacity is 0% / Empty by policy rather than a division error.
/// Values are otherwise not clamped: if upstream reports used > capacity,
/// percent comes back over 100 so data-quality problems stay visible.
pub fn classify_utilization(units: i32, capacity: i32) -> UtilizationReport {
    if capacity == 0 {
        return UtilizationReport {
            bucket: UtilizationBucket::Empty,
            percent: 0.0,
            message: bucket_message(UtilizationBucket::Empty),
        };
    }

    let percent = units as f64 / capacity as f64 * 100.0;
    let bucket = if percent <= 0.0 {
        UtilizationBucket::Empty
    } else if percent < 25.0 {
        UtilizationBucket::Low
    } else if percent < 75.0 {
        UtilizationBucket::Moderate
    } else if percent < 100.0 {
        UtilizationBucket::High
    } else {
        UtilizationBucket::Full
    };

    UtilizationReport {
        bucket,
        percent,
        message: bucket_message(bucket),
    }
}

fn bucket_message(bucket: UtilizationBucket) -> &'static str {
    match bucket {
        UtilizationBucket::Empty => "hold is empty",
        UtilizationBucket::Low => "plenty of space",
        UtilizationBucket::Moderate => "good capacity remaining",
        UtilizationBucket::High => "nearly full",
        UtilizationBucket::Full => "at maximum capacity",
    }
}
