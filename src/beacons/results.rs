use serde::{Deserialize, Serialize};

/// Statistical shape of one sample set (inter-connection intervals or
/// payload sizes), computed by the external scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub range: i64,
    pub mode: i64,
    pub mode_count: i64,
    pub skew: f64,
    pub dispersion: i64,
}

/// One scored beacon finding between a source and destination host.
///
/// The scorer writes findings already ordered by descending score; nothing
/// in this tool re-sorts or mutates them. The network name fields are empty
/// when no name was resolved for the finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeaconResult {
    pub score: f64,
    pub src_ip: String,
    pub dst_ip: String,
    #[serde(default)]
    pub src_network_name: String,
    #[serde(default)]
    pub dst_network_name: String,
    pub connections: i64,
    pub avg_bytes: f64,
    pub timing_stats: DistributionSummary,
    pub size_stats: DistributionSummary,
}
