use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Overtraining,
    Fatigue,
}

/// There is no high tier: a fired rule raises severity to medium
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertRule {
    LoadSpike,
    ElevatedHeartRate,
}

/// Supporting numbers; each rule fills in its own keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spike_detected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<f64>,
}

impl AlertDetails {
    fn merge(&mut self, other: &AlertDetails) {
        if other.weekly_distance.is_some() {
            self.weekly_distance = other.weekly_distance;
        }
        if other.spike_detected.is_some() {
            self.spike_detected = other.spike_detected;
        }
        if other.average_heart_rate.is_some() {
            self.average_heart_rate = other.average_heart_rate;
        }
    }
}

/// One rule that fired, independent of any other finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyFinding {
    pub rule: AlertRule,
    pub alert_type: AlertType,
    pub severity: Severity,
    pub observed: f64,
    pub threshold: f64,
    pub recommended_action: String,
    pub details: AlertDetails,
}

/// Alert document in its legacy single-type shape plus the findings behind it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnomalyReport {
    pub has_alerts: bool,
    #[serde(serialize_with = "serialize_alert_type")]
    pub alert_type: Option<AlertType>,
    pub severity: Severity,
    pub details: AlertDetails,
    pub recommended_action: String,
    pub findings: Vec<AnomalyFinding>,
}

fn serialize_alert_type<S>(alert_type: &Option<AlertType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match alert_type {
        Some(alert_type) => alert_type.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

impl AnomalyReport {
    /// Report for input too short to judge
    pub fn quiet() -> Self {
        Self::default()
    }

    /// Collapse findings into the single-type fields.
    ///
    /// Findings are applied in order, so a later finding's type and action
    /// replace an earlier one's while details accumulate.
    pub fn from_findings(findings: Vec<AnomalyFinding>) -> Self {
        let mut report = Self::default();

        for finding in &findings {
            report.has_alerts = true;
            report.alert_type = Some(finding.alert_type);
            report.severity = report.severity.max(finding.severity);
            report.details.merge(&finding.details);
            report.recommended_action = finding.recommended_action.clone();
        }

        report.findings = findings;
        report
    }

    pub fn has_finding(&self, rule: AlertRule) -> bool {
        self.findings.iter().any(|f| f.rule == rule)
    }
}
