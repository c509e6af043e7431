use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Exam objectives a question can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Topic {
    #[serde(rename = "Summarize fundamental security concepts")]
    FundamentalSecurityConcepts,
    #[serde(rename = "Compare threat types")]
    ThreatTypes,
    #[serde(rename = "Explain appropriate cryptographic solutions")]
    CryptographicSolutions,
    #[serde(rename = "Implement identity and access management")]
    IdentityAndAccessManagement,
    #[serde(rename = "Secure enterprise network architecture")]
    EnterpriseNetworkArchitecture,
    #[serde(rename = "Secure cloud network architecture")]
    CloudNetworkArchitecture,
    #[serde(rename = "Explain resiliency and site security concepts")]
    ResiliencyAndSiteSecurity,
    #[serde(rename = "Explain vulnerability management")]
    VulnerabilityManagement,
    #[serde(rename = "Evaluate network security capabilities")]
    NetworkSecurityCapabilities,
    #[serde(rename = "Assess endpoint security capabilities")]
    EndpointSecurityCapabilities,
    #[serde(rename = "Enhance application security capabilities")]
    ApplicationSecurityCapabilities,
    #[serde(rename = "Explain incident response and monitoring concepts")]
    IncidentResponseAndMonitoring,
    #[serde(rename = "Analyze indicators of malicious activity")]
    IndicatorsOfMaliciousActivity,
    #[serde(rename = "Summarize security governance concepts")]
    SecurityGovernance,
    #[serde(rename = "Explain risk management processes")]
    RiskManagement,
    #[serde(rename = "Summarize data protection and compliance concepts")]
    DataProtectionAndCompliance,
}

impl Topic {
    /// Every topic, in the order the exam objectives are listed.
    pub const ALL: [Topic; 16] = [
        Topic::FundamentalSecurityConcepts,
        Topic::ThreatTypes,
        Topic::CryptographicSolutions,
        Topic::IdentityAndAccessManagement,
        Topic::EnterpriseNetworkArchitecture,
        Topic::CloudNetworkArchitecture,
        Topic::ResiliencyAndSiteSecurity,
        Topic::VulnerabilityManagement,
        Topic::NetworkSecurityCapabilities,
        Topic::EndpointSecurityCapabilities,
        Topic::ApplicationSecurityCapabilities,
        Topic::IncidentResponseAndMonitoring,
        Topic::IndicatorsOfMaliciousActivity,
        Topic::SecurityGovernance,
        Topic::RiskManagement,
        Topic::DataProtectionAndCompliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::FundamentalSecurityConcepts => "Summarize fundamental security concepts",
            Topic::ThreatTypes => "Compare threat types",
            Topic::CryptographicSolutions => "Explain appropriate cryptographic solutions",
            Topic::IdentityAndAccessManagement => "Implement identity and access management",
            Topic::EnterpriseNetworkArchitecture => "Secure enterprise network architecture",
            Topic::CloudNetworkArchitecture => "Secure cloud network architecture",
            Topic::ResiliencyAndSiteSecurity => "Explain resiliency and site security concepts",
            Topic::VulnerabilityManagement => "Explain vulnerability management",
            Topic::NetworkSecurityCapabilities => "Evaluate network security capabilities",
            Topic::EndpointSecurityCapabilities => "Assess endpoint security capabilities",
            Topic::ApplicationSecurityCapabilities => "Enhance application security capabilities",
            Topic::IncidentResponseAndMonitoring => {
                "Explain incident response and monitoring concepts"
            }
            Topic::IndicatorsOfMaliciousActivity => "Analyze indicators of malicious activity",
            Topic::SecurityGovernance => "Summarize security governance concepts",
            Topic::RiskManagement => "Explain risk management processes",
            Topic::DataProtectionAndCompliance => {
                "Summarize data protection and compliance concepts"
            }
        }
    }

    pub fn names() -> Vec<&'static str> {
        Topic::ALL.iter().map(Topic::as_str).collect()
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTopic(pub String);

impl fmt::Display for UnknownTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a valid topic", self.0)
    }
}

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .iter()
            .copied()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| UnknownTopic(s.to_string()))
    }
}
