use std::fmt;

use clap::builder::PossibleValue;
use clap::ValueEnum;

/// Exposure type of a Kubernetes service, in the upstream spelling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ServiceType {
    ClusterIP,
    NodePort,
    LoadBalancer,
    ExternalName,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.to_possible_value()
            .expect("to_possible_value should cover all service types")
            .get_name()
            .fmt(f)
    }
}

impl ValueEnum for ServiceType {
    fn value_variants<'a>() -> &'a [ServiceType] {
        &[
            ServiceType::ClusterIP,
            ServiceType::NodePort,
            ServiceType::LoadBalancer,
            ServiceType::ExternalName,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            ServiceType::ClusterIP => PossibleValue::new("ClusterIP"),
            ServiceType::NodePort => PossibleValue::new("NodePort"),
            ServiceType::LoadBalancer => PossibleValue::new("LoadBalancer"),
            ServiceType::ExternalName => PossibleValue::new("ExternalName"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(ServiceType::ClusterIP, "ClusterIP")]
    #[case(ServiceType::NodePort, "NodePort")]
    #[case(ServiceType::LoadBalancer, "LoadBalancer")]
    #[case(ServiceType::ExternalName, "ExternalName")]
    fn display_uses_the_kubernetes_spelling(
        #[case] service_type: ServiceType,
        #[case] expected: &str,
    ) {
        assert_eq!(expected, service_type.to_string());
        assert_eq!(
            Ok(service_type),
            ServiceType::from_str(expected, false),
            "the displayed name should parse back"
        );
    }
}
