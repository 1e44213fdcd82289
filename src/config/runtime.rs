//! Runtime switches resolved once from the process environment

/// Environment variable selecting the runtime mode
pub const ENV_MODE: &str = "NODE_ENV";
/// Environment variable allowing fallback payloads outside strict production
pub const ENV_ALLOW_EMPTY: &str = "ALLOW_EMPTY_DATA";
/// Environment variable carrying the build-phase marker
pub const ENV_BUILD_PHASE: &str = "BUILD_PHASE";
/// Build-phase marker set during static generation
pub const PRODUCTION_BUILD_PHASE: &str = "production-build";

/// Runtime mode of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

/// Behavior switches consumed by the dataset resolver.
///
/// Built once at startup and passed down so tests can inject values
/// instead of mutating the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub environment: Environment,
    pub allow_empty_data: bool,
    pub build_phase: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::development()
    }
}

impl RuntimeConfig {
    /// Strict production: no fallback allowed
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            allow_empty_data: false,
            build_phase: None,
        }
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            allow_empty_data: false,
            build_phase: None,
        }
    }

    /// Read the switches from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the switches through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Anything other than an explicit "production" is non-production
        let environment = match lookup(ENV_MODE).as_deref().map(str::trim) {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        };

        let allow_empty_data = lookup(ENV_ALLOW_EMPTY)
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let build_phase = lookup(ENV_BUILD_PHASE)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Self {
            environment,
            allow_empty_data,
            build_phase,
        }
    }

    /// Mark this runtime as a static-generation build
    pub fn with_build_phase(mut self) -> Self {
        self.build_phase = Some(PRODUCTION_BUILD_PHASE.to_string());
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn is_build_phase(&self) -> bool {
        self.build_phase.as_deref() == Some(PRODUCTION_BUILD_PHASE)
    }

    /// Whether the resolver may serve bundled fallback payloads
    pub fn fallback_allowed(&self) -> bool {
        !self.is_production() || self.allow_empty_data || self.is_build_phase()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_unset_mode_is_non_production() {
        let runtime = lookup(&[]);
        assert_eq!(runtime.environment, Environment::Development);
        assert!(runtime.fallback_allowed());
    }

    #[test]
    fn test_strict_production_forbids_fallback() {
        let runtime = lookup(&[(ENV_MODE, "production")]);
        assert!(runtime.is_production());
        assert!(!runtime.fallback_allowed());
    }

    #[test]
    fn test_allow_empty_override() {
        let runtime = lookup(&[(ENV_MODE, "production"), (ENV_ALLOW_EMPTY, "true")]);
        assert!(runtime.fallback_allowed());

        let runtime = lookup(&[(ENV_MODE, "production"), (ENV_ALLOW_EMPTY, "0")]);
        assert!(!runtime.fallback_allowed());
    }

    #[test]
    fn test_build_phase_marker() {
        let runtime = lookup(&[(ENV_MODE, "production"), (ENV_BUILD_PHASE, "production-build")]);
        assert!(runtime.is_build_phase());
        assert!(runtime.fallback_allowed());

        let runtime = lookup(&[(ENV_MODE, "production"), (ENV_BUILD_PHASE, "serve")]);
        assert!(!runtime.fallback_allowed());

        assert!(RuntimeConfig::production()
            .with_build_phase()
            .fallback_allowed());
    }
}
