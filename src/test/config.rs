#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::{TrackerError, config::Config};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.tefas_url(), "https://www.tefas.gov.tr");
        assert_eq!(config.fx_url(), "https://api.frankfurter.app");
        assert_eq!(*config.lookback_days(), 14);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("TEFAS_API_URL", "http://localhost:8080"),
            ("FX_API_URL", "http://localhost:8081"),
            ("TEFAS_LOOKBACK_DAYS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.tefas_url(), "http://localhost:8080");
        assert_eq!(config.fx_url(), "http://localhost:8081");
        assert_eq!(*config.lookback_days(), 30);
    }

    #[test]
    fn lookback_must_cover_a_week() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("TEFAS_LOOKBACK_DAYS", "5")])),
            Err(TrackerError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[("TEFAS_LOOKBACK_DAYS", "a week")])),
            Err(TrackerError::Config(_))
        ));
    }

    #[test]
    fn lookback_has_an_upper_bound() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("TEFAS_LOOKBACK_DAYS", "99999999999")])),
            Err(TrackerError::Config(_))
        ));

        let config = Config::from_lookup(lookup(&[("TEFAS_LOOKBACK_DAYS", "3650")])).unwrap();
        assert_eq!(*config.lookback_days(), 3650);
    }
}
