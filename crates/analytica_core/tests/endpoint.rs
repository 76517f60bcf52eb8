use analytica_core::{DeploymentKind, EndpointConfig, DEFAULT_BACKEND_URL};
use pretty_assertions::assert_eq;

#[test]
fn unset_or_empty_env_falls_back_to_loopback_default() {
    assert_eq!(EndpointConfig::from_env_value(None).base_url(), DEFAULT_BACKEND_URL);
    assert_eq!(
        EndpointConfig::from_env_value(Some(String::new())).base_url(),
        DEFAULT_BACKEND_URL
    );
    assert_eq!(
        EndpointConfig::from_env_value(Some("   ".into())).base_url(),
        DEFAULT_BACKEND_URL
    );
}

#[test]
fn configured_url_is_used_and_trailing_slash_dropped() {
    let config = EndpointConfig::from_env_value(Some("https://api.example.com/".into()));
    assert_eq!(config.base_url(), "https://api.example.com");
    assert_eq!(config.health_url(), "https://api.example.com/api/health");
    assert_eq!(
        config.analysis_url(),
        "https://api.example.com/api/paper-analysis"
    );
}

#[test]
fn override_wins_only_when_not_blank() {
    let config = EndpointConfig::new("https://api.example.com");
    assert_eq!(
        config.resolve(Some("http://localhost:9000")).base_url(),
        "http://localhost:9000"
    );
    assert_eq!(config.resolve(Some("  ")).base_url(), "https://api.example.com");
    assert_eq!(config.resolve(None), config);
}

#[test]
fn loopback_hosts_are_development() {
    for url in [
        "http://127.0.0.1:5000",
        "http://localhost:3000",
        "http://LOCALHOST",
        "http://[::1]:5000",
    ] {
        assert_eq!(
            EndpointConfig::new(url).deployment_kind(),
            DeploymentKind::Development,
            "{url}"
        );
    }
    assert_eq!(
        EndpointConfig::new("https://backend.onrender.com").deployment_kind(),
        DeploymentKind::Production
    );
    assert_eq!(
        EndpointConfig::new("not a url").deployment_kind(),
        DeploymentKind::Production
    );
}

#[test]
fn diagnostic_links_are_absolute() {
    let links = EndpointConfig::new("http://127.0.0.1:5000").diagnostic_links();
    assert_eq!(
        links,
        vec![
            "http://127.0.0.1:5000/api/health".to_string(),
            "http://127.0.0.1:5000/api/corpus-overview".to_string(),
            "http://127.0.0.1:5000/api/corpus-documents".to_string(),
        ]
    );
}
