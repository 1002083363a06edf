use super::*;

#[test]
fn missing_values_use_defaults() {
    assert_eq!(parse_host(None), Ok(DEFAULT_HOST));
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_flag(None, true), Ok(true));
    assert_eq!(parse_public_dir(None), default_public_dir());
}

#[test]
fn blank_values_use_defaults() {
    assert_eq!(parse_host(Some("  ")), Ok(DEFAULT_HOST));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
    assert_eq!(parse_flag(Some(""), false), Ok(false));
}

#[test]
fn valid_overrides_parse() {
    assert_eq!(parse_host(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert_eq!(parse_host(Some("::1")), Ok("::1".parse().unwrap()));
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
    assert_eq!(parse_public_dir(Some("/srv/public")), PathBuf::from("/srv/public"));
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
}

#[test]
fn invalid_host_is_rejected() {
    assert_eq!(parse_host(Some("localhost")), Err(ConfigError::InvalidHost("localhost".into())));
}

#[test]
fn flags_accept_common_spellings() {
    for on in ["1", "true", "TRUE", "yes", "on"] {
        assert_eq!(parse_flag(Some(on), false), Ok(true), "{on}");
    }
    for off in ["0", "false", "No", "off"] {
        assert_eq!(parse_flag(Some(off), true), Ok(false), "{off}");
    }
    assert_eq!(parse_flag(Some("maybe"), true), Err(ConfigError::InvalidFlag("maybe".into())));
}

#[test]
fn addr_joins_host_and_port() {
    let config = ServerConfig { port: 4000, ..ServerConfig::default() };
    assert_eq!(config.addr().to_string(), "0.0.0.0:4000");
    assert!(config.compression);
}
