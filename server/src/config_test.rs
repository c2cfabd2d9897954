use super::*;

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn port_parses_valid_values() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 443 ")).unwrap(), 443);
}

#[test]
fn port_rejects_zero_and_garbage() {
    for raw in ["0", "http", "70000", "-1"] {
        let err = parse_port(Some(raw)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }), "{raw}");
    }
}

#[test]
fn bind_addr_defaults_to_all_interfaces() {
    assert_eq!(parse_bind_addr(None).unwrap(), DEFAULT_BIND_ADDR);
}

#[test]
fn bind_addr_accepts_v4_and_v6() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")).unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert!(parse_bind_addr(Some("::1")).unwrap().is_ipv6());
}

#[test]
fn bind_addr_rejects_hostnames() {
    let err = parse_bind_addr(Some("localhost")).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR \"localhost\": expected an IP address");
}

#[test]
fn site_root_is_optional() {
    assert_eq!(parse_site_root(None), None);
    assert_eq!(parse_site_root(Some("")), None);
    assert_eq!(parse_site_root(Some("/srv/site")), Some(PathBuf::from("/srv/site")));
}

#[test]
fn socket_addr_combines_fields() {
    let cfg = ServerConfig { bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 4000, site_root: None };
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:4000");
}
