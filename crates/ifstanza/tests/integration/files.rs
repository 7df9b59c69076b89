//! Parsing realistic interfaces files.

use ifstanza::{AttributeRecord, Flag, IfaceBlock, parse};

const DEBIAN_DEFAULT: &str = "\
# This file describes the network interfaces available on your system
# and how to activate them. For more information, see interfaces(5).

source /etc/network/interfaces.d/*
";

const SERVER: &str = "\
# The loopback network interface
auto lo
iface lo inet loopback

# The primary network interface
allow-hotplug eth0
iface eth0 inet static
\taddress 192.0.2.7/24
\tgateway 192.0.2.254
\t# dns-* options are implemented by the resolvconf package
\tdns-nameservers 192.0.2.1 192.0.2.2
\tdns-search example.org

iface eth0 inet6 auto
";

#[test]
fn test_source_line_outside_stanza() {
    // `source` is read as an option line with no open stanza.
    let err = parse(DEBIAN_DEFAULT).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.line(), Some(4));
}

#[test]
fn test_second_family_is_duplicate() {
    // Only one iface block per interface name is supported.
    let err = parse(SERVER).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(err.line(), Some(14));
}

#[test]
fn test_server_file() {
    let text = SERVER.trim_end().trim_end_matches("iface eth0 inet6 auto");
    let map = parse(text).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(
        map["lo"],
        AttributeRecord::new()
            .with_flag(Flag::Auto)
            .with_iface(IfaceBlock::new("inet", "loopback"))
    );

    let eth0 = &map["eth0"];
    assert!(eth0.is_allow_hotplug());
    assert!(!eth0.is_auto());
    assert_eq!(
        eth0.iface().unwrap(),
        &IfaceBlock::new("inet", "static")
            .option("\taddress 192.0.2.7/24")
            .option("\tgateway 192.0.2.254")
            .option("\tdns-nameservers 192.0.2.1 192.0.2.2")
            .option("\tdns-search example.org")
    );
}

#[test]
fn test_bridge_with_hooks() {
    let text = "\
auto br0
iface br0 inet manual
    bridge_ports eth0 eth1
    bridge_stp off
    pre-up ip link set dev eth0 up
    post-down ip link set dev eth0 down
";
    let map = parse(text).unwrap();
    let options = map["br0"].iface().unwrap().options();
    assert_eq!(options.len(), 4);
    assert_eq!(options[2], "    pre-up ip link set dev eth0 up");
}

#[test]
fn test_example_from_docs() {
    let map = parse("auto lo eth0\niface lo inet loopback\niface eth0 inet dhcp\n").unwrap();

    for (name, method) in [("lo", "loopback"), ("eth0", "dhcp")] {
        let record = &map[name];
        assert!(record.is_auto());
        let iface = record.iface().unwrap();
        assert_eq!(iface.family(), Some("inet"));
        assert_eq!(iface.method(), Some(method));
        assert!(iface.options().is_empty());
    }
}

#[test]
fn test_mapping_stops_parse() {
    let text = "\
auto eth0
mapping eth0
    script /usr/local/sbin/map-scheme
    map HOME eth0-home
iface eth0-home inet dhcp
";
    let err = parse(text).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.line(), Some(2));
    assert!(err.to_string().contains("mapping"));
}
