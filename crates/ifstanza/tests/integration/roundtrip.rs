//! Formatting records and parsing them back.

use ifstanza::{
    AttributeRecord, Flag, Formatter, IfaceBlock, Interface, InterfaceMap, parse, render,
};

fn records() -> Vec<Interface> {
    vec![
        Interface::new(
            "wlan0",
            AttributeRecord::new()
                .with_flag(Flag::AllowHotplug)
                .with_iface(
                    IfaceBlock::new("inet", "dhcp")
                        .option("    wpa-conf /etc/wpa_supplicant/wpa_supplicant.conf"),
                ),
        ),
        Interface::new(
            "lo",
            AttributeRecord::new()
                .with_flag(Flag::Auto)
                .with_iface(IfaceBlock::new("inet", "loopback")),
        ),
        Interface::new(
            "eth0",
            AttributeRecord::new()
                .with_flag(Flag::Auto)
                .with_flag(Flag::AllowAuto)
                .with_iface(
                    IfaceBlock::new("inet", "static")
                        .option("address 192.168.1.10")
                        .option("netmask 255.255.255.0")
                        .option("up ip route add 10.0.0.0/8 via 192.168.1.254"),
                ),
        ),
        Interface::new("eth1", AttributeRecord::new().with_flag(Flag::Auto)),
    ]
}

fn as_map(records: Vec<Interface>) -> InterfaceMap {
    records.into_iter().map(Interface::into_parts).collect()
}

#[test]
fn test_format_then_parse() {
    let records = records();
    let text = render(&records).unwrap();
    assert_eq!(parse(&text).unwrap(), as_map(records));
}

#[test]
fn test_option_whitespace_survives() {
    let records = vec![Interface::new(
        "eth0",
        AttributeRecord::new().with_iface(
            IfaceBlock::new("inet", "static")
                .option("    address 10.0.0.1 ")
                .option("\tgateway 10.0.0.254\t"),
        ),
    )];
    let text = render(&records).unwrap();
    let map = parse(&text).unwrap();

    assert_eq!(
        map["eth0"].iface().unwrap().options(),
        &["    address 10.0.0.1 ", "\tgateway 10.0.0.254\t"]
    );
    assert_eq!(map, as_map(records));
}

#[test]
fn test_rendered_layout() {
    let text = Formatter::new().no_header().render(&records()).unwrap();
    assert_eq!(
        text,
        "\
auto eth0 eth1 lo

allow-auto eth0

allow-hotplug wlan0

iface wlan0 inet dhcp
    wpa-conf /etc/wpa_supplicant/wpa_supplicant.conf

iface lo inet loopback

iface eth0 inet static
address 192.168.1.10
netmask 255.255.255.0
up ip route add 10.0.0.0/8 via 192.168.1.254
"
    );
}

#[test]
fn test_parse_then_format_is_stable() {
    let text = render(&records()).unwrap();
    let map = parse(&text).unwrap();

    let pairs: Vec<_> = map.iter().collect();
    let again = render(&pairs).unwrap();
    assert_eq!(parse(&again).unwrap(), map);

    // A second pass over already-sorted records changes nothing.
    let pairs: Vec<_> = parse(&again).unwrap().into_iter().collect();
    assert_eq!(render(&pairs).unwrap(), again);
}

#[test]
fn test_output_independent_of_flag_order() {
    let mut reversed = records();
    reversed.reverse();

    let forward = Formatter::new().no_header().format(&records()).unwrap();
    let backward = Formatter::new().no_header().format(&reversed).unwrap();

    // Flag lines are identical; only the iface blocks follow record order.
    assert_eq!(forward[..3], backward[..3]);
    assert_eq!(forward[3], backward[5]);
}

#[test]
fn test_failed_format_produces_nothing() {
    let mut records = records();
    records.push(Interface::new(
        "eth2",
        AttributeRecord::new().with_iface(IfaceBlock::default().with_family("inet")),
    ));

    let err = render(&records).unwrap_err();
    assert!(err.is_invalid_record());
    assert_eq!(err.interface(), Some("eth2"));
}

#[test]
fn test_records_are_editable() {
    let mut records = records();
    records[3]
        .attributes_mut()
        .set_iface(IfaceBlock::new("inet", "manual"));

    let map = parse(&render(&records).unwrap()).unwrap();
    assert_eq!(map["eth1"].iface().unwrap().method(), Some("manual"));
}
