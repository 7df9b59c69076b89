//! Example command - generate example desired-state documents.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::document::DocumentFormat;

#[derive(Args)]
pub struct ExampleArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: DocumentFormat,

    /// Example type to generate
    #[arg(short, long, value_enum, default_value = "basic")]
    pub example: ExampleType,
}

#[derive(Clone, ValueEnum)]
pub enum ExampleType {
    /// Loopback plus one DHCP interface
    Basic,
    /// Static addressing with routes
    Static,
    /// Bridge over two ports
    Bridge,
    /// Hotplugged wireless interface
    Wireless,
}

pub fn run(args: ExampleArgs) -> Result<()> {
    let example = match args.example {
        ExampleType::Basic => BASIC_EXAMPLE,
        ExampleType::Static => STATIC_EXAMPLE,
        ExampleType::Bridge => BRIDGE_EXAMPLE,
        ExampleType::Wireless => WIRELESS_EXAMPLE,
    };

    match args.format {
        DocumentFormat::Yaml => {
            print!("{}", example);
        }
        DocumentFormat::Json => {
            // Convert YAML to JSON
            let value: serde_yaml::Value =
                serde_yaml::from_str(example).context("YAML parse failed")?;
            println!(
                "{}",
                serde_json::to_string_pretty(&value).context("JSON serialization failed")?
            );
        }
    }

    Ok(())
}

const BASIC_EXAMPLE: &str = r#"# Basic interfaces configuration
# Loopback and a single interface configured by DHCP

interfaces:
  - name: lo
    flags: [auto]
    iface:
      family: inet
      method: loopback

  - name: eth0
    flags: [auto]
    iface:
      family: inet
      method: dhcp
"#;

const STATIC_EXAMPLE: &str = r#"# Static addressing
# Options are written verbatim below the iface line

interfaces:
  - name: lo
    flags: [auto]
    iface:
      family: inet
      method: loopback

  - name: eth0
    flags: [auto]
    iface:
      family: inet
      method: static
      options:
        - "    address 192.168.1.10/24"
        - "    gateway 192.168.1.1"
        - "    dns-nameservers 192.168.1.1"
        - "    up ip route add 10.0.0.0/8 via 192.168.1.254"
"#;

const BRIDGE_EXAMPLE: &str = r#"# Bridge over two ports
# Ports are brought up by the bridge, so they only get a manual iface

interfaces:
  - name: eth0
    iface:
      family: inet
      method: manual

  - name: eth1
    iface:
      family: inet
      method: manual

  - name: br0
    flags: [auto]
    iface:
      family: inet
      method: dhcp
      options:
        - "    bridge_ports eth0 eth1"
        - "    bridge_stp off"
        - "    bridge_fd 0"
"#;

const WIRELESS_EXAMPLE: &str = r#"# Hotplugged wireless interface
# Brought up when the kernel reports the device

interfaces:
  - name: wlan0
    flags: [allow-hotplug]
    iface:
      family: inet
      method: dhcp
      options:
        - "    wpa-conf /etc/wpa_supplicant/wpa_supplicant.conf"
"#;
