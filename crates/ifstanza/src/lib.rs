//! Parser and formatter for Debian ifupdown interfaces files.
//!
//! This crate reads the text of `/etc/network/interfaces` into a map of
//! per-interface records and writes records back out in a deterministic
//! layout that parses to the same map. It performs no I/O: callers read and
//! write the file themselves.
//!
//! # Features
//!
//! - `serde` - Serialize/Deserialize for the record types
//!
//! # Example
//!
//! ```
//! use ifstanza::{Formatter, InterfaceRecord};
//!
//! let text = "\
//! auto lo eth0
//! iface lo inet loopback
//! iface eth0 inet static
//!     address 192.168.1.10
//!     netmask 255.255.255.0
//! ";
//!
//! let map = ifstanza::parse(text)?;
//! assert!(map["eth0"].is_auto());
//!
//! let records: Vec<_> = map.iter().collect();
//! assert_eq!(records[0].name(), "eth0");
//!
//! let written = Formatter::new().render(&records)?;
//! assert_eq!(ifstanza::parse(&written)?, map);
//! # Ok::<(), ifstanza::Error>(())
//! ```

pub mod error;
pub mod interfaces;

// Re-export common types at crate root for convenience
pub use error::{Error, Result};
pub use interfaces::{
    AttributeRecord, Flag, Formatter, IfaceBlock, Interface, InterfaceMap, InterfaceName,
    InterfaceRecord, format, parse, render,
};
