//! Core types for interfaces file records.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Interface name as it appears in the file (e.g., "eth0", "lo").
pub type InterfaceName = String;

/// Parsed interfaces file: every interface mentioned, keyed by name.
pub type InterfaceMap = BTreeMap<InterfaceName, AttributeRecord>;

// ============================================================================
// Flags
// ============================================================================

/// A stanza flag set by an `auto` or `allow-*` line.
///
/// The derived ordering puts the three well-known flags first, in the order
/// the formatter writes them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Flag {
    /// `auto`: bring the interface up at boot.
    Auto,
    /// `allow-auto`: synonym class for `auto`.
    AllowAuto,
    /// `allow-hotplug`: bring the interface up when the kernel detects it.
    AllowHotplug,
    /// Any other `allow-<class>` line, class stored without the prefix.
    Allow(String),
}

impl Flag {
    /// Flags written by the formatter, in output order.
    pub const FORMATTED: [Flag; 3] = [Flag::Auto, Flag::AllowAuto, Flag::AllowHotplug];

    /// Create an `allow-<class>` flag, mapping well-known classes to their variants.
    ///
    /// This is the canonical constructor: `Flag::allow("hotplug")` is
    /// [`Flag::AllowHotplug`], never `Flag::Allow("hotplug")`.
    pub fn allow(class: &str) -> Self {
        match class {
            "auto" => Self::AllowAuto,
            "hotplug" => Self::AllowHotplug,
            other => Self::Allow(other.to_string()),
        }
    }

    /// Look up the flag for a stanza keyword.
    ///
    /// Returns `None` for anything other than `auto` or `allow-<class>` with
    /// a non-empty class.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword == "auto" {
            return Some(Self::Auto);
        }
        match keyword.strip_prefix("allow-") {
            Some(class) if !class.is_empty() => Some(Self::allow(class)),
            _ => None,
        }
    }

    /// Map a hand-built `Allow("auto")` or `Allow("hotplug")` to its variant.
    pub fn canonical(self) -> Self {
        match self {
            Self::Allow(class) => Self::allow(&class),
            flag => flag,
        }
    }

    /// Check if the formatter writes this flag.
    pub fn is_formatted(&self) -> bool {
        !matches!(self, Self::Allow(_))
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::AllowAuto => write!(f, "allow-auto"),
            Self::AllowHotplug => write!(f, "allow-hotplug"),
            Self::Allow(class) => write!(f, "allow-{}", class),
        }
    }
}

impl FromStr for Flag {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| FlagParseError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Flag {
    type Error = FlagParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Flag> for String {
    fn from(flag: Flag) -> Self {
        flag.to_string()
    }
}

/// Error parsing a flag keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagParseError {
    /// Keyword is neither `auto` nor `allow-<class>`.
    #[error("unknown stanza flag: {0} (expected auto or allow-<class>)")]
    Unknown(String),
}

// ============================================================================
// Iface Block
// ============================================================================

/// The body of an `iface <name> <family> <method>` stanza.
///
/// Family and method are optional so callers can assemble a block in steps;
/// the formatter rejects a block that is still missing either one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfaceBlock {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) family: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) method: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub(crate) options: Vec<String>,
}

impl IfaceBlock {
    /// Create a block with the given address family and method.
    ///
    /// # Example
    ///
    /// ```
    /// use ifstanza::IfaceBlock;
    ///
    /// let block = IfaceBlock::new("inet", "static")
    ///     .option("    address 192.168.1.10")
    ///     .option("    netmask 255.255.255.0");
    /// assert_eq!(block.options().len(), 2);
    /// ```
    pub fn new(family: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            method: Some(method.into()),
            options: Vec::new(),
        }
    }

    /// Set the address family.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Set the configuration method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Append an option line.
    pub fn option(mut self, line: impl Into<String>) -> Self {
        self.options.push(line.into());
        self
    }

    /// Append an option line in place.
    pub fn push_option(&mut self, line: impl Into<String>) {
        self.options.push(line.into());
    }

    /// Get the address family (e.g., "inet", "inet6").
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Get the configuration method (e.g., "dhcp", "static", "loopback").
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Get the option lines in file order.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

// ============================================================================
// Attribute Record
// ============================================================================

/// Everything the file says about one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeRecord {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeSet::is_empty")
    )]
    pub(crate) flags: BTreeSet<Flag>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub(crate) iface: Option<IfaceBlock>,
}

impl AttributeRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record for a newly managed interface: `auto` with `iface <name> inet dhcp`.
    pub fn managed_default() -> Self {
        Self::new()
            .with_flag(Flag::Auto)
            .with_iface(IfaceBlock::new("inet", "dhcp"))
    }

    /// Set a flag.
    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.set_flag(flag);
        self
    }

    /// Attach an iface block, replacing any existing one.
    pub fn with_iface(mut self, iface: IfaceBlock) -> Self {
        self.iface = Some(iface);
        self
    }

    /// Set a flag in place.
    pub fn set_flag(&mut self, flag: Flag) {
        self.flags.insert(flag.canonical());
    }

    /// Clear a flag in place. Returns whether it was set.
    pub fn clear_flag(&mut self, flag: &Flag) -> bool {
        self.flags.remove(&flag.clone().canonical())
    }

    /// Replace the iface block, returning the previous one.
    pub fn set_iface(&mut self, iface: IfaceBlock) -> Option<IfaceBlock> {
        self.iface.replace(iface)
    }

    /// Check whether a flag is set.
    pub fn has_flag(&self, flag: &Flag) -> bool {
        self.flags.contains(&flag.clone().canonical())
    }

    /// Check whether `auto` is set.
    pub fn is_auto(&self) -> bool {
        self.has_flag(&Flag::Auto)
    }

    /// Check whether `allow-auto` is set.
    pub fn is_allow_auto(&self) -> bool {
        self.has_flag(&Flag::AllowAuto)
    }

    /// Check whether `allow-hotplug` is set.
    pub fn is_allow_hotplug(&self) -> bool {
        self.has_flag(&Flag::AllowHotplug)
    }

    /// Iterate over the set flags in formatter order.
    pub fn flags(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    /// Get the iface block.
    pub fn iface(&self) -> Option<&IfaceBlock> {
        self.iface.as_ref()
    }

    /// Get the iface block mutably.
    pub fn iface_mut(&mut self) -> Option<&mut IfaceBlock> {
        self.iface.as_mut()
    }
}

// ============================================================================
// Records
// ============================================================================

/// A named record as handed to the formatter.
///
/// Implemented for [`Interface`] and for `(name, record)` pairs, so both a
/// `Vec<Interface>` and the entries of an [`InterfaceMap`] can be formatted.
pub trait InterfaceRecord {
    /// The interface name.
    fn name(&self) -> &str;

    /// The interface's attributes. The formatter only reads them.
    fn attributes(&self) -> &AttributeRecord;
}

impl<K, V> InterfaceRecord for (K, V)
where
    K: AsRef<str>,
    V: Borrow<AttributeRecord>,
{
    fn name(&self) -> &str {
        self.0.as_ref()
    }

    fn attributes(&self) -> &AttributeRecord {
        self.1.borrow()
    }
}

/// An interface name together with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interface {
    pub(crate) name: InterfaceName,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) attributes: AttributeRecord,
}

impl Interface {
    /// Create a named record.
    pub fn new(name: impl Into<InterfaceName>, attributes: AttributeRecord) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// Get the attributes mutably.
    pub fn attributes_mut(&mut self) -> &mut AttributeRecord {
        &mut self.attributes
    }

    /// Split into name and attributes.
    pub fn into_parts(self) -> (InterfaceName, AttributeRecord) {
        (self.name, self.attributes)
    }
}

impl InterfaceRecord for Interface {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &AttributeRecord {
        &self.attributes
    }
}
