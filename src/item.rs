//! Configuration items and their admission rules.

use crate::conf::ResolvConf;
use crate::error::{ResolvConfError, Result};
use crate::option::ResolvOption;
use std::fmt;
use std::net::IpAddr;

/// Maximum number of `nameserver` lines honoured by the resolver.
pub const MAX_NAMESERVERS: usize = 3;

/// Maximum number of address/netmask pairs in a `sortlist`.
pub const MAX_SORTLIST: usize = 10;

/// A `nameserver` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nameserver {
    /// Nameserver address.
    pub ip: IpAddr,
}

impl Nameserver {
    /// Creates a nameserver entry.
    #[must_use]
    pub const fn new(ip: IpAddr) -> Self {
        Self { ip }
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ip, f)
    }
}

/// The `domain` entry. A configuration holds at most one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domain {
    /// Local domain name.
    pub name: String,
}

impl Domain {
    /// Creates a domain entry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One name of the `search` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDomain {
    /// Search domain name.
    pub name: String,
}

impl SearchDomain {
    /// Creates a search domain entry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for SearchDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One address/netmask pair of the `sortlist`.
///
/// # Example
///
/// ```
/// use resolvconf::SortItem;
///
/// let mut item = SortItem::new("130.155.160.0".parse().unwrap());
/// assert_eq!(item.to_string(), "130.155.160.0");
///
/// item.set_netmask("255.255.240.0".parse().unwrap());
/// assert_eq!(item.to_string(), "130.155.160.0/255.255.240.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortItem {
    /// Network address.
    pub address: IpAddr,
    /// Optional netmask. Not part of entry identity.
    pub netmask: Option<IpAddr>,
}

impl SortItem {
    /// Creates a sortlist entry without a netmask.
    #[must_use]
    pub const fn new(address: IpAddr) -> Self {
        Self {
            address,
            netmask: None,
        }
    }

    /// Sets the netmask.
    pub const fn set_netmask(&mut self, netmask: IpAddr) -> &mut Self {
        self.netmask = Some(netmask);
        self
    }

    /// Builder form of [`set_netmask`](Self::set_netmask).
    #[must_use]
    pub const fn with_netmask(mut self, netmask: IpAddr) -> Self {
        self.netmask = Some(netmask);
        self
    }

    /// Returns the netmask, if one was set.
    #[must_use]
    pub const fn netmask(&self) -> Option<IpAddr> {
        self.netmask
    }
}

impl fmt::Display for SortItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.netmask {
            Some(mask) => write!(f, "{}/{mask}", self.address),
            None => fmt::Display::fmt(&self.address, f),
        }
    }
}

/// Any directive entry a [`ResolvConf`] can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfItem {
    /// A `nameserver` line.
    Nameserver(Nameserver),
    /// The `domain` line.
    Domain(Domain),
    /// One name of the `search` line.
    SearchDomain(SearchDomain),
    /// One pair of the `sortlist` line.
    SortItem(SortItem),
    /// One entry of the `options` line.
    Option(ResolvOption),
}

/// Outcome of a successful admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    /// Append the item to the end of the configuration.
    Append,
    /// Overwrite the item at this position instead of appending.
    Replace(usize),
}

impl ConfItem {
    /// Directive name used in error messages and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nameserver(_) => "nameserver",
            Self::Domain(_) => "domain",
            Self::SearchDomain(_) => "search domain",
            Self::SortItem(_) => "sortlist",
            Self::Option(_) => "option",
        }
    }

    /// Returns `true` if `other` is the same entry as `self`.
    ///
    /// Items of different variants never match. Within a variant:
    /// nameservers and sortlist pairs compare by address (an IPv4-mapped
    /// IPv6 address equals its IPv4 form, and a sortlist netmask is
    /// ignored), domains and search domains by name, and options by type.
    #[must_use]
    pub fn same_entry(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nameserver(a), Self::Nameserver(b)) => {
                a.ip.to_canonical() == b.ip.to_canonical()
            }
            (Self::Domain(a), Self::Domain(b)) => a.name == b.name,
            (Self::SearchDomain(a), Self::SearchDomain(b)) => a.name == b.name,
            (Self::SortItem(a), Self::SortItem(b)) => {
                a.address.to_canonical() == b.address.to_canonical()
            }
            (Self::Option(a), Self::Option(b)) => a.kind == b.kind,
            _ => false,
        }
    }

    /// Decides whether this item may join `conf`.
    pub(crate) fn admit(&self, conf: &ResolvConf) -> Result<Admission> {
        match self {
            Self::Nameserver(_) => {
                if conf.nameservers().len() + 1 > MAX_NAMESERVERS {
                    return Err(ResolvConfError::CapacityExceeded {
                        kind: self.kind(),
                        max: MAX_NAMESERVERS,
                    });
                }
                self.reject_duplicate(conf)?;
            }
            Self::Domain(_) => {
                let current = Self::Domain(conf.domain());
                if let Some(index) = conf.index_of(&current) {
                    return Ok(Admission::Replace(index));
                }
            }
            Self::SearchDomain(_) => self.reject_duplicate(conf)?,
            Self::SortItem(_) => {
                self.reject_duplicate(conf)?;
                if conf.sort_items().len() >= MAX_SORTLIST {
                    return Err(ResolvConfError::CapacityExceeded {
                        kind: self.kind(),
                        max: MAX_SORTLIST,
                    });
                }
            }
            Self::Option(opt) => {
                opt.validate()?;
                self.reject_duplicate(conf)?;
            }
        }
        Ok(Admission::Append)
    }

    fn reject_duplicate(&self, conf: &ResolvConf) -> Result<()> {
        if conf.find(self).is_some() {
            return Err(ResolvConfError::DuplicateEntry {
                kind: self.kind(),
                value: self.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ConfItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nameserver(ns) => fmt::Display::fmt(ns, f),
            Self::Domain(d) => fmt::Display::fmt(d, f),
            Self::SearchDomain(sd) => fmt::Display::fmt(sd, f),
            Self::SortItem(si) => fmt::Display::fmt(si, f),
            Self::Option(opt) => fmt::Display::fmt(opt, f),
        }
    }
}

impl From<Nameserver> for ConfItem {
    fn from(ns: Nameserver) -> Self {
        Self::Nameserver(ns)
    }
}

impl From<Domain> for ConfItem {
    fn from(d: Domain) -> Self {
        Self::Domain(d)
    }
}

impl From<SearchDomain> for ConfItem {
    fn from(sd: SearchDomain) -> Self {
        Self::SearchDomain(sd)
    }
}

impl From<SortItem> for ConfItem {
    fn from(si: SortItem) -> Self {
        Self::SortItem(si)
    }
}

impl From<ResolvOption> for ConfItem {
    fn from(opt: ResolvOption) -> Self {
        Self::Option(opt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn sort_item_renders_netmask_when_set() {
        let bare = SortItem::new(ip("10.0.0.0"));
        assert_eq!(bare.to_string(), "10.0.0.0");
        assert_eq!(bare.netmask(), None);

        let masked = bare.with_netmask(ip("255.0.0.0"));
        assert_eq!(masked.to_string(), "10.0.0.0/255.0.0.0");
        assert_eq!(masked.netmask(), Some(ip("255.0.0.0")));
    }

    #[test]
    fn sort_items_match_on_address_only() {
        let a = ConfItem::from(SortItem::new(ip("10.0.0.0")));
        let b = ConfItem::from(SortItem::new(ip("10.0.0.0")).with_netmask(ip("255.0.0.0")));
        assert!(a.same_entry(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn sort_items_match_mapped_ipv4() {
        let v4 = ConfItem::from(SortItem::new(ip("10.0.0.1")));
        let mapped = ConfItem::from(SortItem::new(ip("::ffff:10.0.0.1")));
        assert!(v4.same_entry(&mapped));
        assert!(!v4.same_entry(&ConfItem::from(SortItem::new(ip("::10.0.0.1")))));
    }

    #[test]
    fn nameserver_matches_mapped_ipv4() {
        let v4 = ConfItem::from(Nameserver::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))));
        let mapped = ConfItem::from(Nameserver::new(IpAddr::V6(
            Ipv4Addr::new(192, 0, 2, 1).to_ipv6_mapped(),
        )));
        assert!(v4.same_entry(&mapped));

        let other = ConfItem::from(Nameserver::new(IpAddr::V6(Ipv6Addr::LOCALHOST)));
        assert!(!v4.same_entry(&other));
    }

    #[test]
    fn variants_never_match_each_other() {
        let domain = ConfItem::from(Domain::new("example.com"));
        let search = ConfItem::from(SearchDomain::new("example.com"));
        assert!(!domain.same_entry(&search));
        assert_eq!(domain.to_string(), search.to_string());
    }

    #[test]
    fn options_match_on_type() {
        let a = ConfItem::from(ResolvOption::valued("timeout", 1).unwrap());
        let b = ConfItem::from(ResolvOption::valued("timeout", 5).unwrap());
        assert!(a.same_entry(&b));
    }
}
