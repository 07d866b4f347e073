//! The ordered configuration aggregate.

use crate::error::Result;
use crate::item::{Admission, ConfItem, Domain, Nameserver, SearchDomain, SortItem};
use crate::option::ResolvOption;
use std::fmt;

/// An in-memory resolv.conf, built one entry at a time.
///
/// Entries keep the order in which they were accepted. [`add`](Self::add)
/// enforces the format's limits: at most three nameservers, at most ten
/// sortlist pairs, a single domain (re-adding replaces it), and no duplicate
/// nameservers, search domains, sortlist addresses or option types.
///
/// # Example
///
/// ```
/// use resolvconf::{Domain, Nameserver, ResolvConf, ResolvOption, SearchDomain};
///
/// let mut conf = ResolvConf::new();
/// conf.add(Nameserver::new("192.0.2.53".parse().unwrap()))?;
/// conf.add(Domain::new("corp.example"))?;
/// conf.add(SearchDomain::new("corp.example"))?;
/// conf.add(SearchDomain::new("example"))?;
///
/// let mut ndots = ResolvOption::new("ndots")?;
/// ndots.set(2);
/// conf.add(ndots)?;
///
/// assert_eq!(
///     conf.render_lines(),
///     vec![
///         "nameserver 192.0.2.53",
///         "domain corp.example",
///         "search corp.example example",
///         "options ndots:2",
///     ]
/// );
/// # Ok::<(), resolvconf::ResolvConfError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolvConf {
    items: Vec<ConfItem>,
}

impl ResolvConf {
    /// Creates an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds an entry, subject to its admission rule.
    ///
    /// Accepted entries are appended, except a [`Domain`] when one is
    /// already present: its name is overwritten in place.
    ///
    /// # Errors
    ///
    /// Returns [`ResolvConfError::CapacityExceeded`],
    /// [`ResolvConfError::DuplicateEntry`],
    /// [`ResolvConfError::InvalidValue`] or
    /// [`ResolvConfError::UnknownOption`] when the entry is rejected. The
    /// configuration is left unchanged in that case.
    ///
    /// [`ResolvConfError::CapacityExceeded`]: crate::ResolvConfError::CapacityExceeded
    /// [`ResolvConfError::DuplicateEntry`]: crate::ResolvConfError::DuplicateEntry
    /// [`ResolvConfError::InvalidValue`]: crate::ResolvConfError::InvalidValue
    /// [`ResolvConfError::UnknownOption`]: crate::ResolvConfError::UnknownOption
    pub fn add(&mut self, item: impl Into<ConfItem>) -> Result<()> {
        let item = item.into();
        let admission = item.admit(self).inspect_err(|e| {
            tracing::debug!(kind = item.kind(), item = %item, error = %e, "Rejected resolv.conf entry");
        })?;

        match admission {
            Admission::Append => {
                tracing::debug!(kind = item.kind(), item = %item, "Added resolv.conf entry");
                self.items.push(item);
            }
            Admission::Replace(index) => {
                tracing::debug!(
                    kind = item.kind(),
                    item = %item,
                    index,
                    "Replaced resolv.conf entry"
                );
                self.items[index] = item;
            }
        }
        Ok(())
    }

    /// Returns the first entry that is the same entry as `probe`.
    ///
    /// See [`ConfItem::same_entry`] for what counts as the same entry.
    #[must_use]
    pub fn find(&self, probe: &ConfItem) -> Option<&ConfItem> {
        self.items.iter().find(|item| item.same_entry(probe))
    }

    /// Returns the position of the first entry matching `probe`.
    #[must_use]
    pub fn index_of(&self, probe: &ConfItem) -> Option<usize> {
        self.items.iter().position(|item| item.same_entry(probe))
    }

    /// All entries in acceptance order.
    #[must_use]
    pub fn items(&self) -> &[ConfItem] {
        &self.items
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no entries have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Nameservers in acceptance order.
    #[must_use]
    pub fn nameservers(&self) -> Vec<Nameserver> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ConfItem::Nameserver(ns) => Some(*ns),
                _ => None,
            })
            .collect()
    }

    /// The domain, or an empty [`Domain`] if none was added.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.items
            .iter()
            .find_map(|item| match item {
                ConfItem::Domain(d) => Some(d.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Search domains in acceptance order.
    #[must_use]
    pub fn search_domains(&self) -> Vec<SearchDomain> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ConfItem::SearchDomain(sd) => Some(sd.clone()),
                _ => None,
            })
            .collect()
    }

    /// Sortlist pairs in acceptance order.
    #[must_use]
    pub fn sort_items(&self) -> Vec<SortItem> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ConfItem::SortItem(si) => Some(*si),
                _ => None,
            })
            .collect()
    }

    /// Options in acceptance order.
    #[must_use]
    pub fn options(&self) -> Vec<ResolvOption> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ConfItem::Option(opt) => Some(opt.clone()),
                _ => None,
            })
            .collect()
    }

    /// Renders the directive lines of the file, without trailing newlines.
    ///
    /// Nameservers come first, one per line, followed by `domain`, `search`,
    /// `sortlist` and `options`. Directives with no entries are omitted.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .nameservers()
            .iter()
            .map(|ns| format!("nameserver {ns}"))
            .collect();

        if self.items.iter().any(|i| matches!(i, ConfItem::Domain(_))) {
            lines.push(format!("domain {}", self.domain()));
        }
        push_joined(&mut lines, "search", &self.search_domains());
        push_joined(&mut lines, "sortlist", &self.sort_items());
        push_joined(&mut lines, "options", &self.options());
        lines
    }
}

fn push_joined<T: fmt::Display>(lines: &mut Vec<String>, directive: &str, entries: &[T]) {
    if entries.is_empty() {
        return;
    }
    let joined = entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!("{directive} {joined}"));
}

impl fmt::Display for ResolvConf {
    /// Writes the rendered lines, each terminated by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
