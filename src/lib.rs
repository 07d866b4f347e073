//! # resolvconf
//!
//! Build a validated `resolv.conf` in memory.
//!
//! A [`ResolvConf`] collects nameservers, a domain, a search list, a sort list
//! and options, rejecting entries that would break the file format's limits:
//!
//! - at most 3 nameservers and at most 10 sortlist pairs;
//! - no duplicate nameservers, search domains, sortlist addresses or option
//!   types;
//! - a single `domain`, where adding a second one replaces the first;
//! - options restricted to the resolver's known vocabulary.
//!
//! Accepted entries keep their insertion order.
//!
//! ## Quick start
//!
//! ```
//! use resolvconf::{Nameserver, ResolvConf, ResolvOption, SortItem};
//!
//! let mut conf = ResolvConf::new();
//! conf.add(Nameserver::new("192.0.2.1".parse().unwrap()))?;
//! conf.add(Nameserver::new("192.0.2.2".parse().unwrap()))?;
//! conf.add(
//!     SortItem::new("130.155.160.0".parse().unwrap())
//!         .with_netmask("255.255.240.0".parse().unwrap()),
//! )?;
//! conf.add(ResolvOption::new("rotate")?)?;
//!
//! // Duplicates are rejected.
//! assert!(conf.add(Nameserver::new("192.0.2.1".parse().unwrap())).is_err());
//!
//! assert_eq!(
//!     conf.to_string(),
//!     "nameserver 192.0.2.1\n\
//!      nameserver 192.0.2.2\n\
//!      sortlist 130.155.160.0/255.255.240.0\n\
//!      options rotate\n"
//! );
//! # Ok::<(), resolvconf::ResolvConfError>(())
//! ```
//!
//! ## Writing
//!
//! [`ResolvConfWriter`] writes the rendered file, with an optional header
//! comment, to the path given in its [`WriterConfig`]:
//!
//! ```rust,ignore
//! let writer = ResolvConfWriter::new(WriterConfig::new("/etc/resolv.conf"));
//! writer.write(&conf)?;
//! ```
//!
//! Writing to `/etc/resolv.conf` normally requires root. The caller is
//! responsible for privilege elevation.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod conf;
pub mod config;
pub mod error;
pub mod item;
pub mod option;
pub mod writer;

pub use conf::ResolvConf;
pub use config::WriterConfig;
pub use error::{ResolvConfError, Result};
pub use item::{ConfItem, Domain, MAX_NAMESERVERS, MAX_SORTLIST, Nameserver, SearchDomain, SortItem};
pub use option::{OptionArity, ResolvOption, parse_option};
pub use writer::ResolvConfWriter;
