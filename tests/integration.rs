//! Integration tests for `resolvconf`.

use resolvconf::{
    ConfItem, Domain, Nameserver, ResolvConf, ResolvConfError, ResolvConfWriter, ResolvOption,
    SearchDomain, SortItem, WriterConfig, option::VOCABULARY, parse_option,
};
use std::net::IpAddr;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

#[test]
fn full_build_preserves_order() {
    let mut conf = ResolvConf::new();

    conf.add(Nameserver::new(ip("2001:db8::53"))).unwrap();
    conf.add(SearchDomain::new("dev.example")).unwrap();
    conf.add(Nameserver::new(ip("192.0.2.53"))).unwrap();
    conf.add(SearchDomain::new("example")).unwrap();
    conf.add(Domain::new("dev.example")).unwrap();

    let mut attempts = ResolvOption::new("attempts").unwrap();
    attempts.set(3);
    conf.add(attempts).unwrap();

    assert_eq!(
        conf.nameservers(),
        vec![
            Nameserver::new(ip("2001:db8::53")),
            Nameserver::new(ip("192.0.2.53"))
        ]
    );
    assert_eq!(
        conf.search_domains(),
        vec![SearchDomain::new("dev.example"), SearchDomain::new("example")]
    );
    assert_eq!(conf.domain().name, "dev.example");
    assert_eq!(conf.options()[0].get(), 3);

    assert_eq!(
        conf.render_lines(),
        vec![
            "nameserver 2001:db8::53",
            "nameserver 192.0.2.53",
            "domain dev.example",
            "search dev.example example",
            "options attempts:3",
        ]
    );
}

#[test]
fn rejected_add_leaves_conf_unchanged() {
    let mut conf = ResolvConf::new();
    for last in ["1", "2", "3"] {
        conf.add(Nameserver::new(ip(&format!("10.0.0.{last}")))).unwrap();
    }
    let before = conf.items().to_vec();

    let err = conf.add(Nameserver::new(ip("10.0.0.4"))).unwrap_err();
    assert!(err.is_capacity_exceeded());
    assert_eq!(err.to_string(), "too many nameserver entries, max is 3");
    assert_eq!(conf.items(), before.as_slice());
}

#[test]
fn domain_replaced_in_place() {
    let mut conf = ResolvConf::new();
    conf.add(Domain::new("a.com")).unwrap();
    conf.add(Domain::new("b.com")).unwrap();

    assert_eq!(conf.domain(), Domain::new("b.com"));
    let domains = conf
        .items()
        .iter()
        .filter(|i| matches!(i, ConfItem::Domain(_)))
        .count();
    assert_eq!(domains, 1);
}

#[test]
fn sortlist_duplicate_ignores_netmask() {
    let mut conf = ResolvConf::new();
    conf.add(SortItem::new(ip("172.16.0.0")).with_netmask(ip("255.240.0.0")))
        .unwrap();

    let err = conf
        .add(SortItem::new(ip("172.16.0.0")).with_netmask(ip("255.255.0.0")))
        .unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(
        err.to_string(),
        "sortlist 172.16.0.0/255.255.0.0 already exists in conf"
    );
}

#[test]
fn eleventh_sort_item_rejected() {
    let mut conf = ResolvConf::new();
    for i in 0..10 {
        conf.add(SortItem::new(ip(&format!("192.168.{i}.0")))).unwrap();
    }
    assert!(
        conf.add(SortItem::new(ip("192.168.10.0")))
            .unwrap_err()
            .is_capacity_exceeded()
    );
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn ndots_negative_values() {
    let mut ndots = ResolvOption::new("ndots").unwrap();
    ndots.set(5).set(-1);
    assert_eq!(ndots.get(), 5);

    let mut conf = ResolvConf::new();
    let err = conf
        .add(ResolvOption::valued("ndots", -1).unwrap())
        .unwrap_err();
    assert!(matches!(err, ResolvConfError::InvalidValue { .. }));
    assert!(conf.is_empty());

    conf.add(ndots).unwrap();
    assert_eq!(conf.render_lines(), vec!["options ndots:5"]);
}

#[test]
fn unknown_option_never_constructed() {
    assert!(matches!(
        ResolvOption::new("bogus-type"),
        Err(ResolvConfError::UnknownOption(_))
    ));
}

#[test]
fn vocabulary_round_trips_through_codec() {
    for &(tag, _) in VOCABULARY {
        let mut opt = ResolvOption::new(tag).unwrap();
        opt.set(7);
        let (kind, value) = parse_option(&opt.to_string()).unwrap();
        assert_eq!(kind, opt.kind);
        if let Some(value) = value {
            assert_eq!(value, opt.get());
        }
    }
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

#[test]
fn write_to_tempdir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resolv.conf");

    let mut conf = ResolvConf::new();
    conf.add(Nameserver::new(ip("127.0.0.53"))).unwrap();
    conf.add(ResolvOption::new("edns0").unwrap()).unwrap();
    conf.add(ResolvOption::new("use-vc").unwrap()).unwrap();

    let writer = ResolvConfWriter::new(WriterConfig::new(&path).with_header("# test"));
    writer.write(&conf).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# test\nnameserver 127.0.0.53\noptions edns0 use-vc\n"
    );
}
