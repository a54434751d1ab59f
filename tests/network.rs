use ip_range::{network, Address, AddressRange, AddressSet, Error, Network, ParseError};

#[test]
fn should_compute_mask() {
    assert_eq!(network::mask(0), 0x00000000);
    assert_eq!(network::mask(1), 0x80000000);
    assert_eq!(network::mask(8), 0xFF000000);
    assert_eq!(network::mask(16), 0xFFFF0000);
    assert_eq!(network::mask(24), 0xFFFFFF00);
    assert_eq!(network::mask(31), 0xFFFFFFFE);
    assert_eq!(network::mask(32), 0xFFFFFFFF);

    for prefix in 1..=32u8 {
        let mask = network::mask(prefix);
        assert_eq!(mask.leading_ones(), prefix as u32, "/{prefix} has invalid mask");
        assert_eq!(mask.count_ones(), prefix as u32, "/{prefix} has invalid mask");
    }
}

#[test]
fn should_reject_prefix_out_of_range() {
    let addr = Address::new(10, 0, 0, 0);
    assert_eq!(Network::new(addr, 0), Err(Error::PrefixLengthOutOfRange(0)));
    assert_eq!(Network::new(addr, 33), Err(Error::PrefixLengthOutOfRange(33)));
    assert_eq!(Network::new(addr, u8::MAX), Err(Error::PrefixLengthOutOfRange(u8::MAX)));
    assert_eq!(Error::PrefixLengthOutOfRange(33).to_string(), "Prefix length '33' is outside of allowed range 1..=32");
}

#[cfg_attr(miri, ignore)]
#[test]
fn should_verify_prefix_size() {
    let addr = Address::MAX;

    for prefix in 1..=32u8 {
        let network = Network::new(addr, prefix).expect("to create");
        let expected_size = 2u64.pow((32 - prefix) as _);
        assert_eq!(network.count(), expected_size, "/{prefix} has invalid size");
        assert_eq!(network.first().to_bits() as u64, (1u64 << 32) - expected_size, "/{prefix} has invalid first");
        assert_eq!(network.last(), Address::MAX, "/{prefix} has invalid last");
        assert!(network.contains(addr), "{addr} is not contained in network={network}");
        assert!(network.contains(network.first()));
        assert_eq!(network.get(0), Some(network.first()));
        assert_eq!(network.get((expected_size - 1) as u32), Some(Address::MAX));
        if expected_size <= u32::MAX as u64 {
            assert_eq!(network.get(expected_size as u32), None);
        }
        if prefix > 1 {
            assert!(!network.contains(network.first().decrement(1).expect("to decrement")));
        }
    }
}

#[test]
fn should_align_parsed_cidr() {
    let network = Network::parse_cidr("192.168.1.10/24").expect("to parse");
    assert_eq!(network.first(), Address::new(192, 168, 1, 0));
    assert_eq!(network.last(), Address::new(192, 168, 1, 255));
    assert_eq!(network.count(), 256);
    assert_eq!(network.original_address(), Address::new(192, 168, 1, 10));
    assert_eq!(network.prefix(), 24);
    assert_eq!(network.mask(), Address::new(255, 255, 255, 0));
    assert_eq!(network.hostmask(), Address::new(0, 0, 0, 255));
    assert!(!network.is_aligned());

    let normalized = network.normalized();
    assert!(normalized.is_aligned());
    assert_eq!(normalized.original_address(), Address::new(192, 168, 1, 0));
    assert_eq!(normalized.range(), network.range());
    assert_ne!(normalized, network);

    assert_eq!(network.to_string(), "192.168.1.0/24");
    assert_eq!(format!("{network:#}"), "192.168.1.10/24");
    assert_eq!("192.168.1.10/24".parse::<Network>(), Ok(network));
    assert_eq!(Network::try_parse_cidr("192.168.1.10/24"), Some(network));
}

#[test]
fn should_handle_small_block() {
    let network = Network::new(Address::new(10, 0, 0, 0), 30).expect("to create");
    assert_eq!(network.first(), Address::new(10, 0, 0, 0));
    assert_eq!(network.last(), Address::new(10, 0, 0, 3));
    assert_eq!(network.count(), 4);
    assert!(network.is_aligned());
    assert!(network.contains(Address::new(10, 0, 0, 3)));
    assert!(!network.contains(Address::new(10, 0, 0, 4)));
    assert!(network.iter().eq([
        Address::new(10, 0, 0, 0),
        Address::new(10, 0, 0, 1),
        Address::new(10, 0, 0, 2),
        Address::new(10, 0, 0, 3),
    ]));
    assert_eq!(network.get(4), None);
}

#[test]
fn should_handle_single_address() {
    let addr = Address::new(8, 8, 4, 4);
    let network = Network::new(addr, 32).expect("to create");
    assert_eq!(network, Network::new_single(addr));
    assert_eq!(network, Network::from(addr));
    assert_eq!(network.first(), addr);
    assert_eq!(network.last(), addr);
    assert_eq!(network.mask(), Address::MAX);
    assert_eq!(network.count(), 1);
    assert!(network.iter().eq([addr]));
    assert_eq!(network.to_string(), "8.8.4.4/32");
}

#[test]
fn should_handle_largest_block() {
    let network = Network::parse_cidr("200.1.2.3/1").expect("to parse");
    assert_eq!(network.first(), Address::new(128, 0, 0, 0));
    assert_eq!(network.last(), Address::MAX);
    assert_eq!(network.count(), 1 << 31);
    assert_eq!(network.iter().last(), Some(Address::MAX));
    assert_eq!(network.iter().size_hint(), (1 << 31, Some(1 << 31)));
}

#[test]
fn should_not_parse_cidr() {
    let inputs = [
        ("", ParseError::MissingAddress),
        ("/24", ParseError::MissingAddress),
        ("10.0.0.0", ParseError::MissingSlash),
        ("10.0.0.0/", ParseError::MissingPrefix),
        ("10.0.0.0/0", ParseError::PrefixOutOfRange(0)),
        ("10.0.0.0/33", ParseError::PrefixOutOfRange(33)),
        ("10.0.0.0/99999999999", ParseError::PrefixOutOfRange(u32::MAX)),
        ("10.0.0.0/00", ParseError::PrefixOutOfRange(0)),
        ("10.0.0.0/033", ParseError::PrefixOutOfRange(33)),
        ("10.0.0.0/2a", ParseError::UnexpectedCharacter('a', 10)),
        ("10.0.0.0/24/1", ParseError::UnexpectedCharacter('/', 11)),
        ("10.0.0.0/ 24", ParseError::UnexpectedCharacter(' ', 9)),
        ("10.0.0/24", ParseError::InvalidComponentCount(3)),
        ("10.0.0.256/24", ParseError::ComponentOverflow(3)),
        ("10.0.0.0./24", ParseError::EmptyComponent(4)),
    ];

    for (text, expected_error) in inputs {
        println!("Parse '{text}'");
        let error = Network::parse_cidr(text).expect_err("should fail");
        assert_eq!(error, expected_error);
        assert_eq!(Network::try_parse_cidr(text), None);
        assert_eq!(text.parse::<Network>(), Err(expected_error));
    }
}

#[test]
fn should_parse_cidr_with_leading_zeros() {
    let network = Network::parse_cidr("10.0.0.0/024").expect("to parse");
    assert_eq!(network.prefix(), 24);
    assert_eq!(network.to_string(), "10.0.0.0/24");

    let network = Network::parse_cidr("192.168.001.010/08").expect("to parse");
    assert_eq!(network.original_address(), Address::new(192, 168, 1, 10));
    assert_eq!(network.prefix(), 8);
    assert_eq!(network.first(), Address::new(192, 0, 0, 0));
}

#[test]
fn should_parse_network_with_optional_prefix() {
    let network = ip_range::parse_network("10.1.2.3").expect("to parse");
    assert_eq!(network, Network::new_single(Address::new(10, 1, 2, 3)));

    let network = ip_range::parse_network("10.1.2.3/8").expect("to parse");
    assert_eq!(network.first(), Address::new(10, 0, 0, 0));
    assert_eq!(network.original_address(), Address::new(10, 1, 2, 3));

    assert_eq!(ip_range::parse_network("10.1.2.3/0"), Err(ParseError::PrefixOutOfRange(0)));
    assert_eq!(ip_range::parse_ip("10.1.2.3/8"), Ok((Address::new(10, 1, 2, 3), Some(8))));
}

#[test]
fn should_compare_with_ranges() {
    let network = Network::parse_cidr("10.0.0.0/29").expect("to parse");
    let range = AddressRange::new(Address::new(10, 0, 0, 6), Address::new(10, 0, 0, 9)).expect("to create");
    let inner = AddressRange::new(Address::new(10, 0, 0, 1), Address::new(10, 0, 0, 6)).expect("to create");
    let sub = Network::parse_cidr("10.0.0.4/30").expect("to parse");

    assert!(network.overlaps(&range));
    assert!(range.overlaps(&network));
    assert!(!network.is_superset_of(&range));
    assert!(network.is_superset_of(&inner));
    assert!(inner.is_subset_of(&network));
    assert!(sub.is_subset_of(&network));
    assert!(network.is_superset_of(&sub));
    assert!(!network.is_subset_of(&sub));
    assert!(!sub.overlaps(&Network::parse_cidr("10.0.0.8/30").expect("to parse")));

    assert!(network.is_superset_of_sequence(sub.iter()));
    assert!(sub.is_subset_of_sequence(network));
}

#[test]
fn should_treat_sets_uniformly() {
    fn describe<S: AddressSet>(set: &S) -> (Address, Address, u64, bool) {
        (set.first(), set.last(), set.count(), set.contains(Address::new(172, 20, 1, 1)))
    }

    let network = Network::parse_cidr("172.16.0.0/12").expect("to parse");
    let range = network.range();
    assert_eq!(describe(&network), describe(&range));
    assert_eq!(describe(&network), (Address::new(172, 16, 0, 0), Address::new(172, 31, 255, 255), 1 << 20, true));
}
