use std::thread;

use ip_range::{Address, AddressRange, Addresses, Network, Networks};

fn assert_shareable<T: Send + Sync>() {}

fn assert_value<T: Send + Sync + Copy>() {}

#[test]
fn should_share_values_across_threads() {
    assert_value::<Address>();
    assert_value::<AddressRange>();
    assert_value::<Network>();
    assert_shareable::<Addresses>();
    assert_shareable::<Networks>();
}

#[test]
fn should_enumerate_same_range_from_multiple_threads() {
    let range = AddressRange::from_first_count(Address::new(10, 0, 0, 0), 4096).expect("to create");

    let (ascending, descending) = thread::scope(|scope| {
        let ascending = scope.spawn(|| range.iter().map(|addr| addr.to_bits() as u64).sum::<u64>());
        let descending = scope.spawn(|| range.iter().rev().map(|addr| addr.to_bits() as u64).sum::<u64>());
        (ascending.join().expect("to join"), descending.join().expect("to join"))
    });

    let first = range.first().to_bits() as u64;
    let expected = (first..first + range.count()).sum::<u64>();
    println!("sum={expected}");
    assert_eq!(ascending, expected);
    assert_eq!(descending, expected);
    assert_eq!(range.iter().count() as u64, range.count());
}
