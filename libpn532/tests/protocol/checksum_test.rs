use libpn532::protocol::{dcs, lcs};
use proptest::prelude::*;

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(3), 0xfd);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(&[0xd4, 0x02]), 0x2a);
    assert_eq!(dcs(&[]), 0x00);
}

proptest! {
    #[test]
    fn checksums_sum_to_zero(len in any::<u8>(), data in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(len.wrapping_add(lcs(len)), 0);
        let total = data.iter().fold(dcs(&data), |acc, b| acc.wrapping_add(*b));
        prop_assert_eq!(total, 0);
    }
}
