#[path = "../common/mod.rs"]
mod common;

use passport_reader::protocol::{dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(0x02), 0xfe);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(0xD4, &[0x02]), 0x2a);
    assert_eq!(dcs(0xD5, &[0x15]), 0x16);
    assert_eq!(dcs(0x00, &[]), 0x00);
}
