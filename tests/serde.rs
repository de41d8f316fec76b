#![cfg(feature = "serde")]
use smbus_pec::*;

#[test]
fn serialize_pec() {
    let pec = Pec::of(&hex::decode("B407B5D23A").expect("Can't decode frame"));
    let json = serde_json::to_string(&pec).expect("Can't serialize pec to json");
    assert_eq!(json, "48");

    let back: Pec = serde_json::from_str(&json).expect("Can't deserialize pec from json");
    assert_eq!(back, Pec(0x30));
}

#[test]
fn reject_out_of_range() {
    assert!(serde_json::from_str::<Pec>("256").is_err());
}
