use smbus_pec::Pec;

fn main() {
    // Read word from RAM 0x07 of device 0x5A, device answered 0x3AD2
    let read = [0xB4, 0x07, 0xB5, 0xD2, 0x3A];
    let pec = Pec::of(&read);
    println!("read 0x3ad2 {} pec: {pec}", hex::encode(read));

    // Write word 0xC807 to EEPROM 0x02 of device 0x5A
    let write = [0xB4, 0x22, 0x07, 0xC8];
    let pec = Pec::of(&write);
    println!("write 0xc807 {} pec: {pec}", hex::encode(write));
}
