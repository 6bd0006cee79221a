#![no_main]

use libfuzzer_sys::fuzz_target;

use somoan_affine::{decrypt, encrypt, Alphabet};

const UNITS: [i64; 6] = [1, 5, 7, 11, 13, 17];

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let a = UNITS[data[0] as usize % UNITS.len()];
    let b = data[1] as i8 as i64;

    // Map the remaining bytes onto lowercase symbols and whitespace
    let alphabet = Alphabet::somoan();
    let message: String = data[2..]
        .iter()
        .map(|&byte| match byte % 20 {
            18 => '\t',
            19 => '\n',
            i => alphabet.index_to_symbol(i as usize).unwrap(),
        })
        .collect();

    let ciphertext = encrypt(&message, a, b).unwrap();
    let plaintext = decrypt(&ciphertext, a, b).unwrap();

    assert_eq!(
        message, plaintext,
        "Roundtrip mismatch!\nKey: ({a}, {b})\nCiphertext: {ciphertext:?}"
    );
});
