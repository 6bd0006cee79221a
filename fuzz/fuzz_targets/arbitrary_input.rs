#![no_main]

use libfuzzer_sys::fuzz_target;

use somoan_affine::{AffineCipher, Decrypt, Encrypt, Error, Stream};

fuzz_target!(|data: &[u8]| {
    let Some((&key, rest)) = data.split_first() else {
        return;
    };

    // Any multiplier: invalid ones must fail cleanly, never panic
    let a = i64::from(key >> 3);
    let b = i64::from(key & 0x07);
    let cipher = match AffineCipher::somoan(a, b) {
        Ok(cipher) => cipher,
        Err(Error::NoInverse { .. }) => return,
        Err(err) => panic!("unexpected key error: {err}"),
    };

    // Streaming over raw bytes must agree with the one-shot API
    let mut encryptor = cipher.encryptor();
    let streamed = rest
        .chunks(3)
        .map(|chunk| encryptor.update(chunk))
        .collect::<Result<String, _>>()
        .and_then(|mut out| {
            out.push_str(&encryptor.finalize()?);
            Ok(out)
        });

    let one_shot = std::str::from_utf8(rest)
        .map_err(|_| ())
        .map(|text| cipher.encrypt(text));

    match (streamed, one_shot) {
        (Ok(streamed), Ok(Ok(ciphertext))) => {
            assert_eq!(streamed, ciphertext);
            let plaintext = cipher.decrypt(&ciphertext).unwrap();
            // case folds like the alphabet lookup ('\u{212A}' is a 'k')
            let original = std::str::from_utf8(rest).unwrap();
            assert_eq!(plaintext.to_lowercase(), original.to_lowercase());
        }
        (Err(streamed), Ok(Err(one_shot))) => assert_eq!(streamed, one_shot),
        // a bad symbol may come before the first invalid byte
        (Err(Error::InvalidUtf8 { .. } | Error::InvalidSymbol { .. }), Err(())) => {}
        (streamed, one_shot) => panic!("stream/one-shot disagree: {streamed:?} vs {one_shot:?}"),
    }
});
