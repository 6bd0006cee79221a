// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive encrypt-then-decrypt loop.
//!
//! Prompts for a message and the two keys, prints the ciphertext and the
//! recovered plaintext, and asks again until a round trip succeeds.

use std::env;
use std::io::{self, BufRead, Write};

use somoan_affine::{AffineCipher, Alphabet, Decrypt, Encrypt, Error};

fn fatal(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_help() {
    println!("Usage: somoan [--letters-only]");
    println!("  --letters-only  use the 17-letter alphabet; spaces are copied unchanged");
    println!("  --help          show this message");
}

/// Print `label` and read one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt_key(input: &mut impl BufRead, label: &str) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = prompt(input, label)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Error: '{}' is not an integer.", line.trim()),
        }
    }
}

fn report(err: &Error, alphabet: &Alphabet) {
    match err {
        Error::NoInverse { modulus, .. } => {
            println!("Error: Invalid key!");
            println!("The key 'a' must be coprime with {modulus} (gcd(a, {modulus}) = 1).");
            println!("Please enter a different key (a).");
        }
        Error::InvalidSymbol { symbol, .. } => {
            let letters: Vec<String> = alphabet
                .symbols()
                .iter()
                .filter(|s| **s != ' ')
                .map(|s| s.to_string())
                .collect();
            println!("Error: The character '{symbol}' is not in the Somoan Alphabet.");
            println!(
                "Please enter a message containing only Somoan alphabet letters ({}) and spaces.",
                letters.join(", ")
            );
        }
        other => {
            println!("Error: {other}");
            println!("Please try again with correct values.");
        }
    }
    println!();
}

fn run(alphabet: Alphabet) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(message) = prompt(&mut input, "Enter the message to encrypt: ")? else {
            return Ok(());
        };
        let Some(a) = prompt_key(&mut input, "Enter the key (a): ")? else {
            return Ok(());
        };
        let Some(b) = prompt_key(&mut input, "Enter the key (b): ")? else {
            return Ok(());
        };

        let result = AffineCipher::new(alphabet.clone(), a, b).and_then(|cipher| {
            let ciphertext = cipher.encrypt(&message)?;
            println!("Encrypted message: {ciphertext}");
            let plaintext = cipher.decrypt(&ciphertext)?;
            println!("Decrypted message: {plaintext}");
            Ok(())
        });

        match result {
            Ok(()) => return Ok(()),
            Err(err) => report(&err, &alphabet),
        }
    }
}

fn main() {
    let mut alphabet = Alphabet::somoan();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--letters-only" => alphabet = Alphabet::somoan_letters(),
            "-h" | "--help" => {
                print_help();
                return;
            }
            other => fatal(&format!("unknown argument: {other} (try --help)")),
        }
    }

    if let Err(err) = run(alphabet) {
        fatal(&format!("I/O error: {err}"));
    }
}
