//! Terminal walkthrough of the MERIDIAN transaction encoding lifecycle.
//!
//! Builds a transfer, computes the signing digest, signs it with a freshly
//! generated Ed25519 key, attaches the signature, assembles the wire bytes,
//! derives the transaction hash, and wraps the result in the submission
//! envelope — printing each intermediate artifact along the way.
//!
//! Run with:
//!   cargo run --example demo

use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

use meridian_protocol::config::DEFAULT_EXPIRY_WINDOW;
use meridian_protocol::transaction::types::{
    AccountAddress, Amount, Energy, Memo, Nonce, Signature, TransactionExpiry,
};
use meridian_protocol::{
    assemble, encode_for_submission, signing_digest, transaction_hash, AccountTransaction,
    Payload, TransactionHeader, TransactionSignature,
};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn section(num: u32, title: &str) {
    println!();
    println!("{BOLD}{CYAN}===[ Step {num} ]==========================================={RESET}");
    println!("{BOLD}{WHITE}  {title}{RESET}");
}

fn success(text: &str) {
    println!("{GREEN}  [OK] {text}{RESET}");
}

fn info(label: &str, value: &str) {
    println!("{WHITE}  {BOLD}{label}:{RESET} {YELLOW}{value}{RESET}");
}

fn hexdump(label: &str, bytes: &[u8]) {
    println!("{WHITE}  {BOLD}{label}{RESET} {DIM}({} bytes){RESET}", bytes.len());
    for chunk in bytes.chunks(24) {
        println!("{DIM}    {}{RESET}", hex::encode(chunk));
    }
}

// ---------------------------------------------------------------------------
// Devnet cost model
// ---------------------------------------------------------------------------

/// Placeholder devnet coefficients: base cost plus 100 energy per signature
/// plus 1 per payload byte. Mainnet embedders source the real model from the
/// protocol specification.
fn devnet_model() -> impl Fn(u32, usize, Energy) -> Energy {
    |sigs, size, base| Energy(base.0 + 100 * sigs as u64 + size as u64)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!();
    println!("{BOLD}{CYAN}  MERIDIAN — transaction encoding walkthrough{RESET}");

    let model = devnet_model();

    // -----------------------------------------------------------------
    section(1, "Build the transaction");
    // -----------------------------------------------------------------

    let signing_key = SigningKey::generate(&mut OsRng);
    let sender = AccountAddress::from_bytes(signing_key.verifying_key().to_bytes());
    let receiver = AccountAddress::from_bytes([0x42; 32]);

    let tx = AccountTransaction::new(
        TransactionHeader {
            sender,
            nonce: Nonce::first(),
            expiry: TransactionExpiry::after(DEFAULT_EXPIRY_WINDOW),
        },
        Payload::TransferWithMemo {
            to: receiver,
            memo: Memo::new(b"demo transfer".to_vec()),
            amount: Amount(1_500_000),
        },
    );

    info("sender", &tx.header.sender.to_hex());
    info("receiver", &receiver.to_hex());
    info("nonce", &tx.header.nonce.to_string());
    info("expiry", &tx.header.expiry.to_string());
    info("type", &tx.payload.transaction_type().to_string());
    success("transaction built");

    // -----------------------------------------------------------------
    section(2, "Compute the signing digest");
    // -----------------------------------------------------------------

    let digest = signing_digest(&tx, &model).expect("encodable transaction");
    info("signing digest", &digest.to_hex());
    success("digest covers header ++ type tag ++ payload, nothing else");

    // -----------------------------------------------------------------
    section(3, "Sign and attach");
    // -----------------------------------------------------------------

    let dalek_sig = signing_key.sign(digest.as_bytes());
    let sigs = TransactionSignature::single(Signature::from(dalek_sig.to_bytes()));
    info("signatures", &sigs.signature_count().to_string());
    success("Ed25519 signature attached at credential 0, key 0");

    // -----------------------------------------------------------------
    section(4, "Assemble and hash");
    // -----------------------------------------------------------------

    let assembled = assemble(&tx, &sigs, &model).expect("encodable transaction");
    hexdump("assembled bytes", &assembled);

    let hash = transaction_hash(&tx, &sigs, &model).expect("encodable transaction");
    info("transaction hash", &hash.to_hex());
    success("hash is the network-wide lookup key for this transaction");

    // -----------------------------------------------------------------
    section(5, "Wrap for submission");
    // -----------------------------------------------------------------

    let envelope = encode_for_submission(&tx, &sigs, &model).expect("encodable transaction");
    hexdump("submission envelope", &envelope);
    success("version byte 0 prefixed; hand these bytes to the transport");
    println!();
}
