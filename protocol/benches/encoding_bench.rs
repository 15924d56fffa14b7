// Encoding benchmarks for the MERIDIAN transaction wire format.
//
// Covers transaction assembly, signing-digest and transaction-hash
// computation, and signature-block encoding at several signature-set sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use meridian_protocol::transaction::types::{
    AccountAddress, Amount, CredentialIndex, Energy, KeyIndex, Nonce, Signature,
    TransactionExpiry,
};
use meridian_protocol::{
    assemble, signing_digest, transaction_hash, AccountTransaction, Payload, TransactionHeader,
    TransactionSignature,
};

fn bench_model() -> impl Fn(u32, usize, Energy) -> Energy {
    |sigs, size, base| Energy(base.0 + 100 * sigs as u64 + size as u64)
}

fn sample_tx() -> AccountTransaction {
    AccountTransaction::new(
        TransactionHeader {
            sender: AccountAddress::from_bytes([0x11; 32]),
            nonce: Nonce(42),
            expiry: TransactionExpiry::from_epoch_seconds(1_900_000_000),
        },
        Payload::Transfer {
            to: AccountAddress::from_bytes([0x22; 32]),
            amount: Amount(1_000_000),
        },
    )
}

fn signature_set(count: u8) -> TransactionSignature {
    let mut sigs = TransactionSignature::new();
    for idx in 0..count {
        sigs.insert(
            CredentialIndex(idx),
            KeyIndex(0),
            Signature::new(vec![idx; 64]),
        );
    }
    sigs
}

fn bench_assemble(c: &mut Criterion) {
    let tx = sample_tx();
    let sigs = signature_set(1);
    let model = bench_model();

    c.bench_function("encoding/assemble", |b| {
        b.iter(|| assemble(&tx, &sigs, &model).unwrap());
    });
}

fn bench_signing_digest(c: &mut Criterion) {
    let tx = sample_tx();
    let model = bench_model();

    c.bench_function("encoding/signing_digest", |b| {
        b.iter(|| signing_digest(&tx, &model).unwrap());
    });
}

fn bench_transaction_hash(c: &mut Criterion) {
    let tx = sample_tx();
    let sigs = signature_set(1);
    let model = bench_model();

    c.bench_function("encoding/transaction_hash", |b| {
        b.iter(|| transaction_hash(&tx, &sigs, &model).unwrap());
    });
}

fn bench_assemble_by_signature_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding/assemble_by_signatures");
    let tx = sample_tx();
    let model = bench_model();

    for count in [1u8, 10, 50, 200] {
        let sigs = signature_set(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &sigs, |b, sigs| {
            b.iter(|| assemble(&tx, sigs, &model).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_assemble,
    bench_signing_digest,
    bench_transaction_hash,
    bench_assemble_by_signature_count,
);
criterion_main!(benches);
