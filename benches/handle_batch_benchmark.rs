use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use ed25519_dalek::{Signer, SigningKey};
use scroogecoin_lib::{
    OutputIndex, PublicKey, Scroogecoin, Sha256, Signature, Transaction, TransactionHash,
    TransactionOutput, TxHandler, Utxo, UtxoPool,
};

const CHAIN_LENGTH: usize = 64;

fn create_pool(owner: &SigningKey) -> (UtxoPool, Utxo) {
    let genesis = Utxo::new(
        TransactionHash::new(Sha256::digest(b"genesis")),
        OutputIndex::new(0),
    );
    let mut pool = UtxoPool::new();
    pool.add(
        genesis,
        TransactionOutput::new(Scroogecoin::new(1_000), PublicKey::from(&owner.verifying_key())),
    );
    (pool, genesis)
}

// Each transaction spends the only output of the previous one.
fn create_chain(owner: &SigningKey, genesis: Utxo) -> Vec<Transaction> {
    let mut chain = Vec::with_capacity(CHAIN_LENGTH);
    let mut previous = genesis;
    for _ in 0..CHAIN_LENGTH {
        let mut transaction = Transaction::new(
            vec![],
            vec![TransactionOutput::new(
                Scroogecoin::new(1_000),
                PublicKey::from(&owner.verifying_key()),
            )],
        );
        transaction.add_input(previous);
        let message = transaction.raw_data_to_sign(0).unwrap();
        transaction
            .add_signature(0, Signature::from(&owner.sign(&message)))
            .unwrap();
        let hash = transaction.finalize().unwrap();
        previous = Utxo::new(hash, OutputIndex::new(0));
        chain.push(transaction);
    }
    chain
}

fn handle_batch_benchmark(c: &mut Criterion) {
    // Submitting the chain in reverse order makes every pass accept a single transaction,
    // which is the worst case for the fixed-point loop.
    let owner = SigningKey::from_bytes(&[1; 32]);
    let (pool, genesis) = create_pool(&owner);
    let mut reversed = create_chain(&owner, genesis);
    reversed.reverse();

    let mut group = c.benchmark_group("Batch processing");
    group.throughput(Throughput::Elements(CHAIN_LENGTH as u64));
    group.bench_function("handle_batch for a reversed chain of 64", |b| {
        b.iter_batched(
            || (TxHandler::new(&pool), reversed.clone()),
            |(mut handler, candidates)| {
                let accepted = handler.handle_batch(black_box(candidates));
                black_box(accepted);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, handle_batch_benchmark);

criterion_main!(benches);
