use word_bloom::{Filter, HashDerivation, WordBloomFilter};

const SAMPLE: f64 = 100_000.0;

fn rates(derivation: HashDerivation, inserted: u64) -> (f64, f64) {
    let bf = WordBloomFilter::with_derivation(200, 7, derivation).unwrap();
    (
        bf.false_positive_probability(inserted),
        bf.false_positive_probability_estimate(inserted),
    )
}

#[test]
fn repeated_hashes_exceed_closed_form() {
    // all seven hashes hit the same bit, so the filter behaves like k = 1
    let (computed, simulated) = rates(HashDerivation::Repeated, 1500);
    assert_eq!((simulated * SAMPLE).round() as u64, 12_268);
    assert!(
        simulated > 5.0 * computed,
        "computed {computed}, simulated {simulated}"
    );
}

#[test]
fn repeated_hashes_match_single_hash_model() {
    let (_, simulated) = rates(HashDerivation::Repeated, 500);
    assert_eq!((simulated * SAMPLE).round() as u64, 4_328);

    let single = WordBloomFilter::new(200, 1).unwrap();
    let expected = single.false_positive_probability(500);
    assert!(
        simulated / expected < 1.5 && expected / simulated < 1.5,
        "expected {expected}, simulated {simulated}"
    );
}

#[test]
fn indexed_hashes_follow_closed_form() {
    let (computed, simulated) = rates(HashDerivation::Indexed, 1500);
    assert_eq!((simulated * SAMPLE).round() as u64, 2_206);
    assert!(
        simulated / computed < 2.0 && computed / simulated < 2.0,
        "computed {computed}, simulated {simulated}"
    );
}

#[test]
fn xxh3_hashes_follow_closed_form() {
    for inserted in [1500, 3000, 5000] {
        let (computed, simulated) = rates(HashDerivation::Xxh3Seeded, inserted);
        assert!(
            simulated / computed < 1.5 && computed / simulated < 1.5,
            "{inserted}: computed {computed}, simulated {simulated}"
        );
    }
}

#[test]
fn estimate_uses_filter_parameters() {
    let small = WordBloomFilter::new(1, 1).unwrap();
    let large = WordBloomFilter::new(1000, 1).unwrap();
    let crowded = small.false_positive_probability_estimate(200);
    let sparse = large.false_positive_probability_estimate(200);
    assert!(crowded > sparse, "crowded {crowded}, sparse {sparse}");
}
