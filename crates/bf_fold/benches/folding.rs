use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

use bf_fold::fold;

pub fn beam_folding(c: &mut Criterion) {
    let mut group = c.benchmark_group("BeamFold");
    //group.measurement_time(std::time::Duration::from_secs(50)); // increase from default 5s

    // tRNA-phe from yeast, 76 nt
    let trna = "GCGGAUUUAGCUCAGUUGGGAGAGCGCCAGACUGAAGAUCUGGAGGUCCUGUGUUCGAUCCACAGAAUUCGCACCA";

    group.bench_function("Fold tRNA, beam 100.", |b| {
        b.iter(|| {
            let _ = fold(trna, 100);
        });
    });

    group.bench_function("Fold tRNA, exhaustive.", |b| {
        b.iter(|| {
            let _ = fold(trna, 0);
        });
    });
}

criterion_group!(benches, beam_folding);
criterion_main!(benches);
