use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ulisp::Reader;

fn reader_benchmark(c: &mut Criterion) {
    let source = r#"
        ; factorial
        (define (fact n)
          (if (<= n 1)
              1
              (* n (fact (- n 1)))))
        (display "fact 10 =\t" (fact 10) #t 2.5e+1 '(a b c))
    "#;

    c.bench_function("tokenize simple program", |b| {
        b.iter(|| Reader::new(black_box(source)).tokens().unwrap())
    });

    let large = source.repeat(200);
    c.bench_function("tokenize large program", |b| {
        b.iter(|| Reader::new(black_box(&large)).tokens().unwrap())
    });
}

criterion_group!(benches, reader_benchmark);
criterion_main!(benches);
