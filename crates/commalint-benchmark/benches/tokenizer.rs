use codspeed_criterion_compat::{
    Criterion, Throughput, black_box, criterion_group, criterion_main,
};

static SOURCE: &str = "
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
call(a ,b, c , d)[ , x] = { key: 'value , with comma', other: [1,2 ,3] }; // a, b
";

static COMMENTS: &str = "
/* a block comment, with commas , in it */ x = <>markup , text</>; // trailing, comment
/* a block comment, with commas , in it */ x = <>markup , text</>; // trailing, comment
/* a block comment, with commas , in it */ x = <>markup , text</>; // trailing, comment
/* a block comment, with commas , in it */ x = <>markup , text</>; // trailing, comment
/* a block comment, with commas , in it */ x = <>markup , text</>; // trailing, comment
";

static CANDIDATES: [(&str, &str); 2] = [("separators", SOURCE), ("comments_and_markup", COMMENTS)];

fn iterate(s: &str) {
    use commalint_tokenizer::{SyntaxKind, Tokenizer};

    let mut tokenizer = Tokenizer::new(s);

    loop {
        let lexeme = tokenizer.next_token();

        if lexeme.kind == SyntaxKind::EOF {
            break;
        }

        black_box(lexeme);
    }
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for (name, source) in CANDIDATES {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| iterate(s)));
    }

    group.finish();
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
