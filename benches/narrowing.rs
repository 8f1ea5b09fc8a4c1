use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordle_assistant::solver::{narrow, rank, starter_word};
use wordle_assistant::Clues;

/// Every five-letter word over a small alphabet, enough to resemble the size
/// of the real accepted-guess list.
fn generated_words() -> Vec<String> {
    const ALPHABET: &[u8] = b"aeinorst";
    let mut words = Vec::new();
    let mut idx = [0usize; 5];
    loop {
        words.push(idx.iter().map(|&i| ALPHABET[i] as char).collect());
        let mut pos = 0;
        loop {
            idx[pos] += 1;
            if idx[pos] < ALPHABET.len() {
                break;
            }
            idx[pos] = 0;
            pos += 1;
            if pos == idx.len() {
                return words;
            }
        }
    }
}

fn bench_narrow(c: &mut Criterion) {
    let words = generated_words();
    let guessed = vec!["crane".to_string()];
    let clues = Clues::new().with_green(1, 'r').with_yellow(2, 'a');
    c.bench_function("narrow", |b| {
        b.iter(|| narrow(black_box(&words), black_box(&clues), black_box(&guessed)))
    });
}

fn bench_rank(c: &mut Criterion) {
    let words = generated_words();
    let clues = Clues::new().with_green(0, 's');
    c.bench_function("rank", |b| {
        b.iter(|| rank(black_box(words.clone()), black_box(&clues)))
    });
}

fn bench_starter(c: &mut Criterion) {
    let words = generated_words();
    c.bench_function("starter_word", |b| {
        b.iter(|| starter_word(black_box(words.clone())))
    });
}

criterion_group!(benches, bench_narrow, bench_rank, bench_starter);
criterion_main!(benches);
