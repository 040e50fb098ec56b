use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizdesk_core::model::{Options, Question};
use quizdesk_core::Quiz;

fn bench_questions_and_answers(c: &mut Criterion) {
    let mut group = c.benchmark_group("questions_and_answers");

    let small = generate_quiz(5);
    let medium = generate_quiz(50);
    let large = generate_quiz(500);

    group.bench_function("5_questions", |b| {
        b.iter(|| black_box(&small).questions_and_answers())
    });

    group.bench_function("50_questions", |b| {
        b.iter(|| black_box(&medium).questions_and_answers())
    });

    group.bench_function("500_questions", |b| {
        b.iter(|| black_box(&large).questions_and_answers())
    });

    group.finish();
}

fn bench_bank_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_parsing");
    let toml = generate_bank_toml(100);

    group.bench_function("100_questions", |b| {
        b.iter(|| {
            quizdesk_core::parser::parse_bank_str(
                black_box(&toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.finish();
}

fn generate_quiz(n: usize) -> Quiz {
    let mut quiz = Quiz::new("Bench");
    for i in 0..n {
        let question = if i % 3 == 0 {
            Question::multiple_choice(
                format!("Which option is {i}?"),
                "C",
                Options::new("first", "second", "third", "fourth"),
            )
        } else {
            Question::open_ended(format!("Explain topic {i}"), format!("Topic {i} is ..."))
        };
        // Fresh ids, so pushes never collide
        let _ = quiz.push_question(question);
    }
    quiz
}

fn generate_bank_toml(n: usize) -> String {
    let mut s = String::from("[bank]\nname = \"Bench\"\n");
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[questions]]
prompt = "Question {i}"
answer = "B"
type = "mcq"
options = ["a{i}", "b{i}", "c{i}", "d{i}"]
"#
        ));
    }
    s
}

criterion_group!(benches, bench_questions_and_answers, bench_bank_parsing);
criterion_main!(benches);
