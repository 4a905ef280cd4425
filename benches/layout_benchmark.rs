//! Benchmarks for resume-layout performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks lay out synthetic resumes of increasing length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resume_layout::layout::{render, render_batch, wrap_text, PageConfig};
use resume_layout::model::{ExperienceEntry, PersonalInfo, ResumeDocument, SkillsBlock};
use resume_layout::render::{to_pdf, ExportOptions};

/// Creates a synthetic resume with the given number of experience entries.
fn create_test_resume(entries: usize) -> ResumeDocument {
    let mut doc = ResumeDocument::new()
        .with_personal_info(PersonalInfo {
            full_name: "Benchmark Candidate".into(),
            email: "bench@example.com".into(),
            phone: "555-0100".into(),
            summary: "Engineer with a long history of shipping software. ".repeat(6),
            ..Default::default()
        })
        .with_skills(SkillsBlock {
            technical: "Rust, Go, C, SQL".into(),
            tools: "Git, Docker, Kubernetes".into(),
            ..Default::default()
        });

    for i in 0..entries {
        doc.add_experience(
            ExperienceEntry::new(format!("Company {}", i), "Senior Engineer")
                .with_location("Remote")
                .with_dates("2015-01", "2018-06")
                .with_responsibilities(
                    "Led the redesign of the ingestion pipeline across several teams\n\
                     Cut p99 latency in half by moving hot paths to Rust\n\
                     Mentored new engineers",
                ),
        );
    }
    doc
}

/// Benchmark layout at various document sizes.
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let config = PageConfig::a4();

    for entries in [1, 10, 50].iter() {
        let doc = create_test_resume(*entries);

        group.bench_function(format!("{}_entries", entries), |b| {
            b.iter(|| render(black_box(&doc), &config).unwrap());
        });
    }

    group.finish();
}

/// Benchmark word wrapping of a long paragraph.
fn bench_wrap(c: &mut Criterion) {
    let text = "lorem ipsum dolor sit amet ".repeat(40);

    c.bench_function("wrap_text", |b| {
        b.iter(|| wrap_text(black_box(&text), 300.0, |s| s.len() as f32 * 5.0));
    });
}

/// Benchmark PDF writing.
fn bench_pdf(c: &mut Criterion) {
    let pages = render(&create_test_resume(20), &PageConfig::letter()).unwrap();
    let options = ExportOptions::default();

    c.bench_function("to_pdf", |b| {
        b.iter(|| to_pdf(black_box(&pages), &options).unwrap());
    });
}

/// Benchmark parallel batch layout.
fn bench_batch(c: &mut Criterion) {
    let docs: Vec<_> = (0..16).map(|_| create_test_resume(10)).collect();
    let config = PageConfig::a4();

    c.bench_function("render_batch_16", |b| {
        b.iter(|| render_batch(black_box(&docs), &config).unwrap());
    });
}

criterion_group!(benches, bench_layout, bench_wrap, bench_pdf, bench_batch);
criterion_main!(benches);
