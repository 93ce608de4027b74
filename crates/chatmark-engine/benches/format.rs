use chatmark_engine::{FootnoteEntry, Tone, format_message};
use criterion::{Criterion, criterion_group, criterion_main};

const REPLY: &str = "\
## Centering in CSS\n\
Using flexbox is the usual answer. Set `display: flex` on the parent,\n\
then `justify-content: center` and `align-items: center`.\n\
- works for one child or many\n\
- no fixed sizes needed\n\
1. set up the container\n\
2. drop the content in\n\
> Older guides reach for absolute positioning instead.\n\
See [MDN](https://developer.mozilla.org/docs/Web/CSS/CSS_flexible_box_layout) for details^[MDN flexbox guide].\n\
```css\n\
.parent { display: flex; }\n\
```\n\
**That is *usually* all you need.**";

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    group.bench_function("whole_reply", |b| {
        b.iter(|| {
            let mut notes: Vec<FootnoteEntry> = Vec::new();
            let nodes = format_message(
                std::hint::black_box(REPLY),
                Tone::Assistant,
                Some(&mut notes),
            );
            std::hint::black_box((nodes, notes));
        });
    });

    // A streaming caller reformats the growing blob on every chunk; this
    // approximates that with word-sized arrival steps.
    group.bench_function("streamed_reformat", |b| {
        let cuts: Vec<usize> = REPLY
            .char_indices()
            .filter(|(_, ch)| ch.is_whitespace())
            .map(|(i, _)| i)
            .collect();
        b.iter(|| {
            for &cut in &cuts {
                let nodes = format_message(std::hint::black_box(&REPLY[..cut]), Tone::Assistant, None);
                std::hint::black_box(nodes);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
