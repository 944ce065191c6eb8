use criterion::{Criterion, black_box, criterion_group, criterion_main};
use timecode::convert::{frames, rational, real_time, string};
use timecode::{
    Components, FrameCount, FrameRate, StringFormat, SubFramesBase, Timecode, TimecodeProperties,
    Validation,
};

fn benchmark_frames(c: &mut Criterion) {
    let properties = TimecodeProperties::new(FrameRate::Fps29_97Drop);
    let components = Components::new(0, 23, 59, 59, 29, 79);
    let fc = frames::frame_count(&components, &properties);

    // Components to frame count, drop-frame
    c.bench_function("frame_count_29_97_drop", |b| {
        b.iter(|| frames::frame_count(black_box(&components), black_box(&properties)))
    });

    // Frame count to components, drop-frame
    c.bench_function("components_29_97_drop", |b| {
        b.iter(|| frames::components(black_box(&fc), black_box(&properties)))
    });
}

fn benchmark_time_values(c: &mut Criterion) {
    let properties = TimecodeProperties::new(FrameRate::Fps23_976);
    let fc = FrameCount::split(1_234_567, 40, SubFramesBase::Max80SubFrames);

    c.bench_function("rational_value_23_976", |b| {
        b.iter(|| rational::rational_value(black_box(&fc), FrameRate::Fps23_976))
    });

    let fraction = rational::rational_value(&fc, FrameRate::Fps23_976);
    c.bench_function("rational_frame_count_23_976", |b| {
        b.iter(|| rational::frame_count(black_box(&fraction), black_box(&properties)))
    });

    c.bench_function("real_time_frame_count_23_976", |b| {
        b.iter(|| real_time::frame_count(black_box(51_482.3), black_box(&properties)))
    });
}

fn benchmark_strings(c: &mut Criterion) {
    let properties = TimecodeProperties::new(FrameRate::Fps59_94Drop);
    let components = Components::new(0, 12, 34, 56, 7, 8);

    c.bench_function("encode_string", |b| {
        b.iter(|| {
            string::encode(
                black_box(&components),
                black_box(&properties),
                StringFormat::WITH_SUB_FRAMES,
            )
        })
    });

    c.bench_function("decode_string", |b| {
        b.iter(|| string::decode(black_box("12:34:56;07.08")))
    });
}

fn benchmark_timecode(c: &mut Criterion) {
    let tc = Timecode::zero(FrameRate::Fps25);
    let one_hour = Components::hmsf(1, 0, 0, 0);

    // Add with wrap around the range
    c.bench_function("timecode_add_wrap", |b| {
        b.iter(|| tc.adding(black_box(one_hour), Validation::Wrap))
    });

    c.bench_function("timecode_converted", |b| {
        b.iter(|| tc.converted(black_box(FrameRate::Fps29_97Drop), Validation::Clamp))
    });
}

criterion_group!(
    benches,
    benchmark_frames,
    benchmark_time_values,
    benchmark_strings,
    benchmark_timecode
);
criterion_main!(benches);
