use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use zhopkit_processor::{parse_motion, HopPipeline};
use zhopkit_settings::HopSettings;

/// Layered program alternating extrusion segments with travel runs
fn synthetic_program(layers: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut extruded = 0.0;
    for layer in 0..layers {
        let z = 0.2 + layer as f64 * 0.2;
        lines.push(format!(";LAYER:{layer}\n"));
        lines.push(format!("G1 Z{z:.1} F3000\n"));
        for segment in 0..50 {
            let x = (segment % 10) as f64 * 12.5;
            let y = (segment / 10) as f64 * 8.0;
            for step in 0..6 {
                extruded += 0.05;
                lines.push(format!(
                    "G1 X{:.3} Y{:.3} E{extruded:.5} F1800\n",
                    x + step as f64,
                    y + 0.5 * step as f64
                ));
            }
            lines.push(format!("G1 X{:.3} Y{:.3} F9000\n", x + 20.0, y + 3.0));
            if segment % 3 == 0 {
                lines.push(format!("G1 X{:.3} Y{:.3}\n", x + 24.0, y + 5.0));
            }
        }
    }
    lines
}

fn bench_parse_motion(c: &mut Criterion) {
    c.bench_function("parse_motion", |b| {
        b.iter(|| parse_motion(black_box("G1 X123.456 Y78.9 Z0.6 F9000\n")))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("hop_pipeline");
    for layers in [10, 100] {
        let program = synthetic_program(layers);
        group.bench_with_input(BenchmarkId::from_parameter(layers), &program, |b, program| {
            b.iter(|| HopPipeline::new(HopSettings::default()).process(black_box(program)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_motion, bench_pipeline);
criterion_main!(benches);
