// Benchmarks for the weekly layout pipeline

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use clinic_scheduler::grid::{layout_week, TimeAxis};
use clinic_scheduler::models::appointment::Appointment;

fn busy_week(appointments_per_day: usize) -> Vec<Appointment> {
    let week_start = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
    let mut appointments = Vec::new();

    for day in 0..7 {
        let date = (week_start + chrono::Duration::days(day))
            .format("%Y-%m-%d")
            .to_string();
        for slot in 0..appointments_per_day {
            // Staggered 45-minute sessions so neighbours overlap.
            let start = 8 * 60 + (slot as i32) * 20;
            let end = start + 45;
            appointments.push(
                Appointment::new(
                    format!("a-{day}-{slot}"),
                    date.clone(),
                    format!("{:02}:{:02}", start / 60, start % 60),
                    format!("{:02}:{:02}", end / 60, end % 60),
                )
                .unwrap(),
            );
        }
    }

    appointments
}

fn bench_layout_week(c: &mut Criterion) {
    let axis = TimeAxis::new(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(), 8, 20).unwrap();

    let mut group = c.benchmark_group("layout_week");
    for &per_day in &[4usize, 16, 32] {
        let appointments = busy_week(per_day);
        group.bench_function(format!("{per_day}_per_day"), |b| {
            b.iter(|| layout_week(black_box(&appointments), black_box(&axis), 60.0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout_week);
criterion_main!(benches);
