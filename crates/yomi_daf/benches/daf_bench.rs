use criterion::{Criterion, black_box, criterion_group, criterion_main};
use yomi_daf::{count_special_days, daf_schedule, map_offset_to_daf, yerushalmi_daf_for_date};
use yomi_time::{ArithmeticCalendar, CivilDate};

fn daf_lookup_bench(c: &mut Criterion) {
    let cal = ArithmeticCalendar;
    let early = CivilDate::new(1981, 3, 1).expect("valid date");
    let late = CivilDate::new(2040, 3, 1).expect("valid date");

    let mut group = c.benchmark_group("daf_lookup");
    group.bench_function("first_cycle", |b| {
        b.iter(|| yerushalmi_daf_for_date(&cal, black_box(early)).expect("lookup should succeed"))
    });
    group.bench_function("fifteenth_cycle", |b| {
        b.iter(|| yerushalmi_daf_for_date(&cal, black_box(late)).expect("lookup should succeed"))
    });
    group.finish();
}

fn primitives_bench(c: &mut Criterion) {
    let cal = ArithmeticCalendar;
    let start = CivilDate::new(2022, 11, 14).expect("valid date");
    let end = CivilDate::new(2027, 2, 23).expect("valid date");

    let mut group = c.benchmark_group("daf_primitives");
    group.bench_function("count_special_days_cycle", |b| {
        b.iter(|| count_special_days(&cal, black_box(start), black_box(end)))
    });
    group.bench_function("map_offset_to_daf", |b| {
        b.iter(|| map_offset_to_daf(black_box(1426)))
    });
    group.finish();
}

fn schedule_bench(c: &mut Criterion) {
    let cal = ArithmeticCalendar;
    let start = CivilDate::new(2024, 1, 1).expect("valid date");

    let mut group = c.benchmark_group("daf_schedule");
    group.sample_size(20);
    group.bench_function("one_year", |b| {
        b.iter(|| daf_schedule(&cal, black_box(start), 365).expect("schedule should succeed"))
    });
    group.finish();
}

criterion_group!(benches, daf_lookup_bench, primitives_bench, schedule_bench);
criterion_main!(benches);
