use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;
use yieldback::extract::{Arg, extract};
use yieldback::queue::{StageQueue, yield_through};
use yieldback::stage::Stage;
use yieldback::topic::run_with_topic;

fn setup_batch_256() -> Vec<i32> {
    (0..256).collect()
}

#[library_benchmark]
#[bench::with_setup(setup_batch_256())]
fn queue_fold_four_stages(batch: Vec<i32>) -> Vec<i32> {
    let batch = black_box(batch);
    let queue = StageQueue::new()
        .then(Stage::item_wise(|number: i32| [number.wrapping_add(1)]))
        .then(Stage::item_wise(|number: i32| (number % 2 == 0).then_some(number)))
        .then(Stage::item_wise(|number: i32| [number, number]))
        .then(Stage::list_wise(|mut batch: Vec<i32>| {
            batch.sort_unstable();
            batch
        }));
    black_box(queue.run(batch))
}

fn setup_mixed_args_64() -> Vec<Arg<i32>> {
    let mut args: Vec<Arg<i32>> = (0..60).map(Arg::Value).collect();
    args.extend(
        (0..4).map(|_| Arg::Stage(Stage::item_wise(|number: i32| [number.wrapping_mul(2)]))),
    );
    args
}

#[library_benchmark]
#[bench::with_setup(setup_mixed_args_64())]
fn extract_trailing_run(args: Vec<Arg<i32>>) -> usize {
    let args = black_box(args);
    let (queue, residual) = extract(args);
    black_box(queue.len() + residual.len())
}

#[library_benchmark]
#[bench::with_setup(setup_mixed_args_64())]
fn dispatch_end_to_end(args: Vec<Arg<i32>>) -> Vec<i32> {
    let args = black_box(args);
    let result = run_with_topic(
        |residual| residual.into_iter().filter_map(Arg::value).collect(),
        args,
    );
    black_box(result)
}

#[library_benchmark]
#[bench::with_setup(setup_batch_256())]
fn absent_queue_passthrough(batch: Vec<i32>) -> Vec<i32> {
    let batch = black_box(batch);
    black_box(yield_through(None, batch))
}

library_benchmark_group!(
    name = pipeline_group;
    benchmarks = queue_fold_four_stages, extract_trailing_run, dispatch_end_to_end,
                 absent_queue_passthrough
);

main!(library_benchmark_groups = pipeline_group);
