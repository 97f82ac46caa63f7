use rand::Rng;

use priority_heap::{FloatOrder, HeapBuilder, HeapEngine, HeapError, HeapKind, KeyOrder};

#[derive(Debug, Clone)]
struct Task {
    name: String,
    priority: u32,
}

pub fn task_queue_example() -> Result<(), HeapError> {
    let mut rng = rand::thread_rng();
    let tasks: Vec<Task> = vec!["compile", "test", "lint", "review", "deploy"]
        .into_iter()
        .map(|name| Task {
            name: String::from(name),
            priority: rng.gen_range(0, 10),
        })
        .collect();
    let mut queue = HeapBuilder::new()
        .max()
        .ordering(KeyOrder(|task: &Task| task.priority))
        .elements(tasks)
        .build()?;
    // an urgent task jumps the queue
    queue.add(Task {
        name: String::from("hotfix"),
        priority: 10,
    });
    println!("next up: {}", queue.peek()?.name);
    while let Some(task) = queue.try_extract() {
        println!("{} (priority {})", task.name, task.priority);
    }
    Ok(())
}

pub fn latency_example() {
    let mut rng = rand::thread_rng();
    let mut latencies: Vec<f64> = (0..8).map(|_| rng.gen::<f64>() * 100.0).collect();
    latencies.push(std::f64::NAN);
    let heap = HeapEngine::new(&latencies, HeapKind::Max, FloatOrder);
    // NaN ranks lowest, so it comes last
    for latency in heap.sorted() {
        println!("{:.2}ms", latency);
    }
}

pub fn main() {
    if let Err(err) = task_queue_example() {
        println!("{}", err);
    }
    latency_example();
}
