use job::Job;
use schedule::{Key, Timeline};

/// Order jobs by a key; jobs with equal keys keep their input order.
pub fn order(jobs: &[Job], key: Key) -> Vec<usize> {
    let mut order = (0..jobs.len()).collect::<Vec<_>>();
    order.sort_by_key(|&i| key.of(&jobs[i]));
    order
}

/// Run jobs to completion one after another in the order of a key.
///
/// The server idles whenever the next job in the order has not arrived yet, so
/// no job starts before its arrival.
pub fn run(jobs: &mut [Job], key: Key) -> Timeline {
    let order = order(jobs, key);
    let mut timeline = Timeline::new();
    let mut clock = match order.first() {
        Some(&i) => jobs[i].arrival,
        _ => return timeline,
    };
    for i in order {
        let job = &mut jobs[i];
        clock = clock.max(job.arrival);
        let start = clock;
        clock += job.burst;
        job.finish(clock);
        timeline.record(job, start, clock);
    }
    timeline
}
