use job::Job;
use schedule::{Key, Timeline};

/// Run jobs preemptively, giving the server to the arrived job with the
/// smallest key at every arrival and completion.
///
/// Jobs with equal keys are taken in input order. Passing `Key::Remaining`
/// yields shortest-remaining-time-first scheduling.
pub fn run(jobs: &mut [Job], key: Key) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock = match jobs.iter().map(|job| job.arrival).min() {
        Some(time) => time,
        _ => return timeline,
    };
    loop {
        let current = (0..jobs.len())
            .filter(|&i| !jobs[i].done() && jobs[i].arrival <= clock)
            .min_by_key(|&i| (key.of(&jobs[i]), i));
        let next = jobs.iter()
                       .filter(|job| !job.done() && job.arrival > clock)
                       .map(|job| job.arrival)
                       .min();
        let i = match (current, next) {
            (Some(i), _) => i,
            (None, Some(arrival)) => {
                clock = arrival;
                continue;
            },
            (None, None) => break,
        };
        let job = &mut jobs[i];
        let start = clock;
        clock = match next {
            Some(arrival) => arrival.min(clock + job.remaining),
            _ => clock + job.remaining,
        };
        job.process(clock - start);
        if job.done() {
            job.finish(clock);
        }
        timeline.record(job, start, clock);
    }
    timeline
}
