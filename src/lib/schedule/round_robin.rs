use job::Job;
use policy::Admission;
use schedule::{Pending, Queue, Timeline};
use Time;

/// Run jobs in turns of at most `quantum` units of time.
///
/// A job that still has work left after its turn goes back to the tail of the
/// ready queue. A turn never starts before the arrival of its job. With
/// `Admission::All`, every job is queued at the start in input order; with
/// `Admission::Arrival`, jobs are queued as they arrive, and jobs arriving
/// during a turn are queued before the job whose turn has just ended.
pub fn run(jobs: &mut [Job], quantum: Time, admission: Admission) -> Timeline {
    debug_assert!(quantum > 0);

    let mut timeline = Timeline::new();
    let mut queue = Queue::new();
    let mut pending = match admission {
        Admission::All => {
            queue.extend(0..jobs.len());
            Pending::default()
        },
        Admission::Arrival => Pending::new(jobs),
    };

    let mut clock = 0;
    queue.extend(pending.due(clock));
    loop {
        let i = match queue.pop() {
            Some(i) => i,
            _ => match pending.next() {
                Some(arrival) => {
                    clock = arrival;
                    queue.extend(pending.due(clock));
                    continue;
                },
                _ => break,
            },
        };
        let job = &mut jobs[i];
        clock = clock.max(job.arrival);
        let start = clock;
        let slice = job.remaining.min(quantum);
        clock += slice;
        job.process(slice);
        if job.done() {
            job.finish(clock);
        }
        timeline.record(job, start, clock);
        queue.extend(pending.due(clock));
        if !job.done() {
            queue.push(i);
        }
    }
    timeline
}
