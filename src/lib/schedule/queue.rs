use std::collections::VecDeque;

use job::Job;
use Time;

/// A circular queue of jobs ready to run.
#[derive(Clone, Debug, Default)]
pub struct Queue {
    ready: VecDeque<usize>,
}

/// Jobs waiting for their arrival.
#[derive(Clone, Debug, Default)]
pub struct Pending {
    arrivals: Vec<Arrival>,
    cursor: usize,
}

/// The jobs that have arrived by some time.
pub struct Due<'l> {
    time: Time,
    pending: &'l mut Pending,
}

#[derive(Clone, Copy, Debug)]
struct Arrival {
    time: Time,
    index: usize,
}

impl Queue {
    #[inline]
    pub fn new() -> Queue {
        Queue { ready: VecDeque::new() }
    }

    /// Append a job at the tail.
    #[inline]
    pub fn push(&mut self, index: usize) {
        self.ready.push_back(index);
    }

    /// Take the job at the head.
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.ready.pop_front()
    }
}

impl Extend<usize> for Queue {
    #[inline]
    fn extend<T: IntoIterator<Item = usize>>(&mut self, indices: T) {
        self.ready.extend(indices);
    }
}

impl Pending {
    /// Hold back all jobs until their arrival; jobs arriving together keep
    /// their input order.
    pub fn new(jobs: &[Job]) -> Pending {
        let mut arrivals = jobs.iter().enumerate().map(|(index, job)| {
            Arrival { time: job.arrival, index: index }
        }).collect::<Vec<_>>();
        arrivals.sort();
        Pending { arrivals: arrivals, cursor: 0 }
    }

    /// Return the earliest arrival not yet released.
    #[inline]
    pub fn next(&self) -> Option<Time> {
        self.arrivals.get(self.cursor).map(|arrival| arrival.time)
    }

    /// Release the jobs that have arrived by `time`.
    #[inline]
    pub fn due(&mut self, time: Time) -> Due {
        Due { time: time, pending: self }
    }
}

impl<'l> Iterator for Due<'l> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self.pending.arrivals.get(self.pending.cursor) {
            Some(&arrival) if arrival.time <= self.time => {
                self.pending.cursor += 1;
                Some(arrival.index)
            },
            _ => None,
        }
    }
}

order!(Arrival(time) ascending);

#[cfg(test)]
mod tests {
    use job;
    use super::{Pending, Queue};

    #[test]
    fn queue_rotation() {
        let mut queue = Queue::new();
        queue.extend(0..3);

        let head = queue.pop().unwrap();
        queue.push(head);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn pending_release() {
        let jobs = job::from_triples(&[(1, 5, 0), (1, 0, 0), (1, 5, 0), (1, 2, 0)]);
        let mut pending = Pending::new(&jobs);

        assert_eq!(pending.next(), Some(0));
        assert_eq!(pending.due(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(pending.due(1).collect::<Vec<_>>(), Vec::<usize>::new());
        assert_eq!(pending.next(), Some(2));
        assert_eq!(pending.due(10).collect::<Vec<_>>(), vec![3, 0, 2]);
        assert_eq!(pending.next(), None);
        assert_eq!(pending.due(100).count(), 0);
    }
}
