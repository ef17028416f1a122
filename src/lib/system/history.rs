use schedule::Slice;
use Time;

/// Statistics about a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct History {
    pub dispatched: usize,
    pub preempted: usize,
    pub finished: usize,
    pub idle: Time,
    pub makespan: Time,
}

impl History {
    /// Take into account a slice.
    pub fn count(&mut self, slice: &Slice) {
        if self.dispatched > 0 && slice.start > self.makespan {
            self.idle += slice.start - self.makespan;
        }
        self.dispatched += 1;
        if slice.done {
            self.finished += 1;
        } else {
            self.preempted += 1;
        }
        self.makespan = slice.finish;
    }
}

#[cfg(test)]
mod tests {
    use schedule::Slice;
    use super::History;

    #[test]
    fn count() {
        let mut history = History::default();
        for slice in &[
            Slice { job: 1, start: 2, finish: 4, done: false },
            Slice { job: 2, start: 4, finish: 5, done: true },
            Slice { job: 1, start: 8, finish: 9, done: true },
        ] {
            history.count(slice);
        }
        assert_eq!(history, History { dispatched: 3, preempted: 1, finished: 2, idle: 3, makespan: 9 });
    }
}
