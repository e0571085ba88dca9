use std::collections::VecDeque;
use std::sync::Mutex;

/// FIFO buffer of connections waiting for an opponent.
///
/// This is the only state shared across the accept path. Admission and
/// pairing happen inside a single critical section, so the two oldest
/// connections leave together and none is ever handed to two games.
#[derive(Debug)]
pub struct Lobby<S> {
    waiting: Mutex<VecDeque<S>>,
}

impl<S> Default for Lobby<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Lobby<S> {
    pub fn new() -> Self {
        Self {
            waiting: Mutex::new(VecDeque::new()),
        }
    }
    /// Admits a connection; once two are buffered, atomically removes and
    /// returns the oldest pair in arrival order.
    pub fn admit(&self, stream: S) -> Option<(S, S)> {
        let mut waiting = self.waiting.lock().expect("lobby mutex");
        waiting.push_back(stream);
        if waiting.len() >= 2 {
            let one = waiting.pop_front()?;
            let two = waiting.pop_front()?;
            Some((one, two))
        } else {
            None
        }
    }
    /// How many connections are waiting for an opponent.
    pub fn waiting(&self) -> usize {
        self.waiting.lock().expect("lobby mutex").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn pairs_in_arrival_order() {
        let lobby = Lobby::new();
        assert_eq!(lobby.admit(1), None);
        assert_eq!(lobby.waiting(), 1);
        assert_eq!(lobby.admit(2), Some((1, 2)));
        assert_eq!(lobby.waiting(), 0);
        assert_eq!(lobby.admit(3), None);
        assert_eq!(lobby.admit(4), Some((3, 4)));
    }
    #[test]
    fn hundred_admissions_yield_fifty_disjoint_pairs() {
        let lobby = Arc::new(Lobby::new());
        let handles = (0..100usize)
            .map(|i| {
                let lobby = lobby.clone();
                std::thread::spawn(move || lobby.admit(i))
            })
            .collect::<Vec<_>>();
        let pairs = handles
            .into_iter()
            .filter_map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(pairs.len(), 50);
        let mut seen = HashSet::new();
        for (a, b) in pairs {
            assert_ne!(a, b);
            assert!(seen.insert(a));
            assert!(seen.insert(b));
        }
        assert_eq!(seen.len(), 100);
        assert_eq!(lobby.waiting(), 0);
    }
}
