//! Prefix factorials streamed from a producer thread.
//!
//! The producer and the consumer meet on a rendezvous channel, so the producer
//! is never more than one value ahead. Dropping the [`Pipeline`] hangs up the
//! channel, which stops the producer at its next send, and then joins it.
use crate::error::FactorialError;
use crate::sequence::PrefixFactorials;
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

pub struct Pipeline {
    rx: Option<Receiver<u64>>,
    producer: Option<JoinHandle<()>>,
}

impl Pipeline {
    pub fn spawn(n: i64) -> Result<Self, FactorialError> {
        let seq = PrefixFactorials::new(n)?;
        let (tx, rx) = sync_channel(0);

        let producer = thread::Builder::new()
            .name("factorial-producer".to_owned())
            .spawn(move || produce(seq, tx))?;

        Ok(Self {
            rx: Some(rx),
            producer: Some(producer),
        })
    }
}

fn produce(seq: PrefixFactorials, tx: SyncSender<u64>) {
    for (i, f) in seq.iter().enumerate() {
        if tx.send(f).is_err() {
            debug!("consumer hung up after {}!", i);
            return;
        }
    }
    trace!("produced all prefixes up to {}!", seq.n());
}

impl Iterator for Pipeline {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.rx.as_ref()?.recv().ok()
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        // hang up first, otherwise a producer blocked in `send` never returns
        drop(self.rx.take());
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                warn!("factorial producer panicked");
            }
        }
    }
}

/// Consume the pipeline up to its last value, n!.
pub fn factorial(n: i64) -> Result<u64, FactorialError> {
    Ok(Pipeline::spawn(n)?.fold(1, |_, f| f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_every_prefix() {
        let values = Pipeline::spawn(6).unwrap().collect::<Vec<_>>();
        assert_eq!(values, vec![1, 1, 2, 6, 24, 120, 720]);
    }

    #[test]
    fn closes_after_last_value() {
        let mut p = Pipeline::spawn(0).unwrap();
        assert_eq!(p.next(), Some(1));
        assert_eq!(p.next(), None);
        assert_eq!(p.next(), None);
    }

    #[test]
    fn early_drop_stops_producer() {
        let taken = Pipeline::spawn(20).unwrap().take(3).collect::<Vec<_>>();
        assert_eq!(taken, vec![1, 1, 2]);

        // dropping without reading anything must not hang either
        drop(Pipeline::spawn(20).unwrap());
    }

    #[test]
    fn agrees_with_iterative() {
        for n in 0..=20 {
            assert_eq!(
                factorial(n).unwrap(),
                crate::iterative::factorial(n).unwrap()
            );
        }
    }

    #[test]
    fn errors() {
        assert!(matches!(
            Pipeline::spawn(-2),
            Err(FactorialError::InvalidArgument(-2))
        ));
        assert!(matches!(factorial(30), Err(FactorialError::Overflow(30))));
    }
}
