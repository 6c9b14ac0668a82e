/// Image candidate resolver
///
/// Probes every candidate of a project concurrently and produces the
/// ordered list of screenshots that actually load. Resolution always
/// finishes within the timeout: probes still outstanding at the deadline
/// are treated as failed and abandoned (their tasks keep running, their
/// late results are simply never read).

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::{timeout_at, Instant};

use super::probe::Probe;

/// How loaded candidates are ordered in the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPolicy {
    /// Original candidate order, failed candidates omitted
    #[default]
    IndexPreserving,
    /// First to finish loading comes first
    CompletionOrder,
}

/// A candidate confirmed loadable, with whatever the probe produced for it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage<T> {
    pub src: String,
    pub image: T,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Pending,
    Loaded { image: T, arrival: usize },
    Failed,
}

/// Accumulates probe outcomes for one candidate list.
///
/// Outcomes land in the slot reserved for their candidate index.
/// `finalize` computes the result once; later calls return the same
/// result and outcomes recorded after it are ignored.
#[derive(Debug)]
pub struct Resolution<T> {
    candidates: Vec<String>,
    policy: OrderPolicy,
    slots: Vec<Slot<T>>,
    settled: usize,
    finished: Option<Vec<ResolvedImage<T>>>,
}

impl<T: Clone> Resolution<T> {
    pub fn new(candidates: Vec<String>, policy: OrderPolicy) -> Self {
        let slots = vec![Slot::Pending; candidates.len()];
        Self {
            candidates,
            policy,
            slots,
            settled: 0,
            finished: None,
        }
    }

    /// Record the outcome of the probe for `index` (`None` = failed).
    /// A slot only settles once.
    pub fn record(&mut self, index: usize, outcome: Option<T>) {
        if self.finished.is_some() {
            return;
        }
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };
        if !matches!(slot, Slot::Pending) {
            return;
        }

        *slot = match outcome {
            Some(image) => Slot::Loaded {
                image,
                arrival: self.settled,
            },
            None => Slot::Failed,
        };
        self.settled += 1;
    }

    /// Number of probes that reported loaded or failed
    pub fn settled(&self) -> usize {
        self.settled
    }

    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_complete(&self) -> bool {
        self.settled == self.candidates.len()
    }

    /// Produce the ordered result. Pending slots count as failed.
    pub fn finalize(&mut self) -> Vec<ResolvedImage<T>> {
        if let Some(done) = &self.finished {
            return done.clone();
        }

        let mut loaded: Vec<(usize, usize, &T)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Loaded { image, arrival } => Some((index, *arrival, image)),
                _ => None,
            })
            .collect();

        if self.policy == OrderPolicy::CompletionOrder {
            loaded.sort_by_key(|&(_, arrival, _)| arrival);
        }

        let result: Vec<ResolvedImage<T>> = loaded
            .into_iter()
            .map(|(index, _, image)| ResolvedImage {
                src: self.candidates[index].clone(),
                image: image.clone(),
            })
            .collect();

        self.finished = Some(result.clone());
        result
    }
}

/// Probe all candidates and return the ones that loaded.
///
/// One task per candidate, no concurrency limit. Returns as soon as every
/// probe has reported or `timeout` has elapsed, whichever comes first.
/// An empty candidate list returns immediately.
pub async fn resolve<P: Probe>(
    probe: Arc<P>,
    candidates: Vec<String>,
    policy: OrderPolicy,
    timeout: Duration,
) -> Vec<ResolvedImage<P::Image>> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let deadline = Instant::now() + timeout;
    let (tx, mut rx) = mpsc::unbounded_channel();

    for (index, candidate) in candidates.iter().cloned().enumerate() {
        let probe = Arc::clone(&probe);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = match probe.probe(&candidate).await {
                Ok(image) => Some(image),
                Err(e) => {
                    debug!("🚫 Candidate {} failed: {}", candidate, e);
                    None
                }
            };
            // The collector is gone once the deadline has passed
            let _ = tx.send((index, outcome));
        });
    }
    drop(tx);

    let mut resolution = Resolution::new(candidates, policy);

    while !resolution.is_complete() {
        match timeout_at(deadline, rx.recv()).await {
            Ok(Some((index, outcome))) => resolution.record(index, outcome),
            // Every sender dropped without reporting (a probe task panicked)
            Ok(None) => break,
            Err(_) => {
                info!(
                    "⏱️  Probe timeout after {:?}: {} of {} candidates still pending",
                    timeout,
                    resolution.total() - resolution.settled(),
                    resolution.total()
                );
                break;
            }
        }
    }

    resolution.finalize()
}
