// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories statistics.
use anyhow::{Result, bail};
use log::{error, info};
use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use cactus_eval::{Card, Category, Deck, TableSet};

/// Per category hand counts.
#[derive(Debug, Default, Clone)]
pub struct Counts {
    counts: [u64; Category::COUNT],
    hand_size: usize,
    elapsed_secs: f64,
}

impl Counts {
    /// Total number of hands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The number of hands for a category.
    pub fn get(&self, category: Category) -> u64 {
        self.counts[category as usize]
    }

    /// Checks the counts match the frequencies of an exhaustive enumeration.
    pub fn check_exhaustive(&self) -> Result<()> {
        for category in Category::ALL {
            let expected = category.expected_count(self.hand_size).unwrap_or_default();
            if self.get(category) != expected {
                bail!(
                    "unexpected number of {category} hands {} (expected {expected})",
                    self.get(category)
                );
            }
        }

        Ok(())
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        writeln!(f, "Total hands      {total}")?;
        writeln!(f, "Elapsed:         {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Hands/sec:       {:.0}", total as f64 / self.elapsed_secs)?;
        writeln!(f)?;

        for category in Category::ALL.iter().rev() {
            let count = self.get(*category);
            let pct = 100.0 * count as f64 / total.max(1) as f64;
            let label = format!("{category}:");
            writeln!(f, "{label:<17}{count:<12}{pct:>8.4}%")?;
        }

        Ok(())
    }
}

/// Per task atomic counters, merged when all tasks are done.
struct TaskCounters {
    counts: Vec<[AtomicU64; Category::COUNT]>,
    errors: AtomicU64,
}

impl TaskCounters {
    fn new(num_tasks: usize) -> Self {
        Self {
            counts: (0..num_tasks)
                .map(|_| std::array::from_fn(|_| AtomicU64::new(0)))
                .collect(),
            errors: AtomicU64::new(0),
        }
    }

    fn eval(&self, tables: &TableSet, task_id: usize, cards: &[Card]) {
        match tables.evaluate(cards) {
            Ok(score) => {
                self.counts[task_id][score.category() as usize].fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                // Log only the first failure.
                if self.errors.fetch_add(1, Ordering::Relaxed) == 0 {
                    error!("Task {task_id} failed to evaluate {cards:?}: {e}");
                }
            }
        }
    }

    fn merge(self, hand_size: usize, now: Instant) -> Result<Counts> {
        let errors = self.errors.into_inner();
        if errors > 0 {
            bail!("{errors} hands failed evaluation");
        }

        let mut counts = Counts {
            hand_size,
            elapsed_secs: now.elapsed().as_secs_f64(),
            ..Default::default()
        };

        for task in self.counts {
            for (total, count) in counts.counts.iter_mut().zip(task) {
                *total += count.into_inner();
            }
        }

        Ok(counts)
    }
}

/// Evaluates every `hand_size` cards hand using `num_tasks` parallel tasks.
pub fn enumerate(tables: &TableSet, hand_size: usize, num_tasks: usize) -> Result<Counts> {
    info!("Evaluating all {hand_size} cards hands with {num_tasks} tasks");

    let now = Instant::now();
    let counters = TaskCounters::new(num_tasks);
    Deck::default().par_for_each(num_tasks, hand_size, |task_id, cards| {
        counters.eval(tables, task_id, cards);
    });

    counters.merge(hand_size, now)
}

/// Evaluates `num_hands` random `hand_size` cards hands using `num_tasks`
/// parallel tasks.
pub fn sample(
    tables: &TableSet,
    hand_size: usize,
    num_hands: usize,
    num_tasks: usize,
) -> Result<Counts> {
    let per_task = num_hands.div_ceil(num_tasks);
    info!("Sampling {num_tasks}x{per_task} {hand_size} cards hands");

    let now = Instant::now();
    let counters = TaskCounters::new(num_tasks);
    Deck::default().par_sample(num_tasks, per_task, hand_size, |task_id, cards| {
        counters.eval(tables, task_id, cards);
    });

    counters.merge(hand_size, now)
}
