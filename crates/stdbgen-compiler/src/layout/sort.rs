//! Declaration ordering.

use std::collections::VecDeque;

use indexmap::IndexMap;

use super::LayoutError;
use super::ir::{Header, HeaderElement};

impl Header {
    /// Elements ordered so every element follows the elements it depends on.
    ///
    /// Kahn's algorithm, seeded in insertion order. Dependencies naming types
    /// outside this header (builtins, other documents) impose no order.
    /// Self-references count as cycles.
    pub fn sorted_elements(&self) -> Result<Vec<&HeaderElement>, LayoutError> {
        let elements = self.elements();
        let count = elements.len();

        let mut positions: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (i, element) in elements.iter().enumerate() {
            positions.entry(element.name.as_str()).or_default().push(i);
        }

        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];
        let mut in_degree = vec![0usize; count];
        for (i, element) in elements.iter().enumerate() {
            for dep in &element.depends {
                let Some(targets) = positions.get(dep.as_str()) else {
                    continue;
                };
                for &target in targets {
                    dependents[target].push(i);
                    in_degree[i] += 1;
                }
            }
        }

        let mut ready: VecDeque<usize> = (0..count).filter(|&i| in_degree[i] == 0).collect();
        let mut sorted = Vec::with_capacity(count);
        while let Some(i) = ready.pop_front() {
            sorted.push(&elements[i]);
            for &dependent in &dependents[i] {
                in_degree[dependent] -= 1;
                if in_degree[dependent] == 0 {
                    ready.push_back(dependent);
                }
            }
        }

        if sorted.len() < count {
            let mut stuck: Vec<String> = (0..count)
                .filter(|&i| in_degree[i] > 0)
                .map(|i| elements[i].name.clone())
                .collect();
            stuck.sort();
            stuck.dedup();
            return Err(LayoutError::CyclicDependency(stuck));
        }
        Ok(sorted)
    }
}
