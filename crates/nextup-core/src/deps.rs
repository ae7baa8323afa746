//! Dependency structure analysis.
//!
//! Inspects the dependency graph of a task list: circular chains, a
//! feasible execution order, blocking statistics, and actionable advice.
//! This is diagnostic output only; ranking never consults it (dependencies
//! affect the score solely through the empty/non-empty bonus).
//!
//! Dangling references (ids not present in the list) are skipped
//! everywhere, never errors.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::task::Task;

/// Circular dependency findings.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub has_cycles: bool,
    /// Each chain lists the member ids in order, with the closing id
    /// repeated at the end (`a -> b -> a` is `["a", "b", "a"]`).
    pub chains: Vec<Vec<String>>,
    pub warnings: Vec<String>,
}

/// A feasible execution order over the task ids.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyOrder {
    /// Dependency-free tasks first; members of cycles appended at the end.
    pub ordered_ids: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DependencyStats {
    pub total_tasks: usize,
    pub tasks_with_dependencies: usize,
    pub max_dependencies_per_task: usize,
    /// The task blocking the most others, if any task blocks at all.
    pub most_blocking_task: Option<String>,
    pub most_blocking_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    Warning,
    Priority,
    Opportunity,
}

#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub kind: AdviceKind,
    pub message: String,
    pub action: String,
}

/// Complete dependency analysis.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyReport {
    pub cycles: CycleReport,
    pub order: DependencyOrder,
    pub statistics: DependencyStats,
    pub recommendations: Vec<Advice>,
}

/// Find circular dependency chains via depth-first search.
pub fn detect_cycles(tasks: &[Task]) -> CycleReport {
    let index: HashMap<&str, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.as_str(), i))
        .collect();

    let mut visited: HashSet<usize> = HashSet::new();
    let mut chains: Vec<Vec<String>> = Vec::new();

    for start in 0..tasks.len() {
        if !visited.contains(&start) {
            dfs(start, tasks, &index, &mut visited, &mut Vec::new(), &mut chains);
        }
    }

    let warnings = chains
        .iter()
        .map(|chain| {
            let names: Vec<&str> = chain[..chain.len() - 1]
                .iter()
                .map(|id| title_of(tasks, &index, id))
                .collect();
            format!(
                "Circular dependency detected: {} -> {}",
                names.join(" -> "),
                names[0]
            )
        })
        .collect();

    CycleReport {
        has_cycles: !chains.is_empty(),
        chains,
        warnings,
    }
}

fn dfs(
    node: usize,
    tasks: &[Task],
    index: &HashMap<&str, usize>,
    visited: &mut HashSet<usize>,
    stack: &mut Vec<usize>,
    chains: &mut Vec<Vec<String>>,
) {
    if let Some(start) = stack.iter().position(|n| *n == node) {
        // Back edge: the slice from the first occurrence is the cycle.
        let mut chain: Vec<String> = stack[start..]
            .iter()
            .map(|i| tasks[*i].id.clone())
            .collect();
        chain.push(tasks[node].id.clone());
        chains.push(chain);
        return;
    }
    if !visited.insert(node) {
        return;
    }

    stack.push(node);
    for dep in &tasks[node].dependencies {
        if let Some(&next) = index.get(dep.as_str()) {
            dfs(next, tasks, index, visited, stack, chains);
        }
    }
    stack.pop();
}

fn title_of<'a>(tasks: &'a [Task], index: &HashMap<&str, usize>, id: &'a str) -> &'a str {
    index.get(id).map(|&i| tasks[i].title.as_str()).unwrap_or(id)
}

/// Topological order via Kahn's algorithm; cycle members land at the end.
pub fn dependency_order(tasks: &[Task]) -> DependencyOrder {
    let cycles = detect_cycles(tasks);
    let known: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    for task in tasks {
        let count = task
            .dependencies
            .iter()
            .filter(|dep| known.contains(dep.as_str()))
            .count();
        in_degree.insert(task.id.as_str(), count);
    }

    let mut queue: VecDeque<&str> = tasks
        .iter()
        .map(|t| t.id.as_str())
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();
    let mut placed: HashSet<&str> = HashSet::new();
    let mut ordered_ids: Vec<String> = Vec::new();

    while let Some(current) = queue.pop_front() {
        if !placed.insert(current) {
            continue;
        }
        ordered_ids.push(current.to_string());
        // Release every task that was waiting on `current`.
        for task in tasks {
            if task.dependencies.iter().any(|d| d == current) {
                if let Some(remaining) = in_degree.get_mut(task.id.as_str()) {
                    if *remaining > 0 {
                        *remaining -= 1;
                        if *remaining == 0 {
                            queue.push_back(task.id.as_str());
                        }
                    }
                }
            }
        }
    }

    let mut warnings = cycles.warnings.clone();
    let mut stuck: Vec<String> = Vec::new();
    for task in tasks {
        if placed.insert(task.id.as_str()) {
            stuck.push(task.id.clone());
        }
    }
    if !stuck.is_empty() {
        warnings.push(format!(
            "Tasks with unresolved dependencies appended at the end: {}",
            stuck.join(", ")
        ));
        ordered_ids.extend(stuck);
    }

    DependencyOrder {
        ordered_ids,
        warnings,
    }
}

/// Full analysis: cycles, order, statistics, and recommendations.
pub fn analyze(tasks: &[Task]) -> DependencyReport {
    let cycles = detect_cycles(tasks);
    let order = dependency_order(tasks);

    let known: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let mut blocked_counts: Vec<(&str, usize)> =
        tasks.iter().map(|t| (t.id.as_str(), 0)).collect();
    let position: HashMap<&str, usize> = blocked_counts
        .iter()
        .enumerate()
        .map(|(i, (id, _))| (*id, i))
        .collect();
    for task in tasks {
        for dep in &task.dependencies {
            if known.contains(dep.as_str()) {
                if let Some(&i) = position.get(dep.as_str()) {
                    blocked_counts[i].1 += 1;
                }
            }
        }
    }

    // First maximum wins on ties (input order).
    let mut most_blocking: Option<(&str, usize)> = None;
    for (id, count) in &blocked_counts {
        if *count > 0 && most_blocking.map_or(true, |(_, best)| *count > best) {
            most_blocking = Some((*id, *count));
        }
    }

    let statistics = DependencyStats {
        total_tasks: tasks.len(),
        tasks_with_dependencies: tasks.iter().filter(|t| !t.dependencies.is_empty()).count(),
        max_dependencies_per_task: tasks
            .iter()
            .map(|t| t.dependencies.len())
            .max()
            .unwrap_or(0),
        most_blocking_task: most_blocking.map(|(id, _)| id.to_string()),
        most_blocking_count: most_blocking.map(|(_, count)| count).unwrap_or(0),
    };

    let recommendations = build_recommendations(tasks, &cycles, &blocked_counts);

    DependencyReport {
        cycles,
        order,
        statistics,
        recommendations,
    }
}

fn build_recommendations(
    tasks: &[Task],
    cycles: &CycleReport,
    blocked_counts: &[(&str, usize)],
) -> Vec<Advice> {
    let mut recommendations = Vec::new();

    if cycles.has_cycles {
        recommendations.push(Advice {
            kind: AdviceKind::Warning,
            message: "Circular dependencies detected. Consider breaking these cycles.".to_string(),
            action: "Review task dependencies and remove circular references.".to_string(),
        });
    }

    if let Some((id, count)) = blocked_counts.iter().find(|(_, count)| *count >= 3) {
        recommendations.push(Advice {
            kind: AdviceKind::Priority,
            message: format!("Task {id} is blocking {count} other tasks."),
            action: "Prioritize this task to unblock others.".to_string(),
        });
    }

    let free = tasks.iter().filter(|t| t.dependencies.is_empty()).count();
    if free > 0 {
        recommendations.push(Advice {
            kind: AdviceKind::Opportunity,
            message: format!("{free} tasks have no dependencies and can start immediately."),
            action: "Consider these for quick wins or parallel execution.".to_string(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, deps: &[&str]) -> Task {
        Task::new(id, format!("Task {id}"))
            .with_dependencies(deps.iter().map(|d| d.to_string()).collect())
    }

    #[test]
    fn straight_chain_has_no_cycles() {
        let tasks = vec![task("a", &[]), task("b", &["a"]), task("c", &["b"])];
        let report = detect_cycles(&tasks);
        assert!(!report.has_cycles);
        assert!(report.chains.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn two_task_cycle_is_found() {
        let tasks = vec![task("a", &["b"]), task("b", &["a"])];
        let report = detect_cycles(&tasks);
        assert!(report.has_cycles);
        assert_eq!(report.chains, vec![vec!["a", "b", "a"]]);
        assert_eq!(
            report.warnings,
            vec!["Circular dependency detected: Task a -> Task b -> Task a"]
        );
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let tasks = vec![task("a", &["a"])];
        let report = detect_cycles(&tasks);
        assert!(report.has_cycles);
        assert_eq!(report.chains, vec![vec!["a", "a"]]);
    }

    #[test]
    fn dangling_references_are_ignored() {
        let tasks = vec![task("a", &["ghost"]), task("b", &["a", "phantom"])];
        let report = detect_cycles(&tasks);
        assert!(!report.has_cycles);

        let order = dependency_order(&tasks);
        assert_eq!(order.ordered_ids, vec!["a", "b"]);
        assert!(order.warnings.is_empty());
    }

    #[test]
    fn kahn_order_puts_dependencies_first() {
        let tasks = vec![
            task("deploy", &["build", "test"]),
            task("build", &[]),
            task("test", &["build"]),
        ];
        let order = dependency_order(&tasks);
        assert_eq!(order.ordered_ids, vec!["build", "test", "deploy"]);
    }

    #[test]
    fn cycle_members_are_appended_with_warning() {
        let tasks = vec![
            task("free", &[]),
            task("x", &["y"]),
            task("y", &["x"]),
        ];
        let order = dependency_order(&tasks);
        assert_eq!(order.ordered_ids[0], "free");
        assert_eq!(order.ordered_ids.len(), 3);
        assert!(order.ordered_ids.contains(&"x".to_string()));
        assert!(order.ordered_ids.contains(&"y".to_string()));
        assert!(order
            .warnings
            .iter()
            .any(|w| w.contains("appended at the end")));
    }

    #[test]
    fn statistics_count_blocking() {
        let tasks = vec![
            task("base", &[]),
            task("a", &["base"]),
            task("b", &["base"]),
            task("c", &["base", "a"]),
        ];
        let report = analyze(&tasks);
        assert_eq!(report.statistics.total_tasks, 4);
        assert_eq!(report.statistics.tasks_with_dependencies, 3);
        assert_eq!(report.statistics.max_dependencies_per_task, 2);
        assert_eq!(report.statistics.most_blocking_task.as_deref(), Some("base"));
        assert_eq!(report.statistics.most_blocking_count, 3);
    }

    #[test]
    fn no_blocking_means_no_most_blocking_task() {
        let tasks = vec![task("a", &[]), task("b", &[])];
        let report = analyze(&tasks);
        assert_eq!(report.statistics.most_blocking_task, None);
        assert_eq!(report.statistics.most_blocking_count, 0);
    }

    #[test]
    fn recommendations_cover_all_three_kinds() {
        let tasks = vec![
            task("hub", &[]),
            task("a", &["hub"]),
            task("b", &["hub"]),
            task("c", &["hub"]),
            task("p", &["q"]),
            task("q", &["p"]),
        ];
        let report = analyze(&tasks);
        let kinds: Vec<AdviceKind> = report.recommendations.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![AdviceKind::Warning, AdviceKind::Priority, AdviceKind::Opportunity]
        );
        assert!(report.recommendations[1].message.contains("hub"));
        assert!(report.recommendations[1].message.contains("3 other tasks"));
        assert!(report.recommendations[2].message.starts_with("1 tasks"));
    }
}
