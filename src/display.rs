// Console formatting for tasks. Pure string builders; the binary decides
// where they go.

use crate::task::Task;

/// One-line view of a single task:
/// `P<priority> (<id>) <name> [<dueTs>] [<topics...>]`
/// with topics space-joined inside the brackets.
pub fn task_line(task: &Task) -> String {
    format!(
        "P{} ({}) {} [{}] [{}]",
        task.priority,
        task.id,
        task.name,
        task.due_ts,
        task.topics.join(" ")
    )
}

/// Multi-task view: a `Results,<count>` header, then one comma-separated row
/// per task (id, createdTs, dueTs, priority, due, name), in response order.
///
/// No dispatch path produces a multi-task response today; the query shape is
/// part of the service contract and stays formattable for when one does.
pub fn query_results(tasks: &[Task]) -> String {
    let mut lines = vec![format!("Results,{}", tasks.len())];
    for task in tasks {
        lines.push(format!(
            "{},{},{},{},{},{}",
            task.id, task.created_ts, task.due_ts, task.priority, task.due, task.name
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task {
            id: 42,
            name: "Buy milk".into(),
            due: "friday".into(),
            created_ts: 1_700_000_000,
            due_ts: 1_700_086_400,
            priority: 2,
            topics: vec!["groceries".into(), "errands".into()],
        }
    }

    #[test]
    fn task_line_layout() {
        assert_eq!(
            task_line(&sample()),
            "P2 (42) Buy milk [1700086400] [groceries errands]"
        );
    }

    #[test]
    fn task_line_with_no_topics_has_empty_brackets() {
        let task = Task {
            name: "Buy milk".into(),
            ..Task::default()
        };
        assert_eq!(task_line(&task), "P0 (0) Buy milk [0] []");
    }

    #[test]
    fn query_results_header_counts_rows() {
        let out = query_results(&[sample(), Task::default()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Results,2");
        assert_eq!(lines[1], "42,1700000000,1700086400,2,friday,Buy milk");
        assert_eq!(lines[2], "0,0,0,0,,");
    }

    #[test]
    fn query_results_on_nothing_is_just_the_header() {
        assert_eq!(query_results(&[]), "Results,0");
    }
}
