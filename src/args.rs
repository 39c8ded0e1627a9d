// Argument interpretation: turns the raw argv token list into one Action.
// The grammar is positional and deliberately forgiving; bad numeric input
// degrades to 0 instead of erroring, matching the service's tolerance for
// zero-valued fields.

use thiserror::Error;

use crate::task::Task;

/// What one invocation should do, as selected by the action flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `-a`: create the given task.
    Add(Task),
    /// `-d <id>`: delete the task with this id.
    Delete(i64),
    /// `-r <id>`: read the task with this id.
    Read(i64),
}

/// Argument vectors the grammar rejects. Both kinds surface to the user as
/// invalid syntax; the variant only shapes the terminal error line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("insufficient arguments")]
    InsufficientArguments,
    #[error("unknown action flag `{0}`")]
    UnknownAction(String),
}

/// Interpret the full argument vector (program name included) as an action.
///
/// The token after the program name selects the action: `-a` to create,
/// `-d` to delete, `-r` to read. Delete and read take a task id next; a
/// value that does not parse as an integer becomes 0. The add form is
/// `-a <name>` followed by flag/value pairs, walked two tokens at a time:
///
/// - `-p <int>` priority (non-numeric becomes 0)
/// - `-d <text>` due date (free-form; `-d` only means delete in the action
///   position)
/// - `-t <a,b,c>` topics, split on commas
///
/// Unrecognized flags are skipped along with their value, and a trailing
/// flag with nothing after it is ignored.
pub fn interpret(argv: &[String]) -> Result<Action, SyntaxError> {
    if argv.len() < 3 {
        return Err(SyntaxError::InsufficientArguments);
    }
    match argv[1].as_str() {
        "-a" => Ok(Action::Add(task_from_argv(argv))),
        "-d" => Ok(Action::Delete(id_or_zero(&argv[2]))),
        "-r" => Ok(Action::Read(id_or_zero(&argv[2]))),
        other => Err(SyntaxError::UnknownAction(other.to_string())),
    }
}

/// Build the create payload from `-a <name>` plus trailing flag/value pairs.
fn task_from_argv(argv: &[String]) -> Task {
    let mut task = Task {
        name: argv[2].clone(),
        ..Task::default()
    };
    let mut i = 3;
    while i + 1 < argv.len() {
        let value = &argv[i + 1];
        match argv[i].as_str() {
            "-p" => task.priority = value.parse().unwrap_or(0),
            "-d" => task.due = value.clone(),
            "-t" => task.topics = value.split(',').map(str::to_string).collect(),
            _ => {}
        }
        i += 2;
    }
    task
}

fn id_or_zero(token: &str) -> i64 {
    token.parse().unwrap_or(0)
}
