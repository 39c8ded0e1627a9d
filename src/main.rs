// Entrypoint for the `t` binary.
// - Keeps `main` small: interpret argv, run the one matching API call,
//   print the result.
// - Returns `anyhow::Result`, so any failure is reported on stderr and the
//   process exits non-zero. There is no retry at any layer.

use topcat::api::ApiClient;
use topcat::args::{self, Action};
use topcat::display;

fn main() -> anyhow::Result<()> {
    // Lossy decode: an argument byte that is not valid UTF-8 becomes U+FFFD
    // and flows through the grammar like any other character.
    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    // Bad syntax is rejected before any client exists; no request is made.
    let action = match args::interpret(&argv) {
        Ok(action) => action,
        Err(err) => {
            println!("Invalid command syntax");
            return Err(err.into());
        }
    };

    let api = ApiClient::new()?;
    match action {
        Action::Add(task) => println!("{}", display::task_line(&api.create_task(&task)?)),
        Action::Read(id) => println!("{}", display::task_line(&api.fetch_task(id)?)),
        Action::Delete(id) => api.delete_task(id)?,
    }
    Ok(())
}
