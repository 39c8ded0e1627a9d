// Library root
// -----------
// This crate exposes a small library surface for the `t` binary. The
// binary (`main.rs`) wires these modules into one request per run.
//
// Module responsibilities:
// - `task`: The task record and its JSON encoding.
// - `args`: Interprets the argv token list into one action.
// - `api`: Encapsulates HTTP interactions with the task service (create,
//   fetch, delete).
// - `display`: Formats tasks for console output.
//
// Keeping this separation leaves the parsing and formatting logic as plain
// functions the tests can drive without touching the network.
pub mod api;
pub mod args;
pub mod display;
pub mod task;
