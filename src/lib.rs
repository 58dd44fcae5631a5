// Library root
// -----------
// Small library surface for the CLI binary.
//
// Module responsibilities:
// - `credentials`: loads the static API token and org id from a local file.
// - `sections`: the fixed registry of deletable resource categories and
//   their API paths.
// - `api`: blocking HTTP calls (list, delete) against the Mist API.
// - `ui`: the interactive menu loop and the `Prompt` seam it runs on.
// - `error`: shared error type for everything below the UI.
//
// The split keeps the state machine in `ui` free of transport details, so
// both the gateway and the menu flow can be tested against a mock server.
pub mod api;
pub mod credentials;
pub mod error;
pub mod sections;
pub mod ui;
